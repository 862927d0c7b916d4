//! Grocer MCP Server Implementation
//!
//! Implements the MCP server with all Grocer tools.

use std::collections::BTreeSet;
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::combiner::{CombineEngine, SequentialIds};
use crate::models::GroceryItem;
use crate::tools::combine;
use crate::tools::status::StatusTracker;

/// Grocer MCP Service
#[derive(Clone)]
pub struct GrocerService {
    engine: Arc<CombineEngine>,
    status_tracker: Arc<StatusTracker>,
    tool_router: ToolRouter<GrocerService>,
}

impl GrocerService {
    pub fn new(engine: CombineEngine, registry_source: impl Into<String>) -> Self {
        Self {
            engine: Arc::new(engine),
            status_tracker: Arc::new(StatusTracker::new(registry_source)),
            tool_router: Self::tool_router(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

/// One line of the grocery list
#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItemParam {
    /// Item ID from the list store
    pub id: String,
    /// Line as written, e.g. "2 cloves garlic, minced"
    pub raw_name: String,
    /// Whether the item is already checked off (default false)
    #[serde(default)]
    pub checked: bool,
    /// Store section (produce, meat_seafood, dairy, pantry, frozen, bakery, other)
    pub section: Option<String>,
    /// Recipes this line came from
    pub recipe_ids: Option<Vec<String>>,
}

impl From<GroceryItemParam> for GroceryItem {
    fn from(p: GroceryItemParam) -> Self {
        GroceryItem {
            id: p.id,
            raw_name: p.raw_name,
            checked: p.checked,
            section: p.section,
            recipe_ids: p.recipe_ids.map(|ids| ids.into_iter().collect::<BTreeSet<_>>()),
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CombineGroceryItemsParams {
    /// Grocery list items to combine
    pub items: Vec<GroceryItemParam>,
    /// Use "combined-0", "combined-1", ... instead of random IDs (default false)
    #[serde(default)]
    pub use_sequential_ids: bool,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ParseGroceryLineParams {
    /// Grocery line to parse, e.g. "2 cups chopped fresh spinach"
    pub text: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl GrocerService {
    // --- Status ---

    #[tool(description = "Get the current status of the Grocer service including build info, loaded registries, and process information")]
    fn grocer_status(&self) -> Result<CallToolResult, McpError> {
        let status = self.status_tracker.get_status(self.engine.registries());
        to_json(&status)
    }

    #[tool(description = "Get instructions for combining grocery lists: input fields, output fields, and what each merge status means. Call this before the first combine_grocery_items call.")]
    fn combine_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::COMBINE_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(COMBINE_INSTRUCTIONS)]))
    }

    // --- Combining ---

    #[tool(description = "Combine grocery list items that name the same ingredient (\"2 cloves garlic\" + \"1 head garlic\" -> \"12 cloves garlic\"). Returns one line per ingredient, sorted by store section then name.")]
    fn combine_grocery_items(&self, Parameters(p): Parameters<CombineGroceryItemsParams>) -> Result<CallToolResult, McpError> {
        let items: Vec<GroceryItem> = p.items.into_iter().map(GroceryItem::from).collect();
        self.status_tracker.record_combine();

        let result = if p.use_sequential_ids {
            let engine = self.engine.with_id_generator(Arc::new(SequentialIds::default()));
            combine::combine_items(&engine, &items)
        } else {
            combine::combine_items(&self.engine, &items)
        };
        to_json(&result)
    }

    #[tool(description = "Show how a single grocery line is read: quantity, unit, preparation and quality keywords, ingredient family, and section")]
    fn parse_grocery_line(&self, Parameters(p): Parameters<ParseGroceryLineParams>) -> Result<CallToolResult, McpError> {
        let parsed = combine::parse_line(&self.engine, &p.text);
        to_json(&parsed)
    }

    #[tool(description = "List known ingredient families with their store section and conversion base unit")]
    fn list_ingredient_families(&self) -> Result<CallToolResult, McpError> {
        to_json(&combine::list_families(&self.engine))
    }
}

#[tool_handler]
impl ServerHandler for GrocerService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "grocer".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Grocer".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Grocer - combines grocery list lines for the same ingredient into shopping-ready lines. \
                 Call combine_instructions first. \
                 Combining: combine_grocery_items. \
                 Debugging: parse_grocery_line, list_ingredient_families. \
                 Status: grocer_status. \
                 When the user checks off a combined line, check off every ID in its sourceItemIds."
                    .into(),
            ),
        }
    }
}
