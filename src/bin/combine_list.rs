//! Combine a grocery list from the command line
//!
//! Usage: combine_list [items.json]
//!
//! Reads a JSON array of grocery items from the file, or stdin when no file
//! is given, and prints the combined list as JSON.

use std::io::Read;

use grocer::config::GrocerConfig;
use grocer::GroceryItem;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("grocer=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let items: Vec<GroceryItem> = serde_json::from_str(&input)?;
    let engine = GrocerConfig::from_env().build_engine()?;
    let combined = engine.combine(&items);

    eprintln!("{} items -> {} lines", items.len(), combined.len());
    println!("{}", serde_json::to_string_pretty(&combined)?);

    Ok(())
}
