//! Display names for combined entries

use crate::models::{format_amount, ParsedQuantity};

/// Compose "<amount> <unit> <family> (<qualities>; some <preparations>)".
///
/// Without a merged quantity only the family is shown. The first character
/// is capitalized.
pub fn build(
    family: &str,
    merged: Option<&ParsedQuantity>,
    preparations: &[&str],
    qualities: &[&str],
) -> String {
    let mut words: Vec<String> = Vec::new();
    if let Some(q) = merged {
        words.push(format_amount(q.amount));
        if !q.is_count() {
            words.push(q.unit.clone());
        }
    }
    if !family.is_empty() {
        words.push(family.to_string());
    }
    let mut name = words.join(" ");

    let mut clauses = Vec::new();
    if !qualities.is_empty() {
        clauses.push(qualities.join(", "));
    }
    if !preparations.is_empty() {
        clauses.push(format!("some {}", preparations.join(", ")));
    }
    if !clauses.is_empty() {
        if !name.is_empty() {
            name.push(' ');
        }
        name.push_str(&format!("({})", clauses.join("; ")));
    }

    capitalize_first(&name)
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
