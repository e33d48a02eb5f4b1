//! Pretty output formatting.

use items_core::item::{EnrichedItem, Item};

/// Format an item for display.
pub fn format_item(item: &Item) -> String {
    let mut output = format!("{}\n  ID: {}", item.name, item.id);
    if let Some(desc) = &item.description {
        output.push_str(&format!("\n  Description: {}", desc));
    }
    if let Some(price) = item.price {
        output.push_str(&format!("\n  Price: {:.2}", price));
    }
    output
}

/// Format items for display.
pub fn format_items(items: &[Item]) -> String {
    if items.is_empty() {
        return "No items found.".to_string();
    }
    let mut output = format!("ITEMS ({})\n", items.len());
    output.push_str(&"-".repeat(40));
    for item in items {
        output.push_str(&format!("\n{}", format_item(item)));
        output.push('\n');
    }
    output
}

/// Format an enriched item for display.
///
/// Payload keys are printed in the order the server sent them.
pub fn format_enriched(enriched: &EnrichedItem) -> String {
    let mut output = format_item(&enriched.item);
    output.push_str("\n  Enriched:");
    if enriched.enriched.is_empty() {
        output.push_str(" (none)");
    }
    for (key, value) in &enriched.enriched {
        let value = match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        output.push_str(&format!("\n    {}: {}", key, value));
    }
    output
}
