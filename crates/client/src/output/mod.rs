//! Output formatting functions.

pub mod pretty;

use crate::cli::OutputFormat;

/// Format a value for output.
pub fn format_output<T: serde::Serialize>(value: &T, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(value).unwrap_or_default(),
        OutputFormat::Pretty => serde_json::to_string_pretty(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use items_core::item::CreatedItem;

    #[test]
    fn test_json_output_is_compact() {
        let output = format_output(&CreatedItem::new(5), OutputFormat::Json);
        assert_eq!(output, r#"{"id":5,"message":"Item created"}"#);
    }
}
