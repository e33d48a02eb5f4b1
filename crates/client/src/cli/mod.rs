//! CLI command definitions.

pub mod items;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the items API.
#[derive(Debug, Parser)]
#[command(name = "items-client")]
#[command(about = "CLI client for the items API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "ITEMS_URL", default_value = "http://localhost:8000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Item management.
    Items(items::ItemsCommand),
    /// Server health check.
    Health,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::items::ItemsAction;

    #[test]
    fn test_parse_create() {
        let cli = Cli::try_parse_from([
            "items-client",
            "--base-url",
            "http://example.test",
            "items",
            "create",
            "--name",
            "Lamp",
            "--price",
            "19.5",
        ])
        .unwrap();

        assert_eq!(cli.base_url, "http://example.test");
        match cli.command {
            Commands::Items(cmd) => match cmd.action {
                ItemsAction::Create {
                    name,
                    description,
                    price,
                } => {
                    assert_eq!(name, "Lamp");
                    assert_eq!(description, None);
                    assert_eq!(price, Some(19.5));
                }
                other => panic!("unexpected action: {other:?}"),
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_list_with_search() {
        let cli =
            Cli::try_parse_from(["items-client", "--format", "json", "items", "list", "--search", "La"])
                .unwrap();

        assert!(matches!(cli.format, OutputFormat::Json));
        assert!(matches!(
            cli.command,
            Commands::Items(items::ItemsCommand {
                action: ItemsAction::List { search: Some(ref s) }
            }) if s == "La"
        ));
    }

    #[test]
    fn test_parse_health() {
        let cli = Cli::try_parse_from(["items-client", "--quiet", "health"]).unwrap();

        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Health));
    }

    #[test]
    fn test_item_id_must_be_numeric() {
        let result = Cli::try_parse_from(["items-client", "items", "get", "abc"]);
        assert!(result.is_err());
    }
}
