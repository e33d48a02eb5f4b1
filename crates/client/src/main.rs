//! items-client CLI entry point.

use clap::Parser;
use items_client::cli::items::ItemsAction;
use items_client::cli::{Cli, Commands, OutputFormat};
use items_client::client::ItemsClient;
use items_client::output::{format_output, pretty};
use items_core::item::{CreateItemRequest, ListItemsQuery};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = ItemsClient::new(&cli.base_url);

    match cli.command {
        Commands::Items(items_cmd) => match items_cmd.action {
            ItemsAction::List { search } => {
                let items = client.list_items(ListItemsQuery { search }).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&items, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_items(&items)),
                }
            }
            ItemsAction::Create {
                name,
                description,
                price,
            } => {
                let request = CreateItemRequest {
                    name,
                    description,
                    price,
                };
                let created = client.create_item(&request).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&created, cli.format)),
                    OutputFormat::Pretty => {
                        if !cli.quiet {
                            println!("{} (ID: {})", created.message, created.id)
                        }
                    }
                }
            }
            ItemsAction::Get { id } => {
                let item = client.get_item(id).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&item, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_item(&item)),
                }
            }
            ItemsAction::Delete { id } => {
                let response = client.delete_item(id).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&response, cli.format)),
                    OutputFormat::Pretty => {
                        if !cli.quiet {
                            println!("Deleted item {}", id);
                        }
                    }
                }
            }
            ItemsAction::Enrich { id } => {
                let enriched = client.enrich_item(id).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&enriched, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_enriched(&enriched)),
                }
            }
        },
        Commands::Health => {
            let health = client.health().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&health, cli.format)),
                OutputFormat::Pretty => println!("Server: {}", health.status),
            }
        }
    }

    Ok(())
}
