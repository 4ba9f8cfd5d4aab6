use clap::{Args, Subcommand};
use nd_core::{ArticleSource, Error, Result};

use crate::client::{NewsClient, SourceConfig};
use crate::logging::Logger;
use crate::providers::ProviderKind;

#[derive(Args, Clone, Debug)]
pub struct SourceArgs {
    #[command(subcommand)]
    pub command: SourceCommands,
}

#[derive(Subcommand, Clone, Debug)]
pub enum SourceCommands {
    /// Search the configured provider and print the normalized articles
    Fetch {
        query: String,
        #[arg(long, default_value_t = 9)]
        limit: usize,
        /// Print articles as JSON instead of one line each
        #[arg(long)]
        json: bool,
    },
    /// List available providers
    List,
}

pub async fn handle_command(args: SourceArgs, config: Option<SourceConfig>) -> Result<()> {
    match args.command {
        SourceCommands::Fetch { query, limit, json } => {
            let config = config.ok_or_else(|| {
                Error::Config("an API key is required; pass --api-key or set NEWS_API_KEY".to_string())
            })?;
            let logger = Logger::new().with_prefix(format!("[{}]", config.provider.name()));
            let client = NewsClient::new(config)?;

            let articles = match client.fetch_articles(&query, limit).await {
                Ok(articles) => articles,
                Err(e) => {
                    logger.error(&format!("Failed to fetch {}: {}", query, e));
                    return Err(e.into());
                }
            };
            logger.info(&format!("Found {} articles for {}", articles.len(), query));

            if json {
                println!("{}", serde_json::to_string_pretty(&articles)?);
            } else {
                for article in articles {
                    println!(
                        "- {} ({}) {}",
                        article.title,
                        article.byline_name().unwrap_or("Unknown Source"),
                        article.url
                    );
                }
            }
        }
        SourceCommands::List => {
            println!("Available providers:");
            for provider in ProviderKind::all() {
                println!("  {:<12} {}", provider_cli_name(provider), provider.endpoint());
            }
        }
    }
    Ok(())
}

fn provider_cli_name(provider: ProviderKind) -> String {
    use clap::ValueEnum;
    provider
        .to_possible_value()
        .map(|v| v.get_name().to_string())
        .unwrap_or_else(|| provider.name().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_cli_names() {
        let names: Vec<_> = ProviderKind::all().into_iter().map(provider_cli_name).collect();
        assert_eq!(names, vec!["gnews", "newsapi", "mediastack", "thenewsapi"]);
    }

    #[tokio::test]
    async fn test_fetch_requires_config() {
        let args = SourceArgs {
            command: SourceCommands::Fetch { query: "world".to_string(), limit: 9, json: false },
        };
        assert!(matches!(handle_command(args, None).await, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_list_needs_no_config() {
        let args = SourceArgs { command: SourceCommands::List };
        assert!(handle_command(args, None).await.is_ok());
    }
}
