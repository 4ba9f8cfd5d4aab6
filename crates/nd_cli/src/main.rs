use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use nd_core::{bootstrap, NavigationController, SiteConfig};
use nd_sources::{init_logging, NewsClient, ProviderKind, SourceArgs, SourceConfig};
use nd_web::AppState;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "News reader front page backed by a news search API", long_about = None)]
pub struct Cli {
    /// News search provider
    #[arg(long, value_enum, default_value = "gnews")]
    provider: ProviderKind,
    /// Provider API key
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    #[arg(long, default_value = "en")]
    language: String,
    /// Override the provider's search endpoint URL
    #[arg(long)]
    base_url: Option<String>,
    /// Override the response field holding the article list
    #[arg(long)]
    envelope: Option<String>,
    /// TOML file with site title, categories and query bindings
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Load the front page and serve the reader over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1:8080")]
        addr: String,
    },
    /// Load the front page, optionally click a category, and print the regions
    Render {
        category: Option<String>,
    },
    /// Query the provider directly
    Source(SourceArgs),
}

impl Cli {
    fn source_config(&self) -> Option<SourceConfig> {
        let api_key = self.api_key.as_deref()?;
        let mut config = SourceConfig::new(self.provider, api_key).with_language(&self.language);
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url);
        }
        if let Some(envelope) = &self.envelope {
            config = config.with_envelope(envelope);
        }
        Some(config)
    }

    fn site_config(&self) -> anyhow::Result<SiteConfig> {
        match &self.config {
            Some(path) => SiteConfig::load(path)
                .with_context(|| format!("loading site config from {}", path.display())),
            None => Ok(SiteConfig::default()),
        }
    }

    fn controller(&self) -> anyhow::Result<Arc<NavigationController>> {
        let source_config = self
            .source_config()
            .context("an API key is required; pass --api-key or set NEWS_API_KEY")?;
        let client = NewsClient::new(source_config)?;
        info!("🔌 Using {} ({})", client.config().provider.name(), client.config().endpoint());
        Ok(Arc::new(NavigationController::new(
            Arc::new(client),
            self.site_config()?,
        )))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match &cli.command {
        Commands::Serve { addr } => {
            let controller = cli.controller()?;
            bootstrap(&controller).await;
            info!("✨ Front page loaded");
            nd_web::serve(AppState::new(controller), addr).await?;
        }
        Commands::Render { category } => {
            let controller = cli.controller()?;
            bootstrap(&controller).await;
            if let Some(category) = category {
                controller.click_nav_link(category).await?;
            }
            let doc = controller.snapshot();
            println!("<!-- {} -->", doc.date_line);
            println!("{}", doc.main_content);
            println!("{}", doc.sidebar_list);
        }
        Commands::Source(args) => {
            nd_sources::handle_command(args.clone(), cli.source_config()).await?;
        }
    }

    Ok(())
}
