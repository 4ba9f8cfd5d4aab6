pub mod cli;
pub mod client;
pub mod logging;
pub mod providers;

pub use cli::{handle_command, SourceArgs, SourceCommands};
pub use client::{NewsClient, SourceConfig};
pub use logging::init_logging;
pub use providers::ProviderKind;

pub mod prelude {
    pub use super::client::{NewsClient, SourceConfig};
    pub use super::providers::ProviderKind;
    pub use nd_core::{Article, ArticleSource, Error, FetchError, Result};
}
