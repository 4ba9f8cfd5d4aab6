pub mod bootstrap;
pub mod config;
pub mod controller;
pub mod document;
pub mod error;
pub mod render;
pub mod source;
pub mod state;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use bootstrap::bootstrap;
pub use config::{CategoryConfig, SiteConfig};
pub use controller::{NavigationController, PendingFetch, RenderOutcome};
pub use document::Document;
pub use error::{Error, FetchError, Result};
pub use source::{ArticleSource, FetchResult};
pub use types::{Article, Category};
