pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod metadata;
pub mod preview;

use std::sync::Arc;

use config::Config;
use fetch::{HttpPageFetcher, PageFetcher};
use metadata::{MetaTagExtractor, MetadataExtractor};

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub fetcher: Arc<dyn PageFetcher>,
    pub extractor: Arc<dyn MetadataExtractor>,
}

impl AppState {
    /// Production wiring: a pooled HTTP fetcher and the meta-tag extractor.
    pub fn new(config: Config) -> error::Result<Self> {
        Ok(AppState {
            config: Arc::new(config),
            fetcher: Arc::new(HttpPageFetcher::new()?),
            extractor: Arc::new(MetaTagExtractor),
        })
    }
}
