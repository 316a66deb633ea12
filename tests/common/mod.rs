#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use link_preview_server::AppState;
use link_preview_server::api::routes::create_router;
use link_preview_server::config::{Config, DEFAULT_FALLBACK_IMAGE};
use link_preview_server::error::{AppError, Result};
use link_preview_server::fetch::PageFetcher;
use link_preview_server::metadata::MetaTagExtractor;

/// Serves the same canned HTML for every URL.
pub struct StaticPageFetcher {
    pub html: String,
}

#[async_trait]
impl PageFetcher for StaticPageFetcher {
    async fn fetch(&self, _url: &str) -> Result<String> {
        Ok(self.html.clone())
    }
}

/// Fails every fetch, as an unreachable host would.
pub struct UnreachablePageFetcher;

#[async_trait]
impl PageFetcher for UnreachablePageFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        Err(AppError::FetchError(format!("connection to {url} refused")))
    }
}

pub fn create_test_state(fetcher: Arc<dyn PageFetcher>) -> AppState {
    let config = Config {
        server_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        fallback_image: DEFAULT_FALLBACK_IMAGE.to_string(),
    };

    AppState {
        config: Arc::new(config),
        fetcher,
        extractor: Arc::new(MetaTagExtractor),
    }
}

pub fn app_with_page(html: &str) -> Router {
    create_router(create_test_state(Arc::new(StaticPageFetcher {
        html: html.to_string(),
    })))
}

pub fn app_with_unreachable_remote() -> Router {
    create_router(create_test_state(Arc::new(UnreachablePageFetcher)))
}
