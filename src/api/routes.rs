use axum::{
    Router,
    body::Bytes,
    extract::{Json, State},
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::AppState;
use crate::api::models::{PreviewRequest, PreviewResult};
use crate::error::Result;
use crate::extract::{ExtractedUrl, extract_first_url};
use crate::metadata::PageMetadata;
use crate::preview::synthesize;

/// Builds the application router. There is no path routing: every path and
/// method lands in the preview handler, and the fixed header set rides on
/// every response, the preflight included.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .fallback(preview_handler)
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("HEAD, GET, POST, PUT, DELETE, OPTIONS, TRACE"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_MAX_AGE,
            HeaderValue::from_static("2592000"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
        .with_state(app_state)
}

async fn preview_handler(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::NO_CONTENT.into_response();
    }

    match process_preview_request(&state, &body).await {
        Ok(preview) => {
            tracing::debug!("Built preview for {}", preview.domain);
            (StatusCode::OK, Json(preview)).into_response()
        }
        Err(err) => {
            tracing::warn!("Rejecting request: {err}");
            err.into_response()
        }
    }
}

async fn process_preview_request(state: &AppState, body: &[u8]) -> Result<PreviewResult> {
    let request = PreviewRequest::from_body(body)?;
    let link = extract_first_url(&request.url)?;

    let metadata = fetch_metadata(state, &link).await;

    Ok(synthesize(metadata, &link, &state.config.fallback_image))
}

/// Fetches the page and extracts its metadata. Failures here never surface
/// to the client: the cause is logged and an empty result is returned so
/// the synthesizer can fill every field from fallbacks.
async fn fetch_metadata(state: &AppState, link: &ExtractedUrl) -> PageMetadata {
    match state.fetcher.fetch(&link.raw).await {
        Ok(html) => state.extractor.extract(&html, &link.parsed),
        Err(err) => {
            tracing::warn!(
                "Could not retrieve metadata for {}: {err}. Generating fallback preview.",
                link.raw
            );
            PageMetadata::default()
        }
    }
}
