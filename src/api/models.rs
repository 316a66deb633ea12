use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, Result};

/// The client-submitted payload. The `url` field is free-form text that may
/// merely contain a URL somewhere inside it.
#[derive(Debug)]
pub struct PreviewRequest {
    pub url: String,
}

impl PreviewRequest {
    /// Validated parse of a raw request body: the body must be a JSON
    /// object carrying a string `url` value.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body).map_err(|_| AppError::InvalidJson)?;
        let object = value.as_object().ok_or(AppError::InvalidJson)?;

        let url = object
            .get("url")
            .and_then(Value::as_str)
            .ok_or(AppError::MissingUrlField)?;

        Ok(PreviewRequest {
            url: url.to_owned(),
        })
    }
}

/// The normalized preview returned to clients. Every field is a non-empty
/// string; missing metadata has already been replaced by fallbacks.
#[derive(Debug, Serialize)]
pub struct PreviewResult {
    pub title: String,
    pub description: String,
    pub image: String,
    pub domain: String,
}
