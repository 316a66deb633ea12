use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use crate::error::{AppError, Result};

/// Placeholder shown when a page offers no usable preview image.
pub const DEFAULT_FALLBACK_IMAGE: &str =
    "http://www.globaltrack.in/assets/testimonial_images/no-image-800x800.jpg";

#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub fallback_image: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        // Load server configuration with defaults
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "7000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

        let server_addr = SocketAddr::new(ip, port);

        let fallback_image = env::var("FALLBACK_IMAGE_URL")
            .unwrap_or_else(|_| DEFAULT_FALLBACK_IMAGE.to_string());

        Ok(Config {
            server_addr,
            fallback_image,
        })
    }
}
