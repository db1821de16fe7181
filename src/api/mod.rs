pub mod builder;
pub mod client;
pub mod rest;
pub mod types;

/// Sandbox environment, used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://sandbox-api.ovalfi-app.com";

pub use builder::{build_client, TorusBuilder};
pub use client::TorusClient;
