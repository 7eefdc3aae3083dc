pub mod analytics;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;

pub use error::{GraphDeckError, Result};
pub use models::*;

/// Crate version, resolved at compile time from the workspace manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
