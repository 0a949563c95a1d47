//! Configuration loading and management for the quote engine.
//!
//! This module loads the company profile and server settings from YAML
//! files in a configuration directory.
//!
//! # Example
//!
//! ```no_run
//! use quote_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/leo").unwrap();
//! println!("Listening on {}", config.server().bind_address());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CompanyProfile, QuoteConfig, ServerConfig};
