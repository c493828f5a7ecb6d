//! Shared configuration, error handling, and extractors for OnCode
//!
//! This crate provides common functionality used across the service:
//! - Configuration management following 12-factor principles
//! - Error type and its HTTP representation
//! - JSON request extraction

pub mod config;
pub mod error;
pub mod extractors;

pub use config::Config;
pub use error::{Error, Result};
pub use extractors::ApiJson;
