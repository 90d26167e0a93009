//! Configuration module for the my365-archiver.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - CLI argument merging
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{Config, IoConfig, SettingsConfig, UserConfig};
pub use validation::validate_config;
