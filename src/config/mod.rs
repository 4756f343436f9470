//! Configuration module for scraping sessions
//!
//! This module provides the `ScrapeConfig` struct and its builder for
//! configuring page sources, conversion and output sinks, with validation and
//! sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::ScrapeConfigBuilder;
pub use types::ScrapeConfig;
