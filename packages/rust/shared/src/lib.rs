//! Shared types, error model, and configuration for growthloop.
//!
//! This crate is the foundation depended on by all other growthloop crates.
//! It provides:
//! - [`GrowthLoopError`] — the unified error type
//! - Domain types ([`KeywordPattern`], [`UgcSubmission`], [`RunId`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, LlmConfig, PublishingConfig, config_dir, config_file_path,
    init_config, load_config, load_config_from,
};
pub use error::{GrowthLoopError, Result};
pub use types::{KeywordPattern, KeywordStatus, RunId, UgcStatus, UgcSubmission};
