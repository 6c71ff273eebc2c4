//! Configuration model for pren.
//!
//! This module defines the Config struct that represents `config.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for optional fields, and validation of config values.
//!
//! The file is looked up at `$PREN_CONFIG` when set, otherwise at
//! `<config dir>/pren/config.yaml`. A missing file means all defaults.

mod model;
mod operations;

#[cfg(test)]
mod tests;

pub use model::{Config, default_prompts_dir};
pub use operations::{CONFIG_ENV_VAR, default_config_path};
