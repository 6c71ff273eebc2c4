//! Runtime context resolution for pren commands.
//!
//! Every command works against the same resolved pair: the loaded config
//! and the prompt store it points at. The `--prompts-dir` flag takes
//! precedence over the config file.

use crate::config::Config;
use crate::error::Result;
use crate::store::FileStore;
use std::path::PathBuf;
use tracing::debug;

/// Resolved configuration and prompt store.
#[derive(Debug, Clone)]
pub struct PrenContext {
    /// Effective configuration (file values with CLI overrides applied).
    pub config: Config,
    /// The prompt store.
    pub store: FileStore,
}

impl PrenContext {
    /// Resolve the context from the default config location.
    pub fn resolve(prompts_dir: Option<PathBuf>) -> Result<Self> {
        Ok(Self::from_config(Config::load_default()?, prompts_dir))
    }

    /// Build a context from an already loaded config.
    pub fn from_config(mut config: Config, prompts_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = prompts_dir {
            config.prompts_dir = dir;
        }
        debug!(prompts_dir = %config.prompts_dir.display(), max_depth = config.max_depth, "resolved context");

        let store = FileStore::new(config.prompts_dir.clone());
        Self { config, store }
    }
}
