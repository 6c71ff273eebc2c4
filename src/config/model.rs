//! Config struct definition and default implementation.

use crate::template::DEFAULT_MAX_DEPTH;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for pren.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding prompt files.
    #[serde(default = "default_prompts_dir")]
    pub prompts_dir: PathBuf,

    /// Maximum number of nested prompt references while rendering.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompts_dir: default_prompts_dir(),
            max_depth: default_max_depth(),
        }
    }
}

/// `~/pren/prompts`, or `pren/prompts` when there is no home directory.
pub fn default_prompts_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join("pren").join("prompts"))
        .unwrap_or_else(|| PathBuf::from("pren").join("prompts"))
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}
