use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Bech32 prefix expected on account addresses.
    pub account_hrp: String,
    pub color: bool,
    /// Page size for `scan` when `--limit` is not given.
    pub default_page_limit: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            account_hrp: mda_types::DEFAULT_ACCOUNT_HRP.to_string(),
            color: true,
            default_page_limit: 100,
        }
    }
}

impl CliConfig {
    /// Load from a TOML file. Keys that are not set keep their defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Load from `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
