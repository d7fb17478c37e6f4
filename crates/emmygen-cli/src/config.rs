use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Run configuration: which dumps to read, which types to keep, and where
/// the stubs go.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    pub assemblies: Vec<AssemblyConfig>,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

/// One reflection dump plus its type filters.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyConfig {
    pub path: PathBuf,
    /// Qualified-name filters; `*` selects every eligible type.
    pub types: Vec<String>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

impl GeneratorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }
}
