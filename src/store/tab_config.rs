use crate::tabs::definition::{TabDef, TabSet};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk shape of a tab definitions file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabsConfig {
    pub tabs: Vec<TabDef>,
}

impl From<TabSet> for TabsConfig {
    fn from(set: TabSet) -> Self {
        TabsConfig {
            tabs: set.into_inner(),
        }
    }
}

/// Loads and validates a tab set from a JSON file.
pub fn load_tab_set(path: &Path) -> Result<TabSet> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read tab definitions from {}", path.display()))?;

    let config: TabsConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse tab definitions from {}", path.display()))?;

    let set = TabSet::new(config.tabs)
        .with_context(|| format!("Invalid tab definitions in {}", path.display()))?;

    Ok(set)
}

/// Picks the tab set to show.
///
/// An explicit path must load. Otherwise `default_file` is used when it
/// exists, and the built-in demo set when it does not.
pub fn resolve_tab_set(explicit: Option<&Path>, default_file: &Path) -> Result<TabSet> {
    if let Some(path) = explicit {
        return load_tab_set(path);
    }

    if default_file.is_file() {
        return load_tab_set(default_file);
    }

    tracing::debug!(path = %default_file.display(), "no tab definitions file, using demo set");
    Ok(TabSet::demo())
}

/// Pretty JSON for the built-in demo set, in the file format `load_tab_set` reads.
pub fn demo_config_json() -> Result<String> {
    serde_json::to_string_pretty(&TabsConfig::from(TabSet::demo()))
        .context("Failed to serialize tab definitions")
}
