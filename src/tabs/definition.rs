use crate::tabs::error::TabsError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One tab: the label shown in the tab list and the content of its panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDef {
    pub id: String,
    pub label: String,
    pub content: String,
}

impl TabDef {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        TabDef {
            id: id.into(),
            label: label.into(),
            content: content.into(),
        }
    }
}

/// Ordered, validated list of tab definitions.
///
/// Both the tab list and the panel collection are built from the same set,
/// so a selector's position always matches its panel's position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    tabs: Vec<TabDef>,
}

impl TabSet {
    /// Validates `tabs`: non-empty, unique ids, non-blank labels.
    pub fn new(tabs: Vec<TabDef>) -> Result<Self, TabsError> {
        if tabs.is_empty() {
            return Err(TabsError::Empty);
        }

        let mut seen = HashSet::new();
        for tab in &tabs {
            if tab.label.trim().is_empty() {
                return Err(TabsError::BlankLabel { id: tab.id.clone() });
            }
            if !seen.insert(tab.id.as_str()) {
                return Err(TabsError::DuplicateId(tab.id.clone()));
            }
        }

        Ok(TabSet { tabs })
    }

    /// The built-in Home / Profile / Settings set.
    pub fn demo() -> Self {
        TabSet {
            tabs: vec![
                TabDef::new("home", "Home", "Welcome To Home"),
                TabDef::new("profile", "Profile", "Welcome To Profile"),
                TabDef::new("settings", "Settings", "Welcome To Settings"),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TabDef> {
        self.tabs.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TabDef> {
        self.tabs.iter()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.tabs.iter().map(|t| t.label.as_str()).collect()
    }

    pub fn into_inner(self) -> Vec<TabDef> {
        self.tabs
    }
}
