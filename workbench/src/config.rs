//! Workbench configuration

use editor_shell::DEFAULT_TAB_WIDTH;
use scan_types::Language;
use serde::{Deserialize, Serialize};
use services_journal::DEFAULT_JOURNAL_CAPACITY;

/// Host configuration, persisted as JSON.
///
/// Unknown languages fail parsing; missing fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkbenchConfig {
    pub default_language: Language,
    pub tab_width: usize,
    pub journal_capacity: usize,
}

impl Default for WorkbenchConfig {
    fn default() -> Self {
        Self {
            default_language: Language::Python,
            tab_width: DEFAULT_TAB_WIDTH,
            journal_capacity: DEFAULT_JOURNAL_CAPACITY,
        }
    }
}

impl WorkbenchConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
