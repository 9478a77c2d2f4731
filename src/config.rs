use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Exploration configuration
// ---------------------------------------------------------------------------

/// Static exploration schema, resolved once at startup.
///
/// The selector set bounds what the UI offers; the categorical set declares
/// which columns are discrete labels even when stored as numbers. Columns
/// outside the selector set still classify and render when requested
/// directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExploreConfig {
    /// Columns offered in the UI selector, in display order.
    pub selectable_columns: Vec<String>,
    /// Columns treated as categorical regardless of numeric storage.
    pub categorical_columns: BTreeSet<String>,
    /// Equal-width bin count for histograms, applied to every continuous
    /// column alike.
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,
}

fn default_histogram_bins() -> usize {
    10
}

impl Default for ExploreConfig {
    fn default() -> Self {
        ExploreConfig {
            selectable_columns: ["Survived", "Pclass", "Sex", "Embarked", "Age"]
                .into_iter()
                .map(String::from)
                .collect(),
            categorical_columns: ["Survived", "Pclass", "Sex", "Embarked"]
                .into_iter()
                .map(String::from)
                .collect(),
            histogram_bins: default_histogram_bins(),
        }
    }
}

impl ExploreConfig {
    /// Load a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).context("parsing config JSON")
    }

    /// Whether a column is declared categorical by name.
    pub fn is_declared_categorical(&self, column: &str) -> bool {
        self.categorical_columns.contains(column)
    }
}
