use crate::config::ExploreConfig;
use crate::data::model::Dataset;

use super::ExploreError;

// ---------------------------------------------------------------------------
// Semantic column type
// ---------------------------------------------------------------------------

/// How a column should be aggregated and charted, as opposed to how it is
/// stored. `Pclass` stores integers but is a label, not a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticType {
    Categorical,
    Continuous,
}

/// Classify a column by name.
///
/// Categorical when the config declares it so or the storage is non-numeric;
/// Continuous otherwise. A name missing from the dataset is the pipeline's
/// only error. Independent of the UI selector set: any existing column
/// classifies.
pub fn classify(
    dataset: &Dataset,
    config: &ExploreConfig,
    column: &str,
) -> Result<SemanticType, ExploreError> {
    let col = dataset
        .column(column)
        .ok_or_else(|| ExploreError::UnknownColumn(column.to_string()))?;

    if config.is_declared_categorical(column) || !col.is_numeric() {
        Ok(SemanticType::Categorical)
    } else {
        Ok(SemanticType::Continuous)
    }
}
