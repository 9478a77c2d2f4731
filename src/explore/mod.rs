/// Exploration core: the selection-driven render pipeline.
///
/// Architecture:
/// ```text
///   column name
///        │
///        ▼
///   ┌──────────┐
///   │ classify  │  declared set / storage → Categorical | Continuous
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ aggregate │  frequency table | raw numeric pass-through
///   └──────────┘
///        │
///        ├──────────────────┐
///        ▼                  ▼
///   ┌──────────┐      ┌──────────┐
///   │  chart    │      │  table    │
///   │  factory  │      │  builder  │
///   └──────────┘      └──────────┘
///        │                  │
///        ▼                  ▼
///   (bar|histogram, pie|empty)  distinct values
/// ```
///
/// `render` is pure: it reads the dataset, allocates fresh output, and holds
/// no state between calls, so repeated or parallel invocations are safe.
pub mod aggregate;
pub mod chart;
pub mod classify;
pub mod table;

use thiserror::Error;

use crate::config::ExploreConfig;
use crate::data::model::Dataset;

use self::chart::ChartSpec;
use self::table::TableSpec;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// The pipeline's error taxonomy. Everything else (empty columns, empty
/// datasets, continuous pie slots) is a normal branch outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExploreError {
    #[error("unknown column '{0}'")]
    UnknownColumn(String),
}

// ---------------------------------------------------------------------------
// Render pipeline
// ---------------------------------------------------------------------------

/// Everything the display layer needs for one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    /// Bar chart (categorical) or histogram (continuous).
    pub primary: ChartSpec,
    /// Pie chart (categorical) or the deliberate empty slot (continuous).
    pub secondary: ChartSpec,
    /// Distinct non-null values of the selected column.
    pub table: TableSpec,
}

/// Render one column: classify, aggregate, build the chart pair and the
/// distinct-value table. Fails only on an unknown column name, with no
/// partial output.
pub fn render(
    dataset: &Dataset,
    config: &ExploreConfig,
    column: &str,
) -> Result<RenderOutput, ExploreError> {
    let semantic = classify::classify(dataset, config, column)?;
    // classify verified existence.
    let col = dataset
        .column(column)
        .ok_or_else(|| ExploreError::UnknownColumn(column.to_string()))?;

    let agg = aggregate::aggregate(col, semantic);
    let (primary, secondary) = chart::charts(column, &agg, config.histogram_bins);
    let table = table::distinct_values(col);

    Ok(RenderOutput {
        primary,
        secondary,
        table,
    })
}
