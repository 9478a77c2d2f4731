use std::collections::HashMap;

use serde::Serialize;

use crate::data::model::{CellValue, Column};

use super::classify::SemanticType;

// ---------------------------------------------------------------------------
// Frequency table
// ---------------------------------------------------------------------------

/// One distinct value of a categorical column and its occurrence count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyEntry {
    pub value: CellValue,
    pub count: u64,
}

/// Occurrence counts per distinct value, sorted by descending count.
///
/// Invariants: values pairwise distinct; counts sum to the column's non-null
/// row count; equal counts keep first-encounter order (the sort is stable).
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct FrequencyTable {
    pub entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// The per-column aggregate handed to the chart factory.
#[derive(Debug, Clone, PartialEq)]
pub enum Aggregate {
    /// Categorical column: counts per distinct value.
    Frequencies(FrequencyTable),
    /// Continuous column: the raw non-null values, unchanged.
    Values(Vec<f64>),
}

/// Aggregate a column according to its semantic type.
pub fn aggregate(column: &Column, semantic: SemanticType) -> Aggregate {
    match semantic {
        SemanticType::Categorical => Aggregate::Frequencies(frequency_table(column)),
        SemanticType::Continuous => Aggregate::Values(column.numeric_values()),
    }
}

/// Count occurrences per distinct non-null value in a single scan, then
/// stable-sort by descending count. The scan records values in
/// first-encounter order, so ties keep that order deterministically.
pub fn frequency_table(column: &Column) -> FrequencyTable {
    let mut entries: Vec<FrequencyEntry> = Vec::new();
    let mut slots: HashMap<&CellValue, usize> = HashMap::new();

    for value in column.non_null() {
        match slots.get(value) {
            Some(&i) => entries[i].count += 1,
            None => {
                slots.insert(value, entries.len());
                entries.push(FrequencyEntry {
                    value: value.clone(),
                    count: 1,
                });
            }
        }
    }

    entries.sort_by(|a, b| b.count.cmp(&a.count));
    FrequencyTable { entries }
}
