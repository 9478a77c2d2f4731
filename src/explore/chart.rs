use serde::Serialize;

use super::aggregate::{Aggregate, FrequencyTable};

// ---------------------------------------------------------------------------
// Chart specification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChartKind {
    Bar,
    Pie,
    Histogram,
    Empty,
}

/// One equal-width histogram bucket. Bins are half-open `[lower, upper)`
/// except the last, which also includes the column maximum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartData {
    Frequencies(FrequencyTable),
    Bins(Vec<HistogramBin>),
    Empty,
}

/// Display-layer description of one chart; carries no rendering state.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub data: ChartData,
}

impl ChartSpec {
    /// The deliberate no-chart placeholder, e.g. the pie slot of a
    /// continuous column.
    pub fn empty() -> Self {
        ChartSpec {
            kind: ChartKind::Empty,
            title: String::new(),
            data: ChartData::Empty,
        }
    }

    /// Flatten into the stable `{kind, title, categories[], values[]}`
    /// schema. Histogram categories are `"lo..hi"` range labels.
    pub fn to_series(&self) -> ChartSeries {
        let (categories, values) = match &self.data {
            ChartData::Frequencies(table) => (
                table.entries.iter().map(|e| e.value.to_string()).collect(),
                table.entries.iter().map(|e| e.count).collect(),
            ),
            ChartData::Bins(bins) => (
                bins.iter()
                    .map(|b| format!("{:.1}..{:.1}", b.lower, b.upper))
                    .collect(),
                bins.iter().map(|b| b.count).collect(),
            ),
            ChartData::Empty => (Vec::new(), Vec::new()),
        };
        ChartSeries {
            kind: self.kind,
            title: self.title.clone(),
            categories,
            values,
        }
    }
}

/// Serialization form of a [`ChartSpec`]: one stable schema for every kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub kind: ChartKind,
    pub title: String,
    pub categories: Vec<String>,
    pub values: Vec<u64>,
}

// ---------------------------------------------------------------------------
// Chart factory
// ---------------------------------------------------------------------------

/// Build the chart pair for one column's aggregate.
///
/// Categorical: bar + pie over the same frequency table. Continuous:
/// histogram + a deliberate `Empty` pie slot, since a pie over a measurable
/// quantity carries no meaning. Zero-data aggregates produce zero-data
/// charts.
pub fn charts(column: &str, aggregate: &Aggregate, bin_count: usize) -> (ChartSpec, ChartSpec) {
    match aggregate {
        Aggregate::Frequencies(table) => (
            ChartSpec {
                kind: ChartKind::Bar,
                title: format!("Frequency of {column}"),
                data: ChartData::Frequencies(table.clone()),
            },
            ChartSpec {
                kind: ChartKind::Pie,
                title: format!("Percentage of {column}"),
                data: ChartData::Frequencies(table.clone()),
            },
        ),
        Aggregate::Values(values) => (
            ChartSpec {
                kind: ChartKind::Histogram,
                title: format!("Distribution of {column}"),
                data: ChartData::Bins(bin_values(values, bin_count)),
            },
            ChartSpec::empty(),
        ),
    }
}

/// Bucket values into `bin_count` equal-width bins over `[min, max]`.
/// Empty input yields no bins; a single distinct value yields one
/// degenerate bin holding everything.
fn bin_values(values: &[f64], bin_count: usize) -> Vec<HistogramBin> {
    let Some(&first) = values.first() else {
        return Vec::new();
    };
    let (min, max) = values.iter().fold((first, first), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    });

    if min == max || bin_count == 0 {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: values.len() as u64,
        }];
    }

    let width = (max - min) / bin_count as f64;
    let mut counts = vec![0u64; bin_count];
    for &v in values {
        let idx = (((v - min) / width) as usize).min(bin_count - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: min + i as f64 * width,
            upper: min + (i + 1) as f64 * width,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;
    use crate::explore::aggregate::FrequencyEntry;

    fn sex_table() -> FrequencyTable {
        FrequencyTable {
            entries: vec![
                FrequencyEntry {
                    value: CellValue::String("male".into()),
                    count: 577,
                },
                FrequencyEntry {
                    value: CellValue::String("female".into()),
                    count: 314,
                },
            ],
        }
    }

    #[test]
    fn categorical_column_gets_bar_and_pie() {
        let agg = Aggregate::Frequencies(sex_table());
        let (bar, pie) = charts("Sex", &agg, 10);
        assert_eq!(bar.kind, ChartKind::Bar);
        assert_eq!(bar.title, "Frequency of Sex");
        assert_eq!(pie.kind, ChartKind::Pie);
        assert_eq!(pie.title, "Percentage of Sex");
        assert_eq!(bar.data, pie.data);
    }

    #[test]
    fn continuous_column_gets_histogram_and_empty_pie() {
        let agg = Aggregate::Values(vec![22.0, 38.0, 26.0, 35.0]);
        let (hist, pie) = charts("Age", &agg, 10);
        assert_eq!(hist.kind, ChartKind::Histogram);
        assert_eq!(hist.title, "Distribution of Age");
        assert_eq!(pie.kind, ChartKind::Empty);
        assert_eq!(pie.data, ChartData::Empty);
    }

    #[test]
    fn bins_cover_range_and_sum_counts() {
        let values: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let bins = bin_values(&values, 10);
        assert_eq!(bins.len(), 10);
        assert_eq!(bins.iter().map(|b| b.count).sum::<u64>(), 100);
        assert_eq!(bins[0].lower, 0.0);
        assert_eq!(bins[9].upper, 99.0);
        // Max value lands in the last bin, not past it.
        assert_eq!(bins[9].count, 10);
    }

    #[test]
    fn empty_values_yield_zero_bins() {
        assert!(bin_values(&[], 10).is_empty());
        let (hist, pie) = charts("Age", &Aggregate::Values(Vec::new()), 10);
        assert_eq!(hist.kind, ChartKind::Histogram);
        assert_eq!(hist.data, ChartData::Bins(Vec::new()));
        assert_eq!(pie.kind, ChartKind::Empty);
    }

    #[test]
    fn single_distinct_value_yields_one_degenerate_bin() {
        let bins = bin_values(&[5.0, 5.0, 5.0], 10);
        assert_eq!(
            bins,
            vec![HistogramBin {
                lower: 5.0,
                upper: 5.0,
                count: 3,
            }]
        );
    }

    #[test]
    fn empty_frequency_table_yields_zero_data_charts() {
        let agg = Aggregate::Frequencies(FrequencyTable::default());
        let (bar, pie) = charts("Embarked", &agg, 10);
        assert!(bar.to_series().categories.is_empty());
        assert!(pie.to_series().values.is_empty());
    }

    #[test]
    fn series_schema_is_stable() {
        let agg = Aggregate::Frequencies(sex_table());
        let (bar, _) = charts("Sex", &agg, 10);
        let json = serde_json::to_value(bar.to_series()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "Bar",
                "title": "Frequency of Sex",
                "categories": ["male", "female"],
                "values": [577, 314],
            })
        );
    }
}
