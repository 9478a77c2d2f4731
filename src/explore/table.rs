use std::collections::HashSet;

use serde::Serialize;

use crate::data::model::{CellValue, Column};

// ---------------------------------------------------------------------------
// Distinct-value table
// ---------------------------------------------------------------------------

/// The distinct non-null values of one column, each exactly once, in order
/// of first appearance. Applies to categorical and continuous columns alike.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSpec {
    #[serde(rename = "columnName")]
    pub column_name: String,
    pub values: Vec<CellValue>,
}

impl TableSpec {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Collapse duplicates while keeping first-appearance order.
pub fn distinct_values(column: &Column) -> TableSpec {
    let mut seen: HashSet<&CellValue> = HashSet::new();
    let mut values = Vec::new();
    for v in column.non_null() {
        if seen.insert(v) {
            values.push(v.clone());
        }
    }
    TableSpec {
        column_name: column.name.clone(),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse_in_first_appearance_order() {
        let col = Column::new(
            "Embarked",
            vec![
                CellValue::String("S".into()),
                CellValue::String("C".into()),
                CellValue::String("S".into()),
                CellValue::Null,
                CellValue::String("Q".into()),
                CellValue::String("C".into()),
            ],
        );
        let table = distinct_values(&col);
        assert_eq!(table.column_name, "Embarked");
        assert_eq!(
            table.values,
            vec![
                CellValue::String("S".into()),
                CellValue::String("C".into()),
                CellValue::String("Q".into()),
            ]
        );
    }

    #[test]
    fn nulls_are_excluded() {
        let col = Column::new("Cabin", vec![CellValue::Null, CellValue::Null]);
        let table = distinct_values(&col);
        assert!(table.is_empty());
    }

    #[test]
    fn continuous_columns_list_distinct_values_too() {
        let col = Column::new(
            "Age",
            vec![
                CellValue::Float(22.0),
                CellValue::Float(38.0),
                CellValue::Float(22.0),
            ],
        );
        let table = distinct_values(&col);
        assert_eq!(table.len(), 2);
        assert_eq!(table.values[0], CellValue::Float(22.0));
    }

    #[test]
    fn serializes_with_column_name_key() {
        let col = Column::new("Sex", vec![CellValue::String("male".into())]);
        let json = serde_json::to_value(distinct_values(&col)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"columnName": "Sex", "values": ["male"]})
        );
    }
}
