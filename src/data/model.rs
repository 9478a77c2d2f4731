use std::collections::BTreeMap;
use std::fmt;

use anyhow::{Result, bail};
use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// CellValue – a single cell in a column
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common tabular dtypes.
/// `Null` marks a missing entry. Used as a map key downstream, so the type
/// carries manual `Eq` / `Ord` / `Hash` impls.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

// -- Manual Eq/Ord/Hash so CellValue can key maps despite the f64 variant --

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn discriminant(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Bool(_) => 1,
                Integer(_) => 2,
                Float(_) => 3,
                String(_) => 4,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (String(a), String(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl std::hash::Hash for CellValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            CellValue::String(s) => s.hash(state),
            CellValue::Integer(i) => i.hash(state),
            CellValue::Float(f) => f.to_bits().hash(state),
            CellValue::Bool(b) => b.hash(state),
            CellValue::Null => {}
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

/// Serializes as the natural JSON scalar (`null` for `Null`), keeping the
/// output schema free of enum tags.
impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::String(s) => serializer.serialize_str(s),
            CellValue::Integer(i) => serializer.serialize_i64(*i),
            CellValue::Float(v) => serializer.serialize_f64(*v),
            CellValue::Bool(b) => serializer.serialize_bool(*b),
            CellValue::Null => serializer.serialize_none(),
        }
    }
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Try to interpret the value as an `f64` for histogram input.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Column – one named column of the table
// ---------------------------------------------------------------------------

/// A named column: an ordered sequence of cells, one per row.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<CellValue>) -> Self {
        Column {
            name: name.into(),
            values,
        }
    }

    /// Iterate over the non-null cells in row order.
    pub fn non_null(&self) -> impl Iterator<Item = &CellValue> {
        self.values.iter().filter(|v| !v.is_null())
    }

    pub fn non_null_count(&self) -> usize {
        self.non_null().count()
    }

    /// Whether the column's storage is numeric: at least one non-null cell
    /// and every non-null cell an integer or float.
    pub fn is_numeric(&self) -> bool {
        let mut any = false;
        for v in self.non_null() {
            if v.as_f64().is_none() {
                return false;
            }
            any = true;
        }
        any
    }

    /// The non-null cells interpreted as `f64`, row order preserved.
    /// Non-numeric cells are skipped.
    pub fn numeric_values(&self) -> Vec<f64> {
        self.non_null().filter_map(CellValue::as_f64).collect()
    }

    /// Unify numeric storage the way a dataframe dtype does: when every
    /// non-null cell is numeric and any of them is a float, integer cells
    /// widen to floats. Without this, `22` and `22.0` read from mixed rows
    /// would count as two distinct values downstream.
    pub fn unify_numeric_storage(&mut self) {
        let mut any_float = false;
        for v in self.non_null() {
            match v {
                CellValue::Float(_) => any_float = true,
                CellValue::Integer(_) => {}
                _ => return,
            }
        }
        if !any_float {
            return;
        }
        for v in &mut self.values {
            if let CellValue::Integer(i) = v {
                *v = CellValue::Float(*i as f64);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table. Built once by the loader and read-only afterwards:
/// there is no mutating API, so renders may share it freely.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<Column>,
    /// column name → index into `columns`.
    index: BTreeMap<String, usize>,
    row_count: usize,
}

impl Dataset {
    /// Build a dataset from loaded columns, checking the shared-row-count
    /// invariant, unifying numeric storage per column, and indexing names.
    pub fn from_columns(mut columns: Vec<Column>) -> Result<Self> {
        for col in &mut columns {
            col.unify_numeric_storage();
        }
        let row_count = columns.first().map_or(0, |c| c.values.len());
        let mut index = BTreeMap::new();
        for (i, col) in columns.iter().enumerate() {
            if col.values.len() != row_count {
                bail!(
                    "column '{}' has {} rows, expected {row_count}",
                    col.name,
                    col.values.len()
                );
            }
            if index.insert(col.name.clone(), i).is_some() {
                bail!("duplicate column name '{}'", col.name);
            }
        }
        Ok(Dataset {
            columns,
            index,
            row_count,
        })
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.index.get(name).map(|&i| &self.columns[i])
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Column names in file order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.row_count
    }

    /// Whether the dataset has zero rows.
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(specs: &[&str]) -> Vec<CellValue> {
        specs
            .iter()
            .map(|s| {
                if s.is_empty() {
                    CellValue::Null
                } else if let Ok(i) = s.parse::<i64>() {
                    CellValue::Integer(i)
                } else if let Ok(f) = s.parse::<f64>() {
                    CellValue::Float(f)
                } else {
                    CellValue::String(s.to_string())
                }
            })
            .collect()
    }

    #[test]
    fn numeric_probe_ignores_nulls() {
        let col = Column::new("Age", cells(&["22", "", "38.5", ""]));
        assert!(col.is_numeric());
        assert_eq!(col.numeric_values(), vec![22.0, 38.5]);
        assert_eq!(col.non_null_count(), 2);
    }

    #[test]
    fn all_null_column_is_not_numeric() {
        let col = Column::new("Cabin", vec![CellValue::Null, CellValue::Null]);
        assert!(!col.is_numeric());
        assert!(col.numeric_values().is_empty());
    }

    #[test]
    fn mixed_text_column_is_not_numeric() {
        let col = Column::new("Ticket", cells(&["345", "PC 17599"]));
        assert!(!col.is_numeric());
    }

    #[test]
    fn dataset_rejects_ragged_columns() {
        let cols = vec![
            Column::new("A", cells(&["1", "2"])),
            Column::new("B", cells(&["x"])),
        ];
        assert!(Dataset::from_columns(cols).is_err());
    }

    #[test]
    fn dataset_rejects_duplicate_names() {
        let cols = vec![
            Column::new("A", cells(&["1"])),
            Column::new("A", cells(&["2"])),
        ];
        assert!(Dataset::from_columns(cols).is_err());
    }

    #[test]
    fn dataset_lookup_and_row_count() {
        let cols = vec![
            Column::new("Sex", cells(&["male", "female", "female"])),
            Column::new("Age", cells(&["22", "", "26"])),
        ];
        let ds = Dataset::from_columns(cols).unwrap();
        assert_eq!(ds.len(), 3);
        assert!(ds.has_column("Age"));
        assert!(!ds.has_column("Fare"));
        assert_eq!(ds.column_names().collect::<Vec<_>>(), vec!["Sex", "Age"]);
    }

    #[test]
    fn mixed_numeric_column_widens_to_float() {
        let mut col = Column::new("Age", cells(&["22", "38.5", ""]));
        col.unify_numeric_storage();
        assert_eq!(
            col.values,
            vec![
                CellValue::Float(22.0),
                CellValue::Float(38.5),
                CellValue::Null
            ]
        );
    }

    #[test]
    fn pure_integer_column_keeps_integer_storage() {
        let mut col = Column::new("Pclass", cells(&["3", "1", "3"]));
        col.unify_numeric_storage();
        assert_eq!(col.values[0], CellValue::Integer(3));
    }

    #[test]
    fn text_column_is_left_untouched_by_unification() {
        let mut col = Column::new("Ticket", cells(&["345", "7.5", "PC 17599"]));
        col.unify_numeric_storage();
        assert_eq!(col.values[0], CellValue::Integer(345));
        assert_eq!(col.values[2], CellValue::String("PC 17599".into()));
    }

    #[test]
    fn from_columns_unifies_mixed_numeric_storage() {
        let ds = Dataset::from_columns(vec![Column::new("Fare", cells(&["7", "7.25"]))]).unwrap();
        assert_eq!(
            ds.column("Fare").unwrap().values,
            vec![CellValue::Float(7.0), CellValue::Float(7.25)]
        );
    }

    #[test]
    fn cell_value_hash_distinguishes_float_and_int() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(CellValue::Integer(1));
        set.insert(CellValue::Float(1.0));
        assert_eq!(set.len(), 2);
    }
}
