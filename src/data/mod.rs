/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Column>, name index, shared row count
///   └──────────┘
///        │
///        ▼
///   read-only input to the explore pipeline
/// ```

pub mod loader;
pub mod model;
