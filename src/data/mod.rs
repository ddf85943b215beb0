/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → SalaryDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ SalaryDataset │  Vec<SalaryRecord>, distinct values per filter column
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply the FilterSelection → filtered indices
///   └──────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌──────────┐   ┌───────────┐
///   │ metrics   │   │ aggregate  │  KPI scalars / the four chart tables
///   └──────────┘   └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod metrics;
pub mod model;
