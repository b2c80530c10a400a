/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .tsv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + clean → EarthquakeDataset
///   └──────────┘
///        │
///        ▼
///   ┌─────────────────┐
///   │ EarthquakeDataset│  Vec<EarthquakeRecord>, years, magnitude bounds
///   └─────────────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌──────────┐   ┌───────────┐
///   │  filter   │   │ aggregate  │  yearly means, tsunami tally
///   └──────────┘   └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
