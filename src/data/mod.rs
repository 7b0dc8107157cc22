/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  chicago.csv / new_york_city.csv / washington.csv
///        │
///        ├──────────────────────────┐
///        ▼                          ▼
///   ┌──────────┐              ┌──────────┐
///   │  loader   │ → TripTable │  loader   │ → RawTable (text rows)
///   └──────────┘              └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  month / day-of-week predicate → filtered TripTable
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
