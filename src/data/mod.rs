/// Data layer: core types, log parsing, and export.
///
/// Architecture:
/// ```text
///  partial_results.txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  regex scan → iteration records + optional start record
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ MetricsTable  │  Vec<MetricsRecord>, unique + sorted by iteration
///   └──────────────┘
///        │
///        ├────────────► chart / ui   (render)
///        ▼
///   ┌──────────┐
///   │  export   │  optional CSV dump of the table
///   └──────────┘
/// ```

pub mod export;
pub mod loader;
pub mod model;
