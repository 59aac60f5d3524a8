/// Data layer: course records, loading, grouping and filtering.
///
/// Architecture:
/// ```text
///  .xlsx / .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  first sheet → RawRow iterator
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  RawRow → Course (defaults, row-index ids)
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  zones    │  Course list → ZoneRegistry ("All Trainings" first)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ sections  │  zone courses → canonical section buckets
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  `tab` request → known zone
///   └──────────┘
/// ```
///
/// [`catalog::Catalog`] runs the whole chain for one load.

pub mod catalog;
pub mod filter;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod sections;
pub mod slug;
pub mod zones;
