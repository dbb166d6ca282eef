/// Statistics layer: percentile interpolation, peak detection, the
/// per-sample Folk & Ward engine and the cross-sample aggregate.
///
/// ```text
///   ┌────────┐   phi ↔ cumulative %     ┌────────┐  prominent local maxima
///   │ interp  │                         │ peaks   │
///   └────────┘                          └────────┘
///        │                                   │
///        └──────────────┬────────────────────┘
///                       ▼
///                 ┌──────────┐   per sample → StatisticsRecord
///                 │  engine   │
///                 └──────────┘
///                       │
///                       ▼
///                 ┌──────────┐   N curves → mean / SEM / CI band
///                 │ aggregate │
///                 └──────────┘
/// ```
pub mod aggregate;
pub mod engine;
pub mod interp;
pub mod peaks;
