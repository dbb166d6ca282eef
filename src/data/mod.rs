/// Data layer: the parsed-grid contract and the core tables.
///
/// Architecture:
/// ```text
///  parsed spreadsheet grids (ingestion collaborator)
///        │
///        ▼
///   ┌──────────┐
///   │   grid    │  anchor search → column slices
///   └──────────┘
///        │
///        ├────────► ┌──────────┐
///        │          │ BinTable  │  microns / mm / phi, ascending phi
///        │          └──────────┘
///        ▼
///   ┌──────────────┐
///   │ SampleMatrix  │  name → volume-% vector, row-aligned with BinTable
///   └──────────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ CumulativeCurve │  running sum per sample
///   └────────────────┘
/// ```
pub mod bins;
pub mod cumulative;
pub mod grid;
pub mod sample;
