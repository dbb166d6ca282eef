//! Grain-size distribution statistics engine.
//!
//! Converts particle-size-analyzer output (binned volume percentages per
//! diameter channel) into the standard descriptive measures of
//! sedimentology: Folk & Ward (1957) graphic mean, sorting, skewness and
//! kurtosis, sand/silt/clay proportions, modal diameters, and a qualitative
//! classification label for each (Wentworth 1922; Folk 1954, 1972).
//!
//! The engine consumes already-parsed tables — a [`data::bins::BinTable`]
//! diameter scale and a [`data::sample::SampleMatrix`] of per-sample volume
//! vectors — and performs no file I/O. Spreadsheet parsing, plotting and
//! file export are external collaborators; the engine hands them plain
//! numeric records ([`stats::engine::StatisticsRecord`],
//! [`stats::aggregate::AggregateCurves`], [`export::ExportTable`]).

pub mod classify;
pub mod data;
pub mod error;
pub mod export;
pub mod stats;

pub use data::bins::{BinRow, BinTable};
pub use data::cumulative::CumulativeCurve;
pub use data::grid::RawGrid;
pub use data::sample::{sample_name_from_path, SampleMatrix};
pub use error::GrainError;
pub use stats::aggregate::AggregateCurves;
pub use stats::engine::{
    mean_statistics, sample_statistics, summarize, ModeSlot, StatisticsRecord,
};
pub use stats::peaks::DEFAULT_PROMINENCE;
