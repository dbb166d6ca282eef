use thiserror::Error;

// ---------------------------------------------------------------------------
// Engine error taxonomy
// ---------------------------------------------------------------------------

/// Errors surfaced by the statistics engine.
///
/// Classification lookups never error: a scalar outside every band yields an
/// explicit `None` label instead (classification is advisory text).
#[derive(Debug, Error)]
pub enum GrainError {
    /// The parsed grid handed over by the ingestion side does not match the
    /// expected instrument layout. Not recoverable here; surfaced to the
    /// caller so the offending source file can be inspected.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A sample has no bin with a positive volume percentage, so none of its
    /// statistics can be derived. Per-sample: the rest of the batch proceeds.
    #[error("sample '{0}' has no positive-volume bin")]
    EmptySample(String),

    /// Aggregate statistics (mean curve, confidence band) need at least two
    /// samples.
    #[error("aggregate statistics need at least 2 samples, got {0}")]
    InsufficientSamples(usize),
}

pub type Result<T> = std::result::Result<T, GrainError>;
