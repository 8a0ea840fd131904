//! Error taxonomy for the dose computations.

/// Errors raised by the reference table, the model evaluator and the
/// personal dose aggregator.
///
/// Both variants are local, synchronous failures of a pure computation.
/// Nothing here is retryable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DoseError {
    /// Negative (or non-finite) dose, or negative activity count.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Activity key outside the per-unit dose table.
    #[error("Unknown activity kind: {0}")]
    UnknownActivityKind(String),
}
