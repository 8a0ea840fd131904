//! # Radscope
//!
//! Comparative radiation-dose explorer.
//!
//! This crate provides:
//! - A fixed table of reference doses from common activities
//! - Three dose-response risk models (LNT, Threshold, Hormesis)
//! - A personal exposure calculator aggregating activity counts into an annual dose
//! - Terminal UI presenting all three
//!
//! ## Architecture
//!
//! - `domain`: Constant dose tables and pure model/aggregation functions
//! - `application`: The call contracts consumed by presentation layers
//! - `tui`: Terminal user interface

pub mod application;
pub mod domain;
pub mod tui;

pub use domain::{DoseError, ExposureRecord, ModelCurves, RiskModelKind, TotalDose};

/// Result type for Radscope operations
pub type Result<T> = std::result::Result<T, RadscopeError>;

/// Main error type for Radscope
#[derive(Debug, thiserror::Error)]
pub enum RadscopeError {
    #[error("Dose computation failed: {0}")]
    Dose(#[from] domain::DoseError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
