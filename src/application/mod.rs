//! Application layer: Use cases and services.
//!
//! This module exposes the domain computations through the contracts a
//! presentation layer calls: the reference table, the model curves and
//! the personal dose total.

mod explorer;

pub use explorer::{ActivityDose, DoseReport, ExposureService, PersonalDoseSummary};
