//! Domain layer: Reference doses, dose-response models and personal
//! dose aggregation.
//!
//! Everything here is pure: constant tables and stateless functions,
//! safe to call from any thread without coordination.

mod activity;
mod dose_response;
mod error;
mod exposure;

pub use activity::{
    compute_total_dose, ActivityKind, TotalDose, UnitDoseTable, CHEST_XRAY_DOSE_MSV,
    FLIGHT_DOSE_MSV,
};
pub use dose_response::{
    default_dose_range, evaluate, evaluate_models, evaluate_range, linspace, ModelCurves,
    RiskModelKind, RiskValue, DEFAULT_MAX_DOSE_MSV, DEFAULT_SAMPLES, THRESHOLD_DOSE_MSV,
};
pub use error::DoseError;
pub use exposure::{all_records, find_record, max_reference_dose, ExposureRecord};
