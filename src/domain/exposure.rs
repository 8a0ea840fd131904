//! Reference doses from common exposure sources.
//!
//! The table is compiled-in constant data: eight named sources with their
//! effective dose in millisieverts (mSv). It is read once by the
//! presentation layer to draw the comparison chart.

use serde::Serialize;

/// A named exposure source and its effective dose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExposureRecord {
    /// Source label, unique within the table
    pub name: &'static str,

    /// Effective dose in mSv (always > 0)
    #[serde(rename = "doseMSv")]
    pub dose_msv: f64,
}

impl ExposureRecord {
    const fn new(name: &'static str, dose_msv: f64) -> Self {
        Self { name, dose_msv }
    }
}

/// Number of entries in the reference table.
const REFERENCE_COUNT: usize = 8;

/// Reference doses, in display order.
pub const REFERENCE_DOSES: [ExposureRecord; REFERENCE_COUNT] = [
    ExposureRecord::new("Background Radiation (Annual Avg)", 3.0),
    ExposureRecord::new("Chest X-ray", 0.1),
    ExposureRecord::new("Dental X-ray", 0.005),
    ExposureRecord::new("Mammogram", 0.4),
    ExposureRecord::new("CT Scan (Abdomen)", 8.0),
    ExposureRecord::new("Flight (NYC to LA)", 0.04),
    ExposureRecord::new("Smoking (1 pack/day, Annual)", 70.0),
    ExposureRecord::new("Fukushima Evacuation Zone (Annual)", 12.0),
];

/// All reference records in their fixed order.
#[must_use]
pub fn all_records() -> &'static [ExposureRecord] {
    &REFERENCE_DOSES
}

/// Look up a record by its exact name.
#[must_use]
pub fn find_record(name: &str) -> Option<&'static ExposureRecord> {
    REFERENCE_DOSES.iter().find(|r| r.name == name)
}

/// Largest dose in the table (used to scale charts).
#[must_use]
pub fn max_reference_dose() -> f64 {
    REFERENCE_DOSES
        .iter()
        .map(|r| r.dose_msv)
        .fold(0.0, f64::max)
}
