//! Exposure service: The calls a presentation layer makes into the core.
//!
//! - reference table, read once to draw the comparison chart
//! - model curves, evaluated once (or on demand) over a dose grid
//! - personal total, recomputed on every calculator input change

use serde::Serialize;

use crate::domain::{
    self, linspace, ActivityKind, DoseError, ExposureRecord, ModelCurves, RiskModelKind, RiskValue,
    TotalDose, UnitDoseTable, DEFAULT_MAX_DOSE_MSV,
};
use crate::RadscopeError;

/// Calculator inputs together with their result.
#[derive(Debug, Clone, Serialize)]
pub struct PersonalDoseSummary {
    pub flights: i64,
    pub chest_xrays: i64,
    pub total_msv: TotalDose,
    pub message: String,
}

/// One activity's share of the personal total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActivityDose {
    pub kind: ActivityKind,
    pub count: i64,
    pub unit_dose_msv: f64,
    pub dose: TotalDose,
}

/// Snapshot of everything the explorer displays.
#[derive(Debug, Clone, Serialize)]
pub struct DoseReport {
    pub reference_table: Vec<ExposureRecord>,
    pub models: ModelCurves,
    pub personal: PersonalDoseSummary,
}

impl DoseReport {
    /// Serialize the report as JSON.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_json(&self, pretty: bool) -> Result<String, RadscopeError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// Service wrapping the dose computations.
///
/// Holds only the per-unit dose table; every call is a pure function of
/// its arguments.
#[derive(Debug, Clone, Default)]
pub struct ExposureService {
    unit_doses: UnitDoseTable,
}

impl ExposureService {
    /// Create a service using the built-in per-unit doses.
    #[must_use]
    pub fn new() -> Self {
        Self::with_unit_doses(UnitDoseTable::standard())
    }

    /// Create a service with a custom per-unit dose table.
    #[must_use]
    pub fn with_unit_doses(unit_doses: UnitDoseTable) -> Self {
        Self { unit_doses }
    }

    /// The fixed reference dose table.
    #[must_use]
    pub fn reference_table(&self) -> &'static [ExposureRecord] {
        domain::all_records()
    }

    /// Evaluate all three models over `doses`.
    ///
    /// # Errors
    /// Returns error if any dose is negative or non-finite.
    pub fn evaluate_models(&self, doses: &[f64]) -> Result<ModelCurves, RadscopeError> {
        let curves = domain::evaluate_models(doses)?;
        tracing::debug!("Evaluated dose-response models over {} samples", curves.len());
        Ok(curves)
    }

    /// Model curves over `samples` evenly spaced doses in [0, 100] mSv.
    ///
    /// # Errors
    /// Never fails for the built-in grid; kept fallible to match
    /// [`ExposureService::evaluate_models`].
    pub fn curves(&self, samples: usize) -> Result<ModelCurves, RadscopeError> {
        self.evaluate_models(&linspace(0.0, DEFAULT_MAX_DOSE_MSV, samples))
    }

    /// Risk under each model at a single dose, in charting order.
    ///
    /// # Errors
    /// Returns error for a negative or non-finite dose.
    pub fn risks_at(&self, dose: f64) -> Result<Vec<(RiskModelKind, RiskValue)>, RadscopeError> {
        RiskModelKind::ALL
            .into_iter()
            .map(|model| -> Result<_, RadscopeError> {
                Ok((model, domain::evaluate(model, dose)?))
            })
            .collect()
    }

    /// Annual dose from flights and chest X-rays.
    ///
    /// # Errors
    /// Returns error if either count is negative.
    pub fn compute_total_dose(&self, flights: i64, chest_xrays: i64) -> Result<TotalDose, RadscopeError> {
        self.total_dose([
            (ActivityKind::Flight.key(), flights),
            (ActivityKind::ChestXray.key(), chest_xrays),
        ])
    }

    /// Annual dose from arbitrary activity counts.
    ///
    /// # Errors
    /// Returns error for unknown activity keys or negative counts.
    pub fn total_dose<K, I>(&self, counts: I) -> Result<TotalDose, RadscopeError>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, i64)>,
    {
        let total = self.unit_doses.total_dose(counts).map_err(|e| {
            tracing::warn!("Rejected dose calculator input: {}", e);
            e
        })?;
        tracing::debug!("Computed personal dose: {}", total);
        Ok(total)
    }

    /// Per-activity doses for `counts`, in input order.
    ///
    /// # Errors
    /// Returns error for an activity missing from the unit dose table or a
    /// negative count.
    pub fn activity_breakdown(
        &self,
        counts: &[(ActivityKind, i64)],
    ) -> Result<Vec<ActivityDose>, RadscopeError> {
        counts
            .iter()
            .map(|&(kind, count)| -> Result<_, RadscopeError> {
                let unit_dose_msv = self
                    .unit_doses
                    .unit_dose(kind.key())
                    .ok_or_else(|| DoseError::UnknownActivityKind(kind.key().to_string()))?;
                let dose = self.unit_doses.total_dose([(kind, count)])?;
                Ok(ActivityDose {
                    kind,
                    count,
                    unit_dose_msv,
                    dose,
                })
            })
            .collect()
    }

    /// Build the full report for the given calculator inputs.
    ///
    /// # Errors
    /// Returns error if a count is negative.
    pub fn report(&self, flights: i64, chest_xrays: i64, samples: usize) -> Result<DoseReport, RadscopeError> {
        let total = self.compute_total_dose(flights, chest_xrays)?;
        let report = DoseReport {
            reference_table: self.reference_table().to_vec(),
            models: self.curves(samples)?,
            personal: PersonalDoseSummary {
                flights,
                chest_xrays,
                total_msv: total,
                message: total.summary_line(),
            },
        };

        tracing::info!(
            "Built dose report: {} reference sources, {} model samples, personal total {}",
            report.reference_table.len(),
            report.models.len(),
            total
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_table() {
        let service = ExposureService::new();
        assert_eq!(service.reference_table().len(), 8);
    }

    #[test]
    fn test_default_curves() {
        let service = ExposureService::new();
        let curves = service.curves(100).expect("Should evaluate");

        assert_eq!(curves.len(), 100);
        assert_eq!(curves.doses[0], 0.0);
        assert_eq!(curves.doses[99], 100.0);
        assert_eq!(curves.lnt[99], 1.0);
    }

    #[test]
    fn test_negative_dose_propagates() {
        let service = ExposureService::new();
        let err = service.evaluate_models(&[1.0, -1.0]).unwrap_err();
        assert!(matches!(err, RadscopeError::Dose(DoseError::InvalidInput(_))));
        assert!(service.risks_at(-5.0).is_err());
    }

    #[test]
    fn test_risks_at_threshold() {
        let service = ExposureService::new();
        let risks = service.risks_at(10.0).expect("Should evaluate");

        assert_eq!(risks.len(), 3);
        assert_eq!(risks[0], (RiskModelKind::LinearNoThreshold, 0.1));
        assert_eq!(risks[1], (RiskModelKind::Threshold, 0.0));
        assert_eq!(risks[2], (RiskModelKind::Hormesis, 0.0));
    }

    #[test]
    fn test_compute_total_dose() {
        let service = ExposureService::new();
        let total = service.compute_total_dose(5, 1).expect("Should compute");
        assert_eq!(total.to_string(), "0.30 mSv");

        let err = service.compute_total_dose(-1, 1).unwrap_err();
        assert!(matches!(err, RadscopeError::Dose(DoseError::InvalidInput(_))));
    }

    #[test]
    fn test_unknown_activity_propagates() {
        let service = ExposureService::new();
        let err = service.total_dose([("mammogram", 1)]).unwrap_err();
        assert!(matches!(err, RadscopeError::Dose(DoseError::UnknownActivityKind(_))));
    }

    #[test]
    fn test_custom_unit_doses() {
        let table = UnitDoseTable::standard()
            .with_activity("mammogram", 0.4)
            .expect("Should extend");
        let service = ExposureService::with_unit_doses(table);
        let total = service.total_dose([("mammogram", 2)]).expect("Should compute");
        assert!((total.msv() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_activity_breakdown() {
        let service = ExposureService::new();
        let parts = service
            .activity_breakdown(&[(ActivityKind::Flight, 5), (ActivityKind::ChestXray, 1)])
            .expect("Should compute");

        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].kind, ActivityKind::Flight);
        assert_eq!(parts[0].unit_dose_msv, 0.04);
        assert_eq!(parts[0].dose.to_string(), "0.20 mSv");
        assert_eq!(parts[1].dose.to_string(), "0.10 mSv");

        let err = service
            .activity_breakdown(&[(ActivityKind::ChestXray, -2)])
            .unwrap_err();
        assert!(matches!(err, RadscopeError::Dose(DoseError::InvalidInput(_))));
    }

    #[test]
    fn test_report() {
        let service = ExposureService::new();
        let report = service.report(50, 10, 100).expect("Should build report");

        assert_eq!(report.reference_table.len(), 8);
        assert_eq!(report.models.len(), 100);
        assert_eq!(report.personal.flights, 50);
        assert_eq!(
            report.personal.message,
            "Your estimated annual radiation dose from selected activities: 3.00 mSv"
        );

        let json: serde_json::Value =
            serde_json::from_str(&report.to_json(false).expect("Should serialize"))
                .expect("Should parse");
        assert_eq!(json["models"]["LNT"].as_array().map(Vec::len), Some(100));
        assert_eq!(json["reference_table"][6]["doseMSv"], 70.0);
        let total = json["personal"]["total_msv"].as_f64().expect("Should be a number");
        assert!((total - 3.0).abs() < 1e-12);
    }
}
