//! Dose-response risk models.
//!
//! Three competing models map an effective dose (mSv) to a dimensionless
//! relative risk. All three share the same 10 mSv breakpoint; the
//! coefficients are fixed domain constants.

use serde::{Deserialize, Serialize};

use super::DoseError;

/// Relative risk (dimensionless, not a probability).
pub type RiskValue = f64;

/// Dose where the threshold and hormesis models change branch (mSv).
pub const THRESHOLD_DOSE_MSV: f64 = 10.0;

/// Risk slope per mSv shared by every linear branch.
pub const RISK_PER_MSV: f64 = 0.01;

/// Slope of the hormesis branch below the threshold.
pub const HORMESIS_SLOPE: f64 = -0.005;

/// Intercept of the hormesis branch below the threshold.
pub const HORMESIS_INTERCEPT: f64 = 0.05;

/// Default charting grid: number of samples and its upper bound (mSv).
pub const DEFAULT_SAMPLES: usize = 100;
pub const DEFAULT_MAX_DOSE_MSV: f64 = 100.0;

/// Dose-response model variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskModelKind {
    /// Risk proportional to dose, no safe threshold
    LinearNoThreshold,
    /// Zero risk below 10 mSv, linear above
    Threshold,
    /// Low-dose branch below 10 mSv, linear above
    Hormesis,
}

impl RiskModelKind {
    /// Every model, in charting order.
    pub const ALL: [RiskModelKind; 3] = [
        RiskModelKind::LinearNoThreshold,
        RiskModelKind::Threshold,
        RiskModelKind::Hormesis,
    ];

    /// Series label for charts.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::LinearNoThreshold => "Linear No-Threshold (LNT)",
            Self::Threshold => "Threshold Model",
            Self::Hormesis => "Hormesis Model",
        }
    }

    /// One-sentence explanation of the model's assumption.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::LinearNoThreshold => "All exposure carries some risk, no matter how small",
            Self::Threshold => "Below a cutoff dose there is no added risk",
            Self::Hormesis => "Low doses may be beneficial",
        }
    }

    /// Evaluate this model at `dose` (mSv).
    ///
    /// # Errors
    /// Returns `InvalidInput` for a negative or non-finite dose.
    pub fn evaluate(&self, dose: f64) -> Result<RiskValue, DoseError> {
        validate_dose(dose)?;
        Ok(match self {
            Self::LinearNoThreshold => linear_no_threshold(dose),
            Self::Threshold => threshold(dose),
            Self::Hormesis => hormesis(dose),
        })
    }
}

impl std::fmt::Display for RiskModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LinearNoThreshold => write!(f, "LNT"),
            Self::Threshold => write!(f, "Threshold"),
            Self::Hormesis => write!(f, "Hormesis"),
        }
    }
}

fn linear_no_threshold(x: f64) -> RiskValue {
    RISK_PER_MSV * x
}

fn threshold(x: f64) -> RiskValue {
    if x < THRESHOLD_DOSE_MSV {
        0.0
    } else {
        RISK_PER_MSV * (x - THRESHOLD_DOSE_MSV)
    }
}

// The low branch is positive on [0, 10) and meets the upper branch at 0,
// so this formula never yields a negative risk.
fn hormesis(x: f64) -> RiskValue {
    if x < THRESHOLD_DOSE_MSV {
        HORMESIS_SLOPE * x + HORMESIS_INTERCEPT
    } else {
        RISK_PER_MSV * (x - THRESHOLD_DOSE_MSV)
    }
}

fn validate_dose(dose: f64) -> Result<(), DoseError> {
    if !dose.is_finite() {
        return Err(DoseError::InvalidInput(format!(
            "dose must be a finite number of mSv, got {dose}"
        )));
    }
    if dose < 0.0 {
        return Err(DoseError::InvalidInput(format!(
            "dose must be >= 0 mSv, got {dose}"
        )));
    }
    Ok(())
}

/// Evaluate `model` at a single dose.
///
/// # Errors
/// Returns `InvalidInput` for a negative or non-finite dose.
pub fn evaluate(model: RiskModelKind, dose: f64) -> Result<RiskValue, DoseError> {
    model.evaluate(dose)
}

/// Evaluate `model` pointwise over `doses`.
///
/// The output has the same length and order as the input.
///
/// # Errors
/// Returns `InvalidInput` on the first invalid dose; no partial output.
pub fn evaluate_range(model: RiskModelKind, doses: &[f64]) -> Result<Vec<RiskValue>, DoseError> {
    doses.iter().map(|&d| model.evaluate(d)).collect()
}

/// `n` evenly spaced samples from `start` to `stop`, both inclusive.
///
/// Matches numpy's `linspace`: `n == 0` gives an empty vector, `n == 1`
/// gives `[start]`, and the last sample is exactly `stop`.
#[must_use]
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut samples: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            samples[n - 1] = stop;
            samples
        }
    }
}

/// The default charting grid: 100 samples over [0, 100] mSv.
#[must_use]
pub fn default_dose_range() -> Vec<f64> {
    linspace(0.0, DEFAULT_MAX_DOSE_MSV, DEFAULT_SAMPLES)
}

/// The three model curves over a shared dose axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelCurves {
    /// Shared x-axis (mSv)
    pub doses: Vec<f64>,

    #[serde(rename = "LNT")]
    pub lnt: Vec<RiskValue>,

    #[serde(rename = "Threshold")]
    pub threshold: Vec<RiskValue>,

    #[serde(rename = "Hormesis")]
    pub hormesis: Vec<RiskValue>,
}

impl ModelCurves {
    /// Curve for one model.
    #[must_use]
    pub fn series(&self, model: RiskModelKind) -> &[RiskValue] {
        match model {
            RiskModelKind::LinearNoThreshold => &self.lnt,
            RiskModelKind::Threshold => &self.threshold,
            RiskModelKind::Hormesis => &self.hormesis,
        }
    }

    /// Number of samples per curve.
    #[must_use]
    pub fn len(&self) -> usize {
        self.doses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.doses.is_empty()
    }

    /// Lowest and highest risk across all three curves.
    ///
    /// Returns `(0.0, 0.0)` for empty curves.
    #[must_use]
    pub fn risk_bounds(&self) -> (f64, f64) {
        let all = self.lnt.iter().chain(&self.threshold).chain(&self.hormesis);
        let mut bounds: Option<(f64, f64)> = None;
        for &v in all {
            bounds = Some(match bounds {
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
                None => (v, v),
            });
        }
        bounds.unwrap_or((0.0, 0.0))
    }
}

/// Evaluate all three models over `doses`.
///
/// # Errors
/// Returns `InvalidInput` if any dose is negative or non-finite.
pub fn evaluate_models(doses: &[f64]) -> Result<ModelCurves, DoseError> {
    Ok(ModelCurves {
        doses: doses.to_vec(),
        lnt: evaluate_range(RiskModelKind::LinearNoThreshold, doses)?,
        threshold: evaluate_range(RiskModelKind::Threshold, doses)?,
        hormesis: evaluate_range(RiskModelKind::Hormesis, doses)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_lnt_is_proportional() {
        for x in [0.0, 0.5, 9.99, 10.0, 42.0, 100.0] {
            assert_eq!(evaluate(RiskModelKind::LinearNoThreshold, x).unwrap(), 0.01 * x);
        }
        assert_eq!(evaluate(RiskModelKind::LinearNoThreshold, 100.0).unwrap(), 1.0);
    }

    #[test]
    fn test_threshold_branches() {
        assert_eq!(evaluate(RiskModelKind::Threshold, 0.0).unwrap(), 0.0);
        assert_eq!(evaluate(RiskModelKind::Threshold, 9.999).unwrap(), 0.0);
        assert_eq!(evaluate(RiskModelKind::Threshold, 10.0).unwrap(), 0.0);
        assert_eq!(evaluate(RiskModelKind::Threshold, 30.0).unwrap(), 0.01 * (30.0 - 10.0));
        assert!((evaluate(RiskModelKind::Threshold, 60.0).unwrap() - 0.5).abs() < EPS);
    }

    #[test]
    fn test_hormesis_branches() {
        assert!((evaluate(RiskModelKind::Hormesis, 0.0).unwrap() - 0.05).abs() < EPS);
        assert!((evaluate(RiskModelKind::Hormesis, 4.0).unwrap() - 0.03).abs() < EPS);
        assert_eq!(evaluate(RiskModelKind::Hormesis, 10.0).unwrap(), 0.0);
        assert_eq!(evaluate(RiskModelKind::Hormesis, 25.0).unwrap(), 0.01 * (25.0 - 10.0));
    }

    #[test]
    fn test_hormesis_continuous_at_breakpoint() {
        let left_limit = HORMESIS_SLOPE * THRESHOLD_DOSE_MSV + HORMESIS_INTERCEPT;
        let right = evaluate(RiskModelKind::Hormesis, THRESHOLD_DOSE_MSV).unwrap();
        assert!(left_limit.abs() < EPS);
        assert_eq!(right, 0.0);

        let just_below = evaluate(RiskModelKind::Hormesis, THRESHOLD_DOSE_MSV - 1e-9).unwrap();
        assert!(just_below.abs() < 1e-9);
    }

    #[test]
    fn test_hormesis_never_negative() {
        // -0.005x + 0.05 < 0 requires x > 10, outside the branch domain.
        let crossing = -HORMESIS_INTERCEPT / HORMESIS_SLOPE;
        assert!((crossing - THRESHOLD_DOSE_MSV).abs() < EPS);

        for x in default_dose_range() {
            assert!(evaluate(RiskModelKind::Hormesis, x).unwrap() >= 0.0, "negative at {x}");
        }
    }

    #[test]
    fn test_negative_dose_rejected() {
        for model in RiskModelKind::ALL {
            assert!(matches!(model.evaluate(-0.1), Err(DoseError::InvalidInput(_))));
        }
    }

    #[test]
    fn test_non_finite_dose_rejected() {
        assert!(evaluate(RiskModelKind::Threshold, f64::NAN).is_err());
        assert!(evaluate(RiskModelKind::Hormesis, f64::INFINITY).is_err());
    }

    #[test]
    fn test_evaluate_range_pointwise() {
        let doses = [0.0, 5.0, 10.0, 20.0];
        let risks = evaluate_range(RiskModelKind::Threshold, &doses).unwrap();
        assert_eq!(risks.len(), doses.len());
        assert_eq!(risks[3], 0.01 * (20.0 - 10.0));

        assert!(evaluate_range(RiskModelKind::Threshold, &[1.0, -2.0, 3.0]).is_err());
        assert!(evaluate_range(RiskModelKind::Hormesis, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_linspace_endpoints() {
        let grid = linspace(0.0, 100.0, 100);
        assert_eq!(grid.len(), 100);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[99], 100.0);
        assert!((grid[1] - 100.0 / 99.0).abs() < EPS);

        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
    }

    #[test]
    fn test_evaluate_models_default_range() {
        let curves = evaluate_models(&default_dose_range()).unwrap();
        assert_eq!(curves.len(), 100);
        assert_eq!(curves.lnt.len(), 100);
        assert_eq!(curves.threshold.len(), 100);
        assert_eq!(curves.hormesis.len(), 100);
        assert_eq!(curves.doses[0], 0.0);
        assert_eq!(curves.doses[99], 100.0);
        assert_eq!(curves.lnt[99], 1.0);
        assert_eq!(curves.series(RiskModelKind::Hormesis), curves.hormesis.as_slice());
    }

    #[test]
    fn test_risk_bounds() {
        let curves = evaluate_models(&default_dose_range()).unwrap();
        let (lo, hi) = curves.risk_bounds();
        assert_eq!(lo, 0.0);
        assert_eq!(hi, 1.0);

        let empty = evaluate_models(&[]).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.risk_bounds(), (0.0, 0.0));
    }

    #[test]
    fn test_curves_serialize_with_model_keys() {
        let curves = evaluate_models(&[0.0, 20.0]).unwrap();
        let value = serde_json::to_value(&curves).unwrap();
        assert!(value.get("LNT").is_some());
        assert!(value.get("Threshold").is_some());
        assert!(value.get("Hormesis").is_some());
        assert_eq!(value["doses"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_model_display() {
        assert_eq!(RiskModelKind::LinearNoThreshold.to_string(), "LNT");
        assert_eq!(RiskModelKind::Hormesis.label(), "Hormesis Model");
    }
}
