//! Personal exposure aggregation.
//!
//! Recurring activities (flights, chest X-rays) each carry a fixed
//! per-unit dose. The annual total is the sum of `count * unit dose`
//! over the reported activities.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DoseError;

/// Dose of one NYC to LA flight (mSv).
pub const FLIGHT_DOSE_MSV: f64 = 0.04;

/// Dose of one chest X-ray (mSv).
pub const CHEST_XRAY_DOSE_MSV: f64 = 0.1;

/// Built-in recurring activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// Commercial flight (NYC to LA equivalent)
    Flight,
    /// Diagnostic chest X-ray
    ChestXray,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 2] = [ActivityKind::Flight, ActivityKind::ChestXray];

    /// Stable key used in unit dose tables.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Flight => "flight",
            Self::ChestXray => "chest_xray",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Flight => "Flights per year (NYC to LA equivalent)",
            Self::ChestXray => "Chest X-rays per year",
        }
    }

    /// Fixed per-unit dose in mSv.
    #[must_use]
    pub fn unit_dose_msv(&self) -> f64 {
        match self {
            Self::Flight => FLIGHT_DOSE_MSV,
            Self::ChestXray => CHEST_XRAY_DOSE_MSV,
        }
    }
}

impl AsRef<str> for ActivityKind {
    fn as_ref(&self) -> &str {
        self.key()
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ActivityKind {
    type Err = DoseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| DoseError::UnknownActivityKind(s.to_string()))
    }
}

/// Mapping from activity key to per-unit dose (mSv).
///
/// The aggregation only ever reads this table, so new activities are
/// added with [`UnitDoseTable::with_activity`] without touching
/// [`UnitDoseTable::total_dose`].
///
/// Serialized as a plain `{key: dose}` map. Deserialization applies the
/// same checks as [`UnitDoseTable::with_activity`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct UnitDoseTable {
    entries: BTreeMap<String, f64>,
}

impl TryFrom<BTreeMap<String, f64>> for UnitDoseTable {
    type Error = DoseError;

    fn try_from(entries: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        entries.into_iter().try_fold(
            Self {
                entries: BTreeMap::new(),
            },
            |table, (key, dose)| table.with_activity(key, dose),
        )
    }
}

impl From<UnitDoseTable> for BTreeMap<String, f64> {
    fn from(table: UnitDoseTable) -> Self {
        table.entries
    }
}

impl Default for UnitDoseTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl UnitDoseTable {
    /// The built-in table: flight and chest X-ray.
    #[must_use]
    pub fn standard() -> Self {
        let entries = ActivityKind::ALL
            .into_iter()
            .map(|kind| (kind.key().to_string(), kind.unit_dose_msv()))
            .collect();
        Self { entries }
    }

    /// Add or replace an activity.
    ///
    /// # Errors
    /// Returns `InvalidInput` for an empty key or a negative/non-finite dose.
    pub fn with_activity(mut self, key: impl Into<String>, unit_dose_msv: f64) -> Result<Self, DoseError> {
        let key = key.into();
        if key.is_empty() {
            return Err(DoseError::InvalidInput("activity key must not be empty".to_string()));
        }
        if !unit_dose_msv.is_finite() || unit_dose_msv < 0.0 {
            return Err(DoseError::InvalidInput(format!(
                "unit dose for {key} must be >= 0 mSv, got {unit_dose_msv}"
            )));
        }
        self.entries.insert(key, unit_dose_msv);
        Ok(self)
    }

    /// Per-unit dose for `key`, if known.
    #[must_use]
    pub fn unit_dose(&self, key: &str) -> Option<f64> {
        self.entries.get(key).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum `count * unit dose` over `counts`.
    ///
    /// Repeated keys accumulate.
    ///
    /// # Errors
    /// - `UnknownActivityKind` if a key is not in the table
    /// - `InvalidInput` if a count is negative
    pub fn total_dose<K, I>(&self, counts: I) -> Result<TotalDose, DoseError>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, i64)>,
    {
        let mut total = 0.0;
        for (key, count) in counts {
            let key = key.as_ref();
            let unit = self
                .unit_dose(key)
                .ok_or_else(|| DoseError::UnknownActivityKind(key.to_string()))?;
            if count < 0 {
                return Err(DoseError::InvalidInput(format!(
                    "count for {key} must be >= 0, got {count}"
                )));
            }
            total += count as f64 * unit;
        }
        Ok(TotalDose(total))
    }
}

/// Aggregated annual dose in mSv (full precision).
///
/// Only produced by [`UnitDoseTable::total_dose`], so it is never negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct TotalDose(f64);

impl TotalDose {
    /// Value in mSv.
    #[must_use]
    pub fn msv(&self) -> f64 {
        self.0
    }

    /// The calculator's result sentence, rounded to two decimals.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "Your estimated annual radiation dose from selected activities: {:.2} mSv",
            self.0
        )
    }
}

impl std::fmt::Display for TotalDose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} mSv", self.0)
    }
}

/// Annual dose from `flights` flights and `chest_xrays` chest X-rays.
///
/// # Errors
/// Returns `InvalidInput` if either count is negative.
pub fn compute_total_dose(flights: i64, chest_xrays: i64) -> Result<TotalDose, DoseError> {
    UnitDoseTable::standard().total_dose([
        (ActivityKind::Flight, flights),
        (ActivityKind::ChestXray, chest_xrays),
    ])
}
