//! Pump settings supplied by the caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings loading errors.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// The six programmed pump parameters an estimate is computed from.
///
/// No range checking happens here. Negative or oversized values are passed
/// through to the estimator untouched; range limits belong to whatever form
/// collects them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PumpSettings {
    /// Medication volume loaded into the pump (ml)
    #[serde(with = "super::float_repr")]
    pub vial_amount: f64,
    /// Continuous rate outside the night window (ml/hour)
    #[serde(with = "super::float_repr")]
    pub base_flow_rate: f64,
    /// Volume delivered per boost, treated as instantaneous (ml)
    #[serde(with = "super::float_repr")]
    pub boost_flow_rate: f64,
    /// Continuous rate during the night window (ml/hour)
    #[serde(with = "super::float_repr")]
    pub night_flow_rate: f64,
    /// Number of boosts expected over the life of the vial
    pub expected_boosts: u32,
    /// Length of the single night window (hours)
    #[serde(with = "super::float_repr")]
    pub night_hours: f64,
}

impl Default for PumpSettings {
    /// Starting values of the calculator form.
    fn default() -> Self {
        Self {
            vial_amount: 10.0,
            base_flow_rate: 0.44,
            boost_flow_rate: 0.3,
            night_flow_rate: 0.27,
            expected_boosts: 0,
            night_hours: 8.0,
        }
    }
}

impl PumpSettings {
    /// Create settings from all six parameters.
    pub fn new(
        vial_amount: f64,
        base_flow_rate: f64,
        boost_flow_rate: f64,
        night_flow_rate: f64,
        expected_boosts: u32,
        night_hours: f64,
    ) -> Self {
        Self {
            vial_amount,
            base_flow_rate,
            boost_flow_rate,
            night_flow_rate,
            expected_boosts,
            night_hours,
        }
    }

    /// Load settings from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Copy of these settings with a different boost count.
    pub fn with_boosts(self, expected_boosts: u32) -> Self {
        Self {
            expected_boosts,
            ..self
        }
    }

    /// Copy of these settings with a different night window.
    pub fn with_night_hours(self, night_hours: f64) -> Self {
        Self {
            night_hours,
            ..self
        }
    }
}
