//! JSON and CSV reports of vial duration estimates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::estimator::{estimate, EstimateError};
use crate::models::{PumpSettings, VialEstimate};

/// Export errors.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Estimate error: {0}")]
    Estimate(#[from] EstimateError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ExportResult<T> = Result<T, ExportError>;

const CSV_HEADER: &str = "vial_amount,base_flow_rate,boost_flow_rate,night_flow_rate,expected_boosts,night_hours,estimated_hours,day_consumption,night_consumption,boost_consumption";

/// A single estimate together with the settings it was computed from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateReport {
    /// Pump settings used
    pub settings: PumpSettings,
    /// Computed estimate
    pub estimate: VialEstimate,
    /// Calculation timestamp (RFC 3339)
    pub calculated_at: String,
}

impl EstimateReport {
    /// Estimate the given settings and wrap the result in a report.
    pub fn generate(settings: PumpSettings) -> ExportResult<Self> {
        let estimate = estimate(&settings)?;
        Ok(Self::from_estimate(settings, estimate))
    }

    /// Build a report from an already computed estimate.
    pub fn from_estimate(settings: PumpSettings, estimate: VialEstimate) -> Self {
        Self {
            settings,
            estimate,
            calculated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to CSV format.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();
        csv.push_str(CSV_HEADER);
        csv.push('\n');
        csv.push_str(&settings_columns(&self.settings));
        csv.push(',');
        csv.push_str(&estimate_columns(Some(&self.estimate)));
        csv.push('\n');
        csv
    }
}

/// One row of a batch report. Exactly one of `estimate` and `error` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRow {
    pub settings: PumpSettings,
    pub estimate: Option<VialEstimate>,
    pub error: Option<String>,
}

/// Several settings estimated side by side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEstimateReport {
    /// Calculation timestamp (RFC 3339)
    pub calculated_at: String,
    /// One row per input settings, in input order
    pub rows: Vec<EstimateRow>,
    /// Rows that failed to estimate
    pub failed_count: usize,
}

impl BatchEstimateReport {
    /// Estimate every settings entry. Failures are kept as rows instead of
    /// aborting the batch.
    pub fn generate(settings: &[PumpSettings]) -> Self {
        let rows: Vec<EstimateRow> = settings
            .iter()
            .map(|s| match estimate(s) {
                Ok(estimate) => EstimateRow {
                    settings: *s,
                    estimate: Some(estimate),
                    error: None,
                },
                Err(e) => EstimateRow {
                    settings: *s,
                    estimate: None,
                    error: Some(e.to_string()),
                },
            })
            .collect();

        let failed_count = rows.iter().filter(|r| r.error.is_some()).count();

        Self {
            calculated_at: chrono::Utc::now().to_rfc3339(),
            rows,
            failed_count,
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to CSV format. Failed rows carry an error message and empty
    /// estimate columns.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();
        csv.push_str(CSV_HEADER);
        csv.push_str(",error\n");

        for row in &self.rows {
            csv.push_str(&format!(
                "{},{},{}\n",
                settings_columns(&row.settings),
                estimate_columns(row.estimate.as_ref()),
                escape_csv(row.error.as_deref().unwrap_or("")),
            ));
        }

        csv
    }
}

fn settings_columns(settings: &PumpSettings) -> String {
    format!(
        "{},{},{},{},{},{}",
        settings.vial_amount,
        settings.base_flow_rate,
        settings.boost_flow_rate,
        settings.night_flow_rate,
        settings.expected_boosts,
        settings.night_hours,
    )
}

fn estimate_columns(estimate: Option<&VialEstimate>) -> String {
    match estimate {
        Some(e) => format!(
            "{},{},{},{}",
            e.estimated_hours, e.day_consumption, e.night_consumption, e.boost_consumption
        ),
        None => ",,,".to_string(),
    }
}

/// Escape a string for CSV.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
