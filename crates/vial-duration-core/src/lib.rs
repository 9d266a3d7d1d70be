//! Vial Duration Core Library
//!
//! Estimates how long a vial of infused medication lasts on a pump, given the
//! programmed base and night rates, a night window and an expected number of
//! boosts.
//!
//! # Allocation
//!
//! ```text
//!   vial_amount
//!       │
//!       ├── boost_flow_rate × expected_boosts   (fixed claim)
//!       ├── night_flow_rate × night_hours       (fixed claim)
//!       │
//!       ▼
//!   remaining ── ÷ base_flow_rate ──▶ day_hours
//!
//!   estimated_hours = day_hours + night_hours
//! ```
//!
//! # Modules
//!
//! - [`models`]: Input settings and result types
//! - [`estimator`]: The duration formula
//! - [`comparison`]: Deltas between successive estimates (caller-held)
//! - [`export`]: JSON and CSV reports

pub mod comparison;
pub mod estimator;
pub mod export;
pub mod models;

// Re-export commonly used types
pub use comparison::DeltaTracker;
pub use estimator::{calculate_vial_duration, estimate, EstimateError, EstimateResult};
pub use export::{BatchEstimateReport, EstimateReport};
pub use models::{EstimateDelta, PumpSettings, VialEstimate};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum VialDurationError {
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<EstimateError> for VialDurationError {
    fn from(e: EstimateError) -> Self {
        match e {
            EstimateError::DivisionByZero => VialDurationError::DivisionByZero(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for VialDurationError {
    fn from(e: serde_json::Error) -> Self {
        VialDurationError::SerializationError(e.to_string())
    }
}

impl From<export::ExportError> for VialDurationError {
    fn from(e: export::ExportError) -> Self {
        match e {
            export::ExportError::Estimate(inner) => inner.into(),
            export::ExportError::Serialization(inner) => inner.into(),
        }
    }
}

// =========================================================================
// Exported Functions
// =========================================================================

/// Estimate vial duration for the given pump settings.
#[uniffi::export]
pub fn estimate_vial_duration(
    settings: FfiPumpSettings,
) -> Result<FfiVialEstimate, VialDurationError> {
    let result = estimate(&settings.into())?;
    Ok(result.into())
}

/// Change from a previous estimate, or `None` if there is no previous one.
#[uniffi::export]
pub fn compare_estimates(
    current: FfiVialEstimate,
    previous: Option<FfiVialEstimate>,
) -> Option<FfiEstimateDelta> {
    let current: VialEstimate = current.into();
    let previous: Option<VialEstimate> = previous.map(Into::into);
    comparison::compare(&current, previous.as_ref()).map(Into::into)
}

/// Starting values of the calculator form.
#[uniffi::export]
pub fn default_pump_settings() -> FfiPumpSettings {
    PumpSettings::default().into()
}

/// Estimate and export as JSON.
#[uniffi::export]
pub fn export_estimate_json(settings: FfiPumpSettings) -> Result<String, VialDurationError> {
    let report = EstimateReport::generate(settings.into())?;
    Ok(report.to_json()?)
}

/// Estimate and export as CSV.
#[uniffi::export]
pub fn export_estimate_csv(settings: FfiPumpSettings) -> Result<String, VialDurationError> {
    let report = EstimateReport::generate(settings.into())?;
    Ok(report.to_csv())
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe pump settings.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPumpSettings {
    pub vial_amount: f64,
    pub base_flow_rate: f64,
    pub boost_flow_rate: f64,
    pub night_flow_rate: f64,
    pub expected_boosts: u32,
    pub night_hours: f64,
}

impl From<PumpSettings> for FfiPumpSettings {
    fn from(s: PumpSettings) -> Self {
        Self {
            vial_amount: s.vial_amount,
            base_flow_rate: s.base_flow_rate,
            boost_flow_rate: s.boost_flow_rate,
            night_flow_rate: s.night_flow_rate,
            expected_boosts: s.expected_boosts,
            night_hours: s.night_hours,
        }
    }
}

impl From<FfiPumpSettings> for PumpSettings {
    fn from(s: FfiPumpSettings) -> Self {
        PumpSettings {
            vial_amount: s.vial_amount,
            base_flow_rate: s.base_flow_rate,
            boost_flow_rate: s.boost_flow_rate,
            night_flow_rate: s.night_flow_rate,
            expected_boosts: s.expected_boosts,
            night_hours: s.night_hours,
        }
    }
}

/// FFI-safe estimate.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiVialEstimate {
    pub estimated_hours: f64,
    pub day_consumption: f64,
    pub night_consumption: f64,
    pub boost_consumption: f64,
}

impl From<VialEstimate> for FfiVialEstimate {
    fn from(e: VialEstimate) -> Self {
        Self {
            estimated_hours: e.estimated_hours,
            day_consumption: e.day_consumption,
            night_consumption: e.night_consumption,
            boost_consumption: e.boost_consumption,
        }
    }
}

impl From<FfiVialEstimate> for VialEstimate {
    fn from(e: FfiVialEstimate) -> Self {
        VialEstimate {
            estimated_hours: e.estimated_hours,
            day_consumption: e.day_consumption,
            night_consumption: e.night_consumption,
            boost_consumption: e.boost_consumption,
        }
    }
}

/// FFI-safe estimate delta.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiEstimateDelta {
    pub estimated_hours: f64,
    pub day_consumption: f64,
    pub night_consumption: f64,
    pub boost_consumption: f64,
}

impl From<EstimateDelta> for FfiEstimateDelta {
    fn from(d: EstimateDelta) -> Self {
        Self {
            estimated_hours: d.estimated_hours,
            day_consumption: d.day_consumption,
            night_consumption: d.night_consumption,
            boost_consumption: d.boost_consumption,
        }
    }
}
