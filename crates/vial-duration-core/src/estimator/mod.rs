//! Closed-form vial duration estimator.
//!
//! Boost and night consumption are taken off the vial first as fixed claims.
//! Whatever volume is left is converted into hours at the base rate.
//!
//! No input is range checked. A schedule whose boosts and night dosing exceed
//! the vial produces negative day hours and a negative day consumption; those
//! values are returned as computed so the caller can see the shortfall.

use thiserror::Error;

use crate::models::{PumpSettings, VialEstimate};

/// Estimator errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimateError {
    #[error("Base flow rate is zero; remaining volume cannot be converted to hours")]
    DivisionByZero,
}

pub type EstimateResult<T> = Result<T, EstimateError>;

/// Estimate how long a vial lasts under the given pump settings.
///
/// Fails only when `base_flow_rate` is zero (either sign).
pub fn estimate(settings: &PumpSettings) -> EstimateResult<VialEstimate> {
    if settings.base_flow_rate == 0.0 {
        return Err(EstimateError::DivisionByZero);
    }

    let boost_consumption = settings.boost_flow_rate * f64::from(settings.expected_boosts);
    let mut remaining = settings.vial_amount - boost_consumption;

    let night_consumption = settings.night_flow_rate * settings.night_hours;
    remaining -= night_consumption;

    let day_hours = remaining / settings.base_flow_rate;
    let estimated_hours = day_hours + settings.night_hours;

    // Recomputed from day_hours so a shortfall keeps its sign.
    let day_consumption = day_hours * settings.base_flow_rate;

    tracing::debug!(
        estimated_hours,
        day_hours,
        day_consumption,
        night_consumption,
        boost_consumption,
        "Estimated vial duration"
    );

    let result = VialEstimate {
        estimated_hours,
        day_consumption,
        night_consumption,
        boost_consumption,
    };
    if day_consumption < 0.0 && !result.covers_scheduled_load() {
        tracing::warn!(
            shortfall = -day_consumption,
            "Night and boost consumption exceed vial amount"
        );
    }

    Ok(result)
}

/// Six-argument form of [`estimate`].
pub fn calculate_vial_duration(
    vial_amount: f64,
    base_flow_rate: f64,
    boost_flow_rate: f64,
    night_flow_rate: f64,
    expected_boosts: u32,
    night_hours: f64,
) -> EstimateResult<VialEstimate> {
    estimate(&PumpSettings::new(
        vial_amount,
        base_flow_rate,
        boost_flow_rate,
        night_flow_rate,
        expected_boosts,
        night_hours,
    ))
}
