//! Estimate result models.

use serde::{Deserialize, Serialize};

/// Relative slack for rounding left over when the claims use up the whole vial.
const COVERAGE_TOLERANCE: f64 = 1e-12;

/// Predicted lifetime of a vial and where its volume goes.
///
/// Serializes to a flat map keyed `estimated_hours`, `day_consumption`,
/// `night_consumption`, `boost_consumption`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct VialEstimate {
    /// Total predicted vial lifetime (hours)
    #[serde(with = "super::float_repr")]
    pub estimated_hours: f64,
    /// Volume consumed at the base rate (ml)
    #[serde(with = "super::float_repr")]
    pub day_consumption: f64,
    /// Volume consumed at the night rate (ml)
    #[serde(with = "super::float_repr")]
    pub night_consumption: f64,
    /// Volume consumed by boosts (ml)
    #[serde(with = "super::float_repr")]
    pub boost_consumption: f64,
}

/// Field-wise change between two estimates (`current - previous`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EstimateDelta {
    /// Change in predicted vial lifetime (hours)
    #[serde(with = "super::float_repr")]
    pub estimated_hours: f64,
    /// Change in base-rate consumption (ml)
    #[serde(with = "super::float_repr")]
    pub day_consumption: f64,
    /// Change in night-rate consumption (ml)
    #[serde(with = "super::float_repr")]
    pub night_consumption: f64,
    /// Change in boost consumption (ml)
    #[serde(with = "super::float_repr")]
    pub boost_consumption: f64,
}

impl VialEstimate {
    /// Sum of day, night and boost consumption.
    ///
    /// Equals the vial amount (up to rounding) for any positive base rate.
    pub fn total_consumption(&self) -> f64 {
        self.day_consumption + self.night_consumption + self.boost_consumption
    }

    /// Whether the vial holds enough for the night window and boosts.
    ///
    /// A negative day consumption means the fixed claims exceed the vial.
    /// Rounding residue from a vial that is claimed exactly is ignored; the
    /// slack scales with the volumes involved.
    pub fn covers_scheduled_load(&self) -> bool {
        let scale = self.day_consumption.abs()
            + self.night_consumption.abs()
            + self.boost_consumption.abs();
        self.day_consumption >= -COVERAGE_TOLERANCE * scale
    }

    /// Change from a previous estimate to this one.
    pub fn delta_since(&self, previous: &VialEstimate) -> EstimateDelta {
        EstimateDelta {
            estimated_hours: self.estimated_hours - previous.estimated_hours,
            day_consumption: self.day_consumption - previous.day_consumption,
            night_consumption: self.night_consumption - previous.night_consumption,
            boost_consumption: self.boost_consumption - previous.boost_consumption,
        }
    }
}
