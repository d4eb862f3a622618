//! Road network components - junction nodes, directed edges and traffic multipliers

use crate::{Error, JunctionId, Minutes, RoadId};

/// Road graph node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JunctionNode {
    /// Externally assigned junction id
    pub id: JunctionId,
}

/// One direction of a road. Every road is stored as two mirrored edges.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadEdge {
    /// Target junction
    pub to: JunctionId,
    /// Physical length in km, informational only
    pub distance: f64,
    /// Nominal travel time in minutes, fixed at insertion
    pub base_time: Minutes,
    /// Travel time used for routing
    pub current_time: Minutes,
    /// Road this edge belongs to, shared with its mirror
    pub road: RoadId,
}

impl RoadEdge {
    pub(crate) fn new(to: JunctionId, distance: f64, base_time: Minutes, road: RoadId) -> Self {
        Self {
            to,
            distance,
            base_time,
            current_time: base_time,
            road,
        }
    }

    pub fn travel_time(&self) -> Minutes {
        self.current_time
    }

    /// Always derived from `base_time`, so repeated updates never compound.
    pub(crate) fn apply_multiplier(&mut self, multiplier: TrafficMultiplier) {
        self.current_time = self.base_time * multiplier.value();
    }

    pub(crate) fn reset(&mut self) {
        self.current_time = self.base_time;
    }
}

/// Congestion severity of a road, `1.0` means clear traffic.
///
/// Only finite values strictly greater than zero can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TrafficMultiplier(f64);

impl TrafficMultiplier {
    pub const CLEAR: Self = Self(1.0);

    /// # Errors
    ///
    /// Returns [`Error::InvalidMultiplier`] for zero, negative, NaN or infinite values
    pub fn new(value: f64) -> Result<Self, Error> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(Error::InvalidMultiplier(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for TrafficMultiplier {
    fn default() -> Self {
        Self::CLEAR
    }
}

impl TryFrom<f64> for TrafficMultiplier {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Check that a road weight can be used by a shortest path search
pub(crate) fn validate_weight(field: &'static str, value: f64) -> Result<(), Error> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidWeight { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_rejects_non_positive_values() {
        for value in [0.0, -0.0, -1.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(
                matches!(
                    TrafficMultiplier::try_from(value),
                    Err(Error::InvalidMultiplier(_))
                ),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn multiplier_accepts_positive_values() {
        assert_eq!(TrafficMultiplier::new(0.5).unwrap().value(), 0.5);
        assert_eq!(TrafficMultiplier::default(), TrafficMultiplier::CLEAR);
    }

    #[test]
    fn multiplier_is_applied_to_base_time() {
        let mut edge = RoadEdge::new(2, 3.5, 8.0, 0);
        let heavy = TrafficMultiplier::new(2.0).unwrap();

        edge.apply_multiplier(heavy);
        edge.apply_multiplier(heavy);
        assert_eq!(edge.current_time, 16.0);
        assert_eq!(edge.base_time, 8.0);

        edge.reset();
        assert_eq!(edge.travel_time(), 8.0);
    }

    #[test]
    fn weights_must_be_finite_and_non_negative() {
        assert!(validate_weight("distance", 0.0).is_ok());
        assert!(validate_weight("distance", 4.2).is_ok());
        assert!(matches!(
            validate_weight("base time", -1.0),
            Err(Error::InvalidWeight {
                field: "base time",
                ..
            })
        ));
        assert!(validate_weight("base time", f64::NAN).is_err());
    }
}
