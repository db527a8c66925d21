use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum NavigationError {
    #[error("coordinate '{name}' must be a finite number, got {value}")]
    NonFiniteCoordinate { name: &'static str, value: f64 },
}

/// Current and destination coordinates for one simulated drive, in degrees.
///
/// The destination is fixed at construction; the current position only
/// changes through the dead-reckoning integrator, which returns a fresh
/// value instead of mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NavigationState {
    current_latitude: f64,
    current_longitude: f64,
    destination_latitude: f64,
    destination_longitude: f64,
}

impl NavigationState {
    pub fn new(
        current_latitude: f64,
        current_longitude: f64,
        destination_latitude: f64,
        destination_longitude: f64,
    ) -> Result<Self, NavigationError> {
        for (name, value) in [
            ("current_latitude", current_latitude),
            ("current_longitude", current_longitude),
            ("destination_latitude", destination_latitude),
            ("destination_longitude", destination_longitude),
        ] {
            if !value.is_finite() {
                return Err(NavigationError::NonFiniteCoordinate { name, value });
            }
        }
        Ok(Self {
            current_latitude,
            current_longitude,
            destination_latitude,
            destination_longitude,
        })
    }

    pub fn current_latitude(&self) -> f64 {
        self.current_latitude
    }

    pub fn current_longitude(&self) -> f64 {
        self.current_longitude
    }

    pub fn destination_latitude(&self) -> f64 {
        self.destination_latitude
    }

    pub fn destination_longitude(&self) -> f64 {
        self.destination_longitude
    }

    pub(crate) fn displaced(&self, delta_latitude: f64, delta_longitude: f64) -> Self {
        Self {
            current_latitude: self.current_latitude + delta_latitude,
            current_longitude: self.current_longitude + delta_longitude,
            ..*self
        }
    }

    /// Planar Euclidean distance to the destination, treating degrees of
    /// latitude and longitude as a flat grid. Not geodesic; the arrival
    /// threshold is defined against this same scale.
    pub fn distance_to_destination(&self) -> f64 {
        let dlat = self.destination_latitude - self.current_latitude;
        let dlon = self.destination_longitude - self.current_longitude;
        (dlat * dlat + dlon * dlon).sqrt()
    }
}
