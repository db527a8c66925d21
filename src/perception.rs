//! Deterministic mock perception and dead-reckoning navigation.
//!
//! Both sensor channels are driven by a single cycle counter: the camera
//! walks its six classifications in declaration order, the lidar collapses
//! the same counter onto three road conditions. Position is advanced by a
//! flat-earth small-angle integrator.

use std::fmt;

use serde::Serialize;

use crate::nav::NavigationState;

/// Kilometers around the (spherical, flat-earth-approximated) globe. One
/// degree of latitude or longitude corresponds to `EARTH_CIRCUMFERENCE_KM /
/// 180.0` kilometers under this model.
pub const EARTH_CIRCUMFERENCE_KM: f64 = 40_040.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CameraClassification {
    None,
    Vehicle,
    Pedestrian,
    Bicycle,
    Stoplight,
    SpeedLimit,
}

impl fmt::Display for CameraClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CameraClassification::None => "nothing",
            CameraClassification::Vehicle => "a vehicle",
            CameraClassification::Pedestrian => "a pedestrian",
            CameraClassification::Bicycle => "a bicycle",
            CameraClassification::Stoplight => "a stoplight",
            CameraClassification::SpeedLimit => "a speed limit sign",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LidarClassification {
    RoadCurvature,
    SmallObstruction,
    LargeObstruction,
}

impl fmt::Display for LidarClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LidarClassification::RoadCurvature => "road curvature",
            LidarClassification::SmallObstruction => "a small obstruction",
            LidarClassification::LargeObstruction => "a large obstruction",
        };
        f.write_str(label)
    }
}

/// Classification for both channels at a given cycle index. Pure and total;
/// periodic with period 6.
pub fn classify(cycle_index: u64) -> (CameraClassification, LidarClassification) {
    let phase = cycle_index % 6;
    let camera = match phase {
        0 => CameraClassification::None,
        1 => CameraClassification::Vehicle,
        2 => CameraClassification::Pedestrian,
        3 => CameraClassification::Bicycle,
        4 => CameraClassification::Stoplight,
        _ => CameraClassification::SpeedLimit,
    };
    // residues {0,3} / {1,4} / {2,5} pair up under mod 3
    let lidar = match phase % 3 {
        0 => LidarClassification::RoadCurvature,
        1 => LidarClassification::SmallObstruction,
        _ => LidarClassification::LargeObstruction,
    };
    (camera, lidar)
}

/// One dead-reckoning step: displace the current position by the distance
/// covered in one tick at `speed_kmh` on the fixed `heading_degrees`
/// (clockwise from north). Small-angle flat-earth update; coordinates may
/// legally drift outside [-90, 90] / [-180, 180] and are not clamped.
pub fn integrate(
    state: &NavigationState,
    speed_kmh: f64,
    heading_degrees: f64,
) -> NavigationState {
    let heading = heading_degrees.to_radians();
    let delta_longitude = 180.0 * speed_kmh * heading.sin() / EARTH_CIRCUMFERENCE_KM;
    let delta_latitude = 180.0 * speed_kmh * heading.cos() / EARTH_CIRCUMFERENCE_KM;
    state.displaced(delta_latitude, delta_longitude)
}

/// Owner of the perception cycle counter. Advancing is an explicit,
/// value-returning operation so the orchestrator's handling of the counter
/// stays visible in the control flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerceptionCycle {
    cycle_index: u64,
}

impl PerceptionCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cycle_index(&self) -> u64 {
        self.cycle_index
    }

    /// Classifications for the cycle's current index.
    pub fn observe(&self) -> (CameraClassification, LidarClassification) {
        classify(self.cycle_index)
    }

    pub fn advanced(self) -> Self {
        Self {
            cycle_index: self.cycle_index + 1,
        }
    }
}
