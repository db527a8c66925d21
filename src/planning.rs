//! Route advisories derived from the latest perception classifications.

use std::fmt;

use serde::Serialize;

use crate::nav::NavigationState;
use crate::perception::{CameraClassification, LidarClassification};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Advisory {
    /// The camera saw something on the road.
    AvoidDetectedObject(CameraClassification),
    /// The lidar reported a road condition worth steering around.
    AdjustForRoadConditions(LidarClassification),
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::AvoidDetectedObject(camera) => {
                write!(f, "Adjusting route to avoid {camera}")
            }
            Advisory::AdjustForRoadConditions(lidar) => {
                write!(f, "Adjusting route for {lidar} on the roadway")
            }
        }
    }
}

pub fn describe_route(state: &NavigationState) -> String {
    format!(
        "Driving from ({:.4}, {:.4}) toward ({:.4}, {:.4})",
        state.current_latitude(),
        state.current_longitude(),
        state.destination_latitude(),
        state.destination_longitude(),
    )
}

/// Zero, one, or two advisories; the camera advisory always precedes the
/// lidar advisory when both fire.
pub fn advise(camera: CameraClassification, lidar: LidarClassification) -> Vec<Advisory> {
    let mut advisories = Vec::new();
    if camera != CameraClassification::None {
        advisories.push(Advisory::AvoidDetectedObject(camera));
    }
    if lidar != LidarClassification::RoadCurvature {
        advisories.push(Advisory::AdjustForRoadConditions(lidar));
    }
    advisories
}
