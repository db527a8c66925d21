use log::{debug, info};
use serde::Serialize;

use crate::mission::Mission;
use crate::nav::NavigationState;
use crate::perception::{self, CameraClassification, LidarClassification, PerceptionCycle};
use crate::planning::{self, Advisory};

pub const DEFAULT_HORIZON_HOURS: u32 = 24;

/// Arrival when the planar distance to the destination drops strictly below
/// this value. Degrees and kilometers are mixed on the same scale here; the
/// threshold belongs to the flat-earth model, not to geodesy.
pub const ARRIVAL_THRESHOLD: f64 = 25.0;

/// Everything observable about one simulated hour.
#[derive(Debug, Clone, Serialize)]
pub struct TickReport {
    pub hour: u32,
    pub navigation: NavigationState,
    pub camera: CameraClassification,
    pub lidar: LidarClassification,
    pub advisories: Vec<Advisory>,
}

/// Loop state after each hour. `Arrived` and `Exhausted` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveState {
    Running(u32),
    Arrived(u32),
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunOutcome {
    Arrived { hour: u32 },
    Exhausted,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub outcome: RunOutcome,
    pub final_state: NavigationState,
    pub reports: Vec<TickReport>,
}

/// Composes one tick: dead-reckon the position, read both mock sensors,
/// derive advisories, then advance the perception cycle.
///
/// The cycle counter advances exactly once per tick, after classification,
/// so hour `n` observes index `n - 1` and the sensor signal cycles hourly
/// with period 6.
pub struct DrivingLoopController {
    perception: PerceptionCycle,
    speed_kmh: f64,
    heading_degrees: f64,
}

impl DrivingLoopController {
    pub fn new(speed_kmh: f64, heading_degrees: f64) -> Self {
        Self {
            perception: PerceptionCycle::new(),
            speed_kmh,
            heading_degrees,
        }
    }

    pub fn tick(&mut self, state: &NavigationState, hour: u32) -> (NavigationState, TickReport) {
        let navigation = perception::integrate(state, self.speed_kmh, self.heading_degrees);
        let (camera, lidar) = self.perception.observe();
        let advisories = planning::advise(camera, lidar);
        self.perception = self.perception.advanced();
        let report = TickReport {
            hour,
            navigation,
            camera,
            lidar,
            advisories,
        };
        (navigation, report)
    }
}

/// Runs the controller for up to `horizon_hours` ticks, checking the
/// arrival rule after every tick.
pub struct SimulationDriver {
    controller: DrivingLoopController,
    horizon_hours: u32,
    arrival_threshold: f64,
}

impl SimulationDriver {
    pub fn new(controller: DrivingLoopController, horizon_hours: u32) -> Self {
        Self {
            controller,
            horizon_hours,
            arrival_threshold: ARRIVAL_THRESHOLD,
        }
    }

    pub fn from_mission(mission: &Mission) -> Self {
        Self::new(
            DrivingLoopController::new(mission.speed_kmh, mission.heading_degrees),
            mission.horizon_hours,
        )
    }

    pub fn run(&mut self, state: NavigationState) -> RunSummary {
        self.run_with_hook(state, |_| {})
    }

    /// Runs the full loop, handing each report to `hook` as it is produced.
    /// The hook exists for rendering; the returned summary carries every
    /// report regardless.
    pub fn run_with_hook(
        &mut self,
        mut state: NavigationState,
        mut hook: impl FnMut(&TickReport),
    ) -> RunSummary {
        let mut reports = Vec::new();
        let mut drive = DriveState::Running(0);
        let outcome = loop {
            let hour = match drive {
                DriveState::Running(completed) => completed + 1,
                DriveState::Arrived(hour) => break RunOutcome::Arrived { hour },
                DriveState::Exhausted => break RunOutcome::Exhausted,
            };
            let (next_state, report) = self.controller.tick(&state, hour);
            state = next_state;
            hook(&report);
            reports.push(report);
            let remaining = state.distance_to_destination();
            debug!("hour {hour}: {remaining:.4} from destination");
            drive = advance_drive_state(hour, remaining, self.horizon_hours, self.arrival_threshold);
        };
        match outcome {
            RunOutcome::Arrived { hour } => info!("arrived at destination in hour {hour}"),
            RunOutcome::Exhausted => {
                info!("horizon of {} hours spent without arrival", self.horizon_hours)
            }
        }
        RunSummary {
            outcome,
            final_state: state,
            reports,
        }
    }
}

/// The per-hour transition of the loop state machine. Arrival wins over
/// exhaustion when both conditions hold on the same hour.
fn advance_drive_state(
    hour: u32,
    remaining_distance: f64,
    horizon_hours: u32,
    arrival_threshold: f64,
) -> DriveState {
    if remaining_distance < arrival_threshold {
        DriveState::Arrived(hour)
    } else if hour >= horizon_hours {
        DriveState::Exhausted
    } else {
        DriveState::Running(hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drive_state_transitions() {
        assert_eq!(
            advance_drive_state(3, 100.0, 24, 25.0),
            DriveState::Running(3)
        );
        assert_eq!(
            advance_drive_state(3, 24.9, 24, 25.0),
            DriveState::Arrived(3)
        );
        assert_eq!(
            advance_drive_state(24, 100.0, 24, 25.0),
            DriveState::Exhausted
        );
        // threshold is strict
        assert_eq!(
            advance_drive_state(3, 25.0, 24, 25.0),
            DriveState::Running(3)
        );
        // arrival takes precedence on the final hour
        assert_eq!(
            advance_drive_state(24, 1.0, 24, 25.0),
            DriveState::Arrived(24)
        );
    }

    #[test]
    fn controller_cycles_sensors_hourly() {
        let mut controller = DrivingLoopController::new(10.0, 90.0);
        let state = NavigationState::new(0.0, 0.0, 500.0, 500.0).unwrap();
        let (_, first) = controller.tick(&state, 1);
        assert_eq!(first.camera, CameraClassification::None);
        assert_eq!(first.lidar, LidarClassification::RoadCurvature);
        assert!(first.advisories.is_empty());
        let (_, second) = controller.tick(&state, 2);
        assert_eq!(second.camera, CameraClassification::Vehicle);
        assert_eq!(second.lidar, LidarClassification::SmallObstruction);
        assert_eq!(second.advisories.len(), 2);
    }

    #[test]
    fn controller_reports_integrated_position() {
        let mut controller = DrivingLoopController::new(60.0, 45.0);
        let state = NavigationState::new(40.0, -75.0, 40.1, -74.9).unwrap();
        let (next, report) = controller.tick(&state, 1);
        assert_eq!(next, report.navigation);
        assert!((next.current_latitude() - 40.190728).abs() < 1e-4);
        assert!((next.current_longitude() + 74.809272).abs() < 1e-4);
    }
}
