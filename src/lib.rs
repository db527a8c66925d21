pub mod engine;
pub mod mission;
pub mod nav;
pub mod perception;
pub mod planning;
pub mod report;

pub use engine::{
    DrivingLoopController, RunOutcome, RunSummary, SimulationDriver, TickReport,
    ARRIVAL_THRESHOLD, DEFAULT_HORIZON_HOURS,
};
pub use mission::{Mission, MissionLoader};
pub use nav::NavigationState;
