//! Rendering and journey logging for finished or in-flight runs.
//!
//! The simulation core only produces values; everything here is the
//! collaborator side: turning tick reports into console text and, when
//! asked, writing the whole run as a JSON journey log.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::engine::{RunOutcome, RunSummary, TickReport};
use crate::planning;

/// The per-hour console block: hour header, route description, advisories.
pub fn render_tick(report: &TickReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Hour {}:", report.hour);
    let _ = write!(out, "{}", planning::describe_route(&report.navigation));
    for advisory in &report.advisories {
        let _ = write!(out, "\n{advisory}");
    }
    out
}

/// Arrival is announced; an exhausted horizon ends the run silently.
pub fn render_outcome(outcome: &RunOutcome) -> Option<String> {
    match outcome {
        RunOutcome::Arrived { hour } => {
            Some(format!("Arrived at the destination in hour {hour}."))
        }
        RunOutcome::Exhausted => None,
    }
}

#[derive(Serialize)]
struct JourneyLog<'a> {
    mission: &'a str,
    recorded_at: String,
    outcome: &'a RunOutcome,
    hours_driven: usize,
    ticks: &'a [TickReport],
}

/// Writes one pretty-printed JSON document per run under
/// `<output_dir>/<mission>/journey.json`.
pub struct JourneyLogWriter {
    output_dir: PathBuf,
}

impl JourneyLogWriter {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    pub fn write(&self, mission_name: &str, summary: &RunSummary) -> Result<PathBuf> {
        let log = JourneyLog {
            mission: mission_name,
            recorded_at: Utc::now().to_rfc3339(),
            outcome: &summary.outcome,
            hours_driven: summary.reports.len(),
            ticks: &summary.reports,
        };
        let dir = self.output_dir.join(mission_name);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create journey log dir {}", dir.display()))?;
        let path = dir.join("journey.json");
        let json = serde_json::to_string_pretty(&log).context("Failed to serialize journey log")?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write journey log {}", path.display()))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::NavigationState;
    use crate::perception::{CameraClassification, LidarClassification};
    use crate::planning::Advisory;

    fn report() -> TickReport {
        TickReport {
            hour: 3,
            navigation: NavigationState::new(40.0, -75.0, 40.1, -74.9).unwrap(),
            camera: CameraClassification::Pedestrian,
            lidar: LidarClassification::LargeObstruction,
            advisories: vec![
                Advisory::AvoidDetectedObject(CameraClassification::Pedestrian),
                Advisory::AdjustForRoadConditions(LidarClassification::LargeObstruction),
            ],
        }
    }

    #[test]
    fn tick_block_lists_header_route_then_advisories() {
        let text = render_tick(&report());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Hour 3:");
        assert!(lines[1].starts_with("Driving from"));
        assert!(lines[2].contains("pedestrian"));
        assert!(lines[3].contains("large obstruction"));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn exhaustion_renders_nothing() {
        assert!(render_outcome(&RunOutcome::Exhausted).is_none());
        let arrival = render_outcome(&RunOutcome::Arrived { hour: 5 }).unwrap();
        assert!(arrival.contains("hour 5"));
    }
}
