use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use crate::engine::DEFAULT_HORIZON_HOURS;
use crate::nav::{NavigationError, NavigationState};

fn default_speed_kmh() -> f64 {
    60.0
}

fn default_heading_degrees() -> f64 {
    45.0
}

fn default_horizon_hours() -> u32 {
    DEFAULT_HORIZON_HOURS
}

/// One simulated drive: where it starts, where it is headed, and how the
/// vehicle is driven. Loaded from a YAML mission file.
#[derive(Debug, Clone, Deserialize)]
pub struct Mission {
    pub name: String,
    pub description: Option<String>,
    pub start: Waypoint,
    pub destination: Waypoint,
    #[serde(default = "default_speed_kmh")]
    pub speed_kmh: f64,
    #[serde(default = "default_heading_degrees")]
    pub heading_degrees: f64,
    #[serde(default = "default_horizon_hours")]
    pub horizon_hours: u32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Waypoint {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Error)]
pub enum MissionError {
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    #[error("speed must be finite, got {0}")]
    NonFiniteSpeed(f64),
    #[error("heading must be finite, got {0}")]
    NonFiniteHeading(f64),
    #[error("horizon must be at least one hour")]
    ZeroHorizon,
}

pub struct MissionLoader {
    base_dir: PathBuf,
}

impl MissionLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Mission> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read mission file {}", path.display()))?;
        let mission: Mission = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        mission
            .validate()
            .with_context(|| format!("Invalid mission {}", path.display()))?;
        Ok(mission)
    }
}

impl Mission {
    pub fn validate(&self) -> Result<(), MissionError> {
        self.navigation_state()?;
        if !self.speed_kmh.is_finite() {
            return Err(MissionError::NonFiniteSpeed(self.speed_kmh));
        }
        if !self.heading_degrees.is_finite() {
            return Err(MissionError::NonFiniteHeading(self.heading_degrees));
        }
        if self.horizon_hours == 0 {
            return Err(MissionError::ZeroHorizon);
        }
        Ok(())
    }

    /// Initial navigation state for the run; fails on non-finite coordinates.
    pub fn navigation_state(&self) -> Result<NavigationState, MissionError> {
        let state = NavigationState::new(
            self.start.latitude,
            self.start.longitude,
            self.destination.latitude,
            self.destination.longitude,
        )?;
        Ok(state)
    }

    pub fn horizon(&self, override_hours: Option<u32>) -> u32 {
        override_hours.unwrap_or(self.horizon_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mission() -> Mission {
        Mission {
            name: "test".into(),
            description: None,
            start: Waypoint {
                latitude: 40.0,
                longitude: -75.0,
            },
            destination: Waypoint {
                latitude: 40.1,
                longitude: -74.9,
            },
            speed_kmh: 60.0,
            heading_degrees: 45.0,
            horizon_hours: 24,
        }
    }

    #[test]
    fn parses_minimal_yaml_with_defaults() {
        let yaml = r#"
name: minimal
start:
  latitude: 1.0
  longitude: 2.0
destination:
  latitude: 3.0
  longitude: 4.0
"#;
        let mission: Mission = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(mission.name, "minimal");
        assert_eq!(mission.speed_kmh, 60.0);
        assert_eq!(mission.heading_degrees, 45.0);
        assert_eq!(mission.horizon_hours, 24);
        assert!(mission.validate().is_ok());
    }

    #[test]
    fn rejects_non_finite_fields() {
        let mut bad_speed = mission();
        bad_speed.speed_kmh = f64::NAN;
        assert!(matches!(
            bad_speed.validate(),
            Err(MissionError::NonFiniteSpeed(_))
        ));

        let mut bad_start = mission();
        bad_start.start.latitude = f64::INFINITY;
        assert!(matches!(
            bad_start.validate(),
            Err(MissionError::Navigation(_))
        ));
    }

    #[test]
    fn rejects_zero_horizon() {
        let mut m = mission();
        m.horizon_hours = 0;
        assert!(matches!(m.validate(), Err(MissionError::ZeroHorizon)));
    }

    #[test]
    fn horizon_override_wins() {
        let m = mission();
        assert_eq!(m.horizon(None), 24);
        assert_eq!(m.horizon(Some(6)), 6);
    }
}
