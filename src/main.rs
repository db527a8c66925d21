use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use drivesim::{
    mission::MissionLoader,
    report::{render_outcome, render_tick, JourneyLogWriter},
    SimulationDriver,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Hourly drive-loop simulator")]
struct Cli {
    /// Path to the mission YAML file
    #[arg(long, default_value = "missions/harbor_crossing.yaml")]
    mission: PathBuf,

    /// Override the starting latitude in degrees
    #[arg(long)]
    start_latitude: Option<f64>,

    /// Override the starting longitude in degrees
    #[arg(long)]
    start_longitude: Option<f64>,

    /// Override the destination latitude in degrees
    #[arg(long)]
    destination_latitude: Option<f64>,

    /// Override the destination longitude in degrees
    #[arg(long)]
    destination_longitude: Option<f64>,

    /// Override the cruise speed in km per hour
    #[arg(long)]
    speed_kmh: Option<f64>,

    /// Override the heading in degrees clockwise from north
    #[arg(long)]
    heading_degrees: Option<f64>,

    /// Override the simulation horizon in hours
    #[arg(long)]
    hours: Option<u32>,

    /// Directory for JSON journey logs (none written when omitted)
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let loader = MissionLoader::new(".");
    let mut mission = loader.load(&cli.mission)?;

    if let Some(latitude) = cli.start_latitude {
        mission.start.latitude = latitude;
    }
    if let Some(longitude) = cli.start_longitude {
        mission.start.longitude = longitude;
    }
    if let Some(latitude) = cli.destination_latitude {
        mission.destination.latitude = latitude;
    }
    if let Some(longitude) = cli.destination_longitude {
        mission.destination.longitude = longitude;
    }
    if let Some(speed) = cli.speed_kmh {
        mission.speed_kmh = speed;
    }
    if let Some(heading) = cli.heading_degrees {
        mission.heading_degrees = heading;
    }
    mission.horizon_hours = mission.horizon(cli.hours);
    mission.validate()?;

    let state = mission.navigation_state()?;
    let mut driver = SimulationDriver::from_mission(&mission);
    let summary = driver.run_with_hook(state, |report| println!("{}", render_tick(report)));
    if let Some(line) = render_outcome(&summary.outcome) {
        println!("{line}");
    }

    if let Some(log_dir) = cli.log_dir {
        let path = JourneyLogWriter::new(log_dir).write(&mission.name, &summary)?;
        info!("journey log written to {}", path.display());
    }
    Ok(())
}
