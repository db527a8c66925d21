use drivesim::{report::JourneyLogWriter, MissionLoader, SimulationDriver};
use tempfile::tempdir;

#[test]
fn writes_journey_log_for_completed_run() {
    let loader = MissionLoader::new(env!("CARGO_MANIFEST_DIR"));
    let mission = loader.load("missions/harbor_crossing.yaml").unwrap();
    let summary =
        SimulationDriver::from_mission(&mission).run(mission.navigation_state().unwrap());

    let temp = tempdir().expect("tempdir");
    let writer = JourneyLogWriter::new(temp.path());
    let path = writer.write(&mission.name, &summary).expect("log written");

    assert_eq!(path, temp.path().join("harbor_crossing").join("journey.json"));
    let data = std::fs::read_to_string(&path).unwrap();
    assert!(
        data.contains("\"mission\": \"harbor_crossing\""),
        "journey log should carry the mission name"
    );
    assert!(data.contains("\"Arrived\""));
    assert!(data.contains("\"hours_driven\": 1"));
}
