use edjournal_runtime::{JournalMonitor, MonitorConfig};
use edjournal_types::Event;
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tempfile::TempDir;

fn append(path: &Path, text: &str) {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .unwrap();
    file.write_all(text.as_bytes()).unwrap();
}

fn wait_for(events: &Mutex<Vec<Event>>, count: usize) -> Vec<&'static str> {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        let names: Vec<_> = events.lock().unwrap().iter().map(Event::name).collect();
        if names.len() >= count || Instant::now() > deadline {
            return names;
        }
        std::thread::sleep(Duration::from_millis(20));
    }
}

fn monitor(dir: &Path, start_at_end: bool) -> (JournalMonitor, Arc<Mutex<Vec<Event>>>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    let config = MonitorConfig {
        journal_dir: Some(dir.to_path_buf()),
        poll_interval_ms: 20,
        start_at_end,
        ..MonitorConfig::default()
    };
    let monitor = JournalMonitor::new(config, move |event| sink.lock().unwrap().push(event));
    (monitor, events)
}

#[test]
fn test_monitor_decodes_appended_lines() {
    let temp_dir = TempDir::new().unwrap();
    let journal = temp_dir.path().join("Journal.170101120000.01.log");
    append(
        &journal,
        "{ \"timestamp\":\"2017-01-01T12:00:00Z\", \"event\":\"Fileheader\", \"part\":1 }\n",
    );

    let (mut monitor, events) = monitor(temp_dir.path(), false);
    monitor.start().unwrap();
    assert!(monitor.is_running());

    append(
        &journal,
        concat!(
            "{ \"timestamp\":\"2017-01-01T12:00:01Z\", \"event\":\"LoadGame\", \"Commander\":\"Jameson\", \"Ship\":\"CobraMkIII\", \"ShipID\":1, \"Credits\":1000 }\n",
            "not json\n",
            "{ \"timestamp\":\"2017-01-01T12:00:02Z\", \"event\":\"Undocked\", \"StationName\":\"Jameson Memorial\" }\n",
            "{ \"timestamp\":\"2017-01-01T12:00:03Z\", \"event\":\"Touch",
        ),
    );
    assert_eq!(wait_for(&events, 2), ["Commander continued", "Undocked"]);
    assert_eq!(monitor.fleet().current().unwrap().model, "Cobra Mk III");

    append(&journal, "down\", \"Latitude\":1.0, \"Longitude\":2.0 }\n");
    assert_eq!(
        wait_for(&events, 3),
        ["Commander continued", "Undocked", "Touchdown"]
    );

    monitor.stop();
    assert!(!monitor.is_running());
}

#[test]
fn test_monitor_delivers_back_to_back_appends() {
    let temp_dir = TempDir::new().unwrap();
    let journal = temp_dir.path().join("Journal.170101120000.01.log");
    append(&journal, "");

    let (mut monitor, events) = monitor(temp_dir.path(), true);
    monitor.start().unwrap();

    // Each append lands within the same second, then the journal goes quiet
    for n in 1..=3 {
        append(
            &journal,
            "{ \"timestamp\":\"2017-01-01T12:00:00Z\", \"event\":\"HeatWarning\" }\n",
        );
        assert_eq!(wait_for(&events, n).len(), n);
    }
    append(
        &journal,
        "{ \"timestamp\":\"2017-01-01T12:00:01Z\", \"event\":\"ShieldState\", \"ShieldsUp\":false }\n",
    );

    assert_eq!(
        wait_for(&events, 4),
        ["Heat warning", "Heat warning", "Heat warning", "Shields down"]
    );
    monitor.stop();
}

#[test]
fn test_monitor_skips_history_and_follows_rotation() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("Journal.170101120000.01.log");
    append(
        &first,
        "{ \"timestamp\":\"2017-01-01T12:00:00Z\", \"event\":\"HeatWarning\" }\n",
    );

    let (mut monitor, events) = monitor(temp_dir.path(), true);
    monitor.start().unwrap();

    let second = temp_dir.path().join("Journal.170102120000.01.log");
    append(
        &second,
        "{ \"timestamp\":\"2017-01-02T12:00:00Z\", \"event\":\"ShieldState\", \"ShieldsUp\":true }\n",
    );

    assert_eq!(wait_for(&events, 1), ["Shields up"]);
    monitor.stop();
}

#[test]
fn test_start_twice_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let (mut monitor, _events) = monitor(temp_dir.path(), true);

    monitor.start().unwrap();
    assert!(monitor.start().is_err());
    monitor.stop();
    monitor.start().unwrap();
}

#[test]
fn test_missing_directory_fails_to_start() {
    let temp_dir = TempDir::new().unwrap();
    let (mut monitor, _events) = monitor(&temp_dir.path().join("absent"), true);
    assert!(monitor.start().is_err());
    assert!(!monitor.is_running());
}
