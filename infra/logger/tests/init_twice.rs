use greeter_logger::{LevelFilter, Logger, LoggerError};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn second_init_fails_and_keeps_the_first_subscriber() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;

    let logger = Logger::builder("greeter-server")
        .console(false)
        .level(LevelFilter::INFO)
        .path(tmp_dir.path())
        .init()?;

    let err = Logger::builder("greeter-server-second")
        .level(LevelFilter::DEBUG)
        .init()
        .expect_err("second init should fail");
    assert!(matches!(err, LoggerError::Subscriber { .. }), "unexpected error: {err}");

    tracing::info!(environment = "dev3", "greeting served");
    tracing::debug!("dropped by the first subscriber's level");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let names: Vec<String> =
        fs::read_dir(tmp_dir.path())?.flatten().map(|e| e.file_name().to_string_lossy().into_owned()).collect();
    assert!(!names.is_empty(), "first logger should have written a file");
    assert!(names.iter().all(|n| n.starts_with("greeter-server.")), "unexpected files: {names:?}");

    let contents = fs::read_to_string(tmp_dir.path().join(&names[0]))?;
    assert!(contents.contains("greeting served"));
    assert!(!contents.contains("dropped by the first subscriber's level"));

    Ok(())
}
