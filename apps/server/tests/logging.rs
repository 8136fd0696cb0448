use clap::Parser;
use greeter_server::Cli;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;
use tracing::Level;

#[test]
fn init_logging_honours_level_and_json_flags() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");
    let cli = Cli::try_parse_from([
        "greeter-server",
        "--log-level",
        "debug",
        "--log-dir",
        log_dir.to_str().expect("utf-8 path"),
        "--json-logs",
    ])?;

    let logger = cli.init_logging()?;
    assert!(logger.guard().is_some(), "--log-dir should enable the file layer");
    assert!(tracing::enabled!(Level::DEBUG));
    assert!(!tracing::enabled!(Level::TRACE));

    tracing::debug!(profile = "dev4", "resolving configuration");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| {
            path.file_name().and_then(|n| n.to_str()).is_some_and(|n| n.starts_with("greeter-server."))
        })
        .expect("log file named after the binary");

    let contents = fs::read_to_string(log_file)?;
    let line = contents.lines().find(|l| l.contains("resolving configuration")).expect("debug line");
    assert!(line.starts_with('{'), "--json-logs should emit objects: {line}");
    assert!(line.contains("\"level\":\"DEBUG\""));

    Ok(())
}
