use clap::Parser;
use greeter_logger::LevelFilter;
use greeter_server::Cli;
use std::path::{Path, PathBuf};

fn shipped_config_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("config")
}

#[test]
fn defaults_without_flags() {
    let cli = Cli::try_parse_from(["greeter-server"]).expect("parse");

    assert!(cli.profile.is_none());
    assert_eq!(cli.config_dir, PathBuf::from("config"));
    assert!(cli.port.is_none());
    assert!(!cli.json_logs);
}

#[test]
fn log_level_flag_maps_to_level_filter() {
    let default = Cli::try_parse_from(["greeter-server"]).expect("parse");
    assert_eq!(default.log_level, LevelFilter::INFO);

    for (flag, level) in [("debug", LevelFilter::DEBUG), ("WARN", LevelFilter::WARN), ("off", LevelFilter::OFF)] {
        let cli = Cli::try_parse_from(["greeter-server", "--log-level", flag]).expect("parse");
        assert_eq!(cli.log_level, level, "--log-level {flag}");
    }

    assert!(Cli::try_parse_from(["greeter-server", "--log-level", "loud"]).is_err());
}

#[test]
fn json_logs_require_a_log_dir() {
    assert!(Cli::try_parse_from(["greeter-server", "--json-logs"]).is_err());
    assert!(Cli::try_parse_from(["greeter-server", "--json-logs", "--log-dir", "logs"]).is_ok());
}

#[test]
fn shipped_dev4_profile_resolves() {
    let dir = shipped_config_dir();
    let cli = Cli::try_parse_from([
        "greeter-server",
        "--profile",
        "dev4",
        "--config-dir",
        dir.to_str().expect("utf-8 path"),
    ])
    .expect("parse");

    let cfg = cli.resolve_config().expect("config");
    assert_eq!(cfg.app.environment, "dev4");
    assert_eq!(cfg.app.greeting.prefix, "Dev4");
    assert_eq!(cfg.app.greeting.suffix, "!!!");
    assert!(!cfg.app.feature.enabled);
}

#[test]
fn shipped_dev3_profile_resolves() {
    let dir = shipped_config_dir();
    let cli = Cli::try_parse_from([
        "greeter-server",
        "-p",
        "dev3",
        "--config-dir",
        dir.to_str().expect("utf-8 path"),
    ])
    .expect("parse");

    let cfg = cli.resolve_config().expect("config");
    assert_eq!(cfg.app.environment, "dev3");
    assert_eq!(cfg.app.greeting.prefix, "Dev3");
    assert_eq!(cfg.app.greeting.suffix, "!");
    assert!(cfg.app.feature.enabled);
}

#[test]
fn port_flag_overrides_config() {
    let dir = shipped_config_dir();
    let cli = Cli::try_parse_from([
        "greeter-server",
        "--port",
        "9191",
        "--config-dir",
        dir.to_str().expect("utf-8 path"),
    ])
    .expect("parse");

    let cfg = cli.resolve_config().expect("config");
    assert_eq!(cfg.server.port, 9191);
    assert_eq!(cfg.app.environment, "default");
}

#[test]
fn unknown_profile_fails_fast() {
    let dir = tempfile::tempdir().expect("temp dir");
    let cli = Cli::try_parse_from([
        "greeter-server",
        "--profile",
        "dev9",
        "--config-dir",
        dir.path().to_str().expect("utf-8 path"),
    ])
    .expect("parse");

    assert!(cli.resolve_config().is_err());
}
