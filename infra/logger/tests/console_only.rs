use greeter_logger::{LevelFilter, Logger};
use tracing::Level;

#[test]
fn console_logger_applies_per_crate_directives() {
    let logger = Logger::builder("greeter-server")
        .console(true)
        .level(LevelFilter::WARN)
        .env_filter("warn,greeter_kernel=debug")
        .init()
        .expect("logger should initialize");

    assert!(logger.guard().is_none(), "console-only logger should not create a file guard");

    assert!(tracing::enabled!(target: "greeter_kernel::config", Level::DEBUG));
    assert!(!tracing::enabled!(target: "greeter_kernel::config", Level::TRACE));
    assert!(tracing::enabled!(target: "greeter_server", Level::WARN));
    assert!(!tracing::enabled!(target: "greeter_server", Level::INFO));
}
