//! The process-wide logger, in its own test binary so installation is clean

use dslog_core::{global, LogSeverity, Logger, LoggerConfig};
use tempfile::TempDir;

#[test]
fn test_install_emit_shutdown() {
    let temp = TempDir::new().unwrap();
    let config = LoggerConfig::new("GlobalTest", "0.0.1")
        .with_logs_dir(temp.path().join("Logs"))
        .with_mirror_path(temp.path().join("GlobalTest.log"))
        .with_echo_stderr(false);

    assert!(global::install(Logger::new(config.clone())).is_ok());
    // Second install is refused and hands the logger back
    assert!(global::install(Logger::new(config)).is_err());

    global::emit(LogSeverity::Warning, "from anywhere");
    global::shutdown();
    global::shutdown();
    global::emit(LogSeverity::Warning, "after shutdown");

    let logger = global::logger();
    assert!(logger.is_closed());
    let contents = std::fs::read_to_string(logger.log_path().unwrap()).unwrap();
    assert!(contents.contains("from anywhere"));
    assert!(!contents.contains("after shutdown"));
}
