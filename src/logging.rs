use flexi_logger::{opt_format, Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};

/// Starts file logging for a hosting application. The returned handle must
/// stay alive for as long as logging should run.
pub fn setup_logging() -> LoggerHandle {
    Logger::try_with_env_or_str("info")
        .unwrap()
        .log_to_file(FileSpec::default().directory("logs"))
        .format(opt_format)
        .rotate(
            Criterion::Size(10 * 1024 * 1024), // Rotate logs after they reach 10 MB
            Naming::Numbers,
            Cleanup::KeepLogFiles(3),
        )
        .start()
        .unwrap()
}
