use crate::common::*;

#[doc = r#"
    Line format shared by the log file and stdout.

    `[2025-01-01 09:00:00] [INFO] T[tokio-runtime-worker] [module:42] message`
"#]
fn custom_log_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] T[{}] [{}:{}] {}",
        now.now().format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        std::thread::current().name().unwrap_or("<unnamed>"),
        record.module_path().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
        &record.args()
    )
}

#[doc = r#"
    Installs the global logger.

    Logs go to `logs/` (one file per day, ten days kept) and are duplicated to
    stdout. The level defaults to `info` and can be overridden with `RUST_LOG`.
    The returned handle must stay alive until the end of `main`, otherwise
    buffered file output is lost.

    # Panics
    The logger cannot be initialized (invalid spec or unwritable log directory)
"#]
pub fn set_global_logger() -> LoggerHandle {
    let log_directory: &str = "logs";

    Logger::try_with_env_or_str("info")
        .unwrap_or_else(|e| panic!("[set_global_logger] Invalid log spec: {:?}", e))
        .log_to_file(
            FileSpec::default()
                .directory(log_directory)
                .basename("chart_report"),
        )
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(10),
        )
        .format_for_files(custom_log_format)
        .format_for_stdout(custom_log_format)
        .duplicate_to_stdout(Duplicate::All)
        .start()
        .unwrap_or_else(|e| panic!("[set_global_logger] Logger initialization failed: {:?}", e))
}
