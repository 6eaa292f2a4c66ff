use crate::common::*;

#[doc = "Log line format: timestamp, level, module path, message."]
fn log_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] [{}] {}",
        now.now().format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.module_path().unwrap_or("<unnamed>"),
        record.args()
    )
}

#[doc = "Function responsible for setting the global logger. Logs go to daily rotated files under ./logs and are duplicated to stdout."]
/// # Returns
/// * LoggerHandle - Must be kept alive by the caller for the duration of the program.
pub fn set_global_logger() -> LoggerHandle {
    let logger: Logger = match Logger::try_with_str("info") {
        Ok(logger) => logger,
        Err(e) => panic!("[set_global_logger] invalid log filter: {:?}", e),
    };

    match logger
        .log_to_file(FileSpec::default().directory("logs"))
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(10),
        )
        .duplicate_to_stdout(Duplicate::All)
        .format(log_format)
        .start()
    {
        Ok(handle) => handle,
        Err(e) => panic!("[set_global_logger] failed to start the logger: {:?}", e),
    }
}
