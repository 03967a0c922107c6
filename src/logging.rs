use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

/// Starts stderr logging at the configured level. The returned handle has to
/// outlive the process's useful work; dropping it stops the logger.
pub fn init(level: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_str(level)?
        .log_to_stderr()
        .format(flexi_logger::detailed_format)
        .start()
}
