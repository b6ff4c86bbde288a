use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;

/// Logs a failed product operation without altering the error.
///
/// A missing product is an expected outcome and is logged as a warning.
pub(crate) fn log_failure(logger: &dyn Logger, action: &str, error: &ProductError) {
    match error {
        ProductError::NotFound => logger.warn(&format!("{action}: {error}")),
        ProductError::Repository(source) => {
            logger.error(&format!("{action}: {error} ({source})"))
        }
        _ => logger.info(&format!("{action}: {error}")),
    }
}
