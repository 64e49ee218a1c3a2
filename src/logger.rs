/// Where the preprocessor reports what happened to a document.
///
/// `error` is for conditions that stop processing a document, `warn` for a single
/// block that was dropped and `debug` for the end of document summary.
pub trait Logger: Send + Sync {
    fn error(&self, message: &str);
    fn warn(&self, message: &str);
    fn debug(&self, message: &str);
}

/// Forwards to the `log` facade, under the `giallo_fence` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogLogger;

impl Logger for LogLogger {
    fn error(&self, message: &str) {
        log::error!(target: "giallo_fence", "{message}");
    }

    fn warn(&self, message: &str) {
        log::warn!(target: "giallo_fence", "{message}");
    }

    fn debug(&self, message: &str) {
        log::debug!(target: "giallo_fence", "{message}");
    }
}
