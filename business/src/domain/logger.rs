/// Logging port used by the application layer.
///
/// Kept free of any logging crate so use cases can be tested with a mock.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
