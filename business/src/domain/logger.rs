/// Logging port. Implementations must never receive credential material;
/// callers log identifiers such as `project_id`, not document contents.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
