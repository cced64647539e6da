/// Type alias for Result with anyhow::Error as the error type.
/// Typed failures are carried as `GraphError` inside the anyhow error and can
/// be recovered with `downcast_ref`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
