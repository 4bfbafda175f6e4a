/// Type alias for Result with anyhow::Error as the error type.
/// Every layer propagates errors through this alias.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
