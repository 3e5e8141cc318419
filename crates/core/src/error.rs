#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid artifact name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("Validation failed: {0}")]
    Validation(String),
}
