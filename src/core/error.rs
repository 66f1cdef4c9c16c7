use thiserror::Error;

/// Error taxonomy for core operations. Structurally invalid requests and
/// missing entities surface synchronously; an unavailable computation (bad
/// BMR inputs) is an absent value, not an error; a generation failure is
/// captured into the plan's terminal state at the job boundary.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("meal plan generation failed: {0}")]
    Generation(String),
}

impl CoreError {
    /// Stable machine-readable code for the output envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::NotFound(_) => "not_found",
            Self::Generation(_) => "generation_failed",
        }
    }
}
