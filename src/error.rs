use std::fmt;

/// Result type for axon operations
pub type Result<T> = std::result::Result<T, AxonError>;

/// Main error type for the axon library
#[derive(Debug, Clone, PartialEq)]
pub enum AxonError {
    /// Matrix operands or input vectors with incompatible dimensions
    ShapeMismatch {
        expected: String,
        actual: String,
    },

    /// Layer structure with fewer than two entries or a zero-sized layer
    InvalidStructure {
        reason: String,
    },

    /// Action index outside the network's output layer
    InvalidAction {
        action: usize,
        num_actions: usize,
    },

    /// Replay training requested with no stored experiences
    EmptyExperienceStore,
}

impl fmt::Display for AxonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxonError::ShapeMismatch { expected, actual } => {
                write!(f, "Shape mismatch: expected {}, got {}", expected, actual)
            }
            AxonError::InvalidStructure { reason } => {
                write!(f, "Invalid network structure: {}", reason)
            }
            AxonError::InvalidAction { action, num_actions } => {
                write!(f, "Invalid action {}: must be less than {}", action, num_actions)
            }
            AxonError::EmptyExperienceStore => {
                write!(f, "Cannot train on an empty experience store")
            }
        }
    }
}

impl std::error::Error for AxonError {}

// Helper constructors for common error patterns
impl AxonError {
    pub fn shape_mismatch<S: Into<String>>(expected: S, actual: S) -> Self {
        AxonError::ShapeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_structure<S: Into<String>>(reason: S) -> Self {
        AxonError::InvalidStructure {
            reason: reason.into(),
        }
    }
}
