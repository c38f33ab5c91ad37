use thiserror::Error;

/// Top-level error type for the quickmap tools.
#[derive(Debug, Error)]
pub enum QuickmapError {
    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to mesh structure.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("invalid mesh: {0}")]
    InvalidMesh(String),

    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors raised when the current selection gives an operation nothing to work with.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no {0} selected")]
    NoSelection(&'static str),

    #[error("nothing active to align to")]
    NoAnchor,
}

/// Errors reported by, or about, the host application state.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("attribute unavailable: {0}")]
    AttributeUnavailable(String),

    #[error("image not found: {0}")]
    ImageNotFound(String),

    #[error("host operator failed: {0}")]
    OperatorFailed(String),
}

/// Errors related to configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parameter {parameter} = {value} is invalid: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl QuickmapError {
    /// Returns `true` if the error means "nothing to do" rather than a fault.
    ///
    /// Selection errors and an empty mesh are expected during normal
    /// editing and callers usually surface them as a status message only.
    #[must_use]
    pub fn is_nothing_to_do(&self) -> bool {
        matches!(
            self,
            Self::Selection(_) | Self::Mesh(MeshError::InvalidMesh(_))
        )
    }
}

/// Convenience type alias for results using [`QuickmapError`].
pub type Result<T> = std::result::Result<T, QuickmapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_errors_are_nothing_to_do() {
        let err: QuickmapError = SelectionError::NoAnchor.into();
        assert!(err.is_nothing_to_do());
        let err: QuickmapError = MeshError::InvalidMesh("mesh has no faces".into()).into();
        assert!(err.is_nothing_to_do());
    }

    #[test]
    fn host_errors_are_reported() {
        let err: QuickmapError = HostError::ImageNotFound("brick".into()).into();
        assert!(!err.is_nothing_to_do());
        assert_eq!(err.to_string(), "image not found: brick");
    }

    #[test]
    fn no_selection_message_names_the_element() {
        let err: QuickmapError = SelectionError::NoSelection("vertices").into();
        assert_eq!(err.to_string(), "no vertices selected");
    }
}
