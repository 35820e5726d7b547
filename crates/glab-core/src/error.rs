use thiserror::Error;

#[derive(Debug, Error)]
pub enum GlabError {
    #[error("Curve not found: {0}")]
    CurveNotFound(String),

    #[error("Unsupported curve family for {0}")]
    UnsupportedFamily(String),

    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    #[error("Missing parameter '{parameter}' for curve {curve}")]
    MissingParameter { curve: String, parameter: String },

    #[error("Unexpected parameter '{parameter}' for curve {curve}")]
    UnexpectedParameter { curve: String, parameter: String },

    #[error("Invalid curve definition: {0}")]
    InvalidDefinition(String),

    #[error("Duplicate curve: {0}")]
    DuplicateCurve(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GlabError {
    /// Whether the error is a caller mistake rather than a broken catalogue.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            Self::CurveNotFound(_)
                | Self::InvalidDomain(_)
                | Self::MissingParameter { .. }
                | Self::UnexpectedParameter { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GlabError>;
