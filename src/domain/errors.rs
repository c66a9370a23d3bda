/// Simplified error system - no over-engineering!
#[derive(Debug, Clone)]
pub enum AppError {
    ValidationError(String),
    GeometryError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            AppError::GeometryError(msg) => write!(f, "Geometry Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Simple convenience type alias
pub type SessionResult<T> = Result<T, AppError>;
