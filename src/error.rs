use thiserror::Error;

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Failed to create PDF: {0}")]
    Pdf(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Failed to read config file: {0}")]
    ConfigFile(String),
    #[error("Configuration produces no weeks; nothing to generate")]
    EmptyPlanner,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
