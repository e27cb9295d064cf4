use thiserror::Error;

#[derive(Error, Debug)]
pub enum WellnessError {
    /// The requested emotion is not one of the supported states
    #[error("Invalid emotion: {0:?}")]
    InvalidEmotion(String),

    /// A built-in bundle is missing a key or carries an invalid value
    #[error("Configuration defect: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WellnessError>;
