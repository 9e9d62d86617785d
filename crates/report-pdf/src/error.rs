use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),

    #[error("Failed to encode page content: {0}")]
    ContentError(String),

    #[error("Failed to serialize PDF: {0}")]
    Serialization(String),
}
