//! # Randid Error
use thiserror::Error;

/// Randid Error
#[derive(Error, Debug)]
pub enum RandidError {
    /// Parsing Configuration Error
    #[error("Failed to parse the configuration file: {0}")]
    ConfigParseError(String),
    /// Figment Error
    #[error("Figment Error")]
    FigmentError(#[from] figment::Error),
}
