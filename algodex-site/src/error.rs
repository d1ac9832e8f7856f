//! Error type for site export

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while writing the generated site
#[derive(Debug)]
pub enum RenderError {
    /// A directory of the output tree could not be created
    CreateDir { path: PathBuf, message: String },
    /// A page file could not be written
    WriteFile { path: PathBuf, message: String },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::CreateDir { path, message } => {
                write!(f, "Failed to create {}: {}", path.display(), message)
            }
            RenderError::WriteFile { path, message } => {
                write!(f, "Failed to write {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for RenderError {}
