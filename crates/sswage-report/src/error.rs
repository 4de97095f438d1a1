use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("the bundled chart font could not be loaded")]
    Font,

    #[error("failed to draw {}: {message}", path.display())]
    Draw { path: PathBuf, message: String },

    #[error(transparent)]
    Core(#[from] sswage_core::Error),
}

pub type Result<T, E = RenderError> = std::result::Result<T, E>;
