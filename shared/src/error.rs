use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building, rendering or writing a game.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("density must be between 0 and 1, got {0}")]
    InvalidDensity(f64),

    #[error("failed to encode animation")]
    Encode(#[from] image::ImageError),

    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
