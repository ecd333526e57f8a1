use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = PortfolioError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("no image files found in directory: {0}")]
    NoImages(PathBuf),

    #[error("failed to load image {path}: {reason}")]
    Image { path: PathBuf, reason: String },

    #[error("a slideshow needs at least one slide")]
    EmptySlideshow,

    #[error("slide index {index} out of range for {count} slides")]
    SlideIndexOutOfRange { index: usize, count: usize },
}
