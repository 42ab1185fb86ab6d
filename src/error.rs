use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, IconError>;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("font system query failed: {0}")]
    FontQuery(#[from] font_kit::error::SelectionError),

    #[error("failed to load font: {0}")]
    FontLoad(#[from] font_kit::error::FontLoadingError),

    #[error("font data for '{family}' could not be parsed")]
    FontParse { family: String },

    #[error("cannot allocate a {size}x{size} canvas")]
    Canvas { size: u32 },

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
