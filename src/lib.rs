//! Glyph Icons: renders the ᕦ(ツ)ᕤ glyph string onto square canvases and
//! writes them out as PNG icon assets.

pub mod config;
pub mod error;
pub mod fonts;
pub mod imaging;
pub mod render;

pub use config::preset::{Background, RenderRequest, GLYPH_STRING};
pub use error::{IconError, Result};
pub use render::{generate, render, RenderedIcon};
