use std::path::PathBuf;

use font_kit::source::SystemSource;
use image::RgbaImage;

use crate::config::preset::RenderRequest;
use crate::error::Result;
use crate::fonts::loader::{resolve_font, LoadedFont};
use crate::imaging::layout::{center, measure};
use crate::imaging::png::write_png;
use crate::imaging::raster::{Canvas, BLACK};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedIcon {
    pub path: PathBuf,
    pub size: u32,
    /// Family the text was actually drawn with.
    pub family: String,
}

/// Fills the background, then draws the request's text in black, centred on its metrics.
pub fn render(request: &RenderRequest, font: &LoadedFont) -> Result<RgbaImage> {
    let mut canvas = Canvas::new(request.size, request.background)?;

    let scale = font.scale_for_point_size(request.font_size);
    let metrics = measure(&font.font, scale, &request.text);
    let at = center(request.size, &metrics);
    log::debug!("{metrics:?} -> {at:?}");

    canvas.draw_text(&font.font, scale, &request.text, at, BLACK);
    Ok(canvas.into_image())
}

/// Resolves the font against the system, renders, and writes the PNG.
pub fn generate(request: &RenderRequest) -> Result<RenderedIcon> {
    if log::log_enabled!(log::Level::Debug) {
        if let Ok(json) = serde_json::to_string(request) {
            log::debug!("render request {json}");
        }
    }

    let source = SystemSource::new();
    let font = resolve_font(&source, &request.font_family)?;
    let image = render(request, &font)?;
    write_png(&request.output, &image)?;

    Ok(RenderedIcon {
        path: request.output.clone(),
        size: request.size,
        family: font.family,
    })
}
