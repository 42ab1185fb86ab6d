use font_kit::family_name::FamilyName;
use font_kit::handle::Handle;
use font_kit::properties::Properties;
use font_kit::source::Source;
use rusttype::{Font, Scale};

use crate::error::{IconError, Result};

/// A face ready for measuring and rasterizing.
pub struct LoadedFont {
    /// Family the platform actually handed back, which may differ from the request.
    pub family: String,
    pub font: Font<'static>,
}

impl LoadedFont {
    /// rusttype scales by ascent-to-descent height, while point sizes are
    /// em sizes. Convert so a 180pt request gets a 180px em.
    pub fn scale_for_point_size(&self, points: f32) -> Scale {
        let v = self.font.v_metrics_unscaled();
        let upem = self.font.units_per_em() as f32;
        let height = v.ascent - v.descent;
        if upem <= 0.0 || height <= 0.0 {
            return Scale::uniform(points);
        }
        Scale::uniform(points * height / upem)
    }
}

/// Resolves `family`, falling back to the platform sans-serif when it is
/// not installed. The substitution is not reported as an error.
pub fn resolve_font<S: Source>(source: &S, family: &str) -> Result<LoadedFont> {
    let handle = source.select_best_match(
        &[FamilyName::Title(family.to_string()), FamilyName::SansSerif],
        &Properties::new(),
    )?;

    let resolved = handle.load()?.family_name();
    if resolved != family {
        log::debug!("'{family}' resolved to '{resolved}'");
    }

    let (data, index) = face_bytes(&handle)?;
    let font = Font::try_from_vec_and_index(data, index).ok_or_else(|| IconError::FontParse {
        family: resolved.clone(),
    })?;

    Ok(LoadedFont {
        family: resolved,
        font,
    })
}

fn face_bytes(handle: &Handle) -> Result<(Vec<u8>, u32)> {
    match handle {
        Handle::Path { path, font_index } => {
            let data = std::fs::read(path).map_err(|source| IconError::Io {
                path: path.clone(),
                source,
            })?;
            Ok((data, *font_index))
        }
        Handle::Memory { bytes, font_index } => Ok((bytes.to_vec(), *font_index)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use font_kit::sources::mem::MemSource;

    #[test]
    fn empty_source_is_a_query_error() {
        let source = MemSource::empty();
        match resolve_font(&source, "Helvetica") {
            Err(IconError::FontQuery(_)) => {}
            Err(other) => panic!("Unexpected error: {other}"),
            Ok(loaded) => panic!("Resolved '{}' from an empty source", loaded.family),
        }
    }

    #[test]
    fn memory_handle_keeps_index() {
        let handle = Handle::from_memory(std::sync::Arc::new(vec![1, 2, 3]), 2);
        let (data, index) = face_bytes(&handle).unwrap();
        assert_eq!(data, vec![1, 2, 3]);
        assert_eq!(index, 2);
    }

    #[test]
    fn missing_path_is_an_io_error() {
        let handle = Handle::from_path("/nonexistent/glyph-icons/face.ttf".into(), 0);
        assert!(matches!(face_bytes(&handle), Err(IconError::Io { .. })));
    }
}
