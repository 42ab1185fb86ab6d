//! Font capability diagnostics: which installed families look like the
//! ones the icons ask for, and whether the generic sans-serif face has
//! glyphs for each code point of the icon text.

use std::io::{self, Write};

use font_kit::family_name::FamilyName;
use font_kit::properties::Properties;
use font_kit::source::Source;

use crate::error::Result;

/// Substrings a family name must contain (lowercased) to be listed.
pub const FAMILY_FILTERS: &[&str] = &["helvetica", "arial", "sans"];

/// Code points of the glyph string, in drawing order.
pub const ICON_CODE_POINTS: &[char] =
    &['\u{1566}', '\u{0028}', '\u{30C4}', '\u{0029}', '\u{1564}'];

pub trait GlyphCoverage {
    fn can_display(&self, ch: char) -> bool;
}

impl GlyphCoverage for font_kit::font::Font {
    fn can_display(&self, ch: char) -> bool {
        // glyph 0 is .notdef
        matches!(self.glyph_for_char(ch), Some(id) if id != 0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphSupport {
    pub ch: char,
    pub displayable: bool,
}

pub fn filter_families<I>(families: I, needles: &[&str]) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut matched: Vec<String> = families
        .into_iter()
        .filter(|family| {
            let lower = family.to_lowercase();
            needles.iter().any(|n| lower.contains(n))
        })
        .collect();
    matched.sort();
    matched.dedup();
    matched
}

pub fn matching_families<S: Source>(
    source: &S,
    needles: &[&str],
) -> Result<Vec<String>> {
    let families = source.all_families()?;
    log::debug!("{} installed families", families.len());
    Ok(filter_families(families, needles))
}

/// Loads whatever face the platform maps the generic sans-serif family to.
pub fn resolve_sans_serif<S: Source>(source: &S) -> Result<font_kit::font::Font> {
    let handle = source.select_best_match(&[FamilyName::SansSerif], &Properties::new())?;
    let font = handle.load()?;
    log::debug!("sans-serif resolved to {}", font.family_name());
    Ok(font)
}

pub fn check_chars<F: GlyphCoverage + ?Sized>(font: &F, chars: &[char]) -> Vec<GlyphSupport> {
    chars
        .iter()
        .map(|&ch| GlyphSupport {
            ch,
            displayable: font.can_display(ch),
        })
        .collect()
}

pub fn write_report<W: Write>(
    out: &mut W,
    families: &[String],
    support: &[GlyphSupport],
) -> io::Result<()> {
    writeln!(out, "Available fonts:")?;
    for family in families {
        writeln!(out, "  - {family}")?;
    }

    writeln!(out)?;
    writeln!(out, "Testing characters:")?;
    for s in support {
        writeln!(out, "{} (U+{:04X}): {}", s.ch, s.ch as u32, s.displayable)?;
    }
    Ok(())
}
