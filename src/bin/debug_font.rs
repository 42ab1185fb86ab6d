use font_kit::source::SystemSource;
use glyph_icons::fonts::capability::{
    check_chars, matching_families, resolve_sans_serif, write_report, FAMILY_FILTERS,
    ICON_CODE_POINTS,
};
use glyph_icons::IconError;

fn main() -> Result<(), IconError> {
    env_logger::init();

    let source = SystemSource::new();
    let families = matching_families(&source, FAMILY_FILTERS)?;
    let font = resolve_sans_serif(&source)?;
    let support = check_chars(&font, ICON_CODE_POINTS);

    let stdout = std::io::stdout();
    write_report(&mut stdout.lock(), &families, &support).map_err(|source| IconError::Io {
        path: "<stdout>".into(),
        source,
    })
}
