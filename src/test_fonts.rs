use font_kit::source::SystemSource;
use glyph_icons::fonts::capability::{
    check_chars, matching_families, resolve_sans_serif, FAMILY_FILTERS, ICON_CODE_POINTS,
};
use glyph_icons::fonts::loader::{resolve_font, LoadedFont};
use glyph_icons::imaging::png::{encode_png, write_png};
use glyph_icons::{generate, render, Background, RenderRequest};
use image::RgbaImage;

/// Minimal containers may ship no fonts at all; those tests just report and bail.
fn system_font(family: &str) -> Option<LoadedFont> {
    match resolve_font(&SystemSource::new(), family) {
        Ok(font) => Some(font),
        Err(e) => {
            println!("Warning: no system font for '{family}' ({e}), skipping.");
            None
        }
    }
}

fn corners(img: &RgbaImage) -> [[u8; 4]; 4] {
    let last = img.width() - 1;
    [
        img.get_pixel(0, 0).0,
        img.get_pixel(last, 0).0,
        img.get_pixel(0, last).0,
        img.get_pixel(last, last).0,
    ]
}

fn has_ink_in_center(img: &RgbaImage) -> bool {
    let side = img.width();
    let (lo, hi) = (side / 4, side - side / 4);
    (lo..hi).any(|y| (lo..hi).any(|x| img.get_pixel(x, y).0 == [0, 0, 0, 255]))
}

#[test]
fn test_font_enumeration() {
    let families = match matching_families(&SystemSource::new(), FAMILY_FILTERS) {
        Ok(families) => families,
        Err(e) => {
            println!("Warning: font system query failed ({e}).");
            return;
        }
    };
    println!("Found {} matching families.", families.len());
    for f in families.iter().take(5) {
        println!(" - {}", f);
    }
    for f in &families {
        let lower = f.to_lowercase();
        assert!(FAMILY_FILTERS.iter().any(|n| lower.contains(n)), "unexpected family {f}");
    }
    let mut sorted = families.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted, families);
}

#[test]
fn test_sans_serif_displays_parenthesis() {
    let source = SystemSource::new();
    let Ok(font) = resolve_sans_serif(&source) else {
        println!("Warning: no sans-serif font found (likely running in a minimal container).");
        return;
    };
    let first = check_chars(&font, ICON_CODE_POINTS);
    let second = check_chars(&font, ICON_CODE_POINTS);
    assert_eq!(first, second);
    assert!(first.iter().find(|s| s.ch == '(').unwrap().displayable);
    assert!(first.iter().find(|s| s.ch == ')').unwrap().displayable);
}

#[test]
fn test_launcher_icon_render() {
    let request = RenderRequest::launcher_icon();
    let Some(font) = system_font(&request.font_family) else {
        return;
    };
    let img = render(&request, &font).unwrap();

    assert_eq!(img.dimensions(), (432, 432));
    for c in corners(&img) {
        assert_eq!(c, [64, 224, 208, 255]);
    }
    assert!(has_ink_in_center(&img), "no ink drawn with '{}'", font.family);
}

#[test]
fn test_launcher_foreground_render() {
    let request = RenderRequest::launcher_foreground();
    let Some(font) = system_font(&request.font_family) else {
        return;
    };
    let img = render(&request, &font).unwrap();

    assert_eq!(img.dimensions(), (432, 432));
    for c in corners(&img) {
        assert_eq!(c[3], 0);
    }
    assert!(has_ink_in_center(&img), "no ink drawn with '{}'", font.family);
    // Only black ink over a clear canvas: colour channels never leave zero.
    assert!(img.pixels().all(|p| p.0[..3] == [0, 0, 0]));
}

#[test]
fn test_blank_text_leaves_background() {
    let Some(font) = system_font("Helvetica") else {
        return;
    };
    for background in [Background::Transparent, Background::Solid([64, 224, 208])] {
        let request = RenderRequest {
            size: 64,
            background,
            text: " ".into(),
            ..RenderRequest::launcher_icon()
        };
        let img = render(&request, &font).unwrap();
        assert!(img.pixels().all(|p| p.0 == background.fill()));
    }
}

#[test]
fn test_output_size_ignores_text() {
    let Some(font) = system_font("Helvetica") else {
        return;
    };
    for text in ["", "(", "ᕦ(ツ)ᕤ ᕦ(ツ)ᕤ ᕦ(ツ)ᕤ"] {
        let request = RenderRequest {
            size: 96,
            text: text.into(),
            ..RenderRequest::launcher_foreground()
        };
        assert_eq!(render(&request, &font).unwrap().dimensions(), (96, 96));
    }
}

#[test]
fn test_render_is_deterministic() {
    let request = RenderRequest::launcher_icon();
    let Some(font) = system_font(&request.font_family) else {
        return;
    };
    let a = encode_png(&render(&request, &font).unwrap()).unwrap();
    let b = encode_png(&render(&request, &font).unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_written_icon_decodes_as_rgba() {
    let request = RenderRequest::launcher_foreground();
    let Some(font) = system_font(&request.font_family) else {
        return;
    };
    let path = std::env::temp_dir().join(format!("glyph-icons-fg-{}.png", std::process::id()));
    write_png(&path, &render(&request, &font).unwrap()).unwrap();

    let decoded = image::open(&path).unwrap();
    assert_eq!(decoded.color(), image::ColorType::Rgba8);
    assert_eq!((decoded.width(), decoded.height()), (432, 432));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_missing_family_falls_back_to_sans_serif() {
    let source = SystemSource::new();
    let Ok(sans) = resolve_sans_serif(&source) else {
        println!("Warning: no sans-serif font found (likely running in a minimal container).");
        return;
    };
    let font = resolve_font(&source, "No Such Family Xyz").unwrap();
    assert_eq!(font.family, sans.family_name());

    let request = RenderRequest {
        font_family: "No Such Family Xyz".into(),
        ..RenderRequest::launcher_icon()
    };
    assert!(has_ink_in_center(&render(&request, &font).unwrap()));
}

#[test]
fn test_generate_writes_requested_icon() {
    if system_font("Helvetica").is_none() {
        return;
    }
    let path = std::env::temp_dir().join(format!("glyph-icons-gen-{}.png", std::process::id()));
    let request = RenderRequest {
        size: 128,
        font_size: 30.0,
        output: path.clone(),
        ..RenderRequest::launcher_icon()
    };
    let icon = generate(&request).unwrap();

    assert_eq!(icon.path, path);
    assert_eq!(icon.size, 128);
    assert!(!icon.family.is_empty());

    let decoded = image::open(&path).unwrap();
    assert_eq!(decoded.color(), image::ColorType::Rgba8);
    assert_eq!((decoded.width(), decoded.height()), (128, 128));
    assert_eq!(decoded.to_rgba8().get_pixel(0, 0).0, [64, 224, 208, 255]);
    let _ = std::fs::remove_file(&path);
}
