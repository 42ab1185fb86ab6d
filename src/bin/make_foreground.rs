use glyph_icons::{generate, IconError, RenderRequest};

fn main() -> Result<(), IconError> {
    env_logger::init();

    let request = RenderRequest::launcher_foreground();
    let icon = generate(&request)?;
    println!(
        "✅ Foreground icon generated: {} ({}x{})",
        request.file_name(),
        icon.size,
        icon.size
    );
    Ok(())
}
