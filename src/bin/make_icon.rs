use glyph_icons::{generate, IconError, RenderRequest};

fn main() -> Result<(), IconError> {
    env_logger::init();

    let request = RenderRequest::launcher_icon();
    let icon = generate(&request)?;
    println!("✅ Icon generated: {} ({}x{})", request.file_name(), icon.size, icon.size);
    Ok(())
}
