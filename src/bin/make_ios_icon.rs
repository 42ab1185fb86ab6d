use std::path::PathBuf;

use glyph_icons::{generate, IconError, RenderRequest};

fn main() -> Result<(), IconError> {
    env_logger::init();

    // Optional first argument overrides the output path.
    let output = std::env::args_os().nth(1).map(PathBuf::from);
    let icon = generate(&RenderRequest::ios_app_icon(output))?;
    println!("Icon generated successfully at: {}", icon.path.display());
    Ok(())
}
