use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The icon's visual content.
pub const GLYPH_STRING: &str = "ᕦ(ツ)ᕤ";

pub const TURQUOISE: [u8; 3] = [64, 224, 208];

/// xxxhdpi launcher icon side
pub const LAUNCHER_SIZE: u32 = 432;
pub const IOS_SIZE: u32 = 1024;

pub const LAUNCHER_ICON_PATH: &str = "app/src/main/res/mipmap-xxxhdpi/ic_launcher.png";
pub const LAUNCHER_FOREGROUND_PATH: &str =
    "app/src/main/res/mipmap-xxxhdpi/ic_launcher_foreground.png";
pub const IOS_DEFAULT_PATH: &str = "icon.png";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Background {
    Transparent,
    Solid([u8; 3]),
}

impl Background {
    /// Pixel value an untouched canvas pixel holds.
    pub fn fill(&self) -> [u8; 4] {
        match *self {
            Background::Transparent => [0, 0, 0, 0],
            Background::Solid([r, g, b]) => [r, g, b, 255],
        }
    }
}

/// Everything one renderer invocation needs. Fixed per program, never read from disk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderRequest {
    pub size: u32,
    pub background: Background,
    pub font_family: String,
    pub font_size: f32,
    pub text: String,
    pub output: PathBuf,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self::launcher_icon()
    }
}

impl RenderRequest {
    /// Turquoise full launcher icon.
    pub fn launcher_icon() -> Self {
        Self {
            size: LAUNCHER_SIZE,
            background: Background::Solid(TURQUOISE),
            font_family: "Helvetica".into(),
            font_size: 180.0,
            text: GLYPH_STRING.into(),
            output: PathBuf::from(LAUNCHER_ICON_PATH),
        }
    }

    /// Transparent adaptive-icon foreground layer.
    pub fn launcher_foreground() -> Self {
        Self {
            size: LAUNCHER_SIZE,
            background: Background::Transparent,
            font_family: "Arial Unicode MS".into(),
            font_size: 60.0,
            text: GLYPH_STRING.into(),
            output: PathBuf::from(LAUNCHER_FOREGROUND_PATH),
        }
    }

    pub fn ios_app_icon(output: Option<PathBuf>) -> Self {
        Self {
            size: IOS_SIZE,
            background: Background::Solid(TURQUOISE),
            font_family: "Helvetica".into(),
            font_size: 225.0,
            text: GLYPH_STRING.into(),
            output: output.unwrap_or_else(|| PathBuf::from(IOS_DEFAULT_PATH)),
        }
    }

    /// Output file name for progress lines, falling back to the full path.
    pub fn file_name(&self) -> String {
        self.output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.output.display().to_string())
    }
}
