use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Brand indigo.
pub const ACCENT: Color = Color::Rgb(0x63, 0x66, 0xf1);
pub const STAR: Color = Color::Rgb(0xfa, 0xcc, 0x15);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub popup_border: Color,
    pub highlight: Color,
    pub badge: Color,
}

const DARK: Palette = Palette {
    text: Color::Rgb(0xf3, 0xf4, 0xf6),
    muted: Color::Rgb(0x9c, 0xa3, 0xaf),
    border: Color::Rgb(0x37, 0x41, 0x51),
    popup_border: Color::Rgb(0xd1, 0xd5, 0xdb),
    highlight: Color::Rgb(0x1f, 0x29, 0x37),
    badge: Color::Rgb(0x4f, 0x46, 0xe5),
};

const LIGHT: Palette = Palette {
    text: Color::Rgb(0x11, 0x18, 0x27),
    muted: Color::Rgb(0x6b, 0x72, 0x80),
    border: Color::Rgb(0xd1, 0xd5, 0xdb),
    popup_border: Color::Rgb(0x37, 0x41, 0x51),
    highlight: Color::Rgb(0xe5, 0xe7, 0xeb),
    badge: Color::Rgb(0x63, 0x66, 0xf1),
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Dark => DARK,
            Self::Light => LIGHT,
        }
    }

    /// Navbar toggle glyph.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => "🌙",
            Self::Light => "☀",
        }
    }
}
