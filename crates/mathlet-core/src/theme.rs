// File: crates/mathlet-core/src/theme.rs
// Summary: Named color scheme presets and hex/CSS color helpers.

use std::fmt;
use std::str::FromStr;

use skia_safe as skia;

use crate::error::ThemeError;

/// Name of the scheme used when nothing else is selected.
pub const DEFAULT_SCHEME: &str = "default";

#[inline]
fn rgb(r: u8, g: u8, b: u8) -> skia::Color {
    skia::Color::from_rgb(r, g, b)
}

/// Role of a color inside a scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorKey {
    TextBackground,
    Text,
    TextSurrounding,
    Background,
    Highlight,
    Accent,
    Time,
    Displacement,
    Dot,
    Contrast1,
    Contrast2,
}

impl ColorKey {
    pub const ALL: [ColorKey; 11] = [
        ColorKey::TextBackground,
        ColorKey::Text,
        ColorKey::TextSurrounding,
        ColorKey::Background,
        ColorKey::Highlight,
        ColorKey::Accent,
        ColorKey::Time,
        ColorKey::Displacement,
        ColorKey::Dot,
        ColorKey::Contrast1,
        ColorKey::Contrast2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorKey::TextBackground => "text_background",
            ColorKey::Text => "text",
            ColorKey::TextSurrounding => "text_surrounding",
            ColorKey::Background => "background",
            ColorKey::Highlight => "highlight",
            ColorKey::Accent => "accent",
            ColorKey::Time => "time",
            ColorKey::Displacement => "displacement",
            ColorKey::Dot => "dot",
            ColorKey::Contrast1 => "contrast_1",
            ColorKey::Contrast2 => "contrast_2",
        }
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorKey {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ThemeError::UnknownColorKey(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorScheme {
    pub name: &'static str,
    pub text_background: skia::Color,
    pub text: skia::Color,
    pub text_surrounding: skia::Color,
    pub background: skia::Color,
    pub highlight: skia::Color,
    pub accent: skia::Color,
    pub time: skia::Color,
    pub displacement: skia::Color,
    pub dot: skia::Color,
    pub contrast_1: skia::Color,
    pub contrast_2: skia::Color,
}

impl ColorScheme {
    /// Classic black background with vibrant colors.
    pub fn classic() -> Self {
        Self {
            name: "default",
            text_background: rgb(0x00, 0x00, 0x00),
            text: rgb(0xFF, 0xFF, 0xFF),
            text_surrounding: rgb(0x00, 0x00, 0x00),
            background: rgb(0x00, 0x00, 0x00),
            highlight: rgb(0xFF, 0xFF, 0x00),
            accent: rgb(0x58, 0xC4, 0xDD),
            time: rgb(0xC5, 0x5F, 0x73),
            displacement: rgb(0x83, 0xC1, 0x67),
            dot: rgb(0xFC, 0x62, 0x55),
            contrast_1: rgb(0xFF, 0x8C, 0x00),
            contrast_2: rgb(0x00, 0xCE, 0xD1),
        }
    }

    pub fn dark_muted_pastels() -> Self {
        Self {
            name: "dark_muted_pastels",
            text_background: rgb(0x2C, 0x2C, 0x2C),
            text: rgb(0xE4, 0xE4, 0xE4),
            text_surrounding: rgb(0x2C, 0x2C, 0x2C),
            background: rgb(0x2C, 0x2C, 0x2C),
            highlight: rgb(0xAB, 0xDA, 0xDC),
            accent: rgb(0xFF, 0xC1, 0xCC),
            time: rgb(0xB3, 0x9C, 0xD0),
            displacement: rgb(0xB2, 0xDF, 0xDB),
            dot: rgb(0xFF, 0x6B, 0x6B),
            contrast_1: rgb(0xFF, 0xB7, 0x4D),
            contrast_2: rgb(0x81, 0xC7, 0x84),
        }
    }

    pub fn deep_jewel_tones() -> Self {
        Self {
            name: "deep_jewel_tones",
            text_background: rgb(0x1a, 0x1a, 0x1a),
            text: rgb(0xf0, 0xf0, 0xf0),
            text_surrounding: rgb(0x1a, 0x1a, 0x1a),
            background: rgb(0x1a, 0x1a, 0x1a),
            highlight: rgb(0x00, 0x4d, 0x61),
            accent: rgb(0x82, 0x26, 0x59),
            time: rgb(0x3e, 0x56, 0x41),
            displacement: rgb(0x90, 0xEE, 0x90),
            dot: rgb(0xFF, 0x6B, 0x6B),
            contrast_1: rgb(0xFF, 0xB7, 0x4D),
            contrast_2: rgb(0x9C, 0x27, 0xB0),
        }
    }

    pub fn contrasting_vibrancy() -> Self {
        Self {
            name: "contrasting_vibrancy",
            text_background: rgb(0x18, 0x18, 0x18),
            text: rgb(0xf7, 0xf7, 0xf7),
            text_surrounding: rgb(0x18, 0x18, 0x18),
            background: rgb(0x18, 0x18, 0x18),
            highlight: rgb(0xff, 0x57, 0x22),
            accent: rgb(0x67, 0x3a, 0xb7),
            time: rgb(0xff, 0xeb, 0x3b),
            displacement: rgb(0x00, 0x96, 0x88),
            dot: rgb(0xe9, 0x1e, 0x63),
            contrast_1: rgb(0xc2, 0x18, 0x5b),
            contrast_2: rgb(0x4c, 0xaf, 0x50),
        }
    }

    /// University branding: navy text panels with gold surroundings.
    pub fn erau() -> Self {
        Self {
            name: "erau",
            text_background: rgb(0x03, 0x53, 0x9E),
            text: rgb(0xFF, 0xFF, 0xFF),
            text_surrounding: rgb(0xFF, 0xCB, 0x06),
            background: rgb(0x00, 0x00, 0x00),
            highlight: rgb(0xFF, 0xCB, 0x06),
            accent: rgb(0x01, 0xB2, 0xE3),
            time: rgb(0xFF, 0xE0, 0x66),
            displacement: rgb(0x90, 0xEE, 0x90),
            dot: rgb(0xFF, 0x6B, 0x6B),
            contrast_1: rgb(0xFF, 0x14, 0x93),
            contrast_2: rgb(0x32, 0xCD, 0x32),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            text_background: rgb(0x00, 0x00, 0x00),
            text: rgb(0xE0, 0xE0, 0xE0),
            text_surrounding: rgb(0x00, 0x00, 0x00),
            background: rgb(0x00, 0x00, 0x00),
            highlight: rgb(0xFF, 0x6B, 0x6B),
            accent: rgb(0x4E, 0xCD, 0xC4),
            time: rgb(0x45, 0xB7, 0xD1),
            displacement: rgb(0x96, 0xCE, 0xB4),
            dot: rgb(0xFE, 0xCA, 0x57),
            contrast_1: rgb(0xFF, 0x69, 0xB4),
            contrast_2: rgb(0x00, 0xFA, 0x9A),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high_contrast",
            text_background: rgb(0x00, 0x00, 0x00),
            text: rgb(0xFF, 0xFF, 0xFF),
            text_surrounding: rgb(0x00, 0x00, 0x00),
            background: rgb(0x00, 0x00, 0x00),
            highlight: rgb(0xFF, 0xFF, 0x00),
            accent: rgb(0x00, 0xFF, 0xFF),
            time: rgb(0xFF, 0x00, 0xFF),
            displacement: rgb(0x00, 0xFF, 0x00),
            dot: rgb(0xFF, 0x00, 0x00),
            contrast_1: rgb(0xFF, 0xA5, 0x00),
            contrast_2: rgb(0x8A, 0x2B, 0xE2),
        }
    }

    pub fn warm_sunset() -> Self {
        Self {
            name: "warm_sunset",
            text_background: rgb(0x1a, 0x0f, 0x0a),
            text: rgb(0xff, 0xf8, 0xf0),
            text_surrounding: rgb(0x2a, 0x18, 0x10),
            background: rgb(0x1a, 0x0f, 0x0a),
            highlight: rgb(0xff, 0x6b, 0x35),
            accent: rgb(0xf7, 0x93, 0x1e),
            time: rgb(0xfd, 0xc5, 0x00),
            displacement: rgb(0xc1, 0x66, 0x6b),
            dot: rgb(0xd6, 0x28, 0x28),
            contrast_1: rgb(0xfc, 0xbf, 0x49),
            contrast_2: rgb(0x8b, 0x45, 0x13),
        }
    }

    pub fn cool_ocean() -> Self {
        Self {
            name: "cool_ocean",
            text_background: rgb(0x0a, 0x1f, 0x2e),
            text: rgb(0xe8, 0xf4, 0xf8),
            text_surrounding: rgb(0x0a, 0x1f, 0x2e),
            background: rgb(0x0a, 0x1f, 0x2e),
            highlight: rgb(0x00, 0xd9, 0xff),
            accent: rgb(0x1e, 0x90, 0xff),
            time: rgb(0x40, 0xe0, 0xd0),
            displacement: rgb(0x7f, 0xff, 0xd4),
            dot: rgb(0xff, 0x6b, 0x9d),
            contrast_1: rgb(0xff, 0x14, 0x93),
            contrast_2: rgb(0x00, 0xfa, 0x9a),
        }
    }

    pub fn forest_earth() -> Self {
        Self {
            name: "forest_earth",
            text_background: rgb(0x1a, 0x2e, 0x1a),
            text: rgb(0xf0, 0xf8, 0xf0),
            text_surrounding: rgb(0x1a, 0x2e, 0x1a),
            background: rgb(0x1a, 0x2e, 0x1a),
            highlight: rgb(0x90, 0xee, 0x90),
            accent: rgb(0x8f, 0xbc, 0x8f),
            time: rgb(0xda, 0xa5, 0x20),
            displacement: rgb(0x9a, 0xcd, 0x32),
            dot: rgb(0xdc, 0x14, 0x3c),
            contrast_1: rgb(0xff, 0x8c, 0x00),
            contrast_2: rgb(0x46, 0x82, 0xb4),
        }
    }

    pub fn get(&self, key: ColorKey) -> skia::Color {
        match key {
            ColorKey::TextBackground => self.text_background,
            ColorKey::Text => self.text,
            ColorKey::TextSurrounding => self.text_surrounding,
            ColorKey::Background => self.background,
            ColorKey::Highlight => self.highlight,
            ColorKey::Accent => self.accent,
            ColorKey::Time => self.time,
            ColorKey::Displacement => self.displacement,
            ColorKey::Dot => self.dot,
            ColorKey::Contrast1 => self.contrast_1,
            ColorKey::Contrast2 => self.contrast_2,
        }
    }

    /// Look up a color by its key name; unknown keys read as opaque black.
    pub fn color(&self, key: &str) -> skia::Color {
        key.parse::<ColorKey>()
            .map(|k| self.get(k))
            .unwrap_or(skia::Color::BLACK)
    }

    /// `:root { --key: #hex; ... }` block, with underscores in keys turned into dashes.
    pub fn css_variables(&self, prefix: &str) -> String {
        let mut out = String::from(":root {\n");
        for key in ColorKey::ALL {
            let var = key.as_str().replace('_', "-");
            out.push_str(&format!("  --{}{}: {};\n", prefix, var, to_hex(self.get(key))));
        }
        out.push('}');
        out
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::classic()
    }
}

/// Return the list of built-in scheme presets.
pub fn presets() -> Vec<ColorScheme> {
    vec![
        ColorScheme::classic(),
        ColorScheme::dark_muted_pastels(),
        ColorScheme::deep_jewel_tones(),
        ColorScheme::contrasting_vibrancy(),
        ColorScheme::erau(),
        ColorScheme::dark(),
        ColorScheme::high_contrast(),
        ColorScheme::warm_sunset(),
        ColorScheme::cool_ocean(),
        ColorScheme::forest_earth(),
    ]
}

pub fn names() -> Vec<&'static str> {
    presets().into_iter().map(|s| s.name).collect()
}

/// Exact, case-sensitive name match.
pub fn try_find(name: &str) -> Result<ColorScheme, ThemeError> {
    presets()
        .into_iter()
        .find(|s| s.name == name)
        .ok_or_else(|| ThemeError::UnknownScheme(name.to_string()))
}

/// Find a scheme by its `name`, falling back to the default scheme.
pub fn find(name: &str) -> ColorScheme {
    try_find(name).unwrap_or_else(|_| ColorScheme::classic())
}

/// Parse `#RRGGBB` (leading `#` optional, case-insensitive) into an opaque color.
pub fn parse_hex(hex: &str) -> Result<skia::Color, ThemeError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ThemeError::InvalidHex(hex.to_string()));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ThemeError::InvalidHex(hex.to_string()))
    };
    Ok(rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Uppercase `#RRGGBB`; alpha is dropped.
pub fn to_hex(color: skia::Color) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
}

pub fn css_rgb(color: skia::Color) -> String {
    format!("rgb({}, {}, {})", color.r(), color.g(), color.b())
}

pub fn css_rgba(color: skia::Color, alpha: f64) -> String {
    format!("rgba({}, {}, {}, {})", color.r(), color.g(), color.b(), alpha)
}

/// Channels scaled to 0..=1.
pub fn normalized_rgb(color: skia::Color) -> [f64; 3] {
    [
        color.r() as f64 / 255.0,
        color.g() as f64 / 255.0,
        color.b() as f64 / 255.0,
    ]
}
