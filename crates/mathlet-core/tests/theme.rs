// File: crates/mathlet-core/tests/theme.rs
// Purpose: Scheme presets, lookup fallback, hex/CSS helpers and style derivation.

use mathlet_core::theme::{self, css_rgba, parse_hex, to_hex, DEFAULT_SCHEME};
use mathlet_core::{ColorKey, ColorScheme, Style, ThemeError};
use skia_safe as skia;

#[test]
fn presets_have_unique_names_and_include_default() {
    let names = theme::names();
    assert_eq!(names.len(), 10);
    assert_eq!(names[0], DEFAULT_SCHEME);
    let mut sorted = names.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), names.len());
}

#[test]
fn find_falls_back_to_default() {
    assert_eq!(theme::find("no_such_scheme"), ColorScheme::default());
    assert_eq!(theme::find("dark").name, "dark");
    // names match exactly
    assert_eq!(theme::find("DARK"), ColorScheme::default());
    assert!(theme::try_find("Cool_Ocean").is_err());
    assert_eq!(
        theme::try_find("nope"),
        Err(ThemeError::UnknownScheme("nope".to_string()))
    );
}

#[test]
fn hex_round_trip() {
    let c = parse_hex("#58c4dd").unwrap();
    assert_eq!((c.r(), c.g(), c.b()), (0x58, 0xC4, 0xDD));
    assert_eq!(to_hex(c), "#58C4DD");
    assert_eq!(parse_hex("FF8C00").unwrap(), skia::Color::from_rgb(0xFF, 0x8C, 0x00));
    assert!(matches!(parse_hex("#12345"), Err(ThemeError::InvalidHex(_))));
    assert!(matches!(parse_hex("#GG0000"), Err(ThemeError::InvalidHex(_))));
}

#[test]
fn css_helpers() {
    let c = skia::Color::from_rgb(10, 20, 30);
    assert_eq!(theme::css_rgb(c), "rgb(10, 20, 30)");
    assert_eq!(css_rgba(c, 0.5), "rgba(10, 20, 30, 0.5)");
    let [r, g, b] = theme::normalized_rgb(skia::Color::from_rgb(255, 0, 51));
    assert_eq!((r, g, b), (1.0, 0.0, 0.2));
}

#[test]
fn color_lookup_by_key_name() {
    let scheme = ColorScheme::classic();
    assert_eq!(scheme.color("accent"), scheme.accent);
    assert_eq!(scheme.color("contrast_2"), scheme.get(ColorKey::Contrast2));
    assert_eq!(scheme.color("not_a_key"), skia::Color::BLACK);
    assert_eq!("dot".parse::<ColorKey>(), Ok(ColorKey::Dot));
}

#[test]
fn css_variables_cover_every_key() {
    let css = ColorScheme::classic().css_variables("math-");
    assert!(css.starts_with(":root {"));
    for key in ColorKey::ALL {
        let var = format!("--math-{}:", key.as_str().replace('_', "-"));
        assert!(css.contains(&var), "missing {var}");
    }
    assert!(css.contains("--math-accent: #58C4DD;"));
}

#[test]
fn style_from_scheme_uses_scheme_colors() {
    let scheme = theme::find("cool_ocean");
    let style = Style::from_scheme(&scheme);
    assert_eq!(style.background, scheme.background);
    assert_eq!(style.curve.color, scheme.accent);
    assert_eq!(style.axes.width, 2.0);
    assert_eq!(style.grid.dash, vec![2.0, 2.0]);
    assert!(style.curve.dash.is_empty());
}

#[test]
fn default_style_matches_classic_stroke_palette() {
    let style = Style::default();
    assert_eq!(to_hex(style.axes.color), "#4A5568");
    assert_eq!(to_hex(style.grid.color), "#2D3748");
    assert_eq!(to_hex(style.curve.color), "#4ECCA3");
    assert_eq!((style.axes.width, style.grid.width, style.curve.width), (2.0, 1.0, 3.0));
}
