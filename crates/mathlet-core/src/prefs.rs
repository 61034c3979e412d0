// File: crates/mathlet-core/src/prefs.rs
// Summary: Color scheme selection with optional on-disk preference (single TOML key).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use skia_safe as skia;

use crate::error::PrefsError;
use crate::style::Style;
use crate::theme::{self, ColorScheme, DEFAULT_SCHEME};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
struct Preferences {
    /// Name of the selected color scheme.
    color_scheme: Option<String>,
}

/// Read the saved scheme name. A missing file is `Ok(None)`.
pub fn load_preference(path: impl AsRef<Path>) -> Result<Option<String>, PrefsError> {
    let content = match std::fs::read_to_string(path.as_ref()) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let prefs: Preferences = toml::from_str(&content)?;
    Ok(prefs.color_scheme)
}

pub fn save_preference(path: impl AsRef<Path>, scheme: &str) -> Result<(), PrefsError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let prefs = Preferences { color_scheme: Some(scheme.to_string()) };
    std::fs::write(path, toml::to_string(&prefs)?)?;
    Ok(())
}

type Listener = Box<dyn FnMut(&ColorScheme)>;

/// Active color scheme for an application. Owned by the caller and passed
/// around explicitly; listeners hear about every change.
pub struct SchemeSelector {
    current: ColorScheme,
    store: Option<PathBuf>,
    listeners: Vec<Listener>,
}

impl SchemeSelector {
    pub fn new() -> Self {
        Self { current: ColorScheme::default(), store: None, listeners: Vec::new() }
    }

    /// Start from the scheme saved at `path`, if it names a known preset.
    /// Read failures are logged and leave the default in place.
    pub fn with_store(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut selector = Self::new();
        match load_preference(&path) {
            Ok(Some(name)) => match theme::try_find(&name) {
                Ok(scheme) => selector.current = scheme,
                Err(e) => log::warn!("ignoring saved preference: {e}"),
            },
            Ok(None) => {}
            Err(e) => log::warn!("could not load color scheme from {}: {e}", path.display()),
        }
        selector.store = Some(path);
        selector
    }

    pub fn current(&self) -> &ColorScheme {
        &self.current
    }

    pub fn available(&self) -> Vec<&'static str> {
        theme::names()
    }

    /// Switch schemes. Unknown names fall back to the default scheme. With
    /// `persist`, the choice is written to the store (failures are logged).
    pub fn set_scheme(&mut self, name: &str, persist: bool) -> &ColorScheme {
        self.current = match theme::try_find(name) {
            Ok(scheme) => scheme,
            Err(_) => {
                log::warn!("color scheme '{name}' not found, using '{DEFAULT_SCHEME}'");
                ColorScheme::default()
            }
        };

        if persist {
            if let Some(path) = &self.store {
                if let Err(e) = save_preference(path, self.current.name) {
                    log::warn!("could not save color scheme to {}: {e}", path.display());
                }
            }
        }

        log::info!("color scheme set to: {}", self.current.name);
        let scheme = self.current;
        for listener in &mut self.listeners {
            listener(&scheme);
        }
        &self.current
    }

    pub fn reset(&mut self) -> &ColorScheme {
        self.set_scheme(DEFAULT_SCHEME, true)
    }

    pub fn color(&self, key: &str) -> skia::Color {
        self.current.color(key)
    }

    /// Render style derived from the current scheme.
    pub fn style(&self) -> Style {
        Style::from_scheme(&self.current)
    }

    pub fn on_change(&mut self, listener: impl FnMut(&ColorScheme) + 'static) {
        self.listeners.push(Box::new(listener));
    }
}

impl Default for SchemeSelector {
    fn default() -> Self {
        Self::new()
    }
}
