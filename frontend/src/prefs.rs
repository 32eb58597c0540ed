//! Display preferences: the persisted day/night theme and the
//! reduced-motion capability.

use web_sys::{window, Storage};
use yew::prelude::*;

use crate::error::{describe, UiError};

pub const THEME_KEY: &str = "portfolio-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn root_class(&self) -> &'static str {
        match self {
            Theme::Light => "light-mode",
            Theme::Dark => "dark-mode",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Day",
            Theme::Dark => "Night",
        }
    }

    /// A stored value wins when it parses; otherwise the system colour
    /// scheme decides.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        match stored.and_then(Theme::parse) {
            Some(theme) => theme,
            None if prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }
}

fn storage() -> Result<Storage, UiError> {
    let window = window().ok_or(UiError::Dom("window"))?;
    window
        .local_storage()
        .map_err(|err| UiError::Storage(describe(&err)))?
        .ok_or_else(|| UiError::Storage("no local storage".to_string()))
}

fn read_stored_theme() -> Result<Option<String>, UiError> {
    storage()?
        .get_item(THEME_KEY)
        .map_err(|err| UiError::Storage(describe(&err)))
}

pub fn store_theme(theme: Theme) -> Result<(), UiError> {
    storage()?
        .set_item(THEME_KEY, theme.as_str())
        .map_err(|err| UiError::Storage(describe(&err)))
}

pub fn load_theme() -> Theme {
    let stored = read_stored_theme().unwrap_or_else(|err| {
        log::debug!("theme preference not readable: {}", err);
        None
    });
    Theme::resolve(stored.as_deref(), media_matches("(prefers-color-scheme: dark)"))
}

pub fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|list| list.matches())
        .unwrap_or(false)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    pub fn from_reduced_flag(reduced: bool) -> Self {
        if reduced {
            MotionPreference::Reduced
        } else {
            MotionPreference::Full
        }
    }

    pub fn is_reduced(&self) -> bool {
        *self == MotionPreference::Reduced
    }

    /// Root class that switches off hover transforms and transitions.
    pub fn root_class(&self) -> Option<&'static str> {
        self.is_reduced().then_some("reduce-motion")
    }
}

/// Read once at startup and provided to the whole tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiCapabilities {
    pub motion: MotionPreference,
}

impl UiCapabilities {
    pub fn detect() -> Self {
        Self {
            motion: MotionPreference::from_reduced_flag(media_matches("(prefers-reduced-motion: reduce)")),
        }
    }
}

#[hook]
pub fn use_capabilities() -> UiCapabilities {
    use_context::<UiCapabilities>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_theme_wins() {
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
    }

    #[test]
    fn missing_or_corrupt_value_follows_system() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
        assert_eq!(Theme::resolve(Some("{\"mode\":1}"), true), Theme::Dark);
        assert_eq!(Theme::resolve(Some(""), false), Theme::Light);
    }

    #[test]
    fn toggle_flips_and_round_trips_through_storage_form() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
    }

    #[test]
    fn reduced_motion_adds_root_class() {
        assert_eq!(MotionPreference::from_reduced_flag(true).root_class(), Some("reduce-motion"));
        assert_eq!(MotionPreference::from_reduced_flag(false).root_class(), None);
        assert_eq!(UiCapabilities::default().motion, MotionPreference::Full);
    }
}
