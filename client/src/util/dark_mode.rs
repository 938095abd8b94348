//! Light/dark theme preference.
//!
//! The choice is stored under [`STORAGE_KEY`] and applied as a `data-theme`
//! attribute on `<html>`. With nothing stored, the system color scheme wins.
//!
//! TRADE-OFFS
//! ==========
//! Server rendering always produces the light theme; the client applies the
//! stored preference right after hydration, so a dark-mode user may see one
//! light frame.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use serde::{Deserialize, Serialize};

use super::storage;

pub const STORAGE_KEY: &str = "oiltest-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Stored preference, falling back to `prefers-color-scheme`.
pub fn read_preference() -> Theme {
    if let Some(theme) = storage::load_json::<Theme>(STORAGE_KEY) {
        return theme;
    }
    if system_prefers_dark() { Theme::Dark } else { Theme::Light }
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Set `data-theme` on the document element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist it. Returns the new theme.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    storage::save_json(STORAGE_KEY, &next);
    next
}
