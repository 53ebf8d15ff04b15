//! Light/dark theme selection with persisted and system-derived preference.
//!
//! DESIGN
//! ======
//! Two storage keys are involved: the theme value itself and an override
//! marker written only by a manual toggle. The marker is what lets a system
//! color-scheme change follow the OS until the user picks a side by hand.
//!
//! TRADE-OFFS
//! ==========
//! Writes go out as `Persist` effects. A host whose store rejects them keeps
//! the applied class anyway, so the theme degrades to session-only.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::ThemeConfig;
use crate::consts::{DARK_MODE, LIGHT_MODE, MOON_ICON, SUN_ICON};
use crate::effect::{Effect, Target};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to the theme storage key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => LIGHT_MODE,
            Self::Dark => DARK_MODE,
        }
    }

    /// Interpret a stored value; anything but `dark-mode` is light.
    #[must_use]
    pub fn from_stored(raw: &str) -> Self {
        if raw == DARK_MODE { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Glyph for the toggle control: the theme a click would switch to.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => MOON_ICON,
            Self::Dark => SUN_ICON,
        }
    }
}

/// Owns the current theme and the explicit-override flag.
#[derive(Clone, Debug)]
pub struct ThemeManager {
    theme: Theme,
    user_override: bool,
    storage_key: String,
    override_key: String,
}

impl ThemeManager {
    #[must_use]
    pub fn new(config: &ThemeConfig) -> Self {
        Self {
            theme: Theme::Light,
            user_override: false,
            storage_key: config.storage_key.clone(),
            override_key: config.override_key.clone(),
        }
    }

    /// Resolve the initial theme.
    ///
    /// A stored value wins. Without one, the system preference is adopted
    /// and persisted so later loads are stable.
    pub fn initialize(
        &mut self,
        stored: Option<&str>,
        user_override: bool,
        system_prefers_dark: bool,
        out: &mut Vec<Effect>,
    ) {
        self.user_override = user_override;
        match stored {
            Some(raw) => {
                self.theme = Theme::from_stored(raw);
                self.apply(out);
            }
            None => {
                log::debug!("no stored theme; adopting system preference (dark={system_prefers_dark})");
                self.set_theme(Theme::from_dark(system_prefers_dark), out);
            }
        }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn has_user_override(&self) -> bool {
        self.user_override
    }

    /// Apply `theme` and persist it.
    pub fn set_theme(&mut self, theme: Theme, out: &mut Vec<Effect>) {
        self.theme = theme;
        self.apply(out);
        out.push(Effect::Persist { key: self.storage_key.clone(), value: theme.as_str().to_owned() });
    }

    /// Flip the theme by hand. Records the override marker.
    pub fn toggle(&mut self, out: &mut Vec<Effect>) -> Theme {
        let next = self.theme.flipped();
        self.set_theme(next, out);
        if !self.user_override {
            self.user_override = true;
            out.push(Effect::Persist { key: self.override_key.clone(), value: "true".to_owned() });
        }
        next
    }

    /// Follow an OS color-scheme change unless the user chose by hand.
    /// Returns whether the change was applied.
    pub fn on_system_change(&mut self, prefers_dark: bool, out: &mut Vec<Effect>) -> bool {
        if self.user_override {
            log::debug!("ignoring system color-scheme change; user override recorded");
            return false;
        }
        self.set_theme(Theme::from_dark(prefers_dark), out);
        true
    }

    fn apply(&self, out: &mut Vec<Effect>) {
        out.push(Effect::class(Target::Body, DARK_MODE, self.theme.is_dark()));
        out.push(Effect::text(Target::ThemeToggle, self.theme.icon()));
    }
}
