//! Theme mode (light / dark / auto) and resolution against the OS signal.

use serde::{Deserialize, Serialize};

/// User-facing theme preference. `Auto` has no fixed appearance; it is
/// resolved against the OS "prefers dark" signal at every use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    Auto,
}

impl ThemeMode {
    /// Persisted / wire string form (`light`, `dark`, `auto`).
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::Auto => "auto",
        }
    }

    /// Parses the persisted string form. `None` for anything unknown;
    /// callers fall back to [ThemeMode::Auto].
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "auto" => Some(ThemeMode::Auto),
            _ => None,
        }
    }

    /// Toggle cycle: light -> dark -> auto -> light.
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Auto,
            ThemeMode::Auto => ThemeMode::Light,
        }
    }

    /// Effective appearance for this mode. `Auto` defers to the OS signal;
    /// when the signal is unavailable callers pass `false` and auto
    /// degrades to light.
    pub fn resolve_is_dark(self, os_prefers_dark: bool) -> bool {
        match self {
            ThemeMode::Dark => true,
            ThemeMode::Light => false,
            ThemeMode::Auto => os_prefers_dark,
        }
    }
}
