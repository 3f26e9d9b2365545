//! raydeck-theme: dynamic theming for the raydeck panel.
//!
//! One user-chosen seed color drives a full semantic role palette
//! (surfaces, elevation tiers, on-colors, outlines), resolved for light or
//! dark appearance and kept in sync with the OS "prefers dark" signal.
//! Preference (mode + seed) persists across sessions via `raydeck-core`.
//!
//! # Example
//!
//! ```ignore
//! use raydeck_core::prefs::MemoryPrefs;
//! use raydeck_theme::{NoOsSignal, SharedStyles, ThemeController, ThemeMode};
//!
//! let styles = SharedStyles::new();
//! let mut theme = ThemeController::new(MemoryPrefs::new(), NoOsSignal, styles.clone());
//! theme.init();
//! theme.set_mode(ThemeMode::Dark);
//! let surface = styles.get("surface"); // e.g. "#18151f"
//! ```

pub mod appearance;
pub mod controller;
pub mod palette;
pub mod rgb;
pub mod styles;

pub use appearance::ThemeMode;
pub use controller::{
    AppearanceSource, NoOsSignal, ObserverId, SharedAppearance, ThemeController, ThemeEvent,
    COLOR_KEY, DEFAULT_SEED_HEX, THEME_KEY,
};
pub use palette::{RolePalette, ROLE_NAMES};
pub use rgb::Rgb;
pub use styles::{SharedStyles, StyleSheet, StyleSurface};
