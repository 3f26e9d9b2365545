//! Preset theme seed colors offered in the panel's color picker.
//!
//! Hex strings are fed straight to the theme controller; the palette
//! generator derives everything else from the chosen seed.

/// Brand default seed — Deep Purple.
pub const DEFAULT_SEED: &str = "#6750A4";

/// Preset seed swatches: (display name, 6-digit hex).
pub const SWATCHES: &[(&str, &str)] = &[
    ("Deep Purple", "#6750A4"),
    ("Green", "#4CAF50"),
    ("Blue", "#2196F3"),
    ("Red", "#F44336"),
    ("Orange", "#FF9800"),
    ("Teal", "#009688"),
];
