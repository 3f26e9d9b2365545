//! Role palette: the full named color set derived from one seed color.
//!
//! The generator does not run a perceptual tonal-ramp model. Each surface
//! tier blends the seed into a fixed anchor color at a fixed, hand-tuned
//! weight, with separate anchor sets for dark and light mode; the remaining
//! roles are fixed literals. The anchors and weights are design values —
//! change one and the panel no longer matches its mocks.

use super::rgb::Rgb;

// Dark-mode surface anchors, all blended at 5% seed share.
const DARK_SURFACE: Rgb = Rgb(20, 18, 24);
const DARK_SURFACE_CONTAINER: Rgb = Rgb(33, 31, 38);
const DARK_SURFACE_CONTAINER_LOW: Rgb = Rgb(29, 27, 32);
const DARK_SURFACE_CONTAINER_HIGH: Rgb = Rgb(43, 41, 48);
const DARK_SURFACE_CONTAINER_HIGHEST: Rgb = Rgb(54, 52, 59);
const DARK_SEED_SHARE: f64 = 0.05;

// Light-mode anchors. Surfaces blend against white at per-tier weights;
// the three tinted roles have their own anchors.
const WHITE: Rgb = Rgb(255, 255, 255);
const LIGHT_SURFACE_VARIANT: Rgb = Rgb(231, 224, 236);
const LIGHT_OUTLINE_VARIANT: Rgb = Rgb(202, 196, 208);
const LIGHT_SECONDARY: Rgb = Rgb(98, 91, 113);

/// Alpha suffix appended to the raw seed hex for container roles
/// (seed at reduced opacity, not a separate blend).
const CONTAINER_ALPHA: &str = "30";

/// Every role name, in the order [RolePalette::entries] yields them.
pub const ROLE_NAMES: [&str; 20] = [
    "primary",
    "on-primary",
    "primary-container",
    "on-primary-container",
    "secondary",
    "on-secondary",
    "secondary-container",
    "on-secondary-container",
    "surface",
    "on-surface",
    "surface-variant",
    "on-surface-variant",
    "surface-container",
    "surface-container-low",
    "surface-container-high",
    "surface-container-highest",
    "background",
    "on-background",
    "outline",
    "outline-variant",
];

/// One complete role->color mapping for an appearance. Values are hex
/// strings (8 digits where the container alpha suffix applies). Always
/// complete: generation fills every role or it is a bug, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RolePalette {
    pub primary: String,
    pub on_primary: String,
    pub primary_container: String,
    pub on_primary_container: String,
    pub secondary: String,
    pub on_secondary: String,
    pub secondary_container: String,
    pub on_secondary_container: String,
    pub surface: String,
    pub on_surface: String,
    pub surface_variant: String,
    pub on_surface_variant: String,
    pub surface_container: String,
    pub surface_container_low: String,
    pub surface_container_high: String,
    pub surface_container_highest: String,
    pub background: String,
    pub on_background: String,
    pub outline: String,
    pub outline_variant: String,
}

impl RolePalette {
    /// Derives the full palette from a seed.
    ///
    /// `seed_hex` is the seed's hex form and is used verbatim for the
    /// mode-independent roles (primary and the `+30` alpha containers);
    /// `seed` drives the surface blends. Callers keep the two consistent
    /// (the controller normalizes via parse + to_hex).
    pub fn generate(seed: Rgb, seed_hex: &str, is_dark: bool) -> Self {
        // Mode-independent roles come straight from the raw seed hex.
        let primary = seed_hex.to_string();
        let seed_container = format!("{seed_hex}{CONTAINER_ALPHA}");

        if is_dark {
            let surface = Rgb::blend(seed, DARK_SURFACE, DARK_SEED_SHARE).to_hex();
            Self {
                primary: primary.clone(),
                on_primary: "#ffffff".to_string(),
                primary_container: seed_container.clone(),
                on_primary_container: primary.clone(),
                secondary: "#ccc2dc".to_string(),
                on_secondary: "#332d41".to_string(),
                secondary_container: seed_container,
                on_secondary_container: primary,
                on_surface: "#e6e0e9".to_string(),
                surface_variant: "#49454f".to_string(),
                on_surface_variant: "#cac4d0".to_string(),
                surface_container: Rgb::blend(seed, DARK_SURFACE_CONTAINER, DARK_SEED_SHARE).to_hex(),
                surface_container_low: Rgb::blend(seed, DARK_SURFACE_CONTAINER_LOW, DARK_SEED_SHARE).to_hex(),
                surface_container_high: Rgb::blend(seed, DARK_SURFACE_CONTAINER_HIGH, DARK_SEED_SHARE).to_hex(),
                surface_container_highest: Rgb::blend(seed, DARK_SURFACE_CONTAINER_HIGHEST, DARK_SEED_SHARE).to_hex(),
                background: surface.clone(),
                on_background: "#e6e0e9".to_string(),
                outline: "#938f99".to_string(),
                outline_variant: "#49454f".to_string(),
                surface,
            }
        } else {
            let surface = Rgb::blend(seed, WHITE, 0.03).to_hex();
            Self {
                primary: primary.clone(),
                on_primary: "#ffffff".to_string(),
                primary_container: seed_container.clone(),
                on_primary_container: primary.clone(),
                secondary: Rgb::blend(seed, LIGHT_SECONDARY, 0.20).to_hex(),
                on_secondary: "#ffffff".to_string(),
                secondary_container: seed_container,
                on_secondary_container: primary,
                on_surface: "#1d1b20".to_string(),
                surface_variant: Rgb::blend(seed, LIGHT_SURFACE_VARIANT, 0.15).to_hex(),
                on_surface_variant: "#49454f".to_string(),
                surface_container: Rgb::blend(seed, WHITE, 0.06).to_hex(),
                surface_container_low: Rgb::blend(seed, WHITE, 0.04).to_hex(),
                surface_container_high: Rgb::blend(seed, WHITE, 0.08).to_hex(),
                surface_container_highest: Rgb::blend(seed, WHITE, 0.10).to_hex(),
                background: surface.clone(),
                on_background: "#1d1b20".to_string(),
                outline: "#79747e".to_string(),
                outline_variant: Rgb::blend(seed, LIGHT_OUTLINE_VARIANT, 0.10).to_hex(),
                surface,
            }
        }
    }

    /// All roles as `(name, value)` pairs, in [ROLE_NAMES] order.
    pub fn entries(&self) -> [(&'static str, &str); 20] {
        [
            ("primary", &self.primary),
            ("on-primary", &self.on_primary),
            ("primary-container", &self.primary_container),
            ("on-primary-container", &self.on_primary_container),
            ("secondary", &self.secondary),
            ("on-secondary", &self.on_secondary),
            ("secondary-container", &self.secondary_container),
            ("on-secondary-container", &self.on_secondary_container),
            ("surface", &self.surface),
            ("on-surface", &self.on_surface),
            ("surface-variant", &self.surface_variant),
            ("on-surface-variant", &self.on_surface_variant),
            ("surface-container", &self.surface_container),
            ("surface-container-low", &self.surface_container_low),
            ("surface-container-high", &self.surface_container_high),
            ("surface-container-highest", &self.surface_container_highest),
            ("background", &self.background),
            ("on-background", &self.on_background),
            ("outline", &self.outline),
            ("outline-variant", &self.outline_variant),
        ]
    }
}
