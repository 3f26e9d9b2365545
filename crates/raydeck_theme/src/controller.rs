//! Theme controller: owns mode + seed, persists them, applies palettes.
//!
//! One explicit instance instead of ambient globals: views subscribe for
//! change events and read colors from the shared style surface. Everything
//! runs on the UI event loop; setters persist and apply before returning,
//! so a read immediately after a set never sees a stale palette.

use std::cell::Cell;
use std::rc::Rc;

use raydeck_core::prefs::PrefStore;
use tracing::{debug, warn};

use crate::appearance::ThemeMode;
use crate::palette::RolePalette;
use crate::rgb::Rgb;
use crate::styles::{StyleSheet, StyleSurface};

/// Persisted key for the theme mode (`light` / `dark` / `auto`).
pub const THEME_KEY: &str = "theme";
/// Persisted key for the seed color (6-digit hex).
pub const COLOR_KEY: &str = "themeColor";
/// Brand default seed, used when nothing valid is persisted.
pub const DEFAULT_SEED_HEX: &str = "#6750a4";

/// OS-level "prefers dark" signal. Implementations read the current value
/// synchronously; change delivery is the embedder's job (it calls
/// [ThemeController::os_appearance_changed] when the OS notifies).
pub trait AppearanceSource {
    fn prefers_dark(&self) -> bool;
}

/// No OS signal available: auto mode degrades to light.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOsSignal;

impl AppearanceSource for NoOsSignal {
    fn prefers_dark(&self) -> bool {
        false
    }
}

/// Cloneable flag bridging a platform appearance query. The platform layer
/// keeps one clone and flips it on OS change events; the controller reads
/// through its own clone.
#[derive(Clone, Debug, Default)]
pub struct SharedAppearance {
    prefers_dark: Rc<Cell<bool>>,
}

impl SharedAppearance {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            prefers_dark: Rc::new(Cell::new(prefers_dark)),
        }
    }

    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        self.prefers_dark.set(prefers_dark);
    }
}

impl AppearanceSource for SharedAppearance {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark.get()
    }
}

/// Synchronous change notification delivered to subscribed views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ThemeEvent {
    ModeChanged(ThemeMode),
    SeedChanged(String),
    /// A palette was written to the style surface (also fires on OS-driven
    /// re-applies in auto mode, where neither setter ran).
    Applied { is_dark: bool },
}

/// Handle for unsubscribing an observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(&ThemeEvent)>;

pub struct ThemeController {
    mode: ThemeMode,
    seed: Rgb,
    seed_hex: String,
    store: Box<dyn PrefStore>,
    os: Box<dyn AppearanceSource>,
    surface: Box<dyn StyleSurface>,
    observers: Vec<(ObserverId, Observer)>,
    next_observer: u64,
    os_subscribed: bool,
}

impl ThemeController {
    /// New controller with defaults (auto mode, brand seed). Nothing is read
    /// or applied until [init](Self::init).
    pub fn new(
        store: impl PrefStore + 'static,
        os: impl AppearanceSource + 'static,
        surface: impl StyleSurface + 'static,
    ) -> Self {
        Self {
            mode: ThemeMode::Auto,
            seed: Rgb::DEFAULT,
            seed_hex: DEFAULT_SEED_HEX.to_string(),
            store: Box::new(store),
            os: Box::new(os),
            surface: Box::new(surface),
            observers: Vec::new(),
            next_observer: 0,
            os_subscribed: false,
        }
    }

    /// Loads the persisted preference (silent defaults when missing or
    /// unparsable), applies the palette, and arms the OS-change
    /// subscription. Calling init again reloads and re-applies but never
    /// arms a second subscription.
    pub fn init(&mut self) {
        match self.store.get(THEME_KEY) {
            Ok(Some(raw)) => match ThemeMode::parse(&raw) {
                Some(mode) => self.mode = mode,
                None => {
                    warn!(value = %raw, "unrecognized persisted theme mode, using auto");
                    self.mode = ThemeMode::Auto;
                }
            },
            Ok(None) => {}
            Err(err) => warn!(error = %err, "failed to read persisted theme mode"),
        }
        match self.store.get(COLOR_KEY) {
            Ok(Some(raw)) => self.adopt_seed(&raw),
            Ok(None) => {}
            Err(err) => warn!(error = %err, "failed to read persisted seed color"),
        }
        self.apply();
        self.os_subscribed = true;
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn seed(&self) -> Rgb {
        self.seed
    }

    /// Normalized seed hex (lower-case, `#` prefix).
    pub fn seed_hex(&self) -> &str {
        &self.seed_hex
    }

    /// Sets the mode, persists it, and applies the resulting palette before
    /// returning.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.persist(THEME_KEY, mode.as_str());
        self.apply();
        self.notify(&ThemeEvent::ModeChanged(mode));
    }

    /// Sets the seed color (malformed input falls back to the default
    /// seed), persists it, and applies under the current mode.
    pub fn set_seed_color(&mut self, hex: &str) {
        self.adopt_seed(hex);
        let persisted = self.seed_hex.clone();
        self.persist(COLOR_KEY, &persisted);
        self.apply();
        self.notify(&ThemeEvent::SeedChanged(persisted));
    }

    /// Cycles light -> dark -> auto -> light.
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.next());
    }

    /// Handler for OS appearance change notifications. Idempotent; only
    /// re-applies while the subscription is armed and the mode is auto.
    pub fn os_appearance_changed(&mut self) {
        if self.os_subscribed && self.mode == ThemeMode::Auto {
            self.apply();
        }
    }

    /// Registers a synchronous observer; returns a handle for
    /// [unsubscribe](Self::unsubscribe).
    pub fn subscribe(&mut self, observer: impl FnMut(&ThemeEvent) + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns false when the id is unknown.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Resolve appearance, generate the palette, and swap the full style
    /// sheet in one batch. The only writer of the style surface.
    fn apply(&mut self) {
        let is_dark = self.mode.resolve_is_dark(self.os.prefers_dark());
        let palette = RolePalette::generate(self.seed, &self.seed_hex, is_dark);
        let sheet = StyleSheet::from_palette(&palette, is_dark);
        self.surface.apply(&sheet);
        debug!(mode = self.mode.as_str(), seed = %self.seed_hex, is_dark, "applied theme");
        self.notify(&ThemeEvent::Applied { is_dark });
    }

    /// Normalize and adopt a seed hex (parse never fails; bad input becomes
    /// the default seed).
    fn adopt_seed(&mut self, hex: &str) {
        self.seed = Rgb::parse(hex);
        self.seed_hex = self.seed.to_hex();
    }

    fn persist(&mut self, key: &str, value: &str) {
        // Store failures degrade to in-memory state; theming never fails over I/O.
        if let Err(err) = self.store.set(key, value) {
            warn!(error = %err, key, "failed to persist theme preference");
        }
    }

    fn notify(&mut self, event: &ThemeEvent) {
        for (_, observer) in &mut self.observers {
            observer(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::SharedStyles;
    use raydeck_core::prefs::{MemoryPrefs, PrefStore};
    use std::cell::RefCell;

    fn controller_with(
        store: MemoryPrefs,
        os: SharedAppearance,
    ) -> (ThemeController, SharedStyles) {
        let styles = SharedStyles::new();
        let controller = ThemeController::new(store, os, styles.clone());
        (controller, styles)
    }

    #[test]
    fn test_init_defaults_when_store_empty() {
        let (mut controller, styles) = controller_with(MemoryPrefs::new(), SharedAppearance::new(false));
        controller.init();
        assert_eq!(controller.mode(), ThemeMode::Auto);
        assert_eq!(controller.seed_hex(), "#6750a4");
        // auto + os light -> light palette
        assert_eq!(styles.get("on-surface").as_deref(), Some("#1d1b20"));
        assert_eq!(styles.get("primary").as_deref(), Some("#6750a4"));
    }

    #[test]
    fn test_init_loads_persisted_preference() {
        let mut store = MemoryPrefs::new();
        store.set(THEME_KEY, "dark").unwrap();
        store.set(COLOR_KEY, "#4CAF50").unwrap();
        let (mut controller, styles) = controller_with(store, SharedAppearance::new(false));
        controller.init();
        assert_eq!(controller.mode(), ThemeMode::Dark);
        assert_eq!(controller.seed_hex(), "#4caf50");
        assert_eq!(styles.get("primary").as_deref(), Some("#4caf50"));
        assert_eq!(styles.get("on-surface").as_deref(), Some("#e6e0e9"));
    }

    #[test]
    fn test_init_with_garbage_preference_defaults_silently() {
        let mut store = MemoryPrefs::new();
        store.set(THEME_KEY, "midnight").unwrap();
        store.set(COLOR_KEY, "chartreuse").unwrap();
        let (mut controller, _styles) = controller_with(store, SharedAppearance::new(false));
        controller.init();
        assert_eq!(controller.mode(), ThemeMode::Auto);
        assert_eq!(controller.seed_hex(), "#6750a4");
    }

    #[test]
    fn test_set_mode_persists_and_applies_synchronously() {
        let (mut controller, styles) = controller_with(MemoryPrefs::new(), SharedAppearance::new(false));
        controller.init();
        controller.set_mode(ThemeMode::Dark);
        assert_eq!(controller.store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        // The palette is already live when set_mode returns.
        assert_eq!(styles.get("on-surface").as_deref(), Some("#e6e0e9"));
        assert_eq!(styles.get("scrollbar-thumb").as_deref(), Some("rgba(255, 255, 255, 0.3)"));
    }

    #[test]
    fn test_set_seed_color_normalizes_and_applies() {
        let (mut controller, styles) = controller_with(MemoryPrefs::new(), SharedAppearance::new(false));
        controller.init();
        controller.set_seed_color("2196F3");
        assert_eq!(controller.seed_hex(), "#2196f3");
        assert_eq!(controller.store.get(COLOR_KEY).unwrap().as_deref(), Some("#2196f3"));
        assert_eq!(styles.get("primary").as_deref(), Some("#2196f3"));
        assert_eq!(styles.get("primary-container").as_deref(), Some("#2196f330"));
    }

    #[test]
    fn test_set_seed_color_malformed_uses_default() {
        let (mut controller, styles) = controller_with(MemoryPrefs::new(), SharedAppearance::new(false));
        controller.init();
        controller.set_seed_color("not-a-color");
        assert_eq!(controller.seed_hex(), "#6750a4");
        assert_eq!(styles.get("primary").as_deref(), Some("#6750a4"));
    }

    #[test]
    fn test_toggle_mode_cycles_and_persists() {
        let (mut controller, _styles) = controller_with(MemoryPrefs::new(), SharedAppearance::new(false));
        controller.init();
        controller.set_mode(ThemeMode::Light);
        controller.toggle_mode();
        assert_eq!(controller.mode(), ThemeMode::Dark);
        controller.toggle_mode();
        assert_eq!(controller.mode(), ThemeMode::Auto);
        assert_eq!(controller.store.get(THEME_KEY).unwrap().as_deref(), Some("auto"));
        controller.toggle_mode();
        assert_eq!(controller.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_auto_mode_follows_os_changes_without_setter() {
        let os = SharedAppearance::new(true);
        let (mut controller, styles) = controller_with(MemoryPrefs::new(), os.clone());
        controller.init();
        assert_eq!(styles.get("on-surface").as_deref(), Some("#e6e0e9"));

        os.set_prefers_dark(false);
        controller.os_appearance_changed();
        assert_eq!(styles.get("on-surface").as_deref(), Some("#1d1b20"));
        assert_eq!(styles.get("scrollbar-thumb").as_deref(), Some("rgba(128, 128, 128, 0.4)"));
    }

    #[test]
    fn test_explicit_mode_ignores_os_changes() {
        let os = SharedAppearance::new(false);
        let (mut controller, styles) = controller_with(MemoryPrefs::new(), os.clone());
        controller.init();
        controller.set_mode(ThemeMode::Light);
        os.set_prefers_dark(true);
        controller.os_appearance_changed();
        assert_eq!(styles.get("on-surface").as_deref(), Some("#1d1b20"));
    }

    #[test]
    fn test_os_change_before_init_is_ignored() {
        let os = SharedAppearance::new(true);
        let (mut controller, styles) = controller_with(MemoryPrefs::new(), os.clone());
        controller.os_appearance_changed();
        assert!(styles.snapshot().is_empty());
        controller.init();
        assert!(!styles.snapshot().is_empty());
    }

    #[test]
    fn test_observers_notified_synchronously() {
        let (mut controller, _styles) = controller_with(MemoryPrefs::new(), SharedAppearance::new(false));
        controller.init();
        let seen: Rc<RefCell<Vec<ThemeEvent>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let id = controller.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        controller.set_mode(ThemeMode::Dark);
        assert!(seen.borrow().contains(&ThemeEvent::ModeChanged(ThemeMode::Dark)));
        assert!(seen.borrow().contains(&ThemeEvent::Applied { is_dark: true }));

        controller.set_seed_color("#009688");
        assert!(seen
            .borrow()
            .contains(&ThemeEvent::SeedChanged("#009688".to_string())));

        assert!(controller.unsubscribe(id));
        let events_before = seen.borrow().len();
        controller.set_mode(ThemeMode::Light);
        assert_eq!(seen.borrow().len(), events_before);
        assert!(!controller.unsubscribe(id));
    }

    #[test]
    fn test_reinit_does_not_duplicate_subscription_effects() {
        let os = SharedAppearance::new(true);
        let (mut controller, _styles) = controller_with(MemoryPrefs::new(), os.clone());
        controller.init();
        controller.init();
        let applies: Rc<RefCell<usize>> = Rc::new(RefCell::new(0));
        let counter = applies.clone();
        controller.subscribe(move |event| {
            if matches!(event, ThemeEvent::Applied { .. }) {
                *counter.borrow_mut() += 1;
            }
        });
        os.set_prefers_dark(false);
        controller.os_appearance_changed();
        assert_eq!(*applies.borrow(), 1);
    }
}
