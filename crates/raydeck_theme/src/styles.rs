//! Live style bindings: the applied role->color map the rendering surface reads.
//!
//! A [StyleSheet] is built in full from one palette and swapped in as a unit,
//! so consumers never observe a half-updated theme. Only the controller's
//! apply step writes it.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::palette::RolePalette;

/// Scroll-affordance tint, dark appearance. Fixed neutrals, never seed-derived.
pub const SCROLLBAR_THUMB_DARK: &str = "rgba(255, 255, 255, 0.3)";
pub const SCROLLBAR_THUMB_HOVER_DARK: &str = "rgba(255, 255, 255, 0.5)";
/// Scroll-affordance tint, light appearance.
pub const SCROLLBAR_THUMB_LIGHT: &str = "rgba(128, 128, 128, 0.4)";
pub const SCROLLBAR_THUMB_HOVER_LIGHT: &str = "rgba(128, 128, 128, 0.6)";

/// One complete set of style bindings: every palette role plus the two
/// scrollbar keys.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleSheet {
    entries: BTreeMap<String, String>,
}

impl StyleSheet {
    /// Builds the full sheet for a palette and effective appearance.
    pub fn from_palette(palette: &RolePalette, is_dark: bool) -> Self {
        let mut entries = BTreeMap::new();
        for (name, value) in palette.entries() {
            entries.insert(name.to_string(), value.to_string());
        }
        let (thumb, thumb_hover) = if is_dark {
            (SCROLLBAR_THUMB_DARK, SCROLLBAR_THUMB_HOVER_DARK)
        } else {
            (SCROLLBAR_THUMB_LIGHT, SCROLLBAR_THUMB_HOVER_LIGHT)
        };
        entries.insert("scrollbar-thumb".to_string(), thumb.to_string());
        entries.insert("scrollbar-thumb-hover".to_string(), thumb_hover.to_string());
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Where applied styles land (DOM style variables, a TUI style table, a test
/// buffer). `apply` replaces the previous sheet wholesale.
pub trait StyleSurface {
    fn apply(&mut self, sheet: &StyleSheet);
}

/// Cloneable in-memory surface. The controller owns one handle and writes
/// through it; views hold clones and read the latest applied sheet.
#[derive(Clone, Debug, Default)]
pub struct SharedStyles {
    current: Rc<RefCell<StyleSheet>>,
}

impl SharedStyles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest applied sheet (cloned; the live copy stays controller-owned).
    pub fn snapshot(&self) -> StyleSheet {
        self.current.borrow().clone()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.current.borrow().get(key).map(str::to_string)
    }
}

impl StyleSurface for SharedStyles {
    fn apply(&mut self, sheet: &StyleSheet) {
        *self.current.borrow_mut() = sheet.clone();
    }
}
