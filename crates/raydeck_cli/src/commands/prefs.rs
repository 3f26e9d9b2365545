//! `raydeck prefs` — read and mutate the persisted theme preference through
//! the real controller and SQLite store.

use anyhow::Result;
use console::style;

use raydeck_core::prefs::{PrefStore, SqlitePrefs};
use raydeck_theme::{NoOsSignal, SharedStyles, ThemeController, COLOR_KEY, THEME_KEY};

use crate::cli::{ModeArg, PrefsAction};

pub fn handle(action: PrefsAction) -> Result<()> {
    match action {
        PrefsAction::Show => show(),
        PrefsAction::SetMode { mode } => set_mode(mode),
        PrefsAction::SetColor { color } => set_color(&color),
    }
}

fn show() -> Result<()> {
    let store = SqlitePrefs::open()?;
    let mode = store
        .get(THEME_KEY)?
        .unwrap_or_else(|| "auto".to_string());
    let color = store
        .get(COLOR_KEY)?
        .unwrap_or_else(|| raydeck_constant::theme::DEFAULT_SEED.to_string());
    println!("{} {}", style("mode: ").dim(), mode);
    println!("{} {}", style("color:").dim(), color);
    Ok(())
}

fn set_mode(mode: ModeArg) -> Result<()> {
    let mut controller = controller()?;
    controller.set_mode(mode.to_mode());
    println!("mode set to {}", style(controller.mode().as_str()).bold());
    Ok(())
}

fn set_color(color: &str) -> Result<()> {
    let mut controller = controller()?;
    controller.set_seed_color(color);
    // Malformed input falls back to the brand seed rather than erroring.
    println!("seed color set to {}", style(controller.seed_hex()).bold());
    Ok(())
}

fn controller() -> Result<ThemeController> {
    let store = SqlitePrefs::open()?;
    let mut controller = ThemeController::new(store, NoOsSignal, SharedStyles::new());
    controller.init();
    Ok(controller)
}
