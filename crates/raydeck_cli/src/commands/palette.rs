//! `raydeck palette` — run the real engine against an in-memory surface and
//! print every live style binding.

use anyhow::Result;
use console::style;

use raydeck_core::prefs::MemoryPrefs;
use raydeck_theme::{SharedAppearance, SharedStyles, ThemeController};

use crate::cli::ModeArg;

pub fn handle(seed: Option<String>, mode: ModeArg, os_dark: bool) -> Result<()> {
    let styles = SharedStyles::new();
    let os = SharedAppearance::new(os_dark);
    let mut controller = ThemeController::new(MemoryPrefs::new(), os, styles.clone());
    controller.init();
    if let Some(seed) = seed {
        controller.set_seed_color(&seed);
    }
    controller.set_mode(mode.to_mode());

    let is_dark = controller.mode().resolve_is_dark(os_dark);
    println!(
        "{} seed {} mode {} ({})",
        style("palette").bold(),
        style(controller.seed_hex()).cyan(),
        controller.mode().as_str(),
        if is_dark { "dark" } else { "light" },
    );
    println!();

    for (key, value) in styles.snapshot().iter() {
        println!("  {:<26} {}", style(key).dim(), value);
    }
    Ok(())
}
