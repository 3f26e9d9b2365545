//! Command dispatch.

pub mod palette;
pub mod prefs;
pub mod swatches;

use anyhow::Result;

use crate::cli::{Cli, Command};

pub fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Palette { seed, mode, os_dark } => palette::handle(seed, mode, os_dark),
        Command::Prefs { action } => prefs::handle(action),
        Command::Swatches => swatches::handle(),
    }
}
