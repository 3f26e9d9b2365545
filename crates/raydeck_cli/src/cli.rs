//! CLI argument definitions using clap derive macros.

use clap::{Parser, Subcommand, ValueEnum};

use raydeck_theme::ThemeMode;

/// Control-panel companion for the raydeck proxy client
#[derive(Parser)]
#[command(name = "raydeck", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Preview the generated theme palette for a seed color and mode
    Palette {
        /// Seed color as 6-digit hex (default: brand seed)
        #[arg(long)]
        seed: Option<String>,
        /// Theme mode to resolve
        #[arg(long, default_value = "auto")]
        mode: ModeArg,
        /// Treat the OS appearance as dark when resolving auto mode
        #[arg(long)]
        os_dark: bool,
    },
    /// Show or change the persisted theme preference
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
    /// List the preset seed color swatches
    Swatches,
}

#[derive(Subcommand)]
pub enum PrefsAction {
    /// Print the persisted mode and seed color
    Show,
    /// Set and persist the theme mode
    SetMode {
        mode: ModeArg,
    },
    /// Set and persist the seed color (6-digit hex)
    SetColor {
        color: String,
    },
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ModeArg {
    Light,
    Dark,
    #[default]
    Auto,
}

impl ModeArg {
    pub fn to_mode(self) -> ThemeMode {
        match self {
            ModeArg::Light => ThemeMode::Light,
            ModeArg::Dark => ThemeMode::Dark,
            ModeArg::Auto => ThemeMode::Auto,
        }
    }
}
