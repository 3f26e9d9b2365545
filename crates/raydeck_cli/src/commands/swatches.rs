//! `raydeck swatches` — list the preset seed colors.

use anyhow::Result;
use console::style;

use raydeck_constant::theme::{DEFAULT_SEED, SWATCHES};

pub fn handle() -> Result<()> {
    for (name, hex) in SWATCHES {
        let marker = if *hex == DEFAULT_SEED { " (default)" } else { "" };
        println!("  {:<12} {}{}", style(*name).bold(), hex, marker);
    }
    Ok(())
}
