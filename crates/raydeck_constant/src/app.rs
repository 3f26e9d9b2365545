//! Application metadata constants

pub const NAME: &str = "raydeck";
pub const DISPLAY_NAME: &str = "Raydeck";
