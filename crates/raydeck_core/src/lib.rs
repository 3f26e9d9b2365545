pub mod error;
pub mod prefs;

pub use error::{RaydeckError, Result};
pub use prefs::{MemoryPrefs, PrefStore, SqlitePrefs};
