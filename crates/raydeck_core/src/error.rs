use thiserror::Error;

#[derive(Error, Debug)]
pub enum RaydeckError {
    #[error("prefs error: {0}")]
    Prefs(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, RaydeckError>;
