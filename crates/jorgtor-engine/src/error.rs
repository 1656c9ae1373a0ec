//! Load-time error taxonomy.
//!
//! Everything here is raised while reading level, sprite or config data.
//! Once a game is initialized the per-frame code paths have no error cases.

use std::path::PathBuf;
use thiserror::Error;

/// Malformed or incomplete level / sprite / config data.
#[derive(Debug, Error)]
pub enum LevelFormatError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0} must be a JSON object")]
    NotAnObject(String),
    #[error("missing required category `{0}`")]
    MissingCategory(String),
    #[error("category `{0}` must be a list of rectangles")]
    NotAList(String),
    #[error("{category}[{index}] is missing field `{field}`")]
    MissingField {
        category: String,
        index: usize,
        field: &'static str,
    },
    #[error("{category}[{index}].{field} is not a number")]
    InvalidField {
        category: String,
        index: usize,
        field: &'static str,
    },
    #[error("{category}[{index}] has a negative size")]
    NegativeSize { category: String, index: usize },
    #[error("{category}[{index}] extends past the coordinate range")]
    OutOfRange { category: String, index: usize },
    #[error("spawn is missing field `{0}`")]
    MissingSpawnField(&'static str),
    #[error("spawn.{0} is not a number")]
    InvalidSpawnField(&'static str),
    #[error("sheet `{sheet}` has no sprite `{sprite}`")]
    UnknownSprite { sheet: String, sprite: String },
}

/// Missing or unreadable asset files.
#[derive(Debug, Error)]
pub enum AssetLoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("sprite sheet `{0}` was never loaded")]
    UnknownSheet(String),
}

/// Any fatal startup failure.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    LevelFormat(#[from] LevelFormatError),
    #[error(transparent)]
    AssetLoad(#[from] AssetLoadError),
}
