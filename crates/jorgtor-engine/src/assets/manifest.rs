use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::rect::Rect;
use crate::error::{AssetLoadError, LevelFormatError, LoadError};

/// Slice metadata for one sprite sheet image.
/// A JSON map of sprite id to source rectangle, embedded by the game or
/// read from disk with [`SheetManifest::from_file`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SheetManifest {
    pub sprites: HashMap<String, SpriteSlice>,
}

/// Source rectangle of a named sprite within its sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSlice {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl From<SpriteSlice> for Rect {
    fn from(s: SpriteSlice) -> Self {
        Rect::new(s.x, s.y, s.width, s.height)
    }
}

impl SheetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, LevelFormatError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a manifest file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| AssetLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_json(&json)?)
    }

    pub fn get(&self, sprite: &str) -> Option<Rect> {
        self.sprites.get(sprite).map(|s| Rect::from(*s))
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_sheet_manifest() {
        let json = r#"{
            "small_mario_1": { "x": 0, "y": 8, "width": 16, "height": 16 },
            "small_mario_7": { "x": 96, "y": 8, "width": 16, "height": 16 }
        }"#;
        let manifest = SheetManifest::from_json(json).unwrap();
        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.get("small_mario_7"), Some(Rect::new(96, 8, 16, 16)));
        assert!(manifest.get("small_mario_9").is_none());
    }

    #[test]
    fn slice_missing_a_field_is_rejected() {
        let json = r#"{ "student_1": { "x": 0, "y": 0, "width": 16 } }"#;
        let err = SheetManifest::from_json(json).unwrap_err();
        assert!(matches!(err, LevelFormatError::Json(_)));
    }

    #[test]
    fn missing_file_is_an_asset_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SheetManifest::from_file(dir.path().join("students.json")).unwrap_err();
        assert!(matches!(err, LoadError::AssetLoad(AssetLoadError::Io { .. })));
    }

    #[test]
    fn reads_manifest_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{ "student_1": {{ "x": 1, "y": 2, "width": 3, "height": 4 }} }}"#).unwrap();
        let manifest = SheetManifest::from_file(&path).unwrap();
        assert_eq!(manifest.get("student_1"), Some(Rect::new(1, 2, 3, 4)));
    }
}
