//! Level description parsing.
//!
//! A level is a JSON object keyed by category, each category holding a list
//! of `{x, y, width, height}` records:
//!
//! ```json
//! {
//!   "ground":  [{ "x": 0,   "y": 700, "width": 2000, "height": 100 }],
//!   "pipe":    [{ "x": 900, "y": 600, "width": 100,  "height": 100 }],
//!   "stairs":  [],
//!   "enemies": [{ "x": 1400, "y": 600, "width": 100, "height": 100 }],
//!   "spawn":   { "x": 100, "y": 500 },
//!   "background": { "sheet": "background", "sprite": "sky" }
//! }
//! ```
//!
//! The four lists are required. `spawn` and `background` are optional.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::rect::Rect;
use crate::error::LevelFormatError;

pub const GROUND_KEY: &str = "ground";
pub const PIPE_KEY: &str = "pipe";
pub const STAIRS_KEY: &str = "stairs";
pub const ENEMIES_KEY: &str = "enemies";
pub const SPAWN_KEY: &str = "spawn";
pub const BACKGROUND_KEY: &str = "background";

pub const DEFAULT_SPAWN: IVec2 = IVec2::new(100, 500);

const RECT_FIELDS: [&str; 4] = ["x", "y", "width", "height"];

/// A background image, named by sheet and sprite id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundRef {
    pub sheet: String,
    pub sprite: String,
}

/// Validated level contents, rectangles in world space.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelData {
    pub ground: Vec<Rect>,
    pub pipe: Vec<Rect>,
    pub stairs: Vec<Rect>,
    pub enemies: Vec<Rect>,
    pub spawn: IVec2,
    pub background: Option<BackgroundRef>,
}

impl LevelData {
    /// Parse a level from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, LevelFormatError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Parse a level from an already-decoded JSON value.
    pub fn from_value(value: &Value) -> Result<Self, LevelFormatError> {
        let root = value
            .as_object()
            .ok_or_else(|| LevelFormatError::NotAnObject("level".to_string()))?;

        for key in root.keys() {
            if !is_known_key(key) {
                log::warn!("ignoring unknown level key `{}`", key);
            }
        }

        let spawn = match root.get(SPAWN_KEY) {
            Some(value) => parse_spawn(value)?,
            None => DEFAULT_SPAWN,
        };
        let background = match root.get(BACKGROUND_KEY) {
            Some(value) => Some(serde_json::from_value(value.clone())?),
            None => None,
        };

        Ok(Self {
            ground: parse_category(root, GROUND_KEY)?,
            pipe: parse_category(root, PIPE_KEY)?,
            stairs: parse_category(root, STAIRS_KEY)?,
            enemies: parse_category(root, ENEMIES_KEY)?,
            spawn,
            background,
        })
    }
}

fn is_known_key(key: &str) -> bool {
    matches!(
        key,
        GROUND_KEY | PIPE_KEY | STAIRS_KEY | ENEMIES_KEY | SPAWN_KEY | BACKGROUND_KEY
    )
}

fn parse_category(root: &Map<String, Value>, key: &str) -> Result<Vec<Rect>, LevelFormatError> {
    let records = root
        .get(key)
        .ok_or_else(|| LevelFormatError::MissingCategory(key.to_string()))?
        .as_array()
        .ok_or_else(|| LevelFormatError::NotAList(key.to_string()))?;

    records
        .iter()
        .enumerate()
        .map(|(index, record)| parse_rect(record, key, index))
        .collect()
}

fn parse_rect(record: &Value, category: &str, index: usize) -> Result<Rect, LevelFormatError> {
    let object = record
        .as_object()
        .ok_or_else(|| LevelFormatError::NotAnObject(format!("{}[{}]", category, index)))?;

    let mut values = [0i32; 4];
    for (slot, field) in values.iter_mut().zip(RECT_FIELDS) {
        *slot = number_field(object, field).map_err(|problem| match problem {
            FieldProblem::Missing => LevelFormatError::MissingField {
                category: category.to_string(),
                index,
                field,
            },
            FieldProblem::Invalid => LevelFormatError::InvalidField {
                category: category.to_string(),
                index,
                field,
            },
        })?;
    }
    let [x, y, width, height] = values;
    if width < 0 || height < 0 {
        return Err(LevelFormatError::NegativeSize {
            category: category.to_string(),
            index,
        });
    }
    // Edges are computed every frame, so they must fit in an i32.
    if x.checked_add(width).is_none() || y.checked_add(height).is_none() {
        return Err(LevelFormatError::OutOfRange {
            category: category.to_string(),
            index,
        });
    }
    Ok(Rect::new(x, y, width, height))
}

fn parse_spawn(value: &Value) -> Result<IVec2, LevelFormatError> {
    let object = value
        .as_object()
        .ok_or_else(|| LevelFormatError::NotAnObject(SPAWN_KEY.to_string()))?;
    let field = |name: &'static str| {
        number_field(object, name).map_err(|problem| match problem {
            FieldProblem::Missing => LevelFormatError::MissingSpawnField(name),
            FieldProblem::Invalid => LevelFormatError::InvalidSpawnField(name),
        })
    };
    Ok(IVec2::new(field("x")?, field("y")?))
}

enum FieldProblem {
    Missing,
    Invalid,
}

/// Integers are taken as-is; floats are truncated toward zero.
fn number_field(object: &Map<String, Value>, field: &str) -> Result<i32, FieldProblem> {
    let value = object.get(field).ok_or(FieldProblem::Missing)?;
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64))
        .and_then(|n| i32::try_from(n).ok())
        .ok_or(FieldProblem::Invalid)
}
