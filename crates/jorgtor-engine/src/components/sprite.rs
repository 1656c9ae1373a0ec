use glam::IVec2;

use crate::core::rect::Rect;

/// Identifies a registered sprite sheet.
/// Index into the SpriteCache's sheet list, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SheetId(pub u32);

/// Memoization key for sliced sprites.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpriteKey {
    pub sheet: String,
    pub sprite: String,
    pub flip: bool,
}

impl SpriteKey {
    pub fn new(sheet: &str, sprite: &str, flip: bool) -> Self {
        Self {
            sheet: sheet.to_string(),
            sprite: sprite.to_string(),
            flip,
        }
    }
}

/// A sliced, scaled sprite ready to blit.
/// The renderer on the other side of the bridge owns the pixels; this only
/// says which part of which sheet image to draw and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteHandle {
    /// Which sheet image to sample.
    pub sheet: SheetId,
    /// Source rectangle within the sheet image.
    pub source: Rect,
    /// On-screen size after scaling.
    pub size: IVec2,
    /// Mirror horizontally.
    pub flip: bool,
}
