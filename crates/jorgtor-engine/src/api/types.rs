use serde::{Deserialize, Serialize};

/// An opaque RGB colour. Serialized as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0);
    pub const GROUND: Color = Color(160, 82, 45);
    pub const PIPE: Color = Color(40, 170, 60);
    pub const STAIRS: Color = Color(120, 120, 120);
    pub const ENEMY: Color = Color(200, 40, 40);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    /// Pack into a single float (0xRRGGBB) for the draw-command wire format.
    /// Exact, since 24 bits fit in an f32 mantissa.
    pub fn packed(&self) -> f32 {
        (((self.0 as u32) << 16) | ((self.1 as u32) << 8) | self.2 as u32) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_as_hex_triplet() {
        assert_eq!(Color::rgb(150, 150, 255).packed(), 0x9696FF as f32);
        assert_eq!(Color::BLACK.packed(), 0.0);
    }

    #[test]
    fn deserializes_from_array() {
        let c: Color = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(c, Color(1, 2, 3));
    }
}
