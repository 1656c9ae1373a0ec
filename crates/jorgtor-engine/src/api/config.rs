use serde::{Deserialize, Serialize};

use crate::api::types::Color;
use crate::error::LevelFormatError;

/// Player movement tunables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Horizontal speed while a direction key is held (px/frame).
    pub move_speed: i32,
    /// Base jump impulse; also the divisor applied to the hold budget.
    pub jump_force: i32,
    /// Added to the vertical velocity every frame.
    pub gravity: i32,
    /// Gravity stops accumulating once velocity exceeds this.
    pub max_gravity: i32,
    /// Jump-hold budget restored on every landing.
    pub max_jump_hold: i32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            move_speed: 8,
            jump_force: 10,
            gravity: 2,
            max_gravity: 16,
            max_jump_hold: 10,
        }
    }
}

/// Enemy patrol tunables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    /// Leftward speed (px/frame).
    pub speed: i32,
    /// Fixed downward step (px/frame).
    pub descent: i32,
    /// Ticks between walk-frame swaps.
    pub animation_delay: u32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            speed: 2,
            descent: 4,
            animation_delay: 15,
        }
    }
}

/// Screen dimensions plus the x coordinate past which the world scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
    pub scroll_edge: i32,
}

impl Viewport {
    pub fn new(width: i32, height: i32, scroll_fraction: f32) -> Self {
        Self {
            width,
            height,
            scroll_edge: (width as f32 * scroll_fraction).floor() as i32,
        }
    }
}

/// Configuration for the engine, provided by the game.
/// Every field has a default so partial JSON documents are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Screen width in pixels (default: 1200).
    pub screen_width: i32,
    /// Screen height in pixels (default: 800).
    pub screen_height: i32,
    /// Target frame rate; one physics step per frame (default: 60).
    pub fps: u32,
    /// Fraction of the screen width the player's right edge may reach
    /// before the world scrolls instead (default: 0.5).
    pub scroll_fraction: f32,
    /// Clear colour drawn behind everything.
    pub background_color: Color,
    /// Every sliced sprite is scaled to this size.
    pub sprite_size: [i32; 2],
    /// Size of the player's collision box.
    pub player_size: [i32; 2],
    /// Frames between walk-cycle swaps for the player.
    pub player_animation_delay: u32,
    /// Maximum draw commands per frame (default: 512).
    pub max_draw_commands: usize,
    /// Draw collidable rectangles as filled boxes.
    pub debug_colliders: bool,
    pub physics: PhysicsConfig,
    pub enemy: EnemyConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 1200,
            screen_height: 800,
            fps: 60,
            scroll_fraction: 0.5,
            background_color: Color::rgb(150, 150, 255),
            sprite_size: [100, 100],
            player_size: [100, 100],
            player_animation_delay: 10,
            max_draw_commands: 512,
            debug_colliders: true,
            physics: PhysicsConfig::default(),
            enemy: EnemyConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse a config from a JSON string; absent keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, LevelFormatError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.screen_width, self.screen_height, self.scroll_fraction)
    }
}
