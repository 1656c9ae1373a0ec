use glam::IVec2;

use crate::api::config::EnemyConfig;
use crate::components::animation::EnemyState;
use crate::core::rect::Rect;

/// Sprite names for the enemy walk cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnemySprites {
    pub sheet: String,
    pub idle: String,
    pub step: String,
}

impl EnemySprites {
    pub fn get(&self, state: EnemyState) -> &str {
        match state {
            EnemyState::Idle => &self.idle,
            EnemyState::Step => &self.step,
        }
    }
}

impl Default for EnemySprites {
    fn default() -> Self {
        Self {
            sheet: "students".to_string(),
            idle: "student_1".to_string(),
            step: "student_2".to_string(),
        }
    }
}

/// A patrolling enemy: walks left at a fixed speed and drops at a fixed
/// rate, with no velocity integration. Position is in world space.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub rect: Rect,
    speed: i32,
    descent: i32,
    animation_delay: u32,
    tick: u32,
}

impl Enemy {
    pub fn new(rect: Rect, config: &EnemyConfig) -> Self {
        Self {
            rect,
            speed: config.speed,
            descent: config.descent,
            animation_delay: config.animation_delay,
            tick: 0,
        }
    }

    /// The move attempted every frame before collision.
    pub fn intended_step(&self) -> IVec2 {
        IVec2::new(-self.speed, self.descent)
    }

    /// Apply an already-resolved step and advance the walk animation.
    pub fn advance(&mut self, step: IVec2) {
        self.rect.translate(step);
        self.tick = self.tick.wrapping_add(1);
    }

    /// Walk frame, independent of whether the enemy actually moved.
    pub fn state(&self) -> EnemyState {
        EnemyState::at_tick(self.tick, self.animation_delay)
    }

    pub fn screen_rect(&self, scroll_offset: i32) -> Rect {
        self.rect.translated(IVec2::new(-scroll_offset, 0))
    }
}
