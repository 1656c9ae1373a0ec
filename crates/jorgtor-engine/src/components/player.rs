use glam::IVec2;

use crate::api::config::{PhysicsConfig, Viewport};
use crate::assets::registry::SpriteCache;
use crate::components::animation::{PlayerState, SpriteCycle};
use crate::core::physics::{apply_gravity, jump_impulse, resolve_horizontal, resolve_vertical};
use crate::core::rect::Rect;
use crate::core::world::World;
use crate::input::queue::InputState;
use crate::renderer::traits::RenderTarget;

/// Sprite names for each player pose, all on one sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSprites {
    pub sheet: String,
    pub walking: Vec<String>,
    pub jumping: Vec<String>,
    pub falling: Vec<String>,
    pub standing: Vec<String>,
}

impl PlayerSprites {
    pub fn frames(&self, state: PlayerState) -> &[String] {
        match state {
            PlayerState::Walking => &self.walking,
            PlayerState::Jumping => &self.jumping,
            PlayerState::Falling => &self.falling,
            PlayerState::Static => &self.standing,
        }
    }

    /// Every sprite name used, for validating a sheet up front.
    pub fn all(&self) -> Vec<&str> {
        self.walking
            .iter()
            .chain(&self.jumping)
            .chain(&self.falling)
            .chain(&self.standing)
            .map(String::as_str)
            .collect()
    }
}

fn small_mario(ids: &[u32]) -> Vec<String> {
    ids.iter().map(|i| format!("small_mario_{}", i)).collect()
}

impl Default for PlayerSprites {
    fn default() -> Self {
        Self {
            sheet: "tile_set".to_string(),
            walking: small_mario(&[1, 2, 3]),
            jumping: small_mario(&[5]),
            falling: small_mario(&[6]),
            standing: small_mario(&[7]),
        }
    }
}

/// The player-controlled character.
///
/// `rect` is in screen space. While the world scrolls the player's x stays
/// put and the level moves underneath instead.
pub struct Player {
    pub rect: Rect,
    pub velocity: IVec2,
    pub can_jump: bool,
    /// Frames of jump input left before `can_jump` clears. Restored on landing.
    pub jump_hold: i32,
    physics: PhysicsConfig,
    sprites: PlayerSprites,
    cycle: SpriteCycle,
    shown: Option<(PlayerState, usize)>,
    flip: bool,
}

impl Player {
    /// A player standing still at `spawn`. Jumping unlocks on first ground contact.
    pub fn new(spawn: IVec2, size: IVec2, physics: PhysicsConfig, animation_delay: u32) -> Self {
        Self {
            rect: Rect::from_pos_size(spawn, size),
            velocity: IVec2::ZERO,
            can_jump: false,
            jump_hold: physics.max_jump_hold,
            physics,
            sprites: PlayerSprites::default(),
            cycle: SpriteCycle::new(animation_delay),
            shown: None,
            flip: false,
        }
    }

    pub fn with_sprites(mut self, sprites: PlayerSprites) -> Self {
        self.sprites = sprites;
        self
    }

    pub fn sprites(&self) -> &PlayerSprites {
        &self.sprites
    }

    pub fn state(&self) -> PlayerState {
        PlayerState::classify(self.velocity)
    }

    pub fn flip(&self) -> bool {
        self.flip
    }

    /// Run one frame: input, jump, gravity, vertical then horizontal
    /// collision, scroll, screen floor, animation.
    pub fn update(&mut self, input: &InputState, world: &mut World, viewport: &Viewport) {
        // Horizontal motion is not sticky. Right wins when both are held.
        self.velocity.x = 0;
        if input.left {
            self.velocity.x = -self.physics.move_speed;
        }
        if input.right {
            self.velocity.x = self.physics.move_speed;
        }

        // Re-triggers every frame jump is held until the budget runs out.
        if input.jump && self.can_jump {
            self.velocity.y = jump_impulse(&self.physics, self.jump_hold);
            self.jump_hold -= 1;
        }

        self.velocity.y = apply_gravity(&self.physics, self.velocity.y);
        if self.jump_hold <= 0 {
            self.can_jump = false;
        }

        let contact = resolve_vertical(&self.rect, self.velocity.y, world.collidables());
        self.velocity.y = contact.dy;
        if contact.landed {
            self.land();
        }
        self.rect.y += contact.dy;

        let dx = resolve_horizontal(&self.rect, self.velocity.x, world.collidables());
        self.velocity.x = dx;
        if dx > 0 && self.rect.right() >= viewport.scroll_edge {
            world.scroll(dx);
        } else {
            self.rect.x += dx;
        }

        if self.rect.bottom() > viewport.height {
            self.rect.set_bottom(viewport.height);
            self.velocity.y = 0;
            self.land();
        }

        self.animate();
    }

    fn land(&mut self) {
        self.can_jump = true;
        self.jump_hold = self.physics.max_jump_hold;
    }

    fn animate(&mut self) {
        let state = self.state();
        let frame_count = self.sprites.frames(state).len();
        if let Some(index) = self.cycle.advance(frame_count, state == PlayerState::Walking) {
            self.shown = Some((state, index));
        }
        self.flip = PlayerState::flip(self.velocity);
    }

    /// Sprite currently shown, `None` before the first update.
    pub fn sprite_name(&self) -> Option<&str> {
        let (state, index) = self.shown?;
        self.sprites.frames(state).get(index).map(String::as_str)
    }

    pub fn render(&self, target: &mut dyn RenderTarget, cache: &mut SpriteCache) {
        let Some(name) = self.sprite_name() else {
            return;
        };
        match cache.get_sprite(&self.sprites.sheet, name, self.flip) {
            Ok(handle) => target.blit(&handle, self.rect.pos()),
            Err(err) => log::warn!("player not drawn: {}", err),
        }
    }
}
