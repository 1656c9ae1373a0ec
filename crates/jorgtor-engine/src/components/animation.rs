//! Sprite selection from physical state.
//!
//! Neither state enum is stored: both are recomputed every frame from
//! velocity (player) or tick count (enemy) and only pick which sprite to draw.

use glam::IVec2;

/// Player pose, derived from velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerState {
    Static,
    Walking,
    Jumping,
    Falling,
}

impl PlayerState {
    /// Vertical motion takes precedence over horizontal motion.
    pub fn classify(velocity: IVec2) -> Self {
        if velocity.y < 0 {
            PlayerState::Jumping
        } else if velocity.y > 0 {
            PlayerState::Falling
        } else if velocity.x != 0 {
            PlayerState::Walking
        } else {
            PlayerState::Static
        }
    }

    /// Sprites face right; moving left mirrors them.
    pub fn flip(velocity: IVec2) -> bool {
        velocity.x < 0
    }
}

/// Enemy walk frame, derived from the enemy's tick count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyState {
    Idle,
    Step,
}

impl EnemyState {
    /// Alternates every `delay` ticks.
    pub fn at_tick(tick: u32, delay: u32) -> Self {
        if delay == 0 || (tick / delay) % 2 == 0 {
            EnemyState::Idle
        } else {
            EnemyState::Step
        }
    }
}

/// Frame counter for a looping sprite sequence.
///
/// Animated sequences advance one frame every `delay` calls. Non-animated
/// calls refresh immediately, so single-frame poses show up on the very
/// frame the state changes. The frame index carries over between
/// sequences and wraps to zero once it runs past the current one.
#[derive(Debug, Clone)]
pub struct SpriteCycle {
    delay: u32,
    counter: u32,
    frame: usize,
}

impl SpriteCycle {
    pub fn new(delay: u32) -> Self {
        Self {
            delay,
            counter: delay,
            frame: 0,
        }
    }

    /// Advance one tick through a sequence of `frame_count` sprites.
    /// Returns the index to show when the displayed sprite should change.
    pub fn advance(&mut self, frame_count: usize, animated: bool) -> Option<usize> {
        if frame_count == 0 {
            return None;
        }
        if !animated {
            self.counter = self.delay;
        }
        if self.counter < self.delay {
            self.counter += 1;
            return None;
        }
        if self.frame >= frame_count {
            self.frame = 0;
        }
        let shown = self.frame;
        self.frame += 1;
        self.counter = 0;
        Some(shown)
    }

    /// Index of the next frame to show.
    pub fn frame(&self) -> usize {
        self.frame
    }
}
