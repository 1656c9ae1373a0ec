//! Per-axis AABB collision resolution.
//!
//! Every function here is pure: it takes a rect, a proposed displacement and
//! the collidables in iteration order, and returns the displacement that may
//! actually be applied. Callers apply the result afterwards.
//!
//! Obstacles are visited in order and each test uses the displacement as
//! clamped so far, so when several obstacles overlap the last one that still
//! intersects decides the result.

use glam::IVec2;

use crate::api::config::PhysicsConfig;
use crate::core::rect::Rect;

// ---------------------------------------------------------------------------
// Integration helpers
// ---------------------------------------------------------------------------

/// Upward velocity for a jump started with `jump_hold` budget remaining.
/// A fuller budget gives a slightly stronger impulse.
pub fn jump_impulse(config: &PhysicsConfig, jump_hold: i32) -> i32 {
    let bonus = jump_hold.checked_div(config.jump_force).unwrap_or(0);
    -(config.jump_force + bonus)
}

/// One frame of gravity. Velocity only accumulates while it is at or
/// below `max_gravity`.
pub fn apply_gravity(config: &PhysicsConfig, vy: i32) -> i32 {
    if vy <= config.max_gravity {
        vy + config.gravity
    } else {
        vy
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Result of resolving a vertical move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalContact {
    /// Displacement to apply.
    pub dy: i32,
    /// True when a falling move was snapped onto an obstacle's top.
    pub landed: bool,
}

/// Resolve a vertical move. Only downward motion is clamped: an obstacle hit
/// while falling stops the rect flush on its top surface.
pub fn resolve_vertical(
    rect: &Rect,
    dy: i32,
    collidables: impl IntoIterator<Item = Rect>,
) -> VerticalContact {
    let mut contact = VerticalContact { dy, landed: false };
    for obstacle in collidables {
        if contact.dy > 0 && obstacle.intersects(&rect.translated(IVec2::new(0, contact.dy))) {
            contact.dy = obstacle.top() - rect.bottom();
            contact.landed = true;
        }
    }
    contact
}

/// Resolve a horizontal move by clamping to the exact gap on the approach side.
pub fn resolve_horizontal(rect: &Rect, dx: i32, collidables: impl IntoIterator<Item = Rect>) -> i32 {
    let mut dx = dx;
    for obstacle in collidables {
        if !obstacle.intersects(&rect.translated(IVec2::new(dx, 0))) {
            continue;
        }
        if dx > 0 {
            dx = obstacle.left() - rect.right();
        } else if dx < 0 {
            dx = obstacle.right() - rect.left();
        }
    }
    dx
}

/// Resolve an enemy step. Falling snaps onto obstacle tops like the player,
/// but any horizontal hit cancels horizontal motion entirely.
pub fn resolve_enemy_step(
    rect: &Rect,
    step: IVec2,
    collidables: impl IntoIterator<Item = Rect>,
) -> IVec2 {
    let mut step = step;
    for obstacle in collidables {
        if step.y > 0 && obstacle.intersects(&rect.translated(IVec2::new(0, step.y))) {
            step.y = obstacle.top() - rect.bottom();
        }
        if step.x != 0 && obstacle.intersects(&rect.translated(IVec2::new(step.x, 0))) {
            step.x = 0;
        }
    }
    step
}
