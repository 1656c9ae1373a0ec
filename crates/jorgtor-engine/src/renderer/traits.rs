//! Drawing surface contract.
//!
//! The engine never owns pixels. Everything it draws goes through a
//! `RenderTarget`: the wasm bridge records into a [`RenderBuffer`] that the
//! browser replays, tests record into whatever they like.
//!
//! [`RenderBuffer`]: super::instance::RenderBuffer

use glam::IVec2;

use crate::api::types::Color;
use crate::components::sprite::SpriteHandle;
use crate::core::rect::Rect;

/// An abstract drawable surface.
///
/// # Example Implementation
///
/// ```ignore
/// struct CanvasTarget { ctx: web_sys::CanvasRenderingContext2d, sheets: Vec<HtmlImageElement> }
///
/// impl RenderTarget for CanvasTarget {
///     fn clear(&mut self, color: Color) { /* fillRect over the canvas */ }
///     fn blit(&mut self, sprite: &SpriteHandle, at: IVec2) { /* drawImage with source rect */ }
///     fn fill_rect(&mut self, rect: Rect, color: Color) { /* fillRect */ }
/// }
/// ```
pub trait RenderTarget {
    /// Fill the whole surface.
    fn clear(&mut self, color: Color);

    /// Draw a sprite with its top-left corner at `at` (screen space).
    fn blit(&mut self, sprite: &SpriteHandle, at: IVec2);

    /// Fill a screen-space rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);
}
