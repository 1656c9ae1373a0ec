use bytemuck::{Pod, Zeroable};
use glam::IVec2;

use crate::api::types::Color;
use crate::components::sprite::SpriteHandle;
use crate::core::rect::Rect;
use crate::renderer::traits::RenderTarget;

/// Draw command kinds as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum DrawKind {
    Clear = 0,
    Blit = 1,
    FillRect = 2,
}

/// Per-command data written to shared memory for the browser renderer.
/// 12 floats = 48 bytes stride, as laid out in `bridge::protocol`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct DrawCommand {
    /// A [`DrawKind`] discriminant.
    pub kind: f32,
    /// Destination rectangle in screen space.
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Sheet index (blits only).
    pub sheet: f32,
    /// Source rectangle within the sheet (blits only).
    pub src_x: f32,
    pub src_y: f32,
    pub src_w: f32,
    pub src_h: f32,
    /// 1.0 = mirror horizontally.
    pub flip: f32,
    /// Packed 0xRRGGBB (clears and fills only).
    pub color: f32,
}

impl DrawCommand {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn clear(color: Color) -> Self {
        Self {
            kind: DrawKind::Clear as u32 as f32,
            color: color.packed(),
            ..Default::default()
        }
    }

    pub fn blit(sprite: &SpriteHandle, at: IVec2) -> Self {
        Self {
            kind: DrawKind::Blit as u32 as f32,
            x: at.x as f32,
            y: at.y as f32,
            w: sprite.size.x as f32,
            h: sprite.size.y as f32,
            sheet: sprite.sheet.0 as f32,
            src_x: sprite.source.x as f32,
            src_y: sprite.source.y as f32,
            src_w: sprite.source.width as f32,
            src_h: sprite.source.height as f32,
            flip: if sprite.flip { 1.0 } else { 0.0 },
            color: 0.0,
        }
    }

    pub fn fill_rect(rect: Rect, color: Color) -> Self {
        Self {
            kind: DrawKind::FillRect as u32 as f32,
            x: rect.x as f32,
            y: rect.y as f32,
            w: rect.width as f32,
            h: rect.height as f32,
            color: color.packed(),
            ..Default::default()
        }
    }
}

/// Bounded list of draw commands for one frame.
pub struct RenderBuffer {
    commands: Vec<DrawCommand>,
    capacity: usize,
    /// Commands rejected this frame because the buffer was full.
    dropped: usize,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(512)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
            capacity,
            dropped: 0,
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.dropped = 0;
    }

    pub fn push(&mut self, command: DrawCommand) {
        if self.commands.len() >= self.capacity {
            if self.dropped == 0 {
                log::warn!("render buffer full ({} commands), dropping draws", self.capacity);
            }
            self.dropped += 1;
            return;
        }
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn command_count(&self) -> u32 {
        self.commands.len() as u32
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Flat float view of the commands, for shared-memory reads.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.commands)
    }

    /// Raw pointer to command data for shared-memory reads.
    pub fn commands_ptr(&self) -> *const f32 {
        self.commands.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderTarget for RenderBuffer {
    fn clear(&mut self, color: Color) {
        self.push(DrawCommand::clear(color));
    }

    fn blit(&mut self, sprite: &SpriteHandle, at: IVec2) {
        self.push(DrawCommand::blit(sprite, at));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawCommand::fill_rect(rect, color));
    }
}
