//! Shared-memory layout read by the browser renderer.
//! The host reads it through `get_header_ptr` and `get_draw_commands_ptr`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 8 floats]
//! [Draw commands: max_draw_commands × 12 floats]
//! ```
//!
//! Capacities are written once into the header at init.
//! The host reads them from the header to compute offsets dynamically.

use crate::api::config::GameConfig;
use crate::renderer::instance::DrawCommand;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 8;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_COMMANDS: usize = 2;
pub const HEADER_COMMAND_COUNT: usize = 3;
pub const HEADER_SCREEN_WIDTH: usize = 4;
pub const HEADER_SCREEN_HEIGHT: usize = 5;
pub const HEADER_PROTOCOL_VERSION: usize = 6;
pub const HEADER_DROPPED_COMMANDS: usize = 7;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per draw command (wire format, never changes).
pub const COMMAND_FLOATS: usize = DrawCommand::FLOATS;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum draw commands per frame.
    pub max_draw_commands: usize,
    /// Size of the command section in floats.
    pub command_data_floats: usize,
    /// Offset (in floats) where command data begins.
    pub command_data_offset: usize,
    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    pub fn new(max_draw_commands: usize) -> Self {
        let command_data_floats = max_draw_commands * COMMAND_FLOATS;
        let command_data_offset = HEADER_FLOATS;
        let buffer_total_floats = command_data_offset + command_data_floats;

        Self {
            max_draw_commands,
            command_data_floats,
            command_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_draw_commands)
    }

    /// Header with the static fields filled in.
    pub fn header(&self, config: &GameConfig) -> [f32; HEADER_FLOATS] {
        let mut header = [0.0; HEADER_FLOATS];
        header[HEADER_MAX_COMMANDS] = self.max_draw_commands as f32;
        header[HEADER_SCREEN_WIDTH] = config.screen_width as f32;
        header[HEADER_SCREEN_HEIGHT] = config.screen_height as f32;
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header
    }
}
