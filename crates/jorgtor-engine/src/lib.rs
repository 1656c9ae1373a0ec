pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::config::{EnemyConfig, GameConfig, PhysicsConfig, Viewport};
pub use api::game::{Game, EngineContext, RenderContext};
pub use api::types::Color;
pub use assets::manifest::{SheetManifest, SpriteSlice};
pub use assets::registry::SpriteCache;
pub use bridge::protocol::ProtocolLayout;
pub use components::animation::{EnemyState, PlayerState, SpriteCycle};
pub use components::enemy::{Enemy, EnemySprites};
pub use components::player::{Player, PlayerSprites};
pub use components::sprite::{SheetId, SpriteHandle, SpriteKey};
pub use core::level::{BackgroundRef, LevelData};
pub use core::rect::Rect;
pub use core::time::FrameClock;
pub use core::world::{ObjectKind, World, WorldObject, BOUNDARY_WALL};
pub use error::{AssetLoadError, LevelFormatError, LoadError};
pub use input::queue::{InputEvent, InputQueue, InputState, KeyboardState};
pub use renderer::instance::{DrawCommand, DrawKind, RenderBuffer};
pub use renderer::traits::RenderTarget;
pub use systems::render::draw_frame;
