use glam::IVec2;

use crate::api::config::GameConfig;
use crate::assets::registry::SpriteCache;
use crate::error::LoadError;
use crate::input::queue::InputState;
use crate::renderer::traits::RenderTarget;

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Load level and assets. An error here is fatal: the runner never ticks.
    fn init(&mut self, ctx: &mut EngineContext) -> Result<(), LoadError>;

    /// One fixed frame of simulation with this frame's held keys.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputState);

    /// Draw the frame. Read-only apart from sprite memoization.
    fn render(&self, ctx: &mut RenderContext);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub sprites: SpriteCache,
    config: GameConfig,
    frame: u64,
    quit_requested: bool,
}

impl EngineContext {
    pub fn new(config: GameConfig) -> Self {
        Self {
            sprites: SpriteCache::new(IVec2::from(config.sprite_size)),
            config,
            frame: 0,
            quit_requested: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Frames simulated so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Called by the runner after every update.
    pub fn advance_frame(&mut self) {
        self.frame += 1;
    }

    /// Stop the loop once the current frame has been drawn.
    pub fn request_quit(&mut self) {
        if !self.quit_requested {
            log::info!("quit requested at frame {}", self.frame);
        }
        self.quit_requested = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

/// Everything a game needs to draw one frame.
pub struct RenderContext<'a> {
    pub target: &'a mut dyn RenderTarget,
    pub sprites: &'a mut SpriteCache,
    pub config: &'a GameConfig,
}
