use jorgtor_engine::bridge::protocol::{
    HEADER_COMMAND_COUNT, HEADER_DROPPED_COMMANDS, HEADER_FLOATS, HEADER_FRAME_COUNTER,
};
use jorgtor_engine::{
    EngineContext, FrameClock, Game, GameConfig, InputEvent, InputQueue, KeyboardState, LoadError,
    ProtocolLayout, RenderBuffer, RenderContext,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game (e.g., `super-jorgtor`) creates a `thread_local!` GameRunner
/// and exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    keyboard: KeyboardState,
    render_buffer: RenderBuffer,
    clock: FrameClock,
    config: GameConfig,
    layout: ProtocolLayout,
    header: [f32; HEADER_FLOATS],
    running: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);

        Self {
            game,
            ctx: EngineContext::new(config.clone()),
            input: InputQueue::new(),
            keyboard: KeyboardState::new(),
            render_buffer: RenderBuffer::with_capacity(config.max_draw_commands),
            clock: FrameClock::new(config.fps),
            header: layout.header(&config),
            layout,
            config,
            running: false,
        }
    }

    /// Initialize the game. Call once after construction.
    /// On failure the runner stays inert and every tick is a no-op.
    pub fn init(&mut self) -> Result<(), LoadError> {
        match self.game.init(&mut self.ctx) {
            Ok(()) => {
                self.running = true;
                Ok(())
            }
            Err(err) => {
                log::error!("game init failed: {}", err);
                self.running = false;
                Err(err)
            }
        }
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Advance wall time by `dt` seconds and run at most one frame:
    /// input snapshot, update, render. Returns true if a frame ran.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.running || !self.clock.tick(dt) {
            return false;
        }

        let events = self.input.drain();
        self.keyboard.apply(&events);
        if self.keyboard.quit_requested() {
            self.ctx.request_quit();
        }
        let input = self.keyboard.snapshot();

        self.game.update(&mut self.ctx, &input);
        self.ctx.advance_frame();

        self.render_buffer.clear();
        {
            let mut render_ctx = RenderContext {
                target: &mut self.render_buffer,
                sprites: &mut self.ctx.sprites,
                config: &self.config,
            };
            self.game.render(&mut render_ctx);
        }

        self.header[HEADER_FRAME_COUNTER] = self.ctx.frame() as f32;
        self.header[HEADER_COMMAND_COUNT] = self.render_buffer.command_count() as f32;
        self.header[HEADER_DROPPED_COMMANDS] = self.render_buffer.dropped() as f32;

        // Quit lands after the frame so its last image is still presented.
        if self.ctx.quit_requested() {
            log::info!("stopping after frame {}", self.ctx.frame());
            self.running = false;
        }
        true
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn frame(&self) -> u64 {
        self.ctx.frame()
    }

    // ---- Pointer accessors for shared-memory reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn header(&self) -> &[f32] {
        &self.header
    }

    pub fn draw_commands_ptr(&self) -> *const f32 {
        self.render_buffer.commands_ptr()
    }

    pub fn draw_command_count(&self) -> u32 {
        self.render_buffer.command_count()
    }

    pub fn draw_floats(&self) -> &[f32] {
        self.render_buffer.as_floats()
    }

    /// Image paths of every registered sheet, indexed by sheet id.
    pub fn sheet_images(&self) -> Vec<&str> {
        self.ctx.sprites.image_paths()
    }

    pub fn screen_width(&self) -> u32 {
        self.config.screen_width as u32
    }

    pub fn screen_height(&self) -> u32 {
        self.config.screen_height as u32
    }

    // ---- Capacity accessors (read by the host via wasm_bindgen exports) ----

    pub fn max_draw_commands(&self) -> u32 {
        self.layout.max_draw_commands as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
