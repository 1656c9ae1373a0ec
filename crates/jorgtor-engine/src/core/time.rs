/// Frame-rate gate for a variable-rate host loop.
/// Reports at most one due frame per call: physics runs exactly once per
/// rendered frame and a slow host simply runs slower, never in bursts.
pub struct FrameClock {
    /// Target time per frame.
    dt: f32,
    /// Wall time accumulated since the last due frame.
    accumulator: f32,
    /// Frames reported so far.
    frames: u64,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            dt: 1.0 / fps.max(1) as f32,
            accumulator: 0.0,
            frames: 0,
        }
    }

    /// Add host frame time. Returns true when a game frame is due.
    pub fn tick(&mut self, frame_dt: f32) -> bool {
        self.accumulator += frame_dt.max(0.0);
        if self.accumulator < self.dt {
            return false;
        }
        // Drop any backlog beyond the frame being run now.
        self.accumulator = (self.accumulator - self.dt).min(self.dt);
        self.frames += 1;
        true
    }

    /// The fixed frame duration.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
