use glam::IVec2;
use jorgtor_engine::{
    draw_frame, EngineContext, EnemySprites, Game, GameConfig, InputState, LevelData,
    LevelFormatError, LoadError, Player, PlayerSprites, RenderContext, SheetManifest, World,
};

const CONFIG_JSON: &str = include_str!("../assets/config.json");
const LEVEL_JSON: &str = include_str!("../assets/level_1.json");

/// Sprite sheets: (name, image path, slice metadata).
const SHEETS: [(&str, &str, &str); 3] = [
    ("tile_set", "graphics/tile_set.png", include_str!("../assets/tile_set.json")),
    ("students", "graphics/students.png", include_str!("../assets/students.json")),
    ("background", "graphics/level_1.png", include_str!("../assets/background.json")),
];

struct Level {
    world: World,
    player: Player,
}

/// Super Jorgtor: one scrolling level, a player and a handful of students.
pub struct SuperJorgtor {
    config: GameConfig,
    /// A malformed config is reported by `init`, not here.
    config_error: Option<LevelFormatError>,
    enemy_sprites: EnemySprites,
    level: Option<Level>,
}

impl SuperJorgtor {
    pub fn new() -> Self {
        Self::with_config_json(CONFIG_JSON)
    }

    fn with_config_json(json: &str) -> Self {
        let (config, config_error) = match GameConfig::from_json(json) {
            Ok(config) => (config, None),
            Err(err) => (GameConfig::default(), Some(err)),
        };
        Self {
            config,
            config_error,
            enemy_sprites: EnemySprites::default(),
            level: None,
        }
    }

    fn load_level(&self, ctx: &mut EngineContext, json: &str) -> Result<Level, LoadError> {
        let data = LevelData::from_json(json)?;
        if let Some(bg) = &data.background {
            ctx.sprites.validate(&bg.sheet, &[bg.sprite.as_str()])?;
        }

        let world = World::load(&data, &self.config.enemy);
        let player = Player::new(
            world.spawn(),
            IVec2::from(self.config.player_size),
            self.config.physics,
            self.config.player_animation_delay,
        )
        .with_sprites(PlayerSprites::default());
        Ok(Level { world, player })
    }
}

impl Default for SuperJorgtor {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SuperJorgtor {
    fn config(&self) -> GameConfig {
        self.config.clone()
    }

    fn init(&mut self, ctx: &mut EngineContext) -> Result<(), LoadError> {
        if let Some(err) = self.config_error.take() {
            return Err(err.into());
        }
        for (name, image, json) in SHEETS {
            let manifest = SheetManifest::from_json(json)?;
            ctx.sprites.register_sheet(name, image, manifest);
        }

        let player_sprites = PlayerSprites::default();
        ctx.sprites.validate(&player_sprites.sheet, &player_sprites.all())?;
        ctx.sprites.validate(
            &self.enemy_sprites.sheet,
            &[self.enemy_sprites.idle.as_str(), self.enemy_sprites.step.as_str()],
        )?;

        let level = self.load_level(ctx, LEVEL_JSON)?;
        log::info!(
            "level 1 ready: player at ({}, {})",
            level.player.rect.x,
            level.player.rect.y
        );
        self.level = Some(level);
        Ok(())
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputState) {
        let viewport = ctx.config().viewport();
        let Some(level) = self.level.as_mut() else {
            return;
        };
        level.player.update(input, &mut level.world, &viewport);
        level.world.update_enemies();
    }

    fn render(&self, ctx: &mut RenderContext) {
        if let Some(level) = &self.level {
            draw_frame(ctx, &level.world, &self.enemy_sprites, &level.player);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jorgtor_engine::{DrawKind, PlayerState, RenderBuffer};

    fn started() -> (SuperJorgtor, EngineContext) {
        let mut game = SuperJorgtor::new();
        let mut ctx = EngineContext::new(game.config());
        game.init(&mut ctx).unwrap();
        (game, ctx)
    }

    fn level(game: &SuperJorgtor) -> &Level {
        game.level.as_ref().unwrap()
    }

    #[test]
    fn embedded_config_matches_defaults() {
        assert_eq!(SuperJorgtor::new().config(), GameConfig::default());
    }

    #[test]
    fn malformed_config_fails_init() {
        let mut game = SuperJorgtor::with_config_json(r#"{ "fps": "fast" }"#);
        let mut ctx = EngineContext::new(game.config());
        let result = game.init(&mut ctx);
        assert!(matches!(result, Err(LoadError::LevelFormat(LevelFormatError::Json(_)))));
        assert!(game.level.is_none());
    }

    #[test]
    fn init_loads_every_sheet_and_the_level() {
        let (game, ctx) = started();
        assert_eq!(
            ctx.sprites.image_paths(),
            vec!["graphics/tile_set.png", "graphics/students.png", "graphics/level_1.png"]
        );
        let level = level(&game);
        assert_eq!(level.player.rect.pos(), IVec2::new(100, 500));
        assert_eq!(level.world.enemies().len(), 5);
        // 3 ground + 4 pipes + 9 stairs
        assert_eq!(level.world.objects().len(), 16);
    }

    #[test]
    fn bad_level_is_a_load_error() {
        let game = SuperJorgtor::new();
        let mut ctx = EngineContext::new(game.config());
        let result = game.load_level(&mut ctx, r#"{ "ground": [] }"#);
        assert!(matches!(result, Err(LoadError::LevelFormat(_))));
    }

    #[test]
    fn player_lands_on_ground() {
        let (mut game, mut ctx) = started();
        for _ in 0..30 {
            game.update(&mut ctx, &InputState::default());
        }
        let player = &level(&game).player;
        assert_eq!(player.rect.bottom(), 700);
        assert!(player.can_jump);
        assert_eq!(player.state(), PlayerState::Static);
    }

    #[test]
    fn walking_right_scrolls_the_level() {
        let (mut game, mut ctx) = started();
        for _ in 0..30 {
            game.update(&mut ctx, &InputState::default());
        }
        let right = InputState { right: true, ..InputState::default() };
        for _ in 0..80 {
            game.update(&mut ctx, &right);
        }
        let level = level(&game);
        // 50 frames to reach the scroll edge, then 30 frames of scrolling.
        assert_eq!(level.player.rect.right(), 600);
        assert_eq!(level.world.scroll_offset(), 240);
    }

    #[test]
    fn render_draws_background_first() {
        let (mut game, mut ctx) = started();
        game.update(&mut ctx, &InputState::default());

        let config = game.config();
        let mut buffer = RenderBuffer::with_capacity(config.max_draw_commands);
        {
            let mut render_ctx = RenderContext {
                target: &mut buffer,
                sprites: &mut ctx.sprites,
                config: &config,
            };
            game.render(&mut render_ctx);
        }
        let commands = buffer.commands();
        assert_eq!(commands[0].kind, DrawKind::Clear as u32 as f32);
        assert_eq!(commands[1].kind, DrawKind::Blit as u32 as f32);
        assert_eq!(commands[1].sheet, 2.0);
        assert_eq!(buffer.dropped(), 0);
    }
}
