use glam::IVec2;

use crate::api::config::EnemyConfig;
use crate::api::types::Color;
use crate::assets::registry::SpriteCache;
use crate::components::enemy::{Enemy, EnemySprites};
use crate::components::sprite::SpriteHandle;
use crate::core::level::{BackgroundRef, LevelData};
use crate::core::physics::resolve_enemy_step;
use crate::core::rect::Rect;
use crate::error::LevelFormatError;
use crate::renderer::traits::RenderTarget;

/// Invisible wall just left of the origin that stops leftward escape.
pub const BOUNDARY_WALL: Rect = Rect::new(-10, -10_000, 10, 20_000);

/// Category of a piece of static geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Ground,
    Pipe,
    Stairs,
    BoundaryWall,
}

impl ObjectKind {
    /// Debug fill colour.
    pub fn color(&self) -> Color {
        match self {
            ObjectKind::Ground => Color::GROUND,
            ObjectKind::Pipe => Color::PIPE,
            ObjectKind::Stairs => Color::STAIRS,
            ObjectKind::BoundaryWall => Color::BLACK,
        }
    }
}

/// A static collidable. `rect` is in world space and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldObject {
    pub kind: ObjectKind,
    pub rect: Rect,
}

impl WorldObject {
    pub fn new(kind: ObjectKind, rect: Rect) -> Self {
        Self { kind, rect }
    }

    pub fn screen_rect(&self, scroll_offset: i32) -> Rect {
        self.rect.translated(IVec2::new(-scroll_offset, 0))
    }
}

/// Level geometry, enemies and the horizontal scroll position.
///
/// Everything is stored in world space. Screen-space rects are derived by
/// subtracting `scroll_offset`, so one `scroll` moves every collidable and
/// the background together.
pub struct World {
    /// Ground, then pipes, then stairs, in level order.
    objects: Vec<WorldObject>,
    enemies: Vec<Enemy>,
    boundary: WorldObject,
    scroll_offset: i32,
    background: Option<BackgroundRef>,
    spawn: IVec2,
}

impl World {
    /// Build a world from validated level data.
    pub fn load(level: &LevelData, enemy_config: &EnemyConfig) -> Self {
        let objects: Vec<WorldObject> = level
            .ground
            .iter()
            .map(|r| WorldObject::new(ObjectKind::Ground, *r))
            .chain(level.pipe.iter().map(|r| WorldObject::new(ObjectKind::Pipe, *r)))
            .chain(level.stairs.iter().map(|r| WorldObject::new(ObjectKind::Stairs, *r)))
            .collect();
        let enemies: Vec<Enemy> = level
            .enemies
            .iter()
            .map(|r| Enemy::new(*r, enemy_config))
            .collect();

        log::info!(
            "world loaded: {} static objects, {} enemies",
            objects.len(),
            enemies.len()
        );

        Self {
            objects,
            enemies,
            boundary: WorldObject::new(ObjectKind::BoundaryWall, BOUNDARY_WALL),
            scroll_offset: 0,
            background: level.background.clone(),
            spawn: level.spawn,
        }
    }

    /// Parse a level description and build the world from it.
    pub fn from_json(json: &str, enemy_config: &EnemyConfig) -> Result<Self, LevelFormatError> {
        let level = LevelData::from_json(json)?;
        Ok(Self::load(&level, enemy_config))
    }

    /// Every collidable in screen space: static geometry, then enemies,
    /// then the boundary wall.
    pub fn collidables(&self) -> impl Iterator<Item = Rect> + '_ {
        let offset = self.scroll_offset;
        self.objects
            .iter()
            .map(move |o| o.screen_rect(offset))
            .chain(self.enemies.iter().map(move |e| e.screen_rect(offset)))
            .chain(std::iter::once(self.boundary.screen_rect(offset)))
    }

    /// Move every collidable and the background left by `delta` on screen.
    pub fn scroll(&mut self, delta: i32) {
        self.scroll_offset += delta;
        log::debug!("world scrolled by {} (offset {})", delta, self.scroll_offset);
    }

    /// World-space pixels scrolled so far.
    pub fn scroll_offset(&self) -> i32 {
        self.scroll_offset
    }

    /// Horizontal draw offset of the background image.
    pub fn background_offset(&self) -> i32 {
        -self.scroll_offset
    }

    pub fn objects(&self) -> &[WorldObject] {
        &self.objects
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// Player spawn point in screen space at load time.
    pub fn spawn(&self) -> IVec2 {
        self.spawn
    }

    /// Advance every enemy one frame. Each enemy collides against static
    /// geometry, the other enemies (already moved this frame if they come
    /// earlier) and the boundary wall.
    pub fn update_enemies(&mut self) {
        for i in 0..self.enemies.len() {
            let enemy = &self.enemies[i];
            let obstacles = self
                .objects
                .iter()
                .map(|o| o.rect)
                .chain(
                    self.enemies
                        .iter()
                        .enumerate()
                        .filter(|(j, _)| *j != i)
                        .map(|(_, e)| e.rect),
                )
                .chain(std::iter::once(self.boundary.rect));
            let step = resolve_enemy_step(&enemy.rect, enemy.intended_step(), obstacles);
            self.enemies[i].advance(step);
        }
    }

    /// Draw the background, then every collidable's rect when `debug` is set.
    pub fn render(&self, target: &mut dyn RenderTarget, sprites: &mut SpriteCache, debug: bool) {
        if let Some(bg) = &self.background {
            match sprites.get_sprite(&bg.sheet, &bg.sprite, false) {
                Ok(handle) => {
                    // Backgrounds keep their native size.
                    let handle = SpriteHandle {
                        size: handle.source.size(),
                        ..handle
                    };
                    target.blit(&handle, IVec2::new(self.background_offset(), 0));
                }
                Err(err) => log::warn!("background not drawn: {}", err),
            }
        }

        if !debug {
            return;
        }
        let offset = self.scroll_offset;
        for object in &self.objects {
            target.fill_rect(object.screen_rect(offset), object.kind.color());
        }
        for enemy in &self.enemies {
            target.fill_rect(enemy.screen_rect(offset), Color::ENEMY);
        }
        target.fill_rect(self.boundary.screen_rect(offset), self.boundary.kind.color());
    }

    /// Draw each enemy's current walk frame.
    pub fn render_enemies(
        &self,
        target: &mut dyn RenderTarget,
        cache: &mut SpriteCache,
        sprites: &EnemySprites,
    ) {
        for enemy in &self.enemies {
            let name = sprites.get(enemy.state());
            match cache.get_sprite(&sprites.sheet, name, false) {
                Ok(handle) => target.blit(&handle, enemy.screen_rect(self.scroll_offset).pos()),
                Err(err) => log::warn!("enemy not drawn: {}", err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::manifest::SheetManifest;

    const LEVEL: &str = r#"{
        "ground": [
            { "x": 0, "y": 700, "width": 1500, "height": 100 },
            { "x": 1600, "y": 700, "width": 800, "height": 100 }
        ],
        "pipe": [{ "x": 900, "y": 600, "width": 100, "height": 100 }],
        "stairs": [{ "x": 2000, "y": 650, "width": 50, "height": 50 }],
        "enemies": [{ "x": 1200, "y": 600, "width": 100, "height": 100 }]
    }"#;

    fn world() -> World {
        World::from_json(LEVEL, &EnemyConfig::default()).unwrap()
    }

    #[derive(Default)]
    struct Recorder {
        fills: Vec<(Rect, Color)>,
        blits: Vec<(SpriteHandle, IVec2)>,
    }

    impl RenderTarget for Recorder {
        fn clear(&mut self, _color: Color) {}
        fn blit(&mut self, sprite: &SpriteHandle, at: IVec2) {
            self.blits.push((*sprite, at));
        }
        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.fills.push((rect, color));
        }
    }

    #[test]
    fn collidables_follow_insertion_order() {
        let w = world();
        let rects: Vec<Rect> = w.collidables().collect();
        assert_eq!(rects.len(), 6);
        assert_eq!(rects[0], Rect::new(0, 700, 1500, 100));
        assert_eq!(rects[1], Rect::new(1600, 700, 800, 100));
        assert_eq!(rects[2], Rect::new(900, 600, 100, 100));
        assert_eq!(rects[3], Rect::new(2000, 650, 50, 50));
        assert_eq!(rects[4], Rect::new(1200, 600, 100, 100));
        assert_eq!(rects[5], BOUNDARY_WALL);
    }

    #[test]
    fn scroll_shifts_every_collidable_exactly() {
        let mut w = world();
        let before: Vec<Rect> = w.collidables().collect();
        w.scroll(8);
        let after: Vec<Rect> = w.collidables().collect();
        for (b, a) in before.iter().zip(&after) {
            assert_eq!(a.x, b.x - 8);
            assert_eq!((a.y, a.width, a.height), (b.y, b.width, b.height));
        }
        assert_eq!(w.scroll_offset(), 8);
        assert_eq!(w.background_offset(), -8);

        w.scroll(8);
        assert_eq!(w.background_offset(), -16);
    }

    #[test]
    fn missing_category_fails_load() {
        let err = World::from_json(r#"{ "ground": [] }"#, &EnemyConfig::default()).err();
        assert!(matches!(err, Some(LevelFormatError::MissingCategory(_))));
    }

    #[test]
    fn enemy_walks_along_ground() {
        let mut w = world();
        // Enemy rests on the ground (bottom 700): only horizontal motion.
        w.update_enemies();
        assert_eq!(w.enemies()[0].rect, Rect::new(1198, 600, 100, 100));
    }

    #[test]
    fn enemy_stops_at_pipe() {
        let json = r#"{
            "ground": [{ "x": 0, "y": 700, "width": 1500, "height": 100 }],
            "pipe": [{ "x": 900, "y": 600, "width": 100, "height": 100 }],
            "stairs": [],
            "enemies": [{ "x": 1001, "y": 600, "width": 100, "height": 100 }]
        }"#;
        let mut w = World::from_json(json, &EnemyConfig::default()).unwrap();
        for _ in 0..10 {
            w.update_enemies();
        }
        // A 1px gap remains: the 2px step is cancelled, not shortened.
        assert_eq!(w.enemies()[0].rect.x, 1001);
    }

    #[test]
    fn enemy_falls_onto_ground() {
        let json = r#"{
            "ground": [{ "x": 0, "y": 700, "width": 1500, "height": 100 }],
            "pipe": [], "stairs": [],
            "enemies": [{ "x": 500, "y": 590, "width": 100, "height": 100 }]
        }"#;
        let mut w = World::from_json(json, &EnemyConfig::default()).unwrap();
        for _ in 0..10 {
            w.update_enemies();
        }
        assert_eq!(w.enemies()[0].rect.bottom(), 700);
    }

    #[test]
    fn enemies_block_each_other() {
        let json = r#"{
            "ground": [{ "x": 0, "y": 700, "width": 1500, "height": 100 }],
            "pipe": [], "stairs": [],
            "enemies": [
                { "x": 0, "y": 600, "width": 100, "height": 100 },
                { "x": 101, "y": 600, "width": 100, "height": 100 }
            ]
        }"#;
        let mut w = World::from_json(json, &EnemyConfig::default()).unwrap();
        w.update_enemies();
        // First is pinned by the boundary wall, second by the first.
        assert_eq!(w.enemies()[0].rect.x, 0);
        assert_eq!(w.enemies()[1].rect.x, 101);
    }

    #[test]
    fn enemies_move_in_world_space_after_scroll() {
        let mut w = world();
        w.scroll(100);
        w.update_enemies();
        assert_eq!(w.enemies()[0].rect.x, 1198);
        let on_screen: Vec<Rect> = w.collidables().collect();
        assert_eq!(on_screen[4].x, 1098);
    }

    #[test]
    fn debug_render_fills_every_collidable_in_screen_space() {
        let mut w = world();
        w.scroll(50);
        let mut target = Recorder::default();
        let mut sprites = SpriteCache::default();
        w.render(&mut target, &mut sprites, true);
        let rects: Vec<Rect> = target.fills.iter().map(|(r, _)| *r).collect();
        assert_eq!(rects, w.collidables().collect::<Vec<_>>());
        assert_eq!(target.fills[2].1, Color::PIPE);

        let mut target = Recorder::default();
        w.render(&mut target, &mut sprites, false);
        assert!(target.fills.is_empty());
    }

    #[test]
    fn background_is_drawn_at_its_offset() {
        let json = r#"{ "ground": [], "pipe": [], "stairs": [], "enemies": [],
                        "background": { "sheet": "bg", "sprite": "sky" } }"#;
        let mut w = World::from_json(json, &EnemyConfig::default()).unwrap();
        let mut sprites = SpriteCache::default();
        let manifest =
            SheetManifest::from_json(r#"{ "sky": { "x": 0, "y": 0, "width": 3000, "height": 800 } }"#)
                .unwrap();
        sprites.register_sheet("bg", "graphics/bg.png", manifest);
        w.scroll(30);
        let mut target = Recorder::default();
        w.render(&mut target, &mut sprites, false);
        assert_eq!(target.blits.len(), 1);
        assert_eq!(target.blits[0].1, IVec2::new(-30, 0));
        assert_eq!(target.blits[0].0.size, IVec2::new(3000, 800));
    }

    #[test]
    fn enemies_render_with_walk_frames() {
        let w = world();
        let mut cache = SpriteCache::default();
        let manifest = SheetManifest::from_json(
            r#"{ "student_1": { "x": 0, "y": 0, "width": 16, "height": 16 },
                 "student_2": { "x": 16, "y": 0, "width": 16, "height": 16 } }"#,
        )
        .unwrap();
        cache.register_sheet("students", "graphics/students.png", manifest);
        let mut target = Recorder::default();
        w.render_enemies(&mut target, &mut cache, &EnemySprites::default());
        assert_eq!(target.blits.len(), 1);
        assert_eq!(target.blits[0].1, IVec2::new(1200, 600));
    }
}
