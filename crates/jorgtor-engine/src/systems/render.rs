use crate::api::game::RenderContext;
use crate::components::enemy::EnemySprites;
use crate::components::player::Player;
use crate::core::world::World;

/// Draw one frame back to front: clear colour, background, collider
/// overlay (when `debug_colliders` is on), enemies, player.
pub fn draw_frame(ctx: &mut RenderContext, world: &World, enemy_sprites: &EnemySprites, player: &Player) {
    ctx.target.clear(ctx.config.background_color);
    world.render(ctx.target, ctx.sprites, ctx.config.debug_colliders);
    world.render_enemies(ctx.target, ctx.sprites, enemy_sprites);
    player.render(ctx.target, ctx.sprites);
}
