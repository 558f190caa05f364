//! Per-frame simulation tick
//!
//! Core game loop that advances the world by one display frame. Motion is in
//! units per tick, so game speed follows the display refresh rate.

use super::collision::{Hit, projectile_hits_invader};
use super::entity::{Entity, Surface};
use super::grid::Grid;
use super::projectile::Projectile;
use super::state::World;
use crate::consts::BACKGROUND;

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// Invaders destroyed
    pub kills: u32,
    /// Grids removed because their last invader died
    pub grids_cleared: u32,
    /// Projectiles fired
    pub shots_fired: u32,
    /// A new grid spawned
    pub grid_spawned: bool,
}

/// Advance the world by one tick, drawing onto `surface` along the way
pub fn tick(world: &mut World, surface: &mut dyn Surface) -> TickEvents {
    let mut events = TickEvents::default();
    world.time_ticks += 1;

    surface.clear(BACKGROUND);

    // Player moves with the velocity chosen at the end of the previous tick
    world
        .player
        .poll_sprite(&world.atlas, world.canvas, world.tuning.player_bottom_margin);
    world.player.update((), surface);

    // Shots that left the top are dropped before they draw again
    world.projectiles.retain(|p| !p.exited_top());
    for projectile in &mut world.projectiles {
        projectile.update((), surface);
    }

    // Move formations and collect hits without touching any collection
    let mut hits = Vec::new();
    for grid in &mut world.grids {
        grid.poll_sprites(&world.atlas);
        grid.update(world.canvas.x, surface);
        collect_hits(grid, &world.projectiles, &mut hits);
    }

    events.kills = apply_hits(world, &hits);
    events.grids_cleared = remove_empty_grids(world);

    // Input snapshot: queued shots, then steering for the next tick
    let shots = world.input.take_shots();
    for _ in 0..shots {
        match world.player.muzzle() {
            Some(muzzle) => {
                world.spawn_projectile(muzzle);
                events.shots_fired += 1;
            }
            None => log::trace!("Shot dropped, ship not ready"),
        }
    }
    let (speed, tilt) = (world.tuning.player_speed, world.tuning.player_tilt);
    world
        .player
        .steer(&world.input, world.canvas.x, speed, tilt);

    // Spawn timer (frames starts at 0, so the first tick always spawns)
    if world.frames % world.spawn_threshold == 0 {
        world.roll_spawn_threshold();
        world.spawn_grid();
        world.frames = 0;
        events.grid_spawned = true;
    }
    world.frames += 1;

    events
}

/// Record every (projectile, invader) overlap in `grid`
fn collect_hits(grid: &Grid, projectiles: &[Projectile], hits: &mut Vec<Hit>) {
    for invader in &grid.invaders {
        for projectile in projectiles {
            if projectile_hits_invader(projectile, invader) {
                hits.push(Hit {
                    grid_id: grid.id,
                    invader_id: invader.id,
                    projectile_id: projectile.id,
                });
            }
        }
    }
}

/// Apply deferred hits in discovery order.
///
/// A hit only lands if both its projectile and its invader are still alive;
/// an earlier hit in the same tick may already have consumed either one.
fn apply_hits(world: &mut World, hits: &[Hit]) -> u32 {
    let mut kills = 0;
    for hit in hits {
        let Some(projectile_index) = world
            .projectiles
            .iter()
            .position(|p| p.id == hit.projectile_id)
        else {
            continue;
        };
        let Some(grid) = world.grids.iter_mut().find(|g| g.id == hit.grid_id) else {
            continue;
        };
        if grid.remove_invader(hit.invader_id).is_none() {
            continue;
        }
        world.projectiles.remove(projectile_index);
        kills += 1;
        log::debug!(
            "Invader {} in grid {} destroyed by projectile {}",
            hit.invader_id,
            hit.grid_id,
            hit.projectile_id
        );
    }
    kills
}

fn remove_empty_grids(world: &mut World) -> u32 {
    let before = world.grids.len();
    world.grids.retain(|g| {
        if g.is_empty() {
            log::debug!("Grid {} cleared", g.id);
        }
        !g.is_empty()
    });
    (before - world.grids.len()) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSurface;
    use crate::sim::input::Key;
    use crate::sim::sprite::SpriteKind;
    use crate::tuning::Tuning;
    use glam::Vec2;

    const CANVAS: Vec2 = Vec2::new(800.0, 600.0);

    /// World with both sprites loaded and no grids.
    /// Invader sprite 100px -> 20 units, ship 200x100px -> 70x35 units.
    fn loaded_world() -> World {
        let mut world = World::new(CANVAS, Tuning::default(), 7);
        world.sprite_loaded(SpriteKind::Ship, 200.0, 100.0);
        world.sprite_loaded(SpriteKind::Invader, 100.0, 100.0);
        // Skip the automatic first-tick spawn
        world.frames = 1;
        world
    }

    /// One grid with a single invader placed at `pos`, sprite already ready
    fn lone_invader(world: &mut World, pos: Vec2) -> (u32, u32) {
        let grid_id = world.spawn_grid_with(1, 1);
        let grid = world.grids.last_mut().unwrap();
        grid.poll_sprites(&world.atlas);
        grid.vel = Vec2::ZERO;
        grid.pos = pos;
        grid.invaders[0].pos = pos;
        (grid_id, grid.invaders[0].id)
    }

    #[test]
    fn test_first_tick_spawns_grid() {
        let mut world = World::new(CANVAS, Tuning::default(), 1);
        let mut surface = RecordingSurface::new();

        let events = tick(&mut world, &mut surface);

        assert!(events.grid_spawned);
        assert_eq!(world.grids.len(), 1);
        assert_eq!(world.frames, 1);
        assert!((500..=999).contains(&world.spawn_threshold));
    }

    #[test]
    fn test_spawn_timer_fires_on_threshold() {
        let mut world = loaded_world();
        world.spawn_threshold = 5;
        let mut surface = RecordingSurface::new();

        // frames 1..=4: no spawn
        for _ in 0..4 {
            assert!(!tick(&mut world, &mut surface).grid_spawned);
        }
        assert_eq!(world.frames, 5);
        assert!(tick(&mut world, &mut surface).grid_spawned);
        assert_eq!(world.frames, 1);
        assert_eq!(world.grids.len(), 1);
    }

    #[test]
    fn test_clear_happens_first() {
        let mut world = loaded_world();
        let mut surface = RecordingSurface::new();
        tick(&mut world, &mut surface);
        assert!(matches!(
            surface.commands.first(),
            Some(crate::renderer::DrawCommand::Clear { .. })
        ));
    }

    #[test]
    fn test_fire_held_for_ten_ticks_fires_once() {
        let mut world = loaded_world();
        let mut surface = RecordingSurface::new();
        tick(&mut world, &mut surface); // ship placed

        world.key_down(Key::Fire);
        let mut fired = 0;
        for _ in 0..10 {
            // Browser auto-repeat keeps sending key-down
            world.key_down(Key::Fire);
            fired += tick(&mut world, &mut surface).shots_fired;
        }

        assert_eq!(fired, 1);
        assert_eq!(world.projectiles.len(), 1);
    }

    #[test]
    fn test_shot_leaves_from_ship_nose() {
        let mut world = loaded_world();
        let mut surface = RecordingSurface::new();
        tick(&mut world, &mut surface);

        world.key_down(Key::Fire);
        tick(&mut world, &mut surface);

        let nose = world.player.muzzle().unwrap();
        assert_eq!(world.projectiles[0].pos, nose);
    }

    #[test]
    fn test_shots_before_ship_loads_are_dropped() {
        let mut world = World::new(CANVAS, Tuning::default(), 3);
        world.frames = 1;
        let mut surface = RecordingSurface::new();

        world.key_down(Key::Fire);
        let events = tick(&mut world, &mut surface);

        assert_eq!(events.shots_fired, 0);
        assert!(world.projectiles.is_empty());
    }

    #[test]
    fn test_input_applies_on_next_tick() {
        let mut world = loaded_world();
        let mut surface = RecordingSurface::new();
        tick(&mut world, &mut surface);
        let start = world.player.pos.x;

        world.key_down(Key::Right);
        tick(&mut world, &mut surface);
        // Velocity was chosen at the end of this tick; no motion yet
        assert_eq!(world.player.pos.x, start);
        assert_eq!(world.player.rotation, 0.15);

        tick(&mut world, &mut surface);
        assert_eq!(world.player.pos.x, start + 5.0);
    }

    #[test]
    fn test_projectile_pruned_after_leaving_top() {
        let mut world = loaded_world();
        let mut surface = RecordingSurface::new();
        world.spawn_projectile(Vec2::new(50.0, 6.0));

        // Draws at y=6, moves to -4
        tick(&mut world, &mut surface);
        assert_eq!(world.projectiles.len(), 1);
        assert_eq!(surface.circle_centers().len(), 1);

        // y + r = 0: pruned before it can draw again
        surface.take();
        tick(&mut world, &mut surface);
        assert!(world.projectiles.is_empty());
        assert!(surface.circle_centers().is_empty());
    }

    #[test]
    fn test_hit_removes_both_and_clears_grid() {
        let mut world = loaded_world();
        let mut surface = RecordingSurface::new();
        let (grid_id, _) = lone_invader(&mut world, Vec2::new(95.0, 45.0));
        // After its update the projectile sits at (105, 50)
        world.spawn_projectile(Vec2::new(105.0, 60.0));

        let events = tick(&mut world, &mut surface);

        assert_eq!(events.kills, 1);
        assert_eq!(events.grids_cleared, 1);
        assert!(world.projectiles.is_empty());
        assert!(world.grids.iter().all(|g| g.id != grid_id));
    }

    #[test]
    fn test_miss_leaves_everything() {
        let mut world = loaded_world();
        let mut surface = RecordingSurface::new();
        lone_invader(&mut world, Vec2::new(95.0, 45.0));
        world.spawn_projectile(Vec2::new(200.0, 60.0));

        let events = tick(&mut world, &mut surface);

        assert_eq!(events.kills, 0);
        assert_eq!(world.projectiles.len(), 1);
        assert_eq!(world.invader_count(), 1);
    }

    #[test]
    fn test_two_projectiles_one_invader() {
        let mut world = loaded_world();
        let mut surface = RecordingSurface::new();
        lone_invader(&mut world, Vec2::new(95.0, 45.0));
        let first = world.spawn_projectile(Vec2::new(100.0, 60.0));
        let second = world.spawn_projectile(Vec2::new(110.0, 60.0));

        let events = tick(&mut world, &mut surface);

        // The invader dies once; the second shot finds it gone and flies on
        assert_eq!(events.kills, 1);
        assert_eq!(world.invader_count(), 0);
        assert!(world.projectiles.iter().all(|p| p.id != first));
        assert!(world.projectiles.iter().any(|p| p.id == second));
    }

    #[test]
    fn test_one_projectile_two_invaders() {
        let mut world = loaded_world();
        let mut surface = RecordingSurface::new();
        lone_invader(&mut world, Vec2::new(95.0, 45.0));
        lone_invader(&mut world, Vec2::new(105.0, 45.0));
        world.spawn_projectile(Vec2::new(110.0, 60.0));

        let events = tick(&mut world, &mut surface);

        // The projectile is spent on the first hit only
        assert_eq!(events.kills, 1);
        assert_eq!(world.invader_count(), 1);
        assert!(world.projectiles.is_empty());
    }

    #[test]
    fn test_partial_kill_refits_grid() {
        let mut world = loaded_world();
        let mut surface = RecordingSurface::new();
        let grid_id = world.spawn_grid_with(3, 1);
        let grid = world.grids.last_mut().unwrap();
        grid.poll_sprites(&world.atlas);
        grid.vel = Vec2::ZERO;
        grid.pos = Vec2::new(100.0, 100.0);
        for (i, invader) in grid.invaders.iter_mut().enumerate() {
            invader.pos = Vec2::new(100.0 + i as f32 * 38.0, 100.0);
        }
        // Hit the leftmost invader
        world.spawn_projectile(Vec2::new(110.0, 120.0));

        tick(&mut world, &mut surface);

        let grid = world.grids.iter().find(|g| g.id == grid_id).unwrap();
        assert_eq!(grid.invaders.len(), 2);
        assert_eq!(grid.pos.x, 138.0);
        assert!((grid.width - (176.0 - 138.0 + 20.0)).abs() < 1e-3);
    }

    #[test]
    fn test_pending_invaders_are_not_hit() {
        let mut world = World::new(CANVAS, Tuning::default(), 9);
        world.frames = 1;
        let mut surface = RecordingSurface::new();
        world.spawn_grid_with(1, 1);
        world.grids[0].vel = Vec2::ZERO;
        world.spawn_projectile(Vec2::new(5.0, 15.0));

        let events = tick(&mut world, &mut surface);

        assert_eq!(events.kills, 0);
        assert_eq!(world.invader_count(), 1);
        assert_eq!(surface.sprite_count(SpriteKind::Invader), 0);
    }

    #[test]
    fn test_invaders_draw_after_sprite_arrives() {
        let mut world = World::new(CANVAS, Tuning::default(), 11);
        world.frames = 1;
        let mut surface = RecordingSurface::new();
        world.spawn_grid_with(2, 2);

        tick(&mut world, &mut surface);
        assert_eq!(surface.sprite_count(SpriteKind::Invader), 0);

        world.sprite_loaded(SpriteKind::Invader, 100.0, 100.0);
        surface.take();
        tick(&mut world, &mut surface);
        assert_eq!(surface.sprite_count(SpriteKind::Invader), 4);
    }

    #[test]
    fn test_long_session_invariants() {
        let mut world = World::new(CANVAS, Tuning::default(), 2024);
        world.sprite_loaded(SpriteKind::Ship, 200.0, 100.0);
        world.sprite_loaded(SpriteKind::Invader, 100.0, 100.0);
        let mut surface = RecordingSurface::new();

        for frame in 0..3000u32 {
            match frame % 120 {
                0 => world.key_down(Key::Left),
                40 => world.key_up(Key::Left),
                60 => world.key_down(Key::Right),
                100 => world.key_up(Key::Right),
                _ => {}
            }
            if frame % 7 == 0 {
                world.key_down(Key::Fire);
            } else {
                world.key_up(Key::Fire);
            }
            surface.take();
            tick(&mut world, &mut surface);

            assert!(world.grids.iter().all(|g| !g.is_empty() && g.width > 0.0));
            assert!(world.projectiles.iter().all(|p| p.pos.y + p.radius > -10.0));
            assert!([-0.15, 0.0, 0.15].contains(&world.player.rotation));
            assert!(world.frames >= 1 && world.frames <= world.spawn_threshold);
        }
    }
}
