//! World state
//!
//! Everything the simulation mutates lives in [`World`]: the ship, live
//! projectiles, live grids, keyboard state, loaded sprite sizes and the spawn
//! timer. One `World` is built per session and handed to [`super::tick`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::grid::Grid;
use super::input::{InputState, Key};
use super::player::Player;
use super::projectile::Projectile;
use super::sprite::{SpriteAtlas, SpriteKind};
use crate::tuning::Tuning;

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    /// Canvas size in world units (fixed for the session)
    pub canvas: Vec2,
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub player: Player,
    /// Live projectiles (unordered)
    pub projectiles: Vec<Projectile>,
    /// Live grids (unordered)
    pub grids: Vec<Grid>,
    pub input: InputState,
    /// Decoded sprite sizes reported by the asset loader
    pub atlas: SpriteAtlas,
    /// Frames since the last grid spawn
    pub frames: u32,
    /// A grid spawns when `frames % spawn_threshold == 0`
    pub spawn_threshold: u32,
    /// Total ticks simulated
    pub time_ticks: u64,
    next_id: u32,
}

impl World {
    /// Create a new world for a canvas of the given size
    pub fn new(canvas: Vec2, tuning: Tuning, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let spawn_threshold = rng.random_range(tuning.spawn_interval.clone());
        let player = Player::new(&tuning);

        Self {
            canvas,
            tuning,
            seed,
            rng,
            player,
            projectiles: Vec::new(),
            grids: Vec::new(),
            input: InputState::default(),
            atlas: SpriteAtlas::default(),
            frames: 0,
            spawn_threshold,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn key_down(&mut self, key: Key) {
        self.input.press(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.input.release(key);
    }

    /// Called by the asset loader once an image has decoded
    pub fn sprite_loaded(&mut self, kind: SpriteKind, pixel_width: f32, pixel_height: f32) {
        log::info!(
            "Sprite {:?} loaded ({}x{} px)",
            kind,
            pixel_width,
            pixel_height
        );
        self.atlas.insert(kind, pixel_width, pixel_height);
    }

    /// Spawn a grid with a random column and row count
    pub fn spawn_grid(&mut self) -> u32 {
        let columns = self.rng.random_range(self.tuning.grid_columns.clone());
        let rows = self.rng.random_range(self.tuning.grid_rows.clone());
        self.spawn_grid_with(columns, rows)
    }

    /// Spawn a grid with a fixed layout
    pub fn spawn_grid_with(&mut self, columns: u32, rows: u32) -> u32 {
        let grid_id = self.next_entity_id();
        let next_id = &mut self.next_id;
        let grid = Grid::new(grid_id, columns, rows, &self.tuning, || {
            let id = *next_id;
            *next_id += 1;
            id
        });
        log::info!(
            "Grid {} spawned: {}x{} invaders, next spawn in {} frames",
            grid_id,
            columns,
            rows,
            self.spawn_threshold
        );
        self.grids.push(grid);
        grid_id
    }

    /// Fire a player shot from `pos`
    pub fn spawn_projectile(&mut self, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        let vel = Vec2::new(0.0, -self.tuning.projectile_speed);
        self.projectiles
            .push(Projectile::new(id, pos, vel, self.tuning.projectile_radius));
        id
    }

    /// Pick the next spawn interval
    pub fn roll_spawn_threshold(&mut self) -> u32 {
        self.spawn_threshold = self.rng.random_range(self.tuning.spawn_interval.clone());
        self.spawn_threshold
    }

    /// Total live invaders across all grids
    pub fn invader_count(&self) -> usize {
        self.grids.iter().map(|g| g.invaders.len()).sum()
    }
}
