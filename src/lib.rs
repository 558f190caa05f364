//! Invader Sweep - A browser arcade shooter
//!
//! Core modules:
//! - `sim`: Per-tick simulation (player, projectiles, invader grids, collisions)
//! - `renderer`: Draw surfaces (2D canvas in the browser, recording for tests)
//! - `platform`: Browser key mapping
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    use std::ops::RangeInclusive;

    /// Horizontal ship speed (units per tick)
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Ship tilt while moving (radians)
    pub const PLAYER_TILT: f32 = 0.15;
    /// Gap between the ship and the bottom of the canvas
    pub const PLAYER_BOTTOM_MARGIN: f32 = 20.0;

    /// Projectile defaults
    pub const PROJECTILE_RADIUS: f32 = 4.0;
    pub const PROJECTILE_SPEED: f32 = 10.0;

    /// Grid layout and motion
    pub const GRID_SPACING: f32 = 38.0;
    pub const GRID_SPEED: f32 = 1.5;
    /// Vertical drop applied for a single tick on every wall bounce
    pub const GRID_DROP: f32 = 30.0;
    pub const GRID_COLUMNS: RangeInclusive<u32> = 5..=14;
    pub const GRID_ROWS: RangeInclusive<u32> = 2..=6;

    /// Frames between grid spawns, re-rolled after every spawn
    pub const SPAWN_INTERVAL: RangeInclusive<u32> = 500..=999;

    /// Sprite scale factors (image pixels -> world units)
    pub const SHIP_SPRITE_SCALE: f32 = 0.35;
    pub const INVADER_SPRITE_SCALE: f32 = 0.2;

    /// Canvas clear color
    pub const BACKGROUND: &str = "black";
    /// Projectile fill color
    pub const PROJECTILE_COLOR: &str = "red";
}
