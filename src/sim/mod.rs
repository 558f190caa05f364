//! Simulation module
//!
//! All gameplay logic lives here. No browser or platform dependencies:
//! - Drawing goes through the [`Surface`] port
//! - Sprite readiness arrives through [`SpriteAtlas`]
//! - Randomness comes from the world's seeded RNG

pub mod collision;
pub mod entity;
pub mod grid;
pub mod input;
pub mod invader;
pub mod player;
pub mod projectile;
pub mod sprite;
pub mod state;
pub mod tick;

pub use collision::{Hit, circle_rect_overlap, projectile_hits_invader};
pub use entity::{Entity, Surface};
pub use grid::Grid;
pub use input::{InputState, Key};
pub use invader::Invader;
pub use player::Player;
pub use projectile::Projectile;
pub use sprite::{Sprite, SpriteAtlas, SpriteKind, SpriteState};
pub use state::World;
pub use tick::{TickEvents, tick};
