//! Invader formations
//!
//! A grid moves as one rigid body: it sweeps horizontally, and every time it
//! touches a side wall it reverses and drops. Its invaders are destroyed one
//! at a time, and the grid shrinks its bounds to the survivors.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Surface};
use super::invader::Invader;
use super::sprite::{SpriteAtlas, SpriteKind};
use crate::tuning::Tuning;

/// A rectangular formation of invaders sharing one velocity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    pub id: u32,
    /// Left edge of the formation (x) and its origin row (y)
    pub pos: Vec2,
    /// x flips sign on every bounce; y is non-zero for one tick per bounce
    pub vel: Vec2,
    /// Span from the first to the last surviving invader
    pub width: f32,
    /// Drop applied on bounce
    pub drop: f32,
    /// Column-major: index 0 is the top of the leftmost column,
    /// the last index is the bottom of the rightmost column
    pub invaders: Vec<Invader>,
}

impl Grid {
    /// Lay out `columns` x `rows` invaders on the tuning spacing, starting at
    /// the world origin. `next_id` hands out invader ids.
    pub fn new(
        id: u32,
        columns: u32,
        rows: u32,
        tuning: &Tuning,
        mut next_id: impl FnMut() -> u32,
    ) -> Self {
        let scale = SpriteKind::Invader.scale(tuning);
        let spacing = tuning.grid_spacing;

        let mut invaders = Vec::with_capacity((columns * rows) as usize);
        for col in 0..columns {
            for row in 0..rows {
                let pos = Vec2::new(col as f32 * spacing, row as f32 * spacing);
                invaders.push(Invader::new(next_id(), pos, scale));
            }
        }

        Self {
            id,
            pos: Vec2::ZERO,
            vel: Vec2::new(tuning.grid_speed, 0.0),
            width: columns as f32 * spacing,
            drop: tuning.grid_drop,
            invaders,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.invaders.is_empty()
    }

    pub fn contains(&self, invader_id: u32) -> bool {
        self.invaders.iter().any(|i| i.id == invader_id)
    }

    /// Let every pending invader check for its image
    pub fn poll_sprites(&mut self, atlas: &SpriteAtlas) {
        for invader in &mut self.invaders {
            invader.poll_sprite(atlas);
        }
    }

    /// Move the formation one tick and apply the wall bounce.
    ///
    /// The drop impulse set by a bounce is consumed by the next call: it is
    /// added to the grid position and then zeroed before the wall check runs.
    pub fn advance(&mut self, canvas_width: f32) {
        self.pos += self.vel;
        self.vel.y = 0.0;

        if self.pos.x + self.width >= canvas_width || self.pos.x <= 0.0 {
            self.vel.x = -self.vel.x;
            self.vel.y = self.drop;
        }
    }

    /// Remove an invader by id, then refit the grid to the survivors.
    ///
    /// Returns `None` if the invader is not (or no longer) in this grid.
    pub fn remove_invader(&mut self, invader_id: u32) -> Option<Invader> {
        let index = self.invaders.iter().position(|i| i.id == invader_id)?;
        let removed = self.invaders.remove(index);

        if let (Some(first), Some(last)) = (self.invaders.first(), self.invaders.last()) {
            self.width = last.pos.x - first.pos.x + last.width();
            self.pos.x = first.pos.x;
        }

        Some(removed)
    }
}

impl Entity for Grid {
    /// Canvas width, for the wall bounce
    type Args = f32;

    fn draw(&self, surface: &mut dyn Surface) {
        for invader in &self.invaders {
            invader.draw(surface);
        }
    }

    /// Advance the formation, then move and draw each invader with the
    /// velocity the grid ended the tick with.
    fn update(&mut self, canvas_width: f32, surface: &mut dyn Surface) {
        self.advance(canvas_width);
        let vel = self.vel;
        for invader in &mut self.invaders {
            invader.update(vel, surface);
        }
    }
}
