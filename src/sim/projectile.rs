//! Player shots

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Surface};
use crate::consts::PROJECTILE_COLOR;

/// A ballistic point drawn as a filled circle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Projectile {
    pub fn new(id: u32, pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            id,
            pos,
            vel,
            radius,
        }
    }

    /// True once the whole circle is above the top edge
    #[inline]
    pub fn exited_top(&self) -> bool {
        self.pos.y + self.radius <= 0.0
    }
}

impl Entity for Projectile {
    type Args = ();

    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_circle(self.pos, self.radius, PROJECTILE_COLOR);
    }

    fn update(&mut self, _args: (), surface: &mut dyn Surface) {
        self.draw(surface);
        self.pos += self.vel;
    }
}
