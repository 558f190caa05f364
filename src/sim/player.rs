//! The player's ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Surface};
use super::input::{InputState, Key};
use super::sprite::{Sprite, SpriteAtlas, SpriteKind};
use crate::tuning::Tuning;

/// The player's ship. Moves horizontally only and tilts toward its heading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner (meaningless until the sprite is ready)
    pub pos: Vec2,
    /// Per-tick velocity, y is always 0
    pub vel: Vec2,
    /// Tilt in radians: -tilt, 0 or +tilt
    pub rotation: f32,
    pub sprite: Sprite,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            rotation: 0.0,
            sprite: Sprite::new(SpriteKind::Ship, SpriteKind::Ship.scale(tuning)),
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.sprite.is_ready()
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.sprite.width()
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.sprite.height()
    }

    /// Check for the ship image; on first readiness park the ship
    /// bottom-center, `bottom_margin` above the lower edge.
    pub fn poll_sprite(&mut self, atlas: &SpriteAtlas, canvas: Vec2, bottom_margin: f32) -> bool {
        if !self.sprite.poll(atlas) {
            return false;
        }
        self.pos = Vec2::new(
            canvas.x / 2.0 - self.width() / 2.0,
            canvas.y - self.height() - bottom_margin,
        );
        log::info!(
            "Ship ready at ({:.1}, {:.1}), size {:.1}x{:.1}",
            self.pos.x,
            self.pos.y,
            self.width(),
            self.height()
        );
        true
    }

    /// Derive velocity and tilt from held keys.
    ///
    /// Left wins over right. Bounds are checked against the current position,
    /// so a ship sitting exactly on an edge stops instead of bouncing.
    pub fn steer(&mut self, input: &InputState, canvas_width: f32, speed: f32, tilt: f32) {
        if input.is_held(Key::Left) && self.pos.x >= 0.0 {
            self.vel = Vec2::new(-speed, 0.0);
            self.rotation = -tilt;
        } else if input.is_held(Key::Right) && self.pos.x + self.width() <= canvas_width {
            self.vel = Vec2::new(speed, 0.0);
            self.rotation = tilt;
        } else {
            self.vel = Vec2::ZERO;
            self.rotation = 0.0;
        }
    }

    /// Where a new shot leaves the ship (top-center), if the ship is visible
    pub fn muzzle(&self) -> Option<Vec2> {
        self.is_ready()
            .then(|| Vec2::new(self.pos.x + self.width() / 2.0, self.pos.y))
    }
}

impl Entity for Player {
    type Args = ();

    fn draw(&self, surface: &mut dyn Surface) {
        if let Some(size) = self.sprite.size() {
            surface.draw_sprite(SpriteKind::Ship, self.pos, size, self.rotation);
        }
    }

    fn update(&mut self, _args: (), surface: &mut dyn Surface) {
        if !self.is_ready() {
            return;
        }
        self.draw(surface);
        self.pos.x += self.vel.x;
    }
}
