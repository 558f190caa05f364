//! A single enemy in a grid formation

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Surface};
use super::sprite::{Sprite, SpriteAtlas, SpriteKind};

/// One invader. It has no velocity of its own; its grid hands it one each tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invader {
    pub id: u32,
    /// Top-left corner in world space
    pub pos: Vec2,
    pub sprite: Sprite,
}

impl Invader {
    pub fn new(id: u32, pos: Vec2, scale: f32) -> Self {
        Self {
            id,
            pos,
            sprite: Sprite::new(SpriteKind::Invader, scale),
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

    pub fn poll_sprite(&mut self, atlas: &SpriteAtlas) -> bool {
        self.sprite.poll(atlas)
    }

    /// Bounding box (top-left, size) if the invader can be hit
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        self.sprite.size().map(|size| (self.pos, size))
    }
}

impl Entity for Invader {
    /// The owning grid's velocity for this tick
    type Args = Vec2;

    fn draw(&self, surface: &mut dyn Surface) {
        if let Some(size) = self.sprite.size() {
            surface.draw_sprite(SpriteKind::Invader, self.pos, size, 0.0);
        }
    }

    fn update(&mut self, velocity: Vec2, surface: &mut dyn Surface) {
        if !self.is_ready() {
            return;
        }
        self.draw(surface);
        self.pos += velocity;
    }
}
