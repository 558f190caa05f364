//! Sprite readiness
//!
//! Image decoding happens outside the simulation. The browser reports each
//! decoded image to the [`SpriteAtlas`]; entities poll the atlas every tick and
//! stay inert until their sprite is ready.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Which image an entity is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteKind {
    Ship,
    Invader,
}

impl SpriteKind {
    /// Asset path relative to the page
    pub fn path(&self) -> &'static str {
        match self {
            SpriteKind::Ship => "./img/spaceship.png",
            SpriteKind::Invader => "./img/invader.png",
        }
    }

    /// Image pixel -> world unit scale
    pub fn scale(&self, tuning: &Tuning) -> f32 {
        match self {
            SpriteKind::Ship => tuning.ship_sprite_scale,
            SpriteKind::Invader => tuning.invader_sprite_scale,
        }
    }
}

/// Decoded image sizes reported by the asset loader
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpriteAtlas {
    ship: Option<Vec2>,
    invader: Option<Vec2>,
}

impl SpriteAtlas {
    /// Record that an image finished decoding. Later reports overwrite earlier ones.
    pub fn insert(&mut self, kind: SpriteKind, pixel_width: f32, pixel_height: f32) {
        let size = Some(Vec2::new(pixel_width, pixel_height));
        match kind {
            SpriteKind::Ship => self.ship = size,
            SpriteKind::Invader => self.invader = size,
        }
    }

    /// Pixel size of a decoded image, if it has loaded
    pub fn get(&self, kind: SpriteKind) -> Option<Vec2> {
        match kind {
            SpriteKind::Ship => self.ship,
            SpriteKind::Invader => self.invader,
        }
    }

    pub fn is_loaded(&self, kind: SpriteKind) -> bool {
        self.get(kind).is_some()
    }
}

/// Load state of one entity's sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SpriteState {
    /// Image not decoded yet; the entity must not move, draw or collide
    Pending,
    /// Image ready; `size` is the scaled render size
    Ready { size: Vec2 },
}

/// An entity's sprite slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub scale: f32,
    pub state: SpriteState,
}

impl Sprite {
    pub fn new(kind: SpriteKind, scale: f32) -> Self {
        Self {
            kind,
            scale,
            state: SpriteState::Pending,
        }
    }

    /// Check the atlas. Returns true only on the poll that flips the sprite to ready.
    pub fn poll(&mut self, atlas: &SpriteAtlas) -> bool {
        if self.is_ready() {
            return false;
        }
        match atlas.get(self.kind) {
            Some(pixels) => {
                self.state = SpriteState::Ready {
                    size: pixels * self.scale,
                };
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        matches!(self.state, SpriteState::Ready { .. })
    }

    /// Scaled size, or `None` while pending
    #[inline]
    pub fn size(&self) -> Option<Vec2> {
        match self.state {
            SpriteState::Ready { size } => Some(size),
            SpriteState::Pending => None,
        }
    }

    /// Width in world units (0 while pending)
    #[inline]
    pub fn width(&self) -> f32 {
        self.size().map_or(0.0, |s| s.x)
    }

    /// Height in world units (0 while pending)
    #[inline]
    pub fn height(&self) -> f32 {
        self.size().map_or(0.0, |s| s.y)
    }
}
