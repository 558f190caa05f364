//! Update/draw contract shared by every on-screen entity

use glam::Vec2;

use super::sprite::SpriteKind;

/// Drawing primitives the simulation needs from a render target
pub trait Surface {
    /// Fill the whole surface with a solid color
    fn clear(&mut self, color: &str);

    /// Draw a sprite into the rect at `position` with `size`, rotated by
    /// `rotation` radians about the rect center
    fn draw_sprite(&mut self, kind: SpriteKind, position: Vec2, size: Vec2, rotation: f32);

    /// Draw a filled circle
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
}

/// An entity that can draw itself and advance one tick
///
/// `update` draws the current state first and then applies motion, so what is
/// on screen always lags the simulation by exactly one step of motion.
pub trait Entity {
    /// Per-tick input to `update` (e.g. the velocity a grid hands its invaders)
    type Args;

    fn draw(&self, surface: &mut dyn Surface);

    fn update(&mut self, args: Self::Args, surface: &mut dyn Surface);
}
