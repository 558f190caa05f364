//! Projectile vs invader hit testing
//!
//! Projectiles are circles but are tested as their bounding square against
//! the invader's rectangle. Hits are only recorded during traversal; the world
//! applies them afterwards so no collection changes while it is being walked.

use glam::Vec2;

use super::invader::Invader;
use super::projectile::Projectile;

/// A projectile/invader pair that overlapped this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub grid_id: u32,
    pub invader_id: u32,
    pub projectile_id: u32,
}

/// Overlap test between a circle's bounding square and a rectangle.
///
/// `rect_pos` is the rectangle's top-left corner. Edges that touch count as a hit.
#[inline]
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect_pos: Vec2, rect_size: Vec2) -> bool {
    center.y - radius <= rect_pos.y + rect_size.y
        && center.x + radius >= rect_pos.x
        && center.x - radius <= rect_pos.x + rect_size.x
        && center.y + radius >= rect_pos.y
}

/// Check a projectile against an invader. Invaders whose sprite has not
/// loaded have no bounds and can never be hit.
pub fn projectile_hits_invader(projectile: &Projectile, invader: &Invader) -> bool {
    match invader.bounds() {
        Some((pos, size)) => circle_rect_overlap(projectile.pos, projectile.radius, pos, size),
        None => false,
    }
}
