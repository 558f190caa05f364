//! Surface that records draw calls instead of rasterizing them
//!
//! Used by the headless native build and by tests to observe what a tick drew.

use glam::Vec2;

use crate::sim::{SpriteKind, Surface};

/// One recorded drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        color: String,
    },
    Sprite {
        kind: SpriteKind,
        position: Vec2,
        size: Vec2,
        rotation: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: String,
    },
}

/// In-memory draw target
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the commands recorded so far, leaving the surface empty
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of sprites of `kind` drawn since the last `take`
    pub fn sprite_count(&self, kind: SpriteKind) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { kind: k, .. } if *k == kind))
            .count()
    }

    /// Centers of all circles drawn since the last `take`
    pub fn circle_centers(&self) -> Vec<Vec2> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { center, .. } => Some(*center),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: &str) {
        self.commands.push(DrawCommand::Clear {
            color: color.to_string(),
        });
    }

    fn draw_sprite(&mut self, kind: SpriteKind, position: Vec2, size: Vec2, rotation: f32) {
        self.commands.push(DrawCommand::Sprite {
            kind,
            position,
            size,
            rotation,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color: color.to_string(),
        });
    }
}
