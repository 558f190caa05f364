//! Data-driven game balance
//!
//! Defaults come from [`crate::consts`]. The browser shell may override any
//! subset of fields with an inline JSON document.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a tuning document is rejected
#[derive(Error, Debug)]
pub enum TuningError {
    /// The document is not valid JSON for [`Tuning`]
    #[error("Invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A random range has start > end
    #[error("Empty range for {field}: {start}..={end}")]
    EmptyRange {
        field: &'static str,
        start: u32,
        end: u32,
    },

    /// The spawn interval must never be zero (it is used as a modulus)
    #[error("Spawn interval must start at 1 or more")]
    ZeroSpawnInterval,

    /// A scalar that must be strictly positive is not
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
}

/// Tunable gameplay numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player_speed: f32,
    pub player_tilt: f32,
    pub player_bottom_margin: f32,

    pub projectile_speed: f32,
    pub projectile_radius: f32,

    pub grid_spacing: f32,
    pub grid_speed: f32,
    pub grid_drop: f32,
    pub grid_columns: RangeInclusive<u32>,
    pub grid_rows: RangeInclusive<u32>,

    pub spawn_interval: RangeInclusive<u32>,

    pub ship_sprite_scale: f32,
    pub invader_sprite_scale: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            player_tilt: PLAYER_TILT,
            player_bottom_margin: PLAYER_BOTTOM_MARGIN,

            projectile_speed: PROJECTILE_SPEED,
            projectile_radius: PROJECTILE_RADIUS,

            grid_spacing: GRID_SPACING,
            grid_speed: GRID_SPEED,
            grid_drop: GRID_DROP,
            grid_columns: GRID_COLUMNS,
            grid_rows: GRID_ROWS,

            spawn_interval: SPAWN_INTERVAL,

            ship_sprite_scale: SHIP_SPRITE_SCALE,
            invader_sprite_scale: INVADER_SPRITE_SCALE,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override and validate the result
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check that every random range can be sampled and every scale is usable
    pub fn validate(&self) -> Result<(), TuningError> {
        for (field, range) in [
            ("grid_columns", &self.grid_columns),
            ("grid_rows", &self.grid_rows),
            ("spawn_interval", &self.spawn_interval),
        ] {
            if range.start() > range.end() {
                return Err(TuningError::EmptyRange {
                    field,
                    start: *range.start(),
                    end: *range.end(),
                });
            }
        }
        if *self.grid_columns.start() == 0 {
            return Err(TuningError::EmptyRange {
                field: "grid_columns",
                start: 0,
                end: *self.grid_columns.end(),
            });
        }
        if *self.grid_rows.start() == 0 {
            return Err(TuningError::EmptyRange {
                field: "grid_rows",
                start: 0,
                end: *self.grid_rows.end(),
            });
        }
        if *self.spawn_interval.start() == 0 {
            return Err(TuningError::ZeroSpawnInterval);
        }

        for (field, value) in [
            ("grid_spacing", self.grid_spacing),
            ("projectile_radius", self.projectile_radius),
            ("ship_sprite_scale", self.ship_sprite_scale),
            ("invader_sprite_scale", self.invader_sprite_scale),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(TuningError::NotPositive { field, value });
            }
        }

        Ok(())
    }
}
