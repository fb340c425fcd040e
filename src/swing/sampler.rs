//! Rolling speed buffer sampled on the fixed tick.
//!
//! Unfilled slots count as zero, so the average is biased low for the
//! first `SPEED_SAMPLES` ticks after allocation.

use bevy::prelude::*;

/// Number of ticks in the averaging window
pub const SPEED_SAMPLES: usize = 30;

#[derive(Debug, Clone)]
pub struct SpeedSampler {
    samples: [f32; SPEED_SAMPLES],
    /// Total samples written; slot is `cursor % SPEED_SAMPLES`
    cursor: usize,
    last_direction: Vec3,
}

impl SpeedSampler {
    pub fn new() -> Self {
        Self {
            samples: [0.0; SPEED_SAMPLES],
            cursor: 0,
            last_direction: Vec3::ZERO,
        }
    }

    pub fn record(&mut self, speed: f32, direction: Vec3) {
        self.samples[self.cursor % SPEED_SAMPLES] = speed;
        self.cursor = self.cursor.wrapping_add(1);
        self.last_direction = direction;
    }

    /// Mean over every slot, including ones not yet written.
    pub fn average_magnitude(&self) -> f32 {
        self.samples.iter().sum::<f32>() / SPEED_SAMPLES as f32
    }

    pub fn last_direction(&self) -> Vec3 {
        self.last_direction
    }

    pub fn recorded(&self) -> usize {
        self.cursor
    }

    /// Last direction scaled to the averaged magnitude.
    pub fn launch_vector(&self) -> Vec3 {
        self.last_direction.normalize_or_zero() * self.average_magnitude()
    }
}

impl Default for SpeedSampler {
    fn default() -> Self {
        Self::new()
    }
}
