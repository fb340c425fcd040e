//! Data definitions for the level RON file.
//!
//! These structs mirror assets/data/level.ron and are only used for
//! deserialization. Runtime state lives in `AnchorRegistry` and `SwingTuning`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::swing::SwingTuning;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelDef {
    pub schema_version: u32,
    /// Ordered traversal; the last entry is the goal.
    pub anchors: Vec<AnchorDef>,
    #[serde(default)]
    pub hazards: Vec<HazardDef>,
    #[serde(default)]
    pub tuning: Option<SwingTuning>,
    #[serde(default)]
    pub cues: CueSoundsDef,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnchorDef {
    pub pivot: (f32, f32, f32),
    pub detection_radius: f32,
}

impl AnchorDef {
    pub fn pivot(&self) -> Vec3 {
        Vec3::new(self.pivot.0, self.pivot.1, self.pivot.2)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HazardDef {
    pub center: (f32, f32),
    pub half_extents: (f32, f32),
}

impl HazardDef {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center.0, self.center.1)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.half_extents.0, self.half_extents.1) * 2.0
    }
}

/// Asset paths for the one-shot cue sounds. Unset cues stay silent.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CueSoundsDef {
    pub jump: Option<String>,
    pub land: Option<String>,
    pub reset: Option<String>,
    pub goal: Option<String>,
}
