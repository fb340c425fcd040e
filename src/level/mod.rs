//! Level domain: anchor registry, level loading, and sensor wiring.

mod components;
mod data;
mod events;
mod loader;
mod registry;
mod spawn;
mod systems;
mod validation;

#[cfg(test)]
mod tests;

pub use events::{OverlapEvent, OverlapKind};
pub use registry::AnchorRegistry;
pub use spawn::LoadedLevel;

use bevy::prelude::*;

use crate::level::spawn::{LevelSource, load_level_content, spawn_anchors, spawn_hazards};
use crate::level::systems::{classify_overlaps, sync_anchor_detection};

/// Startup systems that must finish before anything reads the registry
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct LevelSetup;

/// Fixed-tick systems that publish overlap events
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct OverlapDetection;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelSource>()
            .add_message::<OverlapEvent>()
            .add_systems(
                Startup,
                (load_level_content, spawn_anchors, spawn_hazards)
                    .chain()
                    .in_set(LevelSetup),
            )
            .add_systems(FixedUpdate, classify_overlaps.in_set(OverlapDetection))
            .add_systems(
                Update,
                sync_anchor_detection.run_if(resource_exists::<AnchorRegistry>),
            );
    }
}
