//! Level domain: startup loading and sensor spawning.

use avian2d::prelude::*;
use bevy::prelude::*;
use std::path::PathBuf;

use crate::level::components::{
    ANCHOR_COLOR, ANCHOR_SPRITE_SIZE, Anchor, GOAL_COLOR, GoalAnchor, HAZARD_COLOR, Hazard,
};
use crate::level::data::LevelDef;
use crate::level::loader::load_level;
use crate::level::registry::AnchorRegistry;
use crate::level::validation::validate_level;
use crate::swing::SwingTuning;

/// Where the level definition is read from
#[derive(Resource, Debug, Clone)]
pub struct LevelSource {
    pub path: PathBuf,
}

impl Default for LevelSource {
    fn default() -> Self {
        Self {
            path: PathBuf::from("assets/data/level.ron"),
        }
    }
}

/// The level definition that the registry was built from
#[derive(Resource, Debug, Clone)]
pub struct LoadedLevel(pub LevelDef);

/// Build the level resources from a definition, rejecting anything
/// that would leave the player without anchor 0.
pub fn build_level(level: LevelDef) -> Result<(AnchorRegistry, SwingTuning), Vec<String>> {
    let errors = validate_level(&level);
    if !errors.is_empty() {
        return Err(errors.iter().map(ToString::to_string).collect());
    }

    let registry = AnchorRegistry::new(level.anchors.iter().map(|a| a.pivot()))
        .map_err(|e| vec![e.to_string()])?;
    let tuning = level.tuning.clone().unwrap_or_default();

    Ok((registry, tuning))
}

/// Load and validate the level. Any failure here is fatal.
pub(crate) fn load_level_content(
    mut commands: Commands,
    source: Res<LevelSource>,
    mut exit: MessageWriter<AppExit>,
) {
    let level = match load_level(&source.path) {
        Ok(level) => level,
        Err(e) => {
            error!("{}", e);
            exit.write(AppExit::error());
            return;
        }
    };

    match build_level(level.clone()) {
        Ok((registry, tuning)) => {
            info!(
                "Loaded level '{}': anchors={}, hazards={}, goal=#{}",
                source.path.display(),
                registry.count(),
                level.hazards.len(),
                registry.goal_index()
            );
            commands.insert_resource(registry);
            commands.insert_resource(tuning);
            commands.insert_resource(LoadedLevel(level));
        }
        Err(errors) => {
            for e in &errors {
                error!("Level validation: {}", e);
            }
            exit.write(AppExit::error());
        }
    }
}

pub(crate) fn spawn_anchors(
    mut commands: Commands,
    level: Option<Res<LoadedLevel>>,
    registry: Option<Res<AnchorRegistry>>,
) {
    let (Some(level), Some(registry)) = (level, registry) else {
        return;
    };

    for (anchor, def) in registry.iter().zip(&level.0.anchors) {
        let is_goal = registry.is_goal(anchor.index);
        let mut entity = commands.spawn((
            Anchor {
                index: anchor.index,
            },
            Sprite {
                color: if is_goal { GOAL_COLOR } else { ANCHOR_COLOR },
                custom_size: Some(Vec2::splat(ANCHOR_SPRITE_SIZE)),
                ..default()
            },
            Transform::from_translation(anchor.pivot),
            RigidBody::Static,
            Collider::circle(def.detection_radius),
            Sensor,
        ));
        if is_goal {
            entity.insert(GoalAnchor);
        }
    }
}

pub(crate) fn spawn_hazards(mut commands: Commands, level: Option<Res<LoadedLevel>>) {
    let Some(level) = level else {
        return;
    };

    for hazard in &level.0.hazards {
        let size = hazard.size();
        commands.spawn((
            Hazard,
            Sprite {
                color: HAZARD_COLOR,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(hazard.center().extend(-1.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            Sensor,
        ));
    }
}
