//! Swing domain: the player's swing/launch state machine and its plugin.

mod body;
mod bootstrap;
mod components;
mod machine;
mod resources;
mod sampler;
mod state;
mod systems;


pub use components::{Arm, Player};
pub use machine::SwingMachine;
pub use resources::{SwingInput, SwingTuning};

use bevy::prelude::*;

use crate::level::{AnchorRegistry, LevelSetup, OverlapDetection};
use crate::swing::bootstrap::spawn_player;
use crate::swing::systems::{
    handle_overlaps, read_input, sync_orientation, update_frame, update_tick,
};

pub struct SwingPlugin;

impl Plugin for SwingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SwingInput>()
            .add_systems(Startup, spawn_player.after(LevelSetup))
            .add_systems(
                Update,
                (read_input, update_frame, sync_orientation)
                    .chain()
                    .run_if(resource_exists::<AnchorRegistry>),
            )
            .add_systems(
                FixedUpdate,
                (handle_overlaps, update_tick)
                    .chain()
                    .after(OverlapDetection)
                    .run_if(resource_exists::<AnchorRegistry>),
            );
    }
}
