//! UI domain: diagnostic overlay.

mod diagnostics;

use bevy::prelude::*;

use crate::ui::diagnostics::{spawn_diagnostics, update_diagnostics};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_diagnostics)
            .add_systems(Update, update_diagnostics);
    }
}
