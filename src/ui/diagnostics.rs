//! UI domain: on-screen state and speed readout.

use bevy::prelude::*;

use crate::swing::{Player, SwingMachine};

pub(crate) const DIAGNOSTICS_PADDING: f32 = 12.0;
pub(crate) const DIAGNOSTICS_FONT_SIZE: f32 = 18.0;

/// Marker for the diagnostics text node
#[derive(Component)]
pub struct DiagnosticsText;

pub(crate) fn spawn_diagnostics(mut commands: Commands) {
    commands.spawn((
        DiagnosticsText,
        Text::new(""),
        TextFont {
            font_size: DIAGNOSTICS_FONT_SIZE,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(DIAGNOSTICS_PADDING),
            top: Val::Px(DIAGNOSTICS_PADDING),
            ..default()
        },
    ));
}

pub(crate) fn format_diagnostics(machine: &SwingMachine) -> String {
    format!(
        "Current State: {}\nSpeed: {:.1}",
        machine.state(),
        machine.average_speed()
    )
}

pub(crate) fn update_diagnostics(
    player_query: Query<&SwingMachine, With<Player>>,
    mut text_query: Query<&mut Text, With<DiagnosticsText>>,
) {
    let Ok(machine) = player_query.single() else {
        return;
    };

    let line = format_diagnostics(machine);
    for mut text in &mut text_query {
        if text.0 != line {
            text.0 = line.clone();
        }
    }
}
