#[cfg(feature = "dev-tools")]
mod ui;

mod feedback;
mod level;
mod swing;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() -> AppExit {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "TreeTopper".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        level::LevelPlugin,
        swing::SwingPlugin,
        feedback::FeedbackPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(ui::UiPlugin);

    app.run()
}
