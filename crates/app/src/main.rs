use bevy::prelude::*;
use bevy::window::PresentMode;

use simulation::sim_rng::SimRng;
use simulation::weather::{WeatherKind, WeatherState};

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Nimbus".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        simulation::SimulationPlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ));

    // The persisted selection is external glue: whatever stored it hands it
    // back through NIMBUS_STATE. Bad values degrade to the default state.
    app.insert_resource(WeatherState::new(initial_state_from_env()));

    // NIMBUS_SEED pins the spawn sequences for reproducible runs.
    if let Ok(value) = std::env::var("NIMBUS_SEED") {
        match value.parse::<u64>() {
            Ok(seed) => {
                app.insert_resource(SimRng::from_seed_u64(seed));
            }
            Err(_) => {
                warn!("NIMBUS_SEED '{value}' is not a number; using the default seed");
            }
        }
    }

    app.run();
}

fn initial_state_from_env() -> WeatherKind {
    match std::env::var("NIMBUS_STATE") {
        Ok(value) => value.parse::<WeatherKind>().unwrap_or_else(|err| {
            warn!("{err}; starting in '{}'", WeatherKind::default());
            WeatherKind::default()
        }),
        Err(_) => WeatherKind::default(),
    }
}
