//! Control panel for the backdrop.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod toggle_panel;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Update, toggle_panel::weather_toggle_ui);
    }
}
