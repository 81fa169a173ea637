//! Weather toggle panel.
//!
//! A small anchored egui window with the cyclic state toggle. The button
//! shows the active state's glyph and name; clicking it requests the next
//! state in the cycle. The panel is tinted from the theme sink, so it
//! follows every transition.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use rendering::theme::Theme;
use simulation::clock::SimClock;
use simulation::events::SetWeather;
use simulation::weather::WeatherState;

fn to_color32(color: Color) -> egui::Color32 {
    let srgba = color.to_srgba();
    egui::Color32::from_rgba_unmultiplied(
        (srgba.red * 255.0) as u8,
        (srgba.green * 255.0) as u8,
        (srgba.blue * 255.0) as u8,
        (srgba.alpha * 255.0) as u8,
    )
}

/// Renders the toggle window and forwards clicks as state-change requests.
pub fn weather_toggle_ui(
    mut contexts: EguiContexts,
    weather: Res<WeatherState>,
    clock: Res<SimClock>,
    theme: Res<Theme>,
    mut requests: EventWriter<SetWeather>,
) {
    let current = weather.current;
    let frame = egui::Frame::window(&contexts.ctx_mut().style())
        .fill(to_color32(theme.panel))
        .stroke(egui::Stroke::new(1.0, to_color32(theme.accent)));

    egui::Window::new("weather-toggle")
        .title_bar(false)
        .resizable(false)
        .anchor(egui::Align2::RIGHT_TOP, [-16.0, 16.0])
        .frame(frame)
        .show(contexts.ctx_mut(), |ui| {
            let label = format!("{} {}", current.icon(), current.name());
            if ui.button(label).on_hover_text("switch weather").clicked() {
                requests.send(SetWeather(current.next()));
            }
            ui.small(format!("t+{:.0}s", clock.now_ms() / 1000.0));
        });
}
