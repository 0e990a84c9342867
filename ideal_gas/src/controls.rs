//! Controls panel: sliders, buttons and readouts

use egui::{Color32, Context, RichText};
use ideal_gas::{Frame, GasSimulation, InputEvent};

use crate::equations_ui::{draw_equations_section, IDEAL_GAS_EQUATIONS, IDEAL_GAS_VARIABLES};
use crate::theme::{to_color32, Theme};

/// Something the user asked for this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiAction {
    Input(InputEvent),
    ToggleTheme,
    TogglePause,
}

/// Draw the status bar and the controls side panel.
///
/// Returns the actions triggered by the user; the caller applies them
/// after the UI pass so the simulation is never mutated mid-draw.
pub fn draw_controls(
    ctx: &Context,
    sim: &GasSimulation,
    frame: &Frame,
    theme: Theme,
    paused: bool,
) -> Vec<UiAction> {
    let mut actions = Vec::new();
    let config = sim.config();
    let state = *sim.state();

    egui::TopBottomPanel::top("status").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Particles: {}", sim.particles().len()));
            ui.separator();
            ui.label(format!("Speed ×{:.2}", frame.speed_scale));
            ui.separator();
            ui.label(format!("⟨v⟩: {:.1} px/s", sim.particles().mean_speed() * frame.speed_scale));
            ui.separator();
            if paused {
                ui.label(RichText::new("PAUSED").color(Color32::YELLOW));
            } else {
                ui.label("Space to pause");
            }
        });
    });

    egui::SidePanel::right("controls_panel")
        .resizable(true)
        .default_width(300.0)
        .show(ctx, |ui| {
            ui.heading(RichText::new("Ideal Gas Law").color(Color32::LIGHT_BLUE));
            ui.separator();

            let mut t = state.temperature;
            if ui
                .add(
                    egui::Slider::new(&mut t, config.temperature.min..=config.temperature.max)
                        .text("Temperature (K)")
                        .fixed_decimals(1),
                )
                .changed()
            {
                actions.push(UiAction::Input(InputEvent::Temperature(t)));
            }

            let mut n = state.moles;
            if ui
                .add(
                    egui::Slider::new(&mut n, config.moles.min..=config.moles.max)
                        .text("Moles (mol)")
                        .fixed_decimals(3),
                )
                .changed()
            {
                actions.push(UiAction::Input(InputEvent::Moles(n)));
            }

            let mut v = state.volume;
            if ui
                .add(
                    egui::Slider::new(&mut v, config.volume.min..=config.volume.max)
                        .text("Volume (m³)")
                        .fixed_decimals(4),
                )
                .changed()
            {
                actions.push(UiAction::Input(InputEvent::Volume(v)));
            }

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("Reset").clicked() {
                    actions.push(UiAction::Input(InputEvent::Reset));
                }
                if ui.button(theme.toggle_label()).clicked() {
                    actions.push(UiAction::ToggleTheme);
                }
                if ui.button(if paused { "Resume" } else { "Pause" }).clicked() {
                    actions.push(UiAction::TogglePause);
                }
            });

            ui.add_space(8.0);
            ui.separator();

            egui::Grid::new("readouts_grid")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    for (label, value) in [
                        ("T", &frame.readouts.temperature),
                        ("n", &frame.readouts.moles),
                        ("V", &frame.readouts.volume),
                        ("P", &frame.readouts.pressure),
                    ] {
                        ui.label(RichText::new(label).monospace());
                        ui.label(value.as_str());
                        ui.end_row();
                    }
                });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Pressure: {}", frame.readouts.pressure))
                    .size(22.0)
                    .strong()
                    .color(to_color32(theme.palette().accent)),
            );
            ui.add(egui::ProgressBar::new(frame.gauge_fraction as f32).text("log₁₀ P"));

            ui.add_space(8.0);
            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| {
                draw_equations_section(ui, IDEAL_GAS_EQUATIONS, IDEAL_GAS_VARIABLES);
            });
        });

    actions
}
