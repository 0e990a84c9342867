//! Equations section for the gas visualizer
//!
//! Displays the relations behind the display using egui.

use egui::{Color32, RichText, Ui};

/// An equation with its name and formula
pub struct Equation {
    pub name: &'static str,
    pub formula: &'static str,
    pub description: &'static str,
}

/// Draw collapsible equation and variable lists into `ui`
pub fn draw_equations_section(ui: &mut Ui, equations: &[Equation], variables: &[(&str, &str)]) {
    ui.collapsing(RichText::new("📐 Equations").strong(), |ui| {
        for eq in equations {
            ui.group(|ui| {
                ui.label(RichText::new(eq.name).strong().color(Color32::YELLOW));
                ui.label(RichText::new(eq.formula).monospace());
                ui.label(RichText::new(eq.description).small().italics());
            });
            ui.add_space(4.0);
        }
    });

    ui.add_space(8.0);

    ui.collapsing(RichText::new("📖 Variables").strong(), |ui| {
        egui::Grid::new("variables_grid")
            .num_columns(2)
            .spacing([10.0, 4.0])
            .show(ui, |ui| {
                for (symbol, meaning) in variables {
                    ui.label(RichText::new(*symbol).monospace().color(Color32::LIGHT_GREEN));
                    ui.label(*meaning);
                    ui.end_row();
                }
            });
    });
}

// ============================================================================
// Ideal Gas Equations
// ============================================================================

pub const IDEAL_GAS_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Ideal Gas Law",
        formula: "P·V = n·R·T",
        description: "Pressure shown is P = nRT / V",
    },
    Equation {
        name: "Container Size",
        formula: "f = clamp((V − Vmin)/(Vmax − Vmin), 0.02, 0.95)",
        description: "Width 45–90% and height 25–90% of the drawing area",
    },
    Equation {
        name: "Particle Count",
        formula: "N = clamp(⌊40·(0.2 + 4.8·(n − nmin)/(nmax − nmin))⌋, 5, 250)",
        description: "More moles, more particles on screen",
    },
    Equation {
        name: "Speed Scale",
        formula: "s = 0.4 + 1.6·clamp((T − Tmin)/(Tmax − Tmin), 0, 1)",
        description: "Hotter gas moves faster (⟨KE⟩ ∝ T)",
    },
    Equation {
        name: "Pressure Gauge",
        formula: "g = (log₁₀P − 2) / (7 − 2)",
        description: "Log scale from 10² Pa to 10⁷ Pa",
    },
];

pub const IDEAL_GAS_VARIABLES: &[(&str, &str)] = &[
    ("P", "Pressure (Pa)"),
    ("V", "Volume (m³)"),
    ("n", "Amount of gas (mol)"),
    ("R", "Gas constant (8.314 J/(mol·K))"),
    ("T", "Temperature (K)"),
    ("N", "Particles drawn"),
    ("s", "Speed multiplier"),
    ("g", "Gauge fill fraction"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_scale_formula_shows_the_clamp() {
        let eq = IDEAL_GAS_EQUATIONS
            .iter()
            .find(|eq| eq.name == "Speed Scale")
            .expect("speed scale equation listed");
        assert!(eq.formula.contains("clamp("), "{}", eq.formula);
        assert!(eq.formula.ends_with(", 0, 1)"), "{}", eq.formula);
    }
}
