//! Light and dark colour palettes

/// Colours used to draw one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub window_bg: [f32; 4],
    pub canvas_bg: [f32; 4],
    pub container_bg: [f32; 4],
    pub border: [f32; 4],
    pub particle: [f32; 4],
    pub accent: [f32; 4],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Caption for the button that switches away from this theme
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark mode",
            Theme::Dark => "Light mode",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                window_bg: [0.93, 0.94, 0.96, 1.0],
                canvas_bg: [0.98, 0.98, 0.99, 1.0],
                container_bg: [0.88, 0.92, 0.97, 1.0],
                border: [0.25, 0.28, 0.33, 1.0],
                particle: [0.85, 0.25, 0.2, 1.0],
                accent: [0.1, 0.45, 0.85, 1.0],
            },
            Theme::Dark => Palette {
                window_bg: [0.05, 0.05, 0.08, 1.0],
                canvas_bg: [0.1, 0.1, 0.13, 1.0],
                container_bg: [0.15, 0.17, 0.22, 1.0],
                border: [0.6, 0.62, 0.68, 1.0],
                particle: [1.0, 0.6, 0.25, 1.0],
                accent: [0.35, 0.75, 1.0, 1.0],
            },
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        }
    }
}

/// Convert a linear `[r, g, b, a]` colour for use in egui widgets.
pub fn to_color32(c: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(c[0], c[1], c[2], c[3]).into()
}
