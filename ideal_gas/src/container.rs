//! Volume → container rectangle mapping

use glam::Vec2;

use crate::config::{GasConfig, ParameterRange};

/// Lower and upper clamp of the volume fraction used for geometry.
///
/// Independent of the 1e-8 m³ volume floor in the pressure formula.
pub const MIN_VOLUME_FRACTION: f64 = 0.02;
pub const MAX_VOLUME_FRACTION: f64 = 0.95;

/// Axis-aligned box in canvas pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
}

impl ContainerRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
            width,
            height,
        }
    }

    #[cfg(test)]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// Whether `point` lies on or inside the edges.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }

    /// Whether a circle of `radius` centred at `point` fits entirely inside.
    pub fn contains_circle(&self, point: Vec2, radius: f32) -> bool {
        point.x >= self.left + radius
            && point.x <= self.right - radius
            && point.y >= self.top + radius
            && point.y <= self.bottom - radius
    }

    /// Whether `other` lies entirely within this rectangle.
    #[cfg(test)]
    pub fn encloses(&self, other: &ContainerRect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }
}

/// The padded region of the canvas the container is centred in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualizationArea {
    pub padding: f32,
    /// Largest container width (`containerMaxW`)
    pub max_width: f32,
    /// Largest container height (`containerMaxH`)
    pub max_height: f32,
}

impl VisualizationArea {
    pub fn from_config(config: &GasConfig) -> Self {
        Self {
            padding: config.area_padding,
            max_width: config.canvas_width - 2.0 * config.area_padding,
            max_height: config.canvas_height - 2.0 * config.area_padding - config.gauge_reserve,
        }
    }

    pub fn bounds(&self) -> ContainerRect {
        ContainerRect::new(self.padding, self.padding, self.max_width, self.max_height)
    }
}

/// Maps the volume slider onto the container drawn on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryMapper {
    pub area: VisualizationArea,
}

impl GeometryMapper {
    pub fn new(area: VisualizationArea) -> Self {
        Self { area }
    }

    /// Normalized volume, clamped to [0.02, 0.95].
    ///
    /// A degenerate range yields the lower clamp.
    pub fn volume_fraction(volume: f64, range: &ParameterRange) -> f64 {
        let frac = range.fraction(volume);
        if frac.is_nan() {
            return MIN_VOLUME_FRACTION;
        }
        frac.clamp(MIN_VOLUME_FRACTION, MAX_VOLUME_FRACTION)
    }

    /// Container for `volume`, centred within the visualization area.
    pub fn rect_for(&self, volume: f64, range: &ParameterRange) -> ContainerRect {
        let frac = Self::volume_fraction(volume, range) as f32;

        let width = (self.area.max_width * (0.45 + 0.45 * frac)).floor();
        let height = (self.area.max_height * (0.25 + 0.65 * frac)).floor();

        let left = self.area.padding + (self.area.max_width - width) / 2.0;
        let top = self.area.padding + (self.area.max_height - height) / 2.0;

        ContainerRect::new(left, top, width, height)
    }
}
