use thiserror::Error;

/// Result alias for configuration handling.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Reasons a [`GasConfig`](crate::GasConfig) cannot drive a simulation.
///
/// The stepping core itself never fails; these are caught once, up front,
/// so that every later division and logarithm has a non-degenerate span.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// A slider range whose bounds are inverted, equal, or not finite.
    #[error("{name} range is empty or not finite: [{min}, {max}]")]
    EmptyRange {
        name: &'static str,
        min: f64,
        max: f64,
    },

    /// A slider default that falls outside its own range.
    #[error("{name} default {value} lies outside [{min}, {max}]")]
    DefaultOutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Padding and gauge reserve leave no room for the container.
    #[error("canvas {width}x{height} leaves no visualization area after padding")]
    CanvasTooSmall { width: f32, height: f32 },

    /// Particle count or speed bounds that cannot be satisfied.
    #[error("invalid particle setting: {0}")]
    InvalidParticles(String),

    /// Pressure display bounds that cannot be put on a log scale.
    #[error("pressure display bounds must satisfy 0 < min < max, got [{min}, {max}]")]
    InvalidGaugeBounds { min: f64, max: f64 },
}
