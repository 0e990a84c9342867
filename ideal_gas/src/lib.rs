//! Ideal Gas Law Visualizer
//!
//! The simulation core behind an interactive illustration of P·V = n·R·T:
//!
//! - **Thermodynamic state**: slider-driven T, n, V with a derived pressure
//! - **Container geometry**: volume mapped onto an on-screen rectangle
//! - **Particle population**: mole count mapped onto a live particle set
//! - **Stepping**: wall-bouncing particles whose speed follows temperature
//! - **Pressure gauge**: log-scaled fill fraction for the pressure bar
//!
//! Nothing in this crate touches a drawing surface. The `ideal_gas` binary
//! reads a [`Frame`] after each step and renders it with wgpu.

pub mod config;
pub mod container;
pub mod error;
pub mod format;
pub mod gauge;
pub mod particle;
pub mod population;
pub mod simulation;
pub mod thermo;

pub use config::{GasConfig, ParameterRange};
pub use container::{ContainerRect, GeometryMapper, VisualizationArea};
pub use error::{ConfigError, Result};
pub use gauge::{GaugeLayout, PressureGauge};
pub use particle::Particle;
pub use population::ParticlePopulation;
pub use simulation::{Frame, GasSimulation, InputEvent, ParticleView, Readouts};
pub use thermo::ThermodynamicState;

/// Physical constants and computation floors
pub mod constants {
    /// Molar gas constant R in J/(mol·K)
    pub const R: f64 = 8.31446261815324;

    /// Smallest temperature fed into the pressure formula (K)
    pub const MIN_TEMPERATURE: f64 = 0.1;

    /// Smallest mole count fed into the pressure formula (mol)
    pub const MIN_MOLES: f64 = 1e-6;

    /// Smallest volume fed into the pressure formula (m³)
    pub const MIN_VOLUME: f64 = 1e-8;
}
