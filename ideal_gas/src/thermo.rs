//! Thermodynamic state and the ideal gas law

use crate::constants::{MIN_MOLES, MIN_TEMPERATURE, MIN_VOLUME, R};

/// Current slider values for temperature, mole count and volume.
///
/// Values are stored exactly as read so they can be displayed unchanged;
/// the floors only apply inside [`pressure`](Self::pressure).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermodynamicState {
    /// Temperature (K)
    pub temperature: f64,
    /// Amount of gas (mol)
    pub moles: f64,
    /// Volume (m³)
    pub volume: f64,
}

impl ThermodynamicState {
    pub fn new(temperature: f64, moles: f64, volume: f64) -> Self {
        Self {
            temperature,
            moles,
            volume,
        }
    }

    pub fn update(&mut self, temperature: f64, moles: f64, volume: f64) {
        self.temperature = temperature;
        self.moles = moles;
        self.volume = volume;
    }

    /// Temperature, moles and volume floored for use in the gas law.
    pub fn effective(&self) -> (f64, f64, f64) {
        (
            self.temperature.max(MIN_TEMPERATURE),
            self.moles.max(MIN_MOLES),
            self.volume.max(MIN_VOLUME),
        )
    }

    /// Pressure in pascals: P = nRT / V
    pub fn pressure(&self) -> f64 {
        let (t, n, v) = self.effective();
        n * R * t / v
    }
}
