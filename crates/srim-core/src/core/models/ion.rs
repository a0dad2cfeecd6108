use super::ModelError;
use crate::core::utils::elements;
use serde::{Deserialize, Serialize};

/// The projectile of a TRIM calculation.
///
/// The energy is stored in eV, the unit the caller naturally works in; the
/// input-file schema wants keV, and the conversion happens only at
/// serialization time via [`Ion::energy_kev`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ion {
    /// The atomic number Z.
    pub atomic_number: u32,
    /// The atomic mass in amu.
    pub mass: f64,
    /// The kinetic energy in eV.
    pub energy: f64,
}

impl Ion {
    /// Creates an ion from explicit data.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NonPositive`] if the mass or energy is not
    /// strictly positive.
    pub fn new(atomic_number: u32, mass: f64, energy: f64) -> Result<Self, ModelError> {
        if mass <= 0.0 {
            return Err(ModelError::NonPositive {
                field: "mass",
                value: mass,
            });
        }
        if energy <= 0.0 {
            return Err(ModelError::NonPositive {
                field: "energy",
                value: energy,
            });
        }
        Ok(Self {
            atomic_number,
            mass,
            energy,
        })
    }

    /// Creates an ion from its chemical symbol, filling in the atomic number
    /// and standard atomic weight from the built-in periodic table.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownElement`] for an unrecognized symbol and
    /// [`ModelError::NonPositive`] for a non-positive energy.
    pub fn from_symbol(symbol: &str, energy: f64) -> Result<Self, ModelError> {
        let data = elements::lookup(symbol)
            .ok_or_else(|| ModelError::UnknownElement(symbol.to_string()))?;
        Self::new(data.atomic_number, data.mass, energy)
    }

    /// The kinetic energy in keV, the unit used by the ion line of the
    /// generated input file.
    pub fn energy_kev(&self) -> f64 {
        self.energy / 1000.0
    }
}
