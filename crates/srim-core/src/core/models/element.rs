use super::ModelError;
use crate::core::utils::elements;
use serde::{Deserialize, Serialize};

/// Represents one chemical element as it occurs in a target layer.
///
/// Identity is positional, not chemical: the same species occurring in two
/// layers is two independent `Element` values, each serialized as its own
/// column of the generated input file with independently chosen per-layer
/// parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// The chemical symbol (e.g., "Si", "Au").
    pub symbol: String,
    /// The atomic number Z.
    pub atomic_number: u32,
    /// The atomic mass in amu.
    pub mass: f64,
}

impl Element {
    /// Creates an element from explicit data.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The chemical symbol.
    /// * `atomic_number` - The atomic number Z.
    /// * `mass` - The atomic mass in amu.
    pub fn new(symbol: &str, atomic_number: u32, mass: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            atomic_number,
            mass,
        }
    }

    /// Creates an element from its chemical symbol, filling in the atomic
    /// number and standard atomic weight from the built-in periodic table.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownElement`] if the symbol is not in the
    /// table (H through U are covered).
    pub fn from_symbol(symbol: &str) -> Result<Self, ModelError> {
        let data = elements::lookup(symbol)
            .ok_or_else(|| ModelError::UnknownElement(symbol.to_string()))?;
        Ok(Self {
            symbol: symbol.trim().to_string(),
            atomic_number: data.atomic_number,
            mass: data.mass,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_element_carries_explicit_values() {
        let element = Element::new("Si", 14, 28.085);
        assert_eq!(element.symbol, "Si");
        assert_eq!(element.atomic_number, 14);
        assert_eq!(element.mass, 28.085);
    }

    #[test]
    fn from_symbol_fills_atomic_data() {
        let nickel = Element::from_symbol("Ni").unwrap();
        assert_eq!(nickel.atomic_number, 28);
        assert_eq!(nickel.mass, 58.693);
    }

    #[test]
    fn from_symbol_trims_whitespace() {
        let boron = Element::from_symbol(" B ").unwrap();
        assert_eq!(boron.symbol, "B");
        assert_eq!(boron.atomic_number, 5);
    }

    #[test]
    fn from_symbol_rejects_unknown_symbols() {
        assert_eq!(
            Element::from_symbol("Qq"),
            Err(ModelError::UnknownElement("Qq".to_string()))
        );
    }
}
