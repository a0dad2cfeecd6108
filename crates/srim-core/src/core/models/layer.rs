use super::ModelError;
use super::element::Element;
use serde::{Deserialize, Serialize};

/// Physical state of a target layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Solid,
    Gas,
}

impl Phase {
    /// The numeric code the engine's input schema uses.
    pub const fn code(self) -> u8 {
        match self {
            Phase::Solid => 0,
            Phase::Gas => 1,
        }
    }
}

/// Per-layer physical parameters of one element instance.
///
/// The defaults are the engine's conventional values for a simple solid:
/// pure composition, 25 eV displacement threshold, 3 eV lattice binding,
/// 2 eV surface binding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetElementParams {
    /// Relative atomic fraction of the element within the layer.
    pub stoich: f64,
    /// Displacement energy E_d in eV.
    pub displacement_energy: f64,
    /// Lattice binding energy in eV.
    pub lattice_binding_energy: f64,
    /// Surface binding energy in eV.
    pub surface_binding_energy: f64,
}

impl Default for TargetElementParams {
    fn default() -> Self {
        Self {
            stoich: 1.0,
            displacement_energy: 25.0,
            lattice_binding_energy: 3.0,
            surface_binding_energy: 2.0,
        }
    }
}

/// One entry of a layer's composition: an element plus its per-layer
/// parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerElement {
    #[serde(flatten)]
    pub element: Element,
    #[serde(flatten)]
    pub params: TargetElementParams,
}

/// A homogeneous slab of target material.
///
/// The composition is an ordered sequence fixed at construction. Every
/// serialization pass over the layer (atom block, header columns,
/// stoichiometry row, per-atom energy lines) iterates this same sequence,
/// which is what keeps the generated file's columns aligned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    /// Width in Angstroms.
    pub width: f64,
    /// Density in g/cm^3.
    pub density: f64,
    #[serde(default)]
    pub phase: Phase,
    elements: Vec<LayerElement>,
}

impl Layer {
    /// Creates a layer with the given composition.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NonPositive`] for a non-positive width or
    /// density, and [`ModelError::Negative`] for a negative stoichiometry.
    pub fn new(
        name: &str,
        width: f64,
        density: f64,
        phase: Phase,
        elements: Vec<LayerElement>,
    ) -> Result<Self, ModelError> {
        if width <= 0.0 {
            return Err(ModelError::NonPositive {
                field: "width",
                value: width,
            });
        }
        if density <= 0.0 {
            return Err(ModelError::NonPositive {
                field: "density",
                value: density,
            });
        }
        for entry in &elements {
            if entry.params.stoich < 0.0 {
                return Err(ModelError::Negative {
                    field: "stoich",
                    value: entry.params.stoich,
                });
            }
        }
        Ok(Self {
            name: name.to_string(),
            width,
            density,
            phase,
            elements,
        })
    }

    /// The layer's composition, in the fixed order established at
    /// construction.
    pub fn elements(&self) -> &[LayerElement] {
        &self.elements
    }
}
