use super::layer::{Layer, LayerElement};
use serde::{Deserialize, Serialize};

/// An ordered stack of layers; the first layer is the surface the ion
/// enters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    layers: Vec<Layer>,
}

impl Target {
    pub fn new(layers: Vec<Layer>) -> Self {
        Self { layers }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Total number of (layer, element) occurrences across the stack.
    ///
    /// Not deduplicated: a species present in two layers counts twice. The
    /// column layout of the generated layer table is keyed on this total.
    pub fn element_instance_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.elements().len()).sum()
    }

    /// Iterates every element instance in serialization order: layers in
    /// stack order, then each layer's composition in its fixed order.
    pub fn element_instances(&self) -> impl Iterator<Item = &LayerElement> {
        self.layers.iter().flat_map(|layer| layer.elements().iter())
    }
}
