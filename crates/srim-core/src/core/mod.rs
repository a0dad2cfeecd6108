//! # Core Module
//!
//! This module contains the complete machinery for describing and serializing a
//! TRIM calculation: the typed run description, the input-file writers, and the
//! static reference data they rely on.
//!
//! ## Architecture
//!
//! - **Run Description** ([`models`]) - Ion, target layers, element parameters, and
//!   run settings, composed into one [`models::calculation::TrimCalculation`]
//! - **File Generation** ([`io`]) - Writers for the engine's fixed-format input
//!   files, built around a shared write-only trait
//! - **Reference Data** ([`utils`]) - Static periodic-table lookup for constructing
//!   ions and elements by chemical symbol

pub mod io;
pub mod models;
pub mod utils;
