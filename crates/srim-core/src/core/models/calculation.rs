use super::ion::Ion;
use super::settings::Settings;
use super::target::Target;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// How the engine interacts with the operator, recorded in the one-line
/// `TRIMAUTO` control file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunMode {
    /// The engine runs normally, prompting on its own console.
    Normal,
    /// The engine runs without keyboard input; the only mode that makes
    /// sense when another program drives it.
    #[default]
    Batch,
    /// The engine resumes its last saved calculation.
    Resume,
}

impl RunMode {
    /// The numeric code the control file carries.
    pub const fn code(self) -> u8 {
        match self {
            RunMode::Normal => 0,
            RunMode::Batch => 1,
            RunMode::Resume => 2,
        }
    }
}

/// Damage model selector for the calculation line of the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculationType {
    /// Ion distribution with quick Kinchin-Pease damage estimation.
    #[default]
    KinchinPease,
    /// Full collision cascades followed for every recoil.
    FullCascade,
    /// Monolayer collision steps for surface sputtering.
    Sputtering,
    /// Quick damage with ion starting conditions read from TRIM.DAT.
    IonsKinchinPease,
    /// Full cascades with ion starting conditions read from TRIM.DAT.
    IonsFullCascade,
    /// Quick damage with recoil starting conditions read from TRIM.DAT.
    NeutronsKinchinPease,
    /// Full cascades with recoil starting conditions read from TRIM.DAT.
    NeutronsFullCascade,
}

impl CalculationType {
    /// The numeric code the calculation line carries.
    pub const fn code(self) -> u8 {
        match self {
            CalculationType::KinchinPease => 1,
            CalculationType::FullCascade => 2,
            CalculationType::Sputtering => 3,
            CalculationType::IonsKinchinPease => 4,
            CalculationType::IonsFullCascade => 5,
            CalculationType::NeutronsKinchinPease => 6,
            CalculationType::NeutronsFullCascade => 7,
        }
    }
}

/// A complete description of one TRIM run: the aggregate every input-file
/// writer consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrimCalculation {
    pub ion: Ion,
    pub target: Target,
    #[serde(default)]
    pub calculation: CalculationType,
    /// Total number of ions to transport.
    pub number_ions: u32,
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Debug, Error)]
pub enum CalculationLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

impl TrimCalculation {
    /// Loads a run description from a TOML file.
    pub fn load(path: &Path) -> Result<Self, CalculationLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| CalculationLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let calculation: Self =
            toml::from_str(&content).map_err(|e| CalculationLoadError::Toml {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
        debug!(
            layers = calculation.target.layers().len(),
            element_instances = calculation.target.element_instance_count(),
            "Loaded TRIM run description"
        );
        Ok(calculation)
    }
}
