use serde::{Deserialize, Serialize};

/// Run-level options of a TRIM calculation.
///
/// Every option the engine's input schema recognizes is a named, typed
/// field here, so a misspelled or missing option is a construction-time
/// error rather than a silent gap in the generated file. The defaults
/// describe a plain batch run with no extra output files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Run title, quoted in the target header line.
    pub description: String,
    /// Angle of incidence of the beam, in degrees off the surface normal.
    pub angle_ions: f64,
    /// Bragg correction applied to the stopping of the compound target.
    pub bragg_correction: f64,
    /// Interval (in ions) between engine autosaves; 0 disables.
    pub autosave: u32,
    pub random_seed: u32,
    /// Whether the engine pauses on its periodic reminders.
    pub reminders: u32,
    /// Write RANGES.txt (0=no, 1=yes).
    pub ranges: u32,
    /// Write BACKSCATT.txt (0=no, 1=yes).
    pub backscattered: u32,
    /// Write TRANSMIT.txt (0=no, 1=yes).
    pub transmit: u32,
    /// Write the sputtered-atom file (0=no, 1=yes).
    pub sputtered: u32,
    /// COLLISIONS.txt detail: 0=off, 1=ions, 2=ions and recoils.
    pub collisions: u32,
    /// Write the EXYZ.txt trajectory file (0=no, 1=yes).
    pub exyz: u32,
    /// Live plot type shown by the engine (0-5).
    pub plot_mode: u32,
    /// Left edge of the plotted depth window, in Angstroms.
    pub plot_xmin: f64,
    /// Right edge of the plotted depth window; 0 0 shows the full target.
    pub plot_xmax: f64,
    /// Stopping-power table selector, passed through uninterpreted.
    pub version: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            description: "srim-rs run".to_string(),
            angle_ions: 0.0,
            bragg_correction: 1.0,
            autosave: 0,
            random_seed: 0,
            reminders: 0,
            ranges: 0,
            backscattered: 0,
            transmit: 0,
            sputtered: 0,
            collisions: 0,
            exyz: 0,
            plot_mode: 5,
            plot_xmin: 0.0,
            plot_xmax: 0.0,
            version: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_a_plain_batch_run() {
        let settings = Settings::default();
        assert_eq!(settings.description, "srim-rs run");
        assert_eq!(settings.bragg_correction, 1.0);
        assert_eq!(settings.plot_mode, 5);
        assert_eq!(settings.ranges, 0);
        assert_eq!(settings.collisions, 0);
        assert_eq!(settings.version, 0);
    }

    #[test]
    fn partial_toml_fills_remaining_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            description = "boron implant"
            collisions = 2
            random_seed = 12345
            "#,
        )
        .unwrap();
        assert_eq!(settings.description, "boron implant");
        assert_eq!(settings.collisions, 2);
        assert_eq!(settings.random_seed, 12345);
        assert_eq!(settings.bragg_correction, 1.0);
        assert_eq!(settings.plot_mode, 5);
    }
}
