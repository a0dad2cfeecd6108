use super::traits::SimulationInputFile;
use crate::core::models::calculation::TrimCalculation;
use crate::core::models::layer::TargetElementParams;
use std::io::{self, Write};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum TrimInputError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Writer for the `TRIM.IN` configuration file.
///
/// The format is positional: the engine pairs the columns of the layer
/// table with the atom list purely by order, so a single canonical
/// iteration order (layers in stack order, then each layer's composition in
/// its fixed order) is used for the atom block, the header column tokens,
/// the stoichiometry vectors, and the per-atom energy lines. Each layer's
/// stoichiometry vector spans every element instance in the whole target,
/// with zero slots for the columns owned by other layers.
pub struct TrimInputFile;

impl SimulationInputFile for TrimInputFile {
    type Input = TrimCalculation;
    type Error = TrimInputError;

    const FILE_NAME: &'static str = "TRIM.IN";

    fn write_to(calculation: &TrimCalculation, writer: &mut impl Write) -> Result<(), TrimInputError> {
        let settings = &calculation.settings;
        let layers = calculation.target.layers();
        // Not the number of unique species: an element present in two
        // layers owns two columns.
        let num_elements = calculation.target.element_instance_count();

        debug!(
            layers = layers.len(),
            element_instances = num_elements,
            "Writing TRIM configuration"
        );

        // Lines 1-2: comments
        write!(
            writer,
            "This file controls TRIM Calculations generated by srim-rs\r\n"
        )?;
        write!(
            writer,
            "Ion: Z, Mass [amu], Energy [keV], Angle [degrees], Number Ions, Bragg Corr, AutoSave Number\r\n"
        )?;
        // Line 3: ion information
        write!(
            writer,
            "{} {} {} {} {} {} {}\r\n",
            calculation.ion.atomic_number,
            calculation.ion.mass,
            calculation.ion.energy_kev(),
            settings.angle_ions,
            calculation.number_ions,
            settings.bragg_correction,
            settings.autosave
        )?;
        // Lines 4-5: type of calculation and random seed
        write!(
            writer,
            "Cascades(1=Kitchn-Peese, 2=Full-Cascade, 3=Sputtering, 4-5=Ions;6-7=Neutrons), Random Number Seed, Reminders\r\n"
        )?;
        write!(
            writer,
            "{} {} {}\r\n",
            calculation.calculation.code(),
            settings.random_seed,
            settings.reminders
        )?;
        // Lines 6-7: output files to produce
        write!(
            writer,
            "Diskfiles (0=no,1=yes): RANGES.txt, BACKSCATT.txt, TRANSMIT.txt, Sputtered, COLLISIONS.txt(0=no, 1=Ion, 2=Ion+Recoils), Special EXYZ.txt file\r\n"
        )?;
        write!(
            writer,
            "{} {} {} {} {} {}\r\n",
            settings.ranges,
            settings.backscattered,
            settings.transmit,
            settings.sputtered,
            settings.collisions,
            settings.exyz
        )?;
        // Lines 8-9: target description, layer count, element-instance count
        write!(
            writer,
            "Target material : Number of Elements, Number of Layers\r\n"
        )?;
        write!(
            writer,
            "\"{}\" {} {}\r\n",
            settings.description,
            layers.len(),
            num_elements
        )?;
        // Lines 10-11: live plot window
        write!(
            writer,
            "PlotType (0-5); Plot Depths: Xmin, Xmax(Ang.) [=0 0 for Viewing Full Target]\r\n"
        )?;
        write!(
            writer,
            "{} {} {}\r\n",
            settings.plot_mode, settings.plot_xmin, settings.plot_xmax
        )?;
        // Atom block: one line per element instance, indexed globally from 1.
        write!(writer, "Target Elements:    Z   Mass [amu]\r\n")?;
        let mut index = 1;
        for layer in layers {
            for entry in layer.elements() {
                write!(
                    writer,
                    "Atom {} = {} =  {} {}\r\n",
                    index, entry.element.symbol, entry.element.atomic_number, entry.element.mass
                )?;
                index += 1;
            }
        }

        // Layer-table header: one column token per element instance, in
        // exactly the order the atom block above used.
        let mut header = String::from("Layer    Layer Name   Width Density");
        for entry in calculation.target.element_instances() {
            header.push_str(&format!(
                "  {}({})",
                entry.element.symbol, entry.element.atomic_number
            ));
        }
        write!(writer, "{}\r\n", header)?;
        write!(
            writer,
            "Number   Description  (Ang) (g/cm^3){}\r\n",
            "  Stoich".repeat(num_elements)
        )?;

        // Layer rows: every row spans all num_elements columns, with the
        // slots owned by earlier and later layers padded with zeros.
        let mut leading = 0;
        for (layer_index, layer) in layers.iter().enumerate() {
            let mut row = format!(
                "{} \"{}\" {} {}",
                layer_index, layer.name, layer.width, layer.density
            );
            row.push_str(&" 0.0".repeat(leading));
            for entry in layer.elements() {
                row.push_str(&format!(" {}", entry.params.stoich));
            }
            row.push_str(&" 0.0".repeat(num_elements - leading - layer.elements().len()));
            write!(writer, "{}\r\n", row)?;
            leading += layer.elements().len();
        }

        // Layer phases
        write!(writer, "0  Target layer phases (0=Solid, 1=Gas)\r\n")?;
        let phases: Vec<String> = layers
            .iter()
            .map(|layer| layer.phase.code().to_string())
            .collect();
        write!(writer, "{}\r\n", phases.join(" "))?;

        // Layer Bragg corrections
        write!(writer, "Target Compound Corrections (Bragg)\r\n")?;
        write!(writer, "{}\r\n", " 1".repeat(layers.len()))?;

        // Per-atom energies, one value per element instance in global order
        write!(
            writer,
            "Individual target atom displacement energies (eV)\r\n"
        )?;
        write!(
            writer,
            "{}\r\n",
            instance_value_line(calculation, |p| p.displacement_energy)
        )?;
        write!(
            writer,
            "Individual target atom lattice binding energies (eV)\r\n"
        )?;
        write!(
            writer,
            "{}\r\n",
            instance_value_line(calculation, |p| p.lattice_binding_energy)
        )?;
        write!(
            writer,
            "Individual target atom surface binding energies (eV)\r\n"
        )?;
        write!(
            writer,
            "{}\r\n",
            instance_value_line(calculation, |p| p.surface_binding_energy)
        )?;

        // Stopping-power table selector
        write!(writer, "Stopping Power Version (1=2011, 0=2011)\r\n")?;
        write!(writer, "{}\r\n", settings.version)?;

        Ok(())
    }
}

fn instance_value_line(
    calculation: &TrimCalculation,
    value: fn(&TargetElementParams) -> f64,
) -> String {
    let mut line = String::new();
    for entry in calculation.target.element_instances() {
        line.push_str(&format!(" {}", value(&entry.params)));
    }
    line
}
