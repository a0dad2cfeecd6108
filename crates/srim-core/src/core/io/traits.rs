use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Defines the interface for generating the engine's input files.
///
/// Each implementor owns exactly one file of the engine's input contract:
/// its fixed name and its line layout. The interface is write-only; nothing
/// in this crate ever reads the generated files back.
pub trait SimulationInputFile {
    /// The in-memory description this file is generated from.
    type Input: ?Sized;

    /// The error type for write operations.
    type Error: Error + From<io::Error>;

    /// The fixed file name the engine expects inside its working directory.
    const FILE_NAME: &'static str;

    /// Serializes `input` into `writer` in the engine's fixed layout.
    ///
    /// # Arguments
    ///
    /// * `input` - The description to serialize.
    /// * `writer` - The writer to output to.
    ///
    /// # Return
    ///
    /// Returns `Ok(())` on success.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(input: &Self::Input, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Writes the file at an explicit path, truncating any existing file.
    ///
    /// The handle is flushed before this returns, so an I/O failure anywhere
    /// in the write surfaces here rather than being swallowed on drop.
    ///
    /// # Arguments
    ///
    /// * `input` - The description to serialize.
    /// * `path` - The path of the file to create.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(input: &Self::Input, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(input, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Writes the file under its fixed name inside `dir`, the engine's
    /// working directory.
    ///
    /// # Arguments
    ///
    /// * `input` - The description to serialize.
    /// * `dir` - The directory to place [`Self::FILE_NAME`] in.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_in_dir<P: AsRef<Path>>(input: &Self::Input, dir: P) -> Result<(), Self::Error> {
        Self::write_to_path(input, dir.as_ref().join(Self::FILE_NAME))
    }
}
