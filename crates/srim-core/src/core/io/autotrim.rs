use super::traits::SimulationInputFile;
use crate::core::models::calculation::RunMode;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AutoTrimError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Writer for the `TRIMAUTO` control file.
///
/// The engine reads this single-integer file at startup to decide whether
/// to run interactively, without keyboard input, or resume a saved
/// calculation.
pub struct AutoTrimFile;

impl SimulationInputFile for AutoTrimFile {
    type Input = RunMode;
    type Error = AutoTrimError;

    const FILE_NAME: &'static str = "TRIMAUTO";

    fn write_to(mode: &RunMode, writer: &mut impl Write) -> Result<(), AutoTrimError> {
        // A bare integer, no line terminator.
        write!(writer, "{}", mode.code())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(mode: RunMode) -> String {
        let mut buffer = Vec::new();
        AutoTrimFile::write_to(&mode, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn each_mode_writes_exactly_its_code() {
        assert_eq!(render(RunMode::Normal), "0");
        assert_eq!(render(RunMode::Batch), "1");
        assert_eq!(render(RunMode::Resume), "2");
    }

    #[test]
    fn write_in_dir_creates_the_control_file() {
        let dir = tempfile::tempdir().unwrap();
        AutoTrimFile::write_in_dir(&RunMode::Batch, dir.path()).unwrap();
        let content = std::fs::read_to_string(dir.path().join("TRIMAUTO")).unwrap();
        assert_eq!(content, "1");
    }

    #[test]
    fn write_in_dir_overwrites_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("TRIMAUTO"), "stale contents").unwrap();
        AutoTrimFile::write_in_dir(&RunMode::Resume, dir.path()).unwrap();
        let content = std::fs::read_to_string(dir.path().join("TRIMAUTO")).unwrap();
        assert_eq!(content, "2");
    }
}
