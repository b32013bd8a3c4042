//! Implementation of the CUE generation command.
//!
//! Resolves the input path, obtains ffprobe chapter output (by running
//! ffprobe or reading a captured file), and writes the CUE sheet, prints it,
//! or prints the parsed chapters as JSON.

use crate::cli::Cli;
use crate::error::{CliResult, probe_output_read_error};

use cuegen_core::external::{CommandFfprobeExecutor, FfprobeExecutor};
use cuegen_core::utils::{absolute_path, ensure_input_file, get_filename_safe};
use cuegen_core::{CoreError, CueSheet, cue_path_for, generate_for_file, write_cue_file};

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

/// Where the generated sheet ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    Written(PathBuf),
    Printed,
}

/// Runs the command against the real ffprobe and stdout.
pub fn run_generate(cli: &Cli) -> CliResult<GenerateOutcome> {
    let executor = CommandFfprobeExecutor::with_program(cli.ffprobe.as_str());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_generate_with(cli, &executor, &mut out)
}

/// Runs the command with an injected ffprobe executor and output stream.
pub fn run_generate_with<E, W>(cli: &Cli, executor: &E, out: &mut W) -> CliResult<GenerateOutcome>
where
    E: FfprobeExecutor + ?Sized,
    W: Write,
{
    let input = absolute_path(&cli.input_path)?;
    debug!("Input file: {}", input.display());

    let sheet = match &cli.probe_output {
        Some(probe_file) => sheet_from_captured_output(&input, probe_file)?,
        None => generate_for_file(executor, &input)?,
    };

    if cli.json {
        let json = serde_json::to_string_pretty(&sheet.chapters)
            .map_err(|e| CoreError::Serialization(e.to_string()))?;
        writeln!(out, "{json}")?;
        return Ok(GenerateOutcome::Printed);
    }

    if cli.stdout {
        writeln!(out, "{}", sheet.render())?;
        return Ok(GenerateOutcome::Printed);
    }

    let cue_path = cli
        .output_path
        .clone()
        .unwrap_or_else(|| cue_path_for(&input));
    write_cue_file(&sheet, &cue_path)?;
    info!("CUE sheet written to {}", cue_path.display());

    Ok(GenerateOutcome::Written(cue_path))
}

fn sheet_from_captured_output(input: &Path, probe_file: &Path) -> CliResult<CueSheet> {
    ensure_input_file(input)?;
    info!("Reading ffprobe output from {}", probe_file.display());

    let text = fs::read_to_string(probe_file)
        .map_err(|source| probe_output_read_error(probe_file, source))?;
    let file_name = get_filename_safe(input)?;

    Ok(CueSheet::from_probe_output(&file_name, &text)?)
}
