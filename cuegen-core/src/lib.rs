//! Core library for turning ffprobe chapter metadata into CUE sheets.
//!
//! The pipeline splits `ffprobe -show_chapters -pretty` output into chapter
//! blocks, parses each block, sorts the chapters by start time and renders
//! them as `TRACK` stanzas under a single `FILE` line. Parsing is pure and
//! reports every malformed block instead of stopping at the first one.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use cuegen_core::external::CommandFfprobeExecutor;
//! use cuegen_core::{cue_path_for, generate_for_file, write_cue_file};
//! use std::path::Path;
//!
//! let input = Path::new("/path/to/book.mp3");
//! let sheet = generate_for_file(&CommandFfprobeExecutor::new(), input).unwrap();
//! write_cue_file(&sheet, &cue_path_for(input)).unwrap();
//! ```

pub mod chapters;
pub mod cue;
pub mod error;
pub mod external;
pub mod utils;

// Re-exports for public API
pub use chapters::{Chapter, Timestamp, split_chapter_blocks};
pub use cue::{CueSheet, cue_path_for, parse_chapters, render_tracks, sort_chapters, write_cue_file};
pub use error::{BlockError, ChapterErrors, CoreError, CoreResult, ParseError, ParseResult};
pub use external::{CommandFfprobeExecutor, FfprobeExecutor};

use std::path::Path;

/// Probes `input` with `executor` and builds its CUE sheet.
///
/// The input must be an existing file and ffprobe must be available. Chapter
/// parse failures come back as [`CoreError::ChapterParse`] holding every
/// failing block.
pub fn generate_for_file<E>(executor: &E, input: &Path) -> CoreResult<CueSheet>
where
    E: FfprobeExecutor + ?Sized,
{
    utils::ensure_input_file(input)?;
    executor.check_available()?;

    let probe_output = executor.probe_chapters(input)?;
    let file_name = utils::get_filename_safe(input)?;

    Ok(CueSheet::from_probe_output(&file_name, &probe_output)?)
}
