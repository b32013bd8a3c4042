//! CUE sheet assembly: split, parse, sort, render.
//!
//! This is the seam between the pure chapter parser and the I/O performed by
//! callers. Nothing here touches the filesystem except [`write_cue_file`].

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::chapters::{Chapter, split_chapter_blocks};
use crate::error::{BlockError, ChapterErrors, CoreError, CoreResult};

/// Extension of generated CUE files.
pub const CUE_EXTENSION: &str = "cue";

/// Parses every chapter block in `probe_output`.
///
/// Surrounding whitespace of the whole output is ignored. If any block fails,
/// all failures are returned together with the index of their block.
pub fn parse_chapters(probe_output: &str) -> Result<Vec<Chapter>, ChapterErrors> {
    let blocks = split_chapter_blocks(probe_output.trim());
    debug!("Found {} chapter block(s) in ffprobe output", blocks.len());

    let mut chapters = Vec::with_capacity(blocks.len());
    let mut errors = Vec::new();

    for (index, block) in blocks.iter().enumerate() {
        match Chapter::parse(block) {
            Ok(chapter) => chapters.push(chapter),
            Err(error) => {
                debug!("Chapter block {index} failed to parse: {error}");
                // Index counts every block so users can find the failing one.
                errors.push(BlockError { index, error });
            }
        }
    }

    if errors.is_empty() {
        Ok(chapters)
    } else {
        Err(ChapterErrors(errors))
    }
}

/// Stable sort by start time.
pub fn sort_chapters(chapters: &mut [Chapter]) {
    chapters.sort_by(|a, b| a.start_time.cmp(&b.start_time));
}

/// Renders sorted chapters as CUE tracks numbered from 0, joined by newlines.
#[must_use]
pub fn render_tracks(chapters: &[Chapter]) -> String {
    chapters
        .iter()
        .enumerate()
        .map(|(index, chapter)| chapter.to_cue_track(index))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A complete single-file CUE sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CueSheet {
    /// Name of the audio file, as written on the `FILE` line.
    pub file_name: String,
    /// Chapters sorted by start time.
    pub chapters: Vec<Chapter>,
}

impl CueSheet {
    /// Builds a sheet for `file_name` from raw ffprobe chapter output.
    pub fn from_probe_output(file_name: &str, probe_output: &str) -> Result<Self, ChapterErrors> {
        let mut chapters = parse_chapters(probe_output)?;
        sort_chapters(&mut chapters);

        if chapters.is_empty() {
            warn!("No chapters found for {file_name}; the CUE sheet will have no tracks");
        } else {
            info!("Parsed {} chapter(s) for {file_name}", chapters.len());
        }

        Ok(Self {
            file_name: file_name.to_string(),
            chapters,
        })
    }

    /// The `FILE "<name>" MP3` header line.
    #[must_use]
    pub fn file_line(&self) -> String {
        format!("FILE \"{}\" MP3", self.file_name)
    }

    /// The full sheet text: the `FILE` line, then the tracks.
    #[must_use]
    pub fn render(&self) -> String {
        format!("{}\n{}", self.file_line(), render_tracks(&self.chapters))
    }
}

/// Path of the CUE file written next to `input` (same stem, `.cue`).
#[must_use]
pub fn cue_path_for(input: &Path) -> PathBuf {
    input.with_extension(CUE_EXTENSION)
}

/// Writes `sheet` to `path`, replacing any existing file.
pub fn write_cue_file(sheet: &CueSheet, path: &Path) -> CoreResult<()> {
    debug!("Writing CUE sheet to {}", path.display());
    fs::write(path, sheet.render()).map_err(|source| CoreError::CueWrite {
        path: path.display().to_string(),
        source,
    })?;
    info!(
        "Wrote {} track(s) to {}",
        sheet.chapters.len(),
        path.display()
    );
    Ok(())
}
