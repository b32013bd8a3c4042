//! A single ffprobe chapter and its CUE `TRACK` rendering.
//!
//! A raw chapter block looks like this:
//!
//! ```text
//! [CHAPTER]
//! id=0
//! time_base=1/44100
//! start=0
//! start_time=0:00:00.000000
//! end=632790
//! end_time=0:00:14.348980
//! TAG:title=Opening Credits
//! [/CHAPTER]
//! ```

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use log::trace;
use serde::Serialize;

use super::timestamp::Timestamp;
use crate::error::{ParseError, ParseResult};

pub const CHAPTER_START: &str = "[CHAPTER]";
pub const CHAPTER_END: &str = "[/CHAPTER]";

const TAG_PREFIX: &str = "TAG:";

/// One chapter of a probed media file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chapter {
    pub id: i64,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub title: String,
}

impl Chapter {
    /// Parses one `[CHAPTER]` ... `[/CHAPTER]` block.
    ///
    /// Properties without `=` are ignored, as are keys cuegen has no use for
    /// (`time_base`, `start`, `end`, unknown tags). Timestamp errors are
    /// returned unchanged.
    pub fn parse(block: &str) -> ParseResult<Self> {
        let lines: Vec<&str> = block.split('\n').map(str::trim).collect();

        let (Some(&first), Some(&last)) = (lines.first(), lines.last()) else {
            return Err(structure_error(block));
        };
        if lines.len() < 2 || first != CHAPTER_START || last != CHAPTER_END {
            return Err(structure_error(block));
        }

        let body = &lines[1..lines.len() - 1];
        let mut properties: HashMap<&str, &str> = HashMap::new();
        let mut tags: HashMap<&str, &str> = HashMap::new();

        for &line in body {
            if let Some(tag) = line.strip_prefix(TAG_PREFIX) {
                let (key, value) = tag.split_once('=').ok_or_else(|| ParseError::MalformedTag {
                    line: line.to_string(),
                })?;
                insert_unique(&mut tags, key, value)?;
            } else if let Some((key, value)) = line.split_once('=') {
                insert_unique(&mut properties, key, value)?;
            }
        }

        let id_value = required(&properties, "id")?;
        let id = id_value
            .parse::<i64>()
            .map_err(|source| ParseError::InvalidId {
                value: id_value.to_string(),
                source,
            })?;
        let start_time = Timestamp::parse(required(&properties, "start_time")?)?;
        let end_time = Timestamp::parse(required(&properties, "end_time")?)?;
        let title = tags.get("title").copied().unwrap_or_default().to_string();

        trace!("Parsed chapter {id}: {start_time} - {end_time} '{title}'");

        Ok(Self {
            id,
            start_time,
            end_time,
            title,
        })
    }

    /// The title written to the CUE sheet, falling back to `Chapter <id>`.
    #[must_use]
    pub fn display_title(&self) -> String {
        if self.title.trim().is_empty() {
            format!("Chapter {}", self.id)
        } else {
            self.title.clone()
        }
    }

    /// Renders the chapter as a CUE track stanza numbered `track_number`.
    ///
    /// The title is written verbatim, quotes included.
    #[must_use]
    pub fn to_cue_track(&self, track_number: usize) -> String {
        format!(
            "TRACK {track_number} AUDIO\n  TITLE \"{}\"\n  INDEX 01 {}",
            self.display_title(),
            self.start_time.to_cue_format()
        )
    }
}

fn structure_error(block: &str) -> ParseError {
    ParseError::Structure {
        block: block.to_string(),
    }
}

fn required<'a>(map: &HashMap<&str, &'a str>, field: &'static str) -> ParseResult<&'a str> {
    map.get(field)
        .copied()
        .ok_or(ParseError::MissingField { field })
}

fn insert_unique<'a>(
    map: &mut HashMap<&'a str, &'a str>,
    key: &'a str,
    value: &'a str,
) -> ParseResult<()> {
    match map.entry(key) {
        Entry::Occupied(_) => Err(ParseError::DuplicateKey {
            key: key.to_string(),
        }),
        Entry::Vacant(slot) => {
            slot.insert(value);
            Ok(())
        }
    }
}
