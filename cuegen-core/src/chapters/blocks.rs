//! Splits ffprobe output into raw per-chapter blocks.

use super::chapter::CHAPTER_START;

/// Splits `-show_chapters` output into raw chapter blocks.
///
/// Lines are trimmed. Everything before the first `[CHAPTER]` line is
/// dropped, and each block runs from a `[CHAPTER]` line up to the next one or
/// the end of input. A block missing its closing marker is still returned so
/// that the chapter parser can report it.
#[must_use]
pub fn split_chapter_blocks(text: &str) -> Vec<String> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();

    for line in text.split('\n').map(str::trim) {
        if line == CHAPTER_START {
            blocks.push(vec![line]);
        } else if let Some(current) = blocks.last_mut() {
            current.push(line);
        }
    }

    blocks.into_iter().map(|lines| lines.join("\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chapters::Chapter;

    const TWO_CHAPTERS: &str = "\
[CHAPTER]
id=0
time_base=1/44100
start=0
start_time=0:00:00.000000
end=632790
end_time=0:00:14.348980
TAG:title=Opening Credits
[/CHAPTER]
[CHAPTER]
id=1
time_base=1/44100
start=632790
start_time=0:00:14.348980
end=3087000
end_time=0:01:10.000000
TAG:title=Part One
[/CHAPTER]";

    #[test]
    fn test_two_blocks_each_parseable() {
        let blocks = split_chapter_blocks(TWO_CHAPTERS);
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("[CHAPTER]\nid=0"));
        assert!(blocks[1].ends_with("TAG:title=Part One\n[/CHAPTER]"));

        let titles: Vec<String> = blocks
            .iter()
            .map(|b| Chapter::parse(b).unwrap().title)
            .collect();
        assert_eq!(titles, ["Opening Credits", "Part One"]);
    }

    #[test]
    fn test_no_marker_yields_no_blocks() {
        assert!(split_chapter_blocks("").is_empty());
        assert!(split_chapter_blocks("id=0\nstart_time=0:00:00.000000\n[/CHAPTER]").is_empty());
        // Markers must match the whole trimmed line
        assert!(split_chapter_blocks("[CHAPTER] extra\n[/CHAPTER]").is_empty());
    }

    #[test]
    fn test_leading_lines_are_dropped() {
        let text = format!("ffprobe banner\n\n  {TWO_CHAPTERS}");
        let blocks = split_chapter_blocks(&text);
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("[CHAPTER]\n"));
    }

    #[test]
    fn test_lines_are_trimmed() {
        let blocks = split_chapter_blocks("   [CHAPTER]  \r\n  id=0\r\n[/CHAPTER]\r");
        assert_eq!(blocks, ["[CHAPTER]\nid=0\n[/CHAPTER]"]);
    }

    #[test]
    fn test_unterminated_block_is_kept() {
        let blocks = split_chapter_blocks("[CHAPTER]\nid=0\n[CHAPTER]\nid=1\n[/CHAPTER]");
        assert_eq!(blocks, ["[CHAPTER]\nid=0", "[CHAPTER]\nid=1\n[/CHAPTER]"]);
        assert!(Chapter::parse(&blocks[0]).is_err());
    }

    #[test]
    fn test_trailing_lines_stay_in_last_block() {
        let blocks = split_chapter_blocks("[CHAPTER]\nid=0\n[/CHAPTER]\n");
        assert_eq!(blocks, ["[CHAPTER]\nid=0\n[/CHAPTER]\n"]);
    }
}
