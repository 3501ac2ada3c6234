//! Line classification: metadata, comments, blank separators, and the
//! narration lines that make up steps.

use tracing::trace;

const METADATA_MARKER: &str = ">>";
const COMMENT_MARKER: &str = "--";
const BLOCK_COMMENT_OPEN: &str = "[-";
const BLOCK_COMMENT_CLOSE: &str = "-]";

#[derive(Debug, PartialEq, Eq)]
pub enum Line<'i> {
    /// The content following the metadata marker.
    Metadata(&'i str),
    Comment,
    Blank,
    /// Narration with comments removed, as the pieces that remain.
    Narration(Vec<&'i str>),
}

/// Classify every line of the source in order.
pub fn scan(source: &str) -> Vec<Line<'_>> {
    source
        .lines()
        .map(classify)
        .collect()
}

pub fn classify(line: &str) -> Line<'_> {
    if line
        .trim()
        .is_empty()
    {
        return Line::Blank;
    }

    let content = line.trim_start();

    if let Some(rest) = content.strip_prefix(METADATA_MARKER) {
        return Line::Metadata(rest);
    }

    if content.starts_with(COMMENT_MARKER) {
        trace!("comment line");
        return Line::Comment;
    }

    let pieces = strip_comments(line);

    if pieces
        .iter()
        .all(|piece| {
            piece
                .trim()
                .is_empty()
        })
    {
        trace!("line empty after removing comments");
        return Line::Comment;
    }

    Line::Narration(pieces)
}

/// Remove block comments and any trailing line comment, returning the
/// surviving pieces of the line in order. Concatenating the pieces gives
/// the line as if the comments had never been written. A block comment
/// opener with no closer later on the line is ordinary text.
fn strip_comments(line: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut rest = line;

    loop {
        let inline = find_line_comment(rest);
        let block = rest
            .find(BLOCK_COMMENT_OPEN)
            .filter(|open| inline.map_or(true, |i| *open < i));

        if let Some(open) = block {
            let after = open + BLOCK_COMMENT_OPEN.len();
            if let Some(close) = rest[after..].find(BLOCK_COMMENT_CLOSE) {
                pieces.push(&rest[..open]);
                rest = &rest[after + close + BLOCK_COMMENT_CLOSE.len()..];
                continue;
            }
        }

        // no (terminated) block comment before any line comment
        match inline {
            Some(i) => pieces.push(&rest[..i]),
            None => pieces.push(rest),
        }
        break;
    }

    pieces.retain(|piece| !piece.is_empty());
    pieces
}

/// A line comment marker counts only at the start of the text or after
/// whitespace, so ranges like "10--15" stay as narration.
fn find_line_comment(content: &str) -> Option<usize> {
    content
        .match_indices(COMMENT_MARKER)
        .map(|(i, _)| i)
        .find(|i| {
            content[..*i]
                .chars()
                .next_back()
                .map_or(true, char::is_whitespace)
        })
}
