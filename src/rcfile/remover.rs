//! Fixed-point removal of marker-delimited blocks.
//!
//! Repeated installs and hand-edited rc files can leave multiple blocks
//! or a lone marker behind. A single pass cannot handle those states, so
//! removal re-scans after every cut until a pass finds neither marker.
//! Each iteration strictly shortens the text, so the loop terminates.

use super::scanner::{BlockMarkers, locate_markers};

/// Remove every complete or orphaned block for `markers` from `text`,
/// then trim trailing whitespace down to exactly one newline.
///
/// Content outside the blocks is preserved byte-for-byte; re-running on
/// already-clean text is a no-op (modulo the trailing newline).
pub fn remove_blocks(text: &str, markers: &BlockMarkers) -> String {
    normalize_trailing(&strip_blocks(text, markers))
}

fn strip_blocks(text: &str, markers: &BlockMarkers) -> String {
    let mut result = text.to_string();

    loop {
        let pos = locate_markers(&result, markers);
        match (pos.start, pos.end) {
            // Complete block: cut from the start marker through the end
            // of the line holding the end marker.
            (Some(start), Some(end)) if start < end => {
                let cut = line_end(&result, end, markers.end.len());
                result.replace_range(start..cut, "");
            }
            // Orphaned start marker (no end, or an end marker that sits
            // before it): cut its own line only.
            (Some(start), _) => {
                let cut = line_end(&result, start, markers.start.len());
                result.replace_range(start..cut, "");
            }
            // Orphaned end marker: cut its own line only.
            (None, Some(end)) => {
                let cut = line_end(&result, end, markers.end.len());
                result.replace_range(end..cut, "");
            }
            (None, None) => break,
        }
    }

    result
}

/// Offset just past the newline ending the line that starts at `from`,
/// or past the marker itself when the line is unterminated.
fn line_end(text: &str, from: usize, marker_len: usize) -> usize {
    match text[from..].find('\n') {
        Some(newline) => from + newline + 1,
        None => from + marker_len,
    }
}

/// Trim trailing whitespace and end the text with exactly one newline.
pub fn normalize_trailing(text: &str) -> String {
    format!("{}\n", text.trim_end())
}
