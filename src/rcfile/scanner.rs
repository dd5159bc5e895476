/// A pair of literal marker lines delimiting a managed block in an rc
/// file. Markers are matched as plain substrings; the rc format has no
/// grammar beyond these lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockMarkers {
    pub start: &'static str,
    pub end: &'static str,
}

/// Byte offsets of the first occurrence of each marker, located
/// independently of one another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerPositions {
    pub start: Option<usize>,
    pub end: Option<usize>,
}

impl MarkerPositions {
    /// True when neither marker occurs in the text.
    pub fn is_clean(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// Locate the first occurrence of each marker in `text`.
pub fn locate_markers(text: &str, markers: &BlockMarkers) -> MarkerPositions {
    MarkerPositions {
        start: text.find(markers.start),
        end: text.find(markers.end),
    }
}
