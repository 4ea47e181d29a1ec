//! Source location tracking for cask syntax trees

#![allow(clippy::cast_possible_truncation)] // Spans are u32; cask files > 4GB are unsupported

use serde::{Deserialize, Serialize};

/// A byte range in the cask source a node was parsed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Byte offset of the start of the span
    pub start: u32,
    /// Byte offset of the end of the span (exclusive)
    pub end: u32,
}

impl Span {
    /// Create a new span from start and end byte offsets
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a dummy span for nodes built without source text
    #[must_use]
    pub const fn dummy() -> Self {
        Self {
            start: u32::MAX,
            end: u32::MAX,
        }
    }

    /// Check if this is a dummy span
    #[must_use]
    pub const fn is_dummy(&self) -> bool {
        self.start == u32::MAX && self.end == u32::MAX
    }

    /// The source text covered by this span, if it lies within `source`
    #[must_use]
    pub fn slice<'s>(&self, source: &'s str) -> Option<&'s str> {
        if self.is_dummy() {
            return None;
        }
        source.get(self.start as usize..self.end as usize)
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::dummy()
    }
}

/// Byte range notation (`16..29`), used where no line index is available
impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Source location with line and column information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    /// 1-indexed line number
    pub line: u32,
    /// 1-indexed column number (in bytes from the line start)
    pub column: u32,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Maps byte offsets to line/column locations
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offsets where each line starts
    line_starts: Vec<u32>,
}

impl LineIndex {
    /// Build a line index from source code
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, c) in source.char_indices() {
            if c == '\n' {
                line_starts.push((i + 1) as u32);
            }
        }
        Self { line_starts }
    }

    /// Convert a byte offset to a line/column location
    #[must_use]
    pub fn location(&self, offset: u32) -> Location {
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts[line];
        Location {
            line: (line + 1) as u32,
            column: (offset - line_start + 1),
        }
    }

    /// Location of the start of a span, or `None` for dummy spans
    #[must_use]
    pub fn span_start(&self, span: Span) -> Option<Location> {
        (!span.is_dummy()).then(|| self.location(span.start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dummy_span() {
        assert!(Span::dummy().is_dummy());
        assert!(!Span::new(0, 0).is_dummy());
        assert_eq!(Span::default(), Span::dummy());
        assert_eq!(Span::new(16, 29).to_string(), "16..29");
    }

    #[test]
    fn span_slice() {
        let source = "  version \"1.0\"\n";
        assert_eq!(Span::new(2, 9).slice(source), Some("version"));
        assert_eq!(Span::new(2, 900).slice(source), None);
        assert_eq!(Span::dummy().slice(source), None);
    }

    #[test]
    fn line_index_multiple_lines() {
        let source = "cask \"foo\" do\n  version \"1.0\"\nend\n";
        let index = LineIndex::new(source);
        assert_eq!(index.location(0), Location::new(1, 1));
        assert_eq!(index.location(16), Location::new(2, 3));
        assert_eq!(index.location(30), Location::new(3, 1));
    }

    #[test]
    fn span_start_skips_dummy() {
        let index = LineIndex::new("a\nb");
        assert_eq!(index.span_start(Span::new(2, 3)), Some(Location::new(2, 1)));
        assert_eq!(index.span_start(Span::dummy()), None);
    }
}
