//! Line/column source locations.
//!
//! Byte offsets are the unit of exchange between the scanner, parser, and
//! converter; line/column pairs are computed lazily for diagnostics output.

use memchr::memchr_iter;

/// Zero-based line/character position, the unit used in reported diagnostics.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

/// Precomputed line-start offsets for a source file.
///
/// Built once per file; `position_at` is a binary search over the starts.
#[derive(Debug, Clone)]
pub struct LineMap {
    line_starts: Vec<u32>,
}

impl LineMap {
    pub fn new(text: &str) -> LineMap {
        let mut line_starts = vec![0u32];
        for nl in memchr_iter(b'\n', text.as_bytes()) {
            line_starts.push((nl + 1) as u32);
        }
        LineMap { line_starts }
    }

    /// Map a byte offset to a zero-based line/character position.
    ///
    /// Offsets past the end of the file clamp to the final line.
    pub fn position_at(&self, offset: u32) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        Position {
            line: line as u32,
            character: offset - self.line_starts[line],
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        let map = LineMap::new("declare function f(): void;");
        assert_eq!(map.line_count(), 1);
        assert_eq!(map.position_at(8), Position { line: 0, character: 8 });
    }

    #[test]
    fn test_multi_line() {
        let map = LineMap::new("a\nbb\nccc\n");
        assert_eq!(map.line_count(), 4);
        assert_eq!(map.position_at(0), Position { line: 0, character: 0 });
        assert_eq!(map.position_at(2), Position { line: 1, character: 0 });
        assert_eq!(map.position_at(3), Position { line: 1, character: 1 });
        assert_eq!(map.position_at(5), Position { line: 2, character: 0 });
    }

    #[test]
    fn test_offset_past_end_clamps() {
        let map = LineMap::new("ab\ncd");
        assert_eq!(map.position_at(99), Position { line: 1, character: 96 });
    }
}
