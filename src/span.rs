use std::ops::Range;

/// A point in the source.
///
/// Positions are values: moving the scan head produces a new position
/// instead of bumping several counters in place.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Byte offset from the start of the source.
    pub offset: usize,
    /// Zero-based line number.
    pub line: usize,
    /// Byte offset where `line` begins.
    pub line_start: usize,
}

impl Position {
    /// `n` bytes further on the same line.
    pub const fn advance(self, n: usize) -> Self {
        Self {
            offset: self.offset + n,
            ..self
        }
    }

    /// Start of the line following this position.
    pub const fn newline(self) -> Self {
        Self {
            offset: self.offset,
            line: self.line + 1,
            line_start: self.offset,
        }
    }

    /// Byte column within the line.
    pub const fn column(&self) -> usize {
        self.offset - self.line_start
    }
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Hash)]
pub struct Span {
    pub range: Range<usize>,
    pub line: usize,
    pub columns: Range<usize>,
}

impl Span {
    /// 以`start`为起点，`end`为终点圈起一段区域，二者须在同一行
    pub fn between(start: Position, end: Position) -> Self {
        debug_assert!(start.offset <= end.offset);
        debug_assert_eq!(start.line, end.line);

        Self {
            range: start.offset..end.offset,
            line: start.line,
            columns: start.column()..end.column(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_stays_on_line() {
        let p = Position::default().advance(3).advance(2);

        assert_eq!(p.offset, 5);
        assert_eq!(p.line, 0);
        assert_eq!(p.column(), 5);
    }

    #[test]
    fn newline_resets_column() {
        let p = Position::default().advance(4).newline();

        assert_eq!(p.line, 1);
        assert_eq!(p.line_start, 4);
        assert_eq!(p.column(), 0);

        let q = p.advance(2);
        assert_eq!(q.column(), 2);
        assert_eq!(q.offset, 6);
    }

    #[test]
    fn span_between_positions() {
        let line = Position::default().advance(7).newline();
        let span = Span::between(line.advance(1), line.advance(4));

        assert_eq!(span.range, 8..11);
        assert_eq!(span.line, 1);
        assert_eq!(span.columns, 1..4);
    }
}
