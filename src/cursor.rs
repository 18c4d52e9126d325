use std::fmt;

/// Immutable position within a borrowed input text
///
/// A cursor is a `(text, offset)` pair. It is never mutated: every advance
/// produces a new cursor over the same text, so saving a cursor and parsing
/// from it again is all that backtracking requires.
///
/// Offsets are byte offsets and always sit on a UTF-8 character boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cursor<'code> {
    text: &'code str,
    offset: usize,
}

impl<'code> Cursor<'code> {
    /// Create a cursor positioned at the start of `text`
    pub fn new(text: &'code str) -> Self {
        Cursor { text, offset: 0 }
    }

    /// Current byte offset, `0 <= position() <= source().len()`
    pub fn position(&self) -> usize {
        self.offset
    }

    /// The full input text this cursor walks over
    pub fn source(&self) -> &'code str {
        self.text
    }

    /// The unconsumed remainder of the input
    pub fn rest(&self) -> &'code str {
        &self.text[self.offset..]
    }

    /// The next character, if any
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.text.len()
    }

    /// Return a cursor `bytes` further along, clamped to the end of the text
    ///
    /// An offset that lands inside a multi-byte character is rounded up to
    /// the start of the next character.
    pub fn advance(self, bytes: usize) -> Self {
        let mut offset = self.offset.saturating_add(bytes).min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset += 1;
        }
        Cursor {
            text: self.text,
            offset,
        }
    }

    /// The text between this cursor and a later cursor over the same input
    pub fn slice_to(&self, later: &Cursor<'code>) -> &'code str {
        &self.text[self.offset..later.offset.max(self.offset)]
    }

    /// 1-based line number and byte offset within that line
    ///
    /// Byte offset is reported instead of a column since columns depend on
    /// tab width and character rendering.
    pub fn line_and_offset(&self) -> (usize, usize) {
        let consumed = &self.text[..self.offset];
        let line = consumed.matches('\n').count() + 1;
        let line_start = consumed.rfind('\n').map_or(0, |i| i + 1);
        (line, self.offset - line_start)
    }

    /// Up to two lines of context either side of the cursor, with a marker
    /// under the cursor position
    pub fn context_lines(&self) -> Vec<String> {
        let (line, byte_offset) = self.line_and_offset();
        let first = line.saturating_sub(2).max(1);
        let last = line + 2;
        let mut lines = Vec::new();

        // split('\n') yields a trailing empty line when the text ends in a
        // newline, which is where a cursor at end of input points
        for (index, content) in self.text.split('\n').enumerate() {
            let number = index + 1;
            if number < first {
                continue;
            }
            if number > last {
                break;
            }

            let prefix = if number == line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            lines.push(format!("{}{}", prefix, content));

            if number == line {
                let pointer_offset = prefix.len() + byte_offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

impl fmt::Display for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (line, byte_offset) = self.line_and_offset();
        write!(
            f,
            "line {}, byte offset {} (absolute position: {})",
            line, byte_offset, self.offset
        )
    }
}
