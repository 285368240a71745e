//! Conversion between character offsets and line/column positions.
//!
//! Offsets count `char`s, not bytes, so a document containing multi-byte
//! characters maps the same way an editor counts columns. `\n`, `\r\n` and a
//! lone `\r` all terminate a line, and a document may mix them freely.

use text_size::{TextRange, TextSize};

use super::{Error, Position, Result, Span};

/// Precomputed line table for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Character offset at which each line starts. Always has at least one entry.
    line_starts: Vec<TextSize>,
    /// Total number of characters in the document.
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        let mut chars = text.chars().peekable();
        let mut offset: u32 = 0;

        while let Some(c) = chars.next() {
            offset += 1;
            match c {
                '\n' => line_starts.push(TextSize::from(offset)),
                // `\r\n` is a single break; the `\n` records it.
                '\r' if chars.peek() != Some(&'\n') => line_starts.push(TextSize::from(offset)),
                _ => {}
            }
        }

        Self {
            line_starts,
            len: TextSize::from(offset),
        }
    }

    /// Number of characters in the document.
    pub fn len(&self) -> TextSize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == TextSize::from(0)
    }

    /// Number of lines (an empty document has one empty line).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a character offset to a zero-based line/column position.
    ///
    /// The offset one past the last character is valid and maps to the end
    /// of the last line.
    pub fn to_line_col(&self, offset: TextSize) -> Result<Position> {
        if offset > self.len {
            return Err(Error::OffsetOutOfRange {
                offset: u32::from(offset) as usize,
                len: u32::from(self.len) as usize,
            });
        }

        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let column = offset - self.line_starts[line];
        Ok(Position::new(line, u32::from(column) as usize))
    }

    /// Convert a zero-based line/column position back to a character offset.
    ///
    /// A column may address any character of the line, terminator characters
    /// included, so every offset produced by [`to_line_col`](Self::to_line_col)
    /// converts back to itself. On the last line the column may also equal
    /// the line length.
    pub fn to_offset(&self, position: Position) -> Result<TextSize> {
        let out_of_range = || Error::PositionOutOfRange {
            line: position.line,
            column: position.column,
        };

        let start = *self.line_starts.get(position.line).ok_or_else(out_of_range)?;
        // Last valid offset on this line: the final terminator character, or
        // the end of the document for the last line.
        let last = match self.line_starts.get(position.line + 1) {
            Some(&next) => next - TextSize::from(1),
            None => self.len,
        };

        let column = u32::try_from(position.column).map_err(|_| out_of_range())?;
        let offset = u32::from(start)
            .checked_add(column)
            .map(TextSize::from)
            .ok_or_else(out_of_range)?;

        if offset > last {
            return Err(out_of_range());
        }
        Ok(offset)
    }

    /// Map a character range to a line/column span.
    pub fn span(&self, range: TextRange) -> Result<Span> {
        Ok(Span::new(
            self.to_line_col(range.start())?,
            self.to_line_col(range.end())?,
        ))
    }

    /// Check that a range lies within the document.
    pub fn contains_range(&self, range: TextRange) -> bool {
        range.end() <= self.len
    }
}
