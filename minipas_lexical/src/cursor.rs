//! Contains the [`Cursor`], the character reader that the scanner drives.

use minipas_base::source_file::Location;

/// Is a saved position of a [`Cursor`], used to delimit lexemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mark {
    /// The byte offset into the source text.
    pub offset: usize,

    /// The line and column at that offset.
    pub location: Location,
}

/// Is an iterator-like reader over the source text that tracks the line and column of the
/// character it is about to consume.
///
/// Reading past the end of the text is not an error: [`Cursor::peek`] and [`Cursor::advance`] keep
/// returning [`None`] and the position stays where it is.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    offset: usize,
    location: Location,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor placed on the first character of `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            location: Location::START,
        }
    }

    /// Peeks at the character the cursor is on.
    #[must_use]
    pub fn peek(&self) -> Option<char> { self.remaining().chars().next() }

    /// Peeks `n` characters past the current one, `peek_nth(0)` being the same as `peek()`.
    #[must_use]
    pub fn peek_nth(&self, n: usize) -> Option<char> { self.remaining().chars().nth(n) }

    /// Consumes the current character and returns it.
    ///
    /// The column grows by one per character. A `\n` keeps its own position and moves the cursor
    /// to column 1 of the next line.
    pub fn advance(&mut self) -> Option<char> {
        let character = self.peek()?;
        self.offset += character.len_utf8();

        if character == '\n' {
            self.location.line += 1;
            self.location.column = 1;
        } else {
            self.location.column += 1;
        }

        Some(character)
    }

    /// Advances the cursor until the predicate returns false or the text ends.
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(character) = self.peek() {
            if !predicate(character) {
                break;
            }

            self.advance();
        }
    }

    /// Gets the location of the character the cursor is on.
    #[must_use]
    pub fn location(&self) -> Location { self.location }

    /// Saves the current position.
    #[must_use]
    pub fn mark(&self) -> Mark {
        Mark {
            offset: self.offset,
            location: self.location,
        }
    }

    /// Gets the text consumed since `mark` was taken.
    #[must_use]
    pub fn slice_from(&self, mark: Mark) -> &'a str {
        self.source.get(mark.offset..self.offset).unwrap_or_default()
    }

    /// Gets the text that has not been consumed yet.
    #[must_use]
    pub fn remaining(&self) -> &'a str { self.source.get(self.offset..).unwrap_or_default() }

    /// Checks whether every character has been consumed.
    #[must_use]
    pub fn is_at_end(&self) -> bool { self.offset >= self.source.len() }
}
