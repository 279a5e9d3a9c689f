//! Contains all kinds of lexical errors that can occur while scanning the source code.
//!
//! None of them stops the scan: each one is reported to the diagnostic handler and the scanner
//! resumes right after the offending text.

use std::fmt::Display;

use derive_more::From;
use enum_as_inner::EnumAsInner;
use minipas_base::source_file::Location;
use serde::{ser::SerializeStruct, Serialize, Serializer};
use strum_macros::IntoStaticStr;

use crate::classifier::CommentOpener;

/// The source code contains a character that cannot start any token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IllegalCharacter {
    /// The location of the character.
    pub location: Location,

    /// The character itself.
    pub character: char,
}

impl Display for IllegalCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "illegal character {:?}", self.character)
    }
}

/// A string literal reaches the end of its line, or of the input, before the closing quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnterminatedString {
    /// The location of the opening quote.
    pub location: Location,
}

impl Display for UnterminatedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("unterminated string literal")
    }
}

/// The source code contains an unclosed block comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnterminatedComment {
    /// The location of the comment opener.
    pub location: Location,

    /// The opener that was never closed.
    pub opener: CommentOpener,
}

impl Display for UnterminatedComment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unterminated comment, `{}` is never closed", self.opener.as_str())
    }
}

/// A real literal is followed by another decimal point and digits, as in `1.2.3`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MalformedNumberLiteral {
    /// The location of the first digit of the literal.
    pub location: Location,

    /// The whole run of digits and points that was found.
    pub text: String,

    /// The valid prefix that was emitted as a real token.
    pub accepted: String,
}

impl Display for MalformedNumberLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "malformed number literal `{}`", self.text)
    }
}

/// Is an enumeration containing all kinds of lexical errors that can occur while scanning the
/// source code.
///
/// Serializes as `{"kind": .., "line": .., "col": .., "message": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, From, IntoStaticStr)]
#[allow(missing_docs)]
pub enum Error {
    IllegalCharacter(IllegalCharacter),
    UnterminatedString(UnterminatedString),
    UnterminatedComment(UnterminatedComment),
    MalformedNumberLiteral(MalformedNumberLiteral),
}

impl Error {
    /// Gets the location the error points at.
    #[must_use]
    pub fn location(&self) -> Location {
        match self {
            Self::IllegalCharacter(err) => err.location,
            Self::UnterminatedString(err) => err.location,
            Self::UnterminatedComment(err) => err.location,
            Self::MalformedNumberLiteral(err) => err.location,
        }
    }

    /// Gets the stable name of the error kind, such as `IllegalCharacter`.
    #[must_use]
    pub fn kind_name(&self) -> &'static str { self.into() }

    /// Gets the number of characters, starting at [`Error::location`], that the error covers.
    #[must_use]
    pub fn width(&self) -> usize {
        match self {
            Self::IllegalCharacter(_) | Self::UnterminatedString(_) => 1,
            Self::UnterminatedComment(err) => err.opener.width(),
            Self::MalformedNumberLiteral(err) => err.text.chars().count(),
        }
    }

    /// Gets a hint on how to fix the error.
    #[must_use]
    pub fn help(&self) -> Option<String> {
        match self {
            Self::IllegalCharacter(_) => Some("this character is skipped".to_string()),
            Self::UnterminatedString(_) => {
                Some("add a closing `'` before the end of the line".to_string())
            }
            Self::UnterminatedComment(err) => err
                .opener
                .closer()
                .map(|closer| format!("close the comment with `{closer}`")),
            Self::MalformedNumberLiteral(err) => {
                Some(format!("only `{}` is read as a number", err.accepted))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacter(err) => write!(f, "{err}"),
            Self::UnterminatedString(err) => write!(f, "{err}"),
            Self::UnterminatedComment(err) => write!(f, "{err}"),
            Self::MalformedNumberLiteral(err) => write!(f, "{err}"),
        }
    }
}

impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let location = self.location();

        let mut state = serializer.serialize_struct("Error", 4)?;
        state.serialize_field("kind", self.kind_name())?;
        state.serialize_field("line", &location.line)?;
        state.serialize_field("col", &location.column)?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

#[cfg(test)]
mod tests;
