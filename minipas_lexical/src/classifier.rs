//! Contains the character predicates that decide which scanner state a character opens.
//!
//! Every function here is pure: the result only depends on the characters (and the operator table)
//! passed in.

use crate::policy::OperatorTable;

/// The character that opens and closes string literals.
pub const QUOTE: char = '\'';

/// Is an enumeration of the three ways a comment can start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CommentOpener {
    /// `{`, closed by `}`.
    Brace,

    /// `(*`, closed by `*)`.
    ParenStar,

    /// `//`, running to the end of the line.
    DoubleSlash,
}

impl CommentOpener {
    /// Gets the text of the opener.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brace => "{",
            Self::ParenStar => "(*",
            Self::DoubleSlash => "//",
        }
    }

    /// Gets the text that ends the comment, [`None`] for line comments.
    #[must_use]
    pub fn closer(self) -> Option<&'static str> {
        match self {
            Self::Brace => Some("}"),
            Self::ParenStar => Some("*)"),
            Self::DoubleSlash => None,
        }
    }

    /// Gets the number of characters of the opener.
    #[must_use]
    pub fn width(self) -> usize { self.as_str().len() }
}

/// Is an enumeration of the lexical categories a character can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharClass {
    /// A character that starts an identifier or keyword.
    Letter,

    /// A decimal digit.
    Digit,

    /// The string quote.
    Quote,

    /// The start of a comment.
    CommentOpener(CommentOpener),

    /// The first character of an operator or delimiter.
    OperatorStart,

    /// White space, skipped between tokens.
    Whitespace,

    /// Anything else, which is an illegal character.
    Other,
}

/// Checks if the given character is an ASCII letter.
#[must_use]
pub fn is_letter(character: char) -> bool { character.is_ascii_alphabetic() }

/// Checks if the given character is an ASCII decimal digit.
#[must_use]
pub fn is_digit(character: char) -> bool { character.is_ascii_digit() }

/// Checks if the given character is a valid first character of an identifier.
#[must_use]
pub fn is_identifier_start(character: char) -> bool { is_letter(character) || character == '_' }

/// Checks if the given character is a valid character of an identifier.
#[must_use]
pub fn is_identifier_continue(character: char) -> bool {
    is_identifier_start(character) || is_digit(character)
}

/// Checks if the given character separates tokens.
#[must_use]
pub fn is_whitespace(character: char) -> bool { character.is_whitespace() }

/// Gets the comment opener starting at `character`, `next` being the character after it.
#[must_use]
pub fn comment_opener(character: char, next: Option<char>) -> Option<CommentOpener> {
    match (character, next) {
        ('{', _) => Some(CommentOpener::Brace),
        ('(', Some('*')) => Some(CommentOpener::ParenStar),
        ('/', Some('/')) => Some(CommentOpener::DoubleSlash),
        _ => None,
    }
}

/// Classifies `character` using one character of lookahead.
///
/// Comment openers win over operators, so `(*` and `//` never reach the operator table.
#[must_use]
pub fn classify(character: char, next: Option<char>, operators: &OperatorTable) -> CharClass {
    if is_whitespace(character) {
        CharClass::Whitespace
    } else if let Some(opener) = comment_opener(character, next) {
        CharClass::CommentOpener(opener)
    } else if is_identifier_start(character) {
        CharClass::Letter
    } else if is_digit(character) {
        CharClass::Digit
    } else if character == QUOTE {
        CharClass::Quote
    } else if operators.is_operator_start(character) {
        CharClass::OperatorStart
    } else {
        CharClass::Other
    }
}
