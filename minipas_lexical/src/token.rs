//! Is a module containing the [`Token`] type and all of its related types.

use std::{fmt::Display, str::FromStr};

use enum_as_inner::EnumAsInner;
use getset::{CopyGetters, Getters};
use minipas_base::source_file::Location;
use serde::{Serialize, Serializer};
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};
use thiserror::Error;

/// Is an enumeration representing the reserved words of the MiniPascal-Fr language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum KeywordKind {
    Programme,
    Constante,
    Variable,
    Entier,
    Reel,
    Debut,
    Fin,
    Si,
    Alors,
    Sinon,
    Tantque,
    Faire,
    Repeter,
    Jusqua,
    Pour,
    Allant,
    De,
    A,
    Pas,
    Ou,
    Et,
    Div,
    Mod,
}

impl Display for KeywordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

/// Is an error that is returned when a string cannot be parsed into a [`KeywordKind`] in
/// [`FromStr`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("invalid string representation of keyword.")]
pub struct KeywordParseError;

impl FromStr for KeywordKind {
    type Err = KeywordParseError;

    /// Parses the canonical (lower-case) spelling of a keyword.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|keyword| keyword.as_str() == s)
            .ok_or(KeywordParseError)
    }
}

impl KeywordKind {
    /// Gets the canonical string representation of the keyword as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Programme => "programme",
            Self::Constante => "constante",
            Self::Variable => "variable",
            Self::Entier => "entier",
            Self::Reel => "reel",
            Self::Debut => "debut",
            Self::Fin => "fin",
            Self::Si => "si",
            Self::Alors => "alors",
            Self::Sinon => "sinon",
            Self::Tantque => "tantque",
            Self::Faire => "faire",
            Self::Repeter => "repeter",
            Self::Jusqua => "jusqua",
            Self::Pour => "pour",
            Self::Allant => "allant",
            Self::De => "de",
            Self::A => "a",
            Self::Pas => "pas",
            Self::Ou => "ou",
            Self::Et => "et",
            Self::Div => "div",
            Self::Mod => "mod",
        }
    }
}

/// Is an enumeration of the kinds of tokens the scanner emits.
///
/// The names returned by [`TokenKind::name`] (`KEYWORD`, `IDENTIFIER`, `INTEGER`, `REAL`,
/// `STRING`, `OPERATOR`, `DELIMITER` and `EOF`) are stable and are what the kind serializes to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// A reserved word.
    Keyword(KeywordKind),

    /// A name that is not reserved.
    Identifier,

    /// A run of decimal digits.
    Integer,

    /// A digit run, a decimal point and a fractional digit run.
    Real,

    /// A single-quoted string literal, quotes included.
    String,

    /// An arithmetic, relational or assignment operator.
    Operator,

    /// A punctuation delimiter such as `;` or `(`.
    Delimiter,

    /// The synthetic end of input marker.
    Eof,
}

impl TokenKind {
    /// Gets the stable name of the token kind.
    #[must_use]
    pub fn name(self) -> &'static str { self.into() }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.name()) }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Represents a single token recognized by the scanner.
///
/// Serializes as `{"type": .., "lexeme": .., "line": .., "col": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, CopyGetters, Serialize)]
pub struct Token {
    /// Gets the kind of the token.
    #[get_copy = "pub"]
    #[serde(rename = "type")]
    kind: TokenKind,

    /// Gets the exact source text the token was recognized from.
    #[get = "pub"]
    lexeme: String,

    /// Gets the location of the first character of the token.
    #[get_copy = "pub"]
    #[serde(flatten)]
    location: Location,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, location: Location) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            location,
        }
    }

    /// Creates the end of input token, which has an empty lexeme.
    #[must_use]
    pub fn eof(location: Location) -> Self { Self::new(TokenKind::Eof, String::new(), location) }

    /// Checks whether this is the end of input token.
    #[must_use]
    pub fn is_eof(&self) -> bool { self.kind == TokenKind::Eof }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.kind, self.lexeme, self.location)
    }
}
