//! Contains the fixed lexical policy handed to the scanner: the reserved words, how they are
//! matched, and the operator/delimiter table.
//!
//! A [`Policy`] is built once and shared by reference between scans. It is never mutated while
//! scanning.

use std::collections::HashMap;

use getset::{CopyGetters, Getters};
use strum::IntoEnumIterator;

use crate::token::{KeywordKind, TokenKind};

/// Is an enumeration of the ways an identifier lexeme can match a reserved word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum CaseSensitivity {
    /// Only the exact lower-case spelling is reserved: `debut` is a keyword, `Debut` is an
    /// identifier.
    #[default]
    Sensitive,

    /// Any ASCII casing of a reserved word is reserved: `DEBUT` and `Debut` are keywords too.
    Insensitive,
}

/// Is the set of reserved words, built once from [`KeywordKind`].
#[derive(Debug, Clone, PartialEq, Eq, CopyGetters)]
pub struct ReservedWords {
    /// Gets how lexemes are matched against the reserved words.
    #[get_copy = "pub"]
    case_sensitivity: CaseSensitivity,

    words: HashMap<&'static str, KeywordKind>,
}

impl ReservedWords {
    /// Creates the reserved-word set of the language.
    #[must_use]
    pub fn new(case_sensitivity: CaseSensitivity) -> Self {
        Self {
            case_sensitivity,
            words: KeywordKind::iter()
                .map(|keyword| (keyword.as_str(), keyword))
                .collect(),
        }
    }

    /// Looks up a fully assembled identifier lexeme.
    #[must_use]
    pub fn lookup(&self, lexeme: &str) -> Option<KeywordKind> {
        match self.case_sensitivity {
            CaseSensitivity::Sensitive => self.words.get(lexeme).copied(),
            CaseSensitivity::Insensitive => {
                self.words.get(lexeme.to_ascii_lowercase().as_str()).copied()
            }
        }
    }

    /// Checks whether the lexeme is reserved.
    #[must_use]
    pub fn contains(&self, lexeme: &str) -> bool { self.lookup(lexeme).is_some() }

    /// Gets the number of reserved words.
    #[must_use]
    pub fn len(&self) -> usize { self.words.len() }

    /// Checks whether the set has no reserved word at all.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}

impl Default for ReservedWords {
    fn default() -> Self { Self::new(CaseSensitivity::default()) }
}

/// Is an enumeration of the two token kinds the operator table produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Punctuation {
    Operator,
    Delimiter,
}

impl From<Punctuation> for TokenKind {
    fn from(value: Punctuation) -> Self {
        match value {
            Punctuation::Operator => Self::Operator,
            Punctuation::Delimiter => Self::Delimiter,
        }
    }
}

/// The two-character operators and delimiters of the language.
pub const COMPOUND_PUNCTUATIONS: [([char; 2], Punctuation); 5] = [
    ([':', '='], Punctuation::Operator),
    (['<', '='], Punctuation::Operator),
    (['>', '='], Punctuation::Operator),
    (['<', '>'], Punctuation::Operator),
    (['.', '.'], Punctuation::Delimiter),
];

/// The single-character operators and delimiters of the language.
pub const SINGLE_PUNCTUATIONS: [(char, Punctuation); 13] = [
    ('+', Punctuation::Operator),
    ('-', Punctuation::Operator),
    ('*', Punctuation::Operator),
    ('/', Punctuation::Operator),
    ('<', Punctuation::Operator),
    ('>', Punctuation::Operator),
    ('=', Punctuation::Operator),
    (';', Punctuation::Delimiter),
    (',', Punctuation::Delimiter),
    (':', Punctuation::Delimiter),
    ('.', Punctuation::Delimiter),
    ('(', Punctuation::Delimiter),
    (')', Punctuation::Delimiter),
];

/// Is the table of operators and delimiters, matched longest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorTable {
    compound: HashMap<[char; 2], Punctuation>,
    single: HashMap<char, Punctuation>,
}

impl OperatorTable {
    /// Creates a table from its two-character and single-character entries.
    #[must_use]
    pub fn from_parts(
        compound: impl IntoIterator<Item = ([char; 2], Punctuation)>,
        single: impl IntoIterator<Item = (char, Punctuation)>,
    ) -> Self {
        Self {
            compound: compound.into_iter().collect(),
            single: single.into_iter().collect(),
        }
    }

    /// Checks whether some entry of the table starts with `character`.
    #[must_use]
    pub fn is_operator_start(&self, character: char) -> bool {
        self.single.contains_key(&character)
            || self.compound.keys().any(|[first, _]| *first == character)
    }

    /// Gets the two-character entry `first` `second`.
    #[must_use]
    pub fn compound(&self, first: char, second: char) -> Option<Punctuation> {
        self.compound.get(&[first, second]).copied()
    }

    /// Gets the single-character entry `character`.
    #[must_use]
    pub fn single(&self, character: char) -> Option<Punctuation> {
        self.single.get(&character).copied()
    }
}

impl Default for OperatorTable {
    fn default() -> Self { Self::from_parts(COMPOUND_PUNCTUATIONS, SINGLE_PUNCTUATIONS) }
}

/// Is the complete lexical configuration of one scanner.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters)]
pub struct Policy {
    /// Gets the reserved-word set.
    #[get = "pub"]
    reserved_words: ReservedWords,

    /// Gets the operator and delimiter table.
    #[get = "pub"]
    operators: OperatorTable,
}

impl Policy {
    /// Creates the language policy with the given keyword case sensitivity.
    #[must_use]
    pub fn new(case_sensitivity: CaseSensitivity) -> Self {
        Self {
            reserved_words: ReservedWords::new(case_sensitivity),
            operators: OperatorTable::default(),
        }
    }

    /// Creates a policy from its parts.
    #[must_use]
    pub fn with_parts(reserved_words: ReservedWords, operators: OperatorTable) -> Self {
        Self {
            reserved_words,
            operators,
        }
    }
}
