//! Contains the [`ScanResult`] struct, the final output of scanning one source text.

use getset::{CopyGetters, Getters};
use minipas_base::diagnostic::{Handler, Storage};
use serde::Serialize;

use crate::{
    error::Error,
    policy::Policy,
    scanner::{Scanner, State, Transition},
    symbol_table::SymbolTable,
    token::{Token, TokenKind},
};

/// Is everything produced by scanning one source text: the tokens, the symbol table and the
/// lexical errors.
///
/// This struct is the final output of the lexical analysis phase and is meant to be used by the
/// next stage of the toolchain. It serializes as
/// `{"tokens": [..], "errors": [..], "symbol_table": {..}, "success": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters, Serialize)]
pub struct ScanResult {
    /// Gets the tokens in recognition order. The last one is always the end of input token.
    #[get = "pub"]
    tokens: Vec<Token>,

    /// Gets the lexical errors in detection order.
    #[get = "pub"]
    #[serde(rename = "errors")]
    diagnostics: Vec<Error>,

    /// Gets the identifiers seen while scanning.
    #[get = "pub"]
    #[serde(rename = "symbol_table")]
    symbols: SymbolTable,

    /// Gets whether the scan found no lexical error.
    #[get_copy = "pub"]
    success: bool,
}

impl ScanResult {
    /// Scans the given source text.
    ///
    /// Scanning never fails: every lexical error is recorded in [`ScanResult::diagnostics`] and the
    /// scanner recovers right after the offending text, so the token stream covers the whole input.
    /// Nothing is kept between two calls.
    #[must_use]
    pub fn scan(source: &str, policy: &Policy) -> Self {
        let storage: Storage<Error> = Storage::new();
        let (tokens, symbols) = Self::drive(source, policy, &storage);
        let diagnostics = storage.into_vec();

        Self {
            success: diagnostics.is_empty(),
            tokens,
            diagnostics,
            symbols,
        }
    }

    fn drive(
        source: &str,
        policy: &Policy,
        handler: &dyn Handler<Error>,
    ) -> (Vec<Token>, SymbolTable) {
        let mut scanner = Scanner::new(source, policy);
        let mut tokens = Vec::new();
        let mut symbols = SymbolTable::new();
        let mut state = State::Start;

        while state != State::Done {
            let Transition { next, token, error } = scanner.step(state);

            if let Some(error) = error {
                handler.receive(error);
            }

            if let Some(token) = token {
                if token.kind() == TokenKind::Identifier {
                    symbols.record(token.lexeme(), token.location());
                }

                tokens.push(token);
            }

            state = next;
        }

        (tokens, symbols)
    }

    /// Gets the tokens without the trailing end of input token.
    #[must_use]
    pub fn tokens_without_eof(&self) -> &[Token] {
        match self.tokens.split_last() {
            Some((last, rest)) if last.is_eof() => rest,
            _ => &self.tokens,
        }
    }

    /// Dissolves this struct into a tuple of its components.
    #[must_use]
    pub fn dissolve(self) -> (Vec<Token>, SymbolTable, Vec<Error>) {
        (self.tokens, self.symbols, self.diagnostics)
    }
}
