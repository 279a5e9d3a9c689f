//! Contains the [`Scanner`], the state machine that assembles tokens out of characters.
//!
//! The scanner is driven one [`State`] at a time: [`Scanner::step`] consumes characters from the
//! cursor and returns a [`Transition`] naming the next state, plus the token and the diagnostic
//! that step produced, if any. Every state is left with at least the offending text consumed, so
//! the loop always reaches [`State::Done`].

use crate::{
    classifier::{self, CharClass, CommentOpener, QUOTE},
    cursor::{Cursor, Mark},
    error::{
        Error, IllegalCharacter, MalformedNumberLiteral, UnterminatedComment, UnterminatedString,
    },
    policy::Policy,
    token::{Token, TokenKind},
};

/// Is an enumeration of the states of the scanner.
///
/// States that build a token remember where the token started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum State {
    /// Between tokens.
    Start,
    InIdentifier {
        start: Mark,
    },
    InInteger {
        start: Mark,
    },
    /// After the decimal point of a number.
    InReal {
        start: Mark,
    },
    InString {
        start: Mark,
    },
    InLineComment,
    InBlockComment {
        start: Mark,
        opener: CommentOpener,
        closer: &'static str,
    },
    /// After the first character of an operator or delimiter.
    InOperator {
        start: Mark,
        first: char,
    },
    /// After the end of input token has been emitted.
    Done,
}

/// Is the outcome of one [`Scanner::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The state to continue in.
    pub next: State,

    /// The token completed by this step.
    pub token: Option<Token>,

    /// The lexical error found by this step.
    pub error: Option<Error>,
}

impl Transition {
    fn to(next: State) -> Self {
        Self {
            next,
            token: None,
            error: None,
        }
    }

    fn with_token(mut self, token: Token) -> Self {
        self.token = Some(token);
        self
    }

    fn with_error(mut self, error: impl Into<Error>) -> Self {
        self.error = Some(error.into());
        self
    }
}

/// Is the state machine that turns the characters of a [`Cursor`] into tokens.
#[derive(Debug, Clone)]
pub struct Scanner<'a, 'p> {
    cursor: Cursor<'a>,
    policy: &'p Policy,
}

impl<'a, 'p> Scanner<'a, 'p> {
    /// Creates a scanner placed at the beginning of `source`.
    #[must_use]
    pub fn new(source: &'a str, policy: &'p Policy) -> Self {
        Self {
            cursor: Cursor::new(source),
            policy,
        }
    }

    /// Gets the cursor the scanner reads from.
    #[must_use]
    pub fn cursor(&self) -> &Cursor<'a> { &self.cursor }

    /// Runs the given state until it hands over to another one.
    pub fn step(&mut self, state: State) -> Transition {
        match state {
            State::Start => self.handle_start(),
            State::InIdentifier { start } => self.handle_identifier_and_keyword(start),
            State::InInteger { start } => self.handle_integer(start),
            State::InReal { start } => self.handle_real(start),
            State::InString { start } => self.handle_string(start),
            State::InLineComment => self.handle_line_comment(),
            State::InBlockComment {
                start,
                opener,
                closer,
            } => self.handle_block_comment(start, opener, closer),
            State::InOperator { start, first } => self.handle_operator(start, first),
            State::Done => Transition::to(State::Done),
        }
    }

    fn token(&self, kind: TokenKind, start: Mark) -> Token {
        Token::new(kind, self.cursor.slice_from(start), start.location)
    }

    fn handle_start(&mut self) -> Transition {
        let start = self.cursor.mark();

        let Some(character) = self.cursor.peek() else {
            return Transition::to(State::Done).with_token(Token::eof(start.location));
        };

        let class = classifier::classify(
            character,
            self.cursor.peek_nth(1),
            self.policy.operators(),
        );

        match class {
            CharClass::CommentOpener(opener) => {
                for _ in 0..opener.width() {
                    self.cursor.advance();
                }

                Transition::to(opener.closer().map_or(State::InLineComment, |closer| {
                    State::InBlockComment {
                        start,
                        opener,
                        closer,
                    }
                }))
            }
            CharClass::Whitespace => {
                self.cursor.advance_while(classifier::is_whitespace);
                Transition::to(State::Start)
            }
            CharClass::Letter => self.consume_then(State::InIdentifier { start }),
            CharClass::Digit => self.consume_then(State::InInteger { start }),
            CharClass::Quote => self.consume_then(State::InString { start }),
            CharClass::OperatorStart => self.consume_then(State::InOperator {
                start,
                first: character,
            }),
            CharClass::Other => self.consume_then(State::Start).with_error(IllegalCharacter {
                location: start.location,
                character,
            }),
        }
    }

    /// Consumes the current character and moves to `next`.
    fn consume_then(&mut self, next: State) -> Transition {
        self.cursor.advance();
        Transition::to(next)
    }

    fn handle_identifier_and_keyword(&mut self, start: Mark) -> Transition {
        self.cursor.advance_while(classifier::is_identifier_continue);

        let word = self.cursor.slice_from(start);

        // the word is only matched against the reserved words once it is complete
        let kind = self
            .policy
            .reserved_words()
            .lookup(word)
            .map_or(TokenKind::Identifier, TokenKind::Keyword);

        Transition::to(State::Start).with_token(self.token(kind, start))
    }

    /// Checks whether the cursor is on a decimal point that is followed by a digit.
    fn at_fraction(&self) -> bool {
        self.cursor.peek() == Some('.') && self.cursor.peek_nth(1).is_some_and(classifier::is_digit)
    }

    fn handle_integer(&mut self, start: Mark) -> Transition {
        self.cursor.advance_while(classifier::is_digit);

        // `1.` and `1..5` leave the point to the delimiter rules
        if self.at_fraction() {
            self.cursor.advance();
            return Transition::to(State::InReal { start });
        }

        Transition::to(State::Start).with_token(self.token(TokenKind::Integer, start))
    }

    fn handle_real(&mut self, start: Mark) -> Transition {
        self.cursor.advance_while(classifier::is_digit);

        let token = self.token(TokenKind::Real, start);
        let transition = Transition::to(State::Start);

        if !self.at_fraction() {
            return transition.with_token(token);
        }

        // the rejected point and digits stay unconsumed, scanning resumes right after the valid
        // prefix
        let digits: String = self
            .cursor
            .remaining()
            .chars()
            .skip(1)
            .take_while(|character| classifier::is_digit(*character))
            .collect();
        let text = format!("{}.{digits}", token.lexeme());

        transition
            .with_error(MalformedNumberLiteral {
                location: start.location,
                text,
                accepted: token.lexeme().clone(),
            })
            .with_token(token)
    }

    fn handle_string(&mut self, start: Mark) -> Transition {
        loop {
            match self.cursor.peek() {
                None | Some('\n' | '\r') => {
                    return Transition::to(State::Start)
                        .with_token(self.token(TokenKind::String, start))
                        .with_error(UnterminatedString {
                            location: start.location,
                        });
                }
                Some(QUOTE) => {
                    self.cursor.advance();

                    // `''` is an escaped quote inside the literal
                    if self.cursor.peek() == Some(QUOTE) {
                        self.cursor.advance();
                        continue;
                    }

                    return Transition::to(State::Start)
                        .with_token(self.token(TokenKind::String, start));
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }
    }

    fn handle_line_comment(&mut self) -> Transition {
        self.cursor.advance_while(|character| character != '\n');
        Transition::to(State::Start)
    }

    fn handle_block_comment(
        &mut self,
        start: Mark,
        opener: CommentOpener,
        closer: &'static str,
    ) -> Transition {
        while !self.cursor.is_at_end() {
            if self.cursor.remaining().starts_with(closer) {
                for _ in closer.chars() {
                    self.cursor.advance();
                }

                return Transition::to(State::Start);
            }

            self.cursor.advance();
        }

        // the input is exhausted, the next `Start` emits the end of input token
        Transition::to(State::Start).with_error(UnterminatedComment {
            location: start.location,
            opener,
        })
    }

    fn handle_operator(&mut self, start: Mark, first: char) -> Transition {
        let operators = self.policy.operators();

        // maximal munch: the two-character form wins over the single one
        if let Some(punctuation) = self
            .cursor
            .peek()
            .and_then(|second| operators.compound(first, second))
        {
            self.cursor.advance();
            return Transition::to(State::Start).with_token(self.token(punctuation.into(), start));
        }

        match operators.single(first) {
            Some(punctuation) => {
                Transition::to(State::Start).with_token(self.token(punctuation.into(), start))
            }
            None => Transition::to(State::Start).with_error(IllegalCharacter {
                location: start.location,
                character: first,
            }),
        }
    }
}

#[cfg(test)]
mod tests;
