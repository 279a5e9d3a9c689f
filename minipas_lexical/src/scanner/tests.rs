use minipas_base::source_file::Location;

use super::{Scanner, State, Transition};
use crate::{
    classifier::CommentOpener,
    error::Error,
    policy::{CaseSensitivity, Policy},
    token::{KeywordKind, Token, TokenKind},
};

fn run(source: &str, policy: &Policy) -> (Vec<Token>, Vec<Error>) {
    let mut scanner = Scanner::new(source, policy);
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut state = State::Start;

    while state != State::Done {
        let Transition { next, token, error } = scanner.step(state);
        tokens.extend(token);
        errors.extend(error);
        state = next;
    }

    (tokens, errors)
}

fn kinds(source: &str) -> Vec<(TokenKind, String)> {
    run(source, &Policy::default())
        .0
        .into_iter()
        .map(|token| (token.kind(), token.lexeme().clone()))
        .collect()
}

fn kind(kind: TokenKind, lexeme: &str) -> (TokenKind, String) { (kind, lexeme.to_string()) }

#[test]
fn empty_input_scans_to_end_of_input() {
    let (tokens, errors) = run("", &Policy::default());

    assert_eq!(tokens, vec![Token::eof(Location::START)]);
    assert!(errors.is_empty());
}

#[test]
fn done_is_terminal() {
    let policy = Policy::default();
    let mut scanner = Scanner::new("x", &policy);

    let transition = scanner.step(State::Done);
    assert_eq!(transition.next, State::Done);
    assert_eq!(transition.token, None);
    assert_eq!(transition.error, None);
    assert_eq!(scanner.cursor().location(), Location::START);
}

#[test]
fn two_character_operators_win() {
    assert_eq!(kinds("<="), vec![
        kind(TokenKind::Operator, "<="),
        kind(TokenKind::Eof, ""),
    ]);
    assert_eq!(kinds("x:=y<>z"), vec![
        kind(TokenKind::Identifier, "x"),
        kind(TokenKind::Operator, ":="),
        kind(TokenKind::Identifier, "y"),
        kind(TokenKind::Operator, "<>"),
        kind(TokenKind::Identifier, "z"),
        kind(TokenKind::Eof, ""),
    ]);
    assert_eq!(kinds(": ="), vec![
        kind(TokenKind::Delimiter, ":"),
        kind(TokenKind::Operator, "="),
        kind(TokenKind::Eof, ""),
    ]);
}

#[test]
fn numbers() {
    assert_eq!(kinds("1.5"), vec![
        kind(TokenKind::Real, "1.5"),
        kind(TokenKind::Eof, ""),
    ]);
    assert_eq!(kinds("1."), vec![
        kind(TokenKind::Integer, "1"),
        kind(TokenKind::Delimiter, "."),
        kind(TokenKind::Eof, ""),
    ]);
    assert_eq!(kinds("10..20"), vec![
        kind(TokenKind::Integer, "10"),
        kind(TokenKind::Delimiter, ".."),
        kind(TokenKind::Integer, "20"),
        kind(TokenKind::Eof, ""),
    ]);
    assert_eq!(kinds("007x"), vec![
        kind(TokenKind::Integer, "007"),
        kind(TokenKind::Identifier, "x"),
        kind(TokenKind::Eof, ""),
    ]);
}

#[test]
fn second_decimal_point_is_malformed() {
    let (tokens, errors) = run("v := 1.2.3;", &Policy::default());

    let lexemes: Vec<&str> = tokens.iter().map(|token| token.lexeme().as_str()).collect();
    assert_eq!(lexemes, vec!["v", ":=", "1.2", ".", "3", ";", ""]);
    assert_eq!(tokens[2].kind(), TokenKind::Real);

    assert_eq!(errors.len(), 1);
    let error = errors[0].as_malformed_number_literal().unwrap();
    assert_eq!(error.location, Location::new(1, 6));
    assert_eq!(error.text, "1.2.3");
    assert_eq!(error.accepted, "1.2");
}

#[test]
fn malformed_number_text_stops_at_the_rejected_digits() {
    let (tokens, errors) = run("1.2.3.4", &Policy::default());

    assert_eq!(tokens, vec![
        Token::new(TokenKind::Real, "1.2", Location::new(1, 1)),
        Token::new(TokenKind::Delimiter, ".", Location::new(1, 4)),
        Token::new(TokenKind::Real, "3.4", Location::new(1, 5)),
        Token::eof(Location::new(1, 8)),
    ]);

    assert_eq!(errors.len(), 1);
    let error = errors[0].as_malformed_number_literal().unwrap();
    assert_eq!(error.text, "1.2.3");
    assert_eq!(error.accepted, "1.2");
}

#[test]
fn strings_with_escaped_quotes() {
    let (tokens, errors) = run("'l''ete' 'x'", &Policy::default());

    assert!(errors.is_empty());
    assert_eq!(tokens[0], Token::new(TokenKind::String, "'l''ete'", Location::new(1, 1)));
    assert_eq!(tokens[1], Token::new(TokenKind::String, "'x'", Location::new(1, 10)));
}

#[test]
fn unterminated_string_recovers_on_next_line() {
    let (tokens, errors) = run("s := 'abc\nt := 1", &Policy::default());

    assert_eq!(tokens, vec![
        Token::new(TokenKind::Identifier, "s", Location::new(1, 1)),
        Token::new(TokenKind::Operator, ":=", Location::new(1, 3)),
        Token::new(TokenKind::String, "'abc", Location::new(1, 6)),
        Token::new(TokenKind::Identifier, "t", Location::new(2, 1)),
        Token::new(TokenKind::Operator, ":=", Location::new(2, 3)),
        Token::new(TokenKind::Integer, "1", Location::new(2, 6)),
        Token::eof(Location::new(2, 7)),
    ]);

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].as_unterminated_string().unwrap().location,
        Location::new(1, 6)
    );
}

#[test]
fn unterminated_string_at_end_of_input() {
    let (tokens, errors) = run("'", &Policy::default());

    assert_eq!(tokens, vec![
        Token::new(TokenKind::String, "'", Location::START),
        Token::eof(Location::new(1, 2)),
    ]);
    assert!(errors[0].is_unterminated_string());
}

#[test]
fn comments_are_skipped() {
    assert_eq!(
        kinds("x { commentaire\n sur deux lignes } y (* autre *) z // fin de ligne\nw"),
        vec![
            kind(TokenKind::Identifier, "x"),
            kind(TokenKind::Identifier, "y"),
            kind(TokenKind::Identifier, "z"),
            kind(TokenKind::Identifier, "w"),
            kind(TokenKind::Eof, ""),
        ]
    );

    // `(` and `/` alone are still punctuation
    assert_eq!(kinds("( /"), vec![
        kind(TokenKind::Delimiter, "("),
        kind(TokenKind::Operator, "/"),
        kind(TokenKind::Eof, ""),
    ]);
}

#[test]
fn block_comments_end_at_their_own_closer() {
    assert_eq!(kinds("(* { * ) } *) x { (* *) } y"), vec![
        kind(TokenKind::Identifier, "x"),
        kind(TokenKind::Identifier, "y"),
        kind(TokenKind::Eof, ""),
    ]);

    // the `*` of the opener cannot start the closer
    let (tokens, errors) = run("(*)", &Policy::default());
    assert_eq!(tokens, vec![Token::eof(Location::new(1, 4))]);
    assert_eq!(errors[0].as_unterminated_comment().unwrap().opener, CommentOpener::ParenStar);
}

#[test]
fn comment_positions_advance_lines() {
    let (tokens, _) = run("{ a\nb }x", &Policy::default());
    assert_eq!(tokens[0], Token::new(TokenKind::Identifier, "x", Location::new(2, 4)));
}

#[test]
fn unterminated_comment_ends_the_scan() {
    let (tokens, errors) = run("x (* jamais ferme\n y", &Policy::default());

    assert_eq!(tokens, vec![
        Token::new(TokenKind::Identifier, "x", Location::START),
        Token::eof(Location::new(2, 3)),
    ]);
    assert_eq!(errors.len(), 1);

    let error = errors[0].as_unterminated_comment().unwrap();
    assert_eq!(error.location, Location::new(1, 3));
    assert_eq!(error.opener, CommentOpener::ParenStar);
}

#[test]
fn illegal_characters_are_skipped() {
    let (tokens, errors) = run("x @ y", &Policy::default());

    assert_eq!(tokens, vec![
        Token::new(TokenKind::Identifier, "x", Location::new(1, 1)),
        Token::new(TokenKind::Identifier, "y", Location::new(1, 5)),
        Token::eof(Location::new(1, 6)),
    ]);
    assert_eq!(errors.len(), 1);

    let error = errors[0].as_illegal_character().unwrap();
    assert_eq!(error.location, Location::new(1, 3));
    assert_eq!(error.character, '@');
}

#[test]
fn stray_closers_are_illegal() {
    let (tokens, errors) = run("} !#", &Policy::default());

    assert_eq!(tokens.len(), 1);
    assert_eq!(errors.len(), 3);
    assert!(errors.iter().all(Error::is_illegal_character));
}

#[test]
fn keywords_follow_the_case_policy() {
    let (tokens, _) = run("debut Debut a", &Policy::default());
    assert_eq!(tokens[0].kind(), TokenKind::Keyword(KeywordKind::Debut));
    assert_eq!(tokens[1].kind(), TokenKind::Identifier);
    assert_eq!(tokens[2].kind(), TokenKind::Keyword(KeywordKind::A));

    let (tokens, _) = run("debut Debut", &Policy::new(CaseSensitivity::Insensitive));
    assert_eq!(tokens[0].kind(), TokenKind::Keyword(KeywordKind::Debut));
    assert_eq!(tokens[1].kind(), TokenKind::Keyword(KeywordKind::Debut));
    assert_eq!(tokens[1].lexeme(), "Debut");
}

#[test]
fn keywords_use_maximal_munch() {
    assert_eq!(kinds("finale fin_ fin"), vec![
        kind(TokenKind::Identifier, "finale"),
        kind(TokenKind::Identifier, "fin_"),
        kind(TokenKind::Keyword(KeywordKind::Fin), "fin"),
        kind(TokenKind::Eof, ""),
    ]);
}

#[test]
fn token_positions() {
    let (tokens, errors) = run("programme essai1;\n  x := 3.14", &Policy::default());

    assert!(errors.is_empty());

    let locations: Vec<Location> = tokens.iter().map(Token::location).collect();
    assert_eq!(locations, vec![
        Location::new(1, 1),
        Location::new(1, 11),
        Location::new(1, 17),
        Location::new(2, 3),
        Location::new(2, 5),
        Location::new(2, 8),
        Location::new(2, 12),
    ]);
}
