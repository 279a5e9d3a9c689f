use super::{get_digit, Message, Severity, SourceCodeDisplay};
use crate::source_file::{Location, SourceFile};

/// Removes the ANSI escape sequences so the layout can be compared as plain text.
fn strip_ansi(text: &str) -> String {
    let mut result = String::new();
    let mut chars = text.chars();

    while let Some(char) = chars.next() {
        if char == '\x1B' {
            for char in chars.by_ref() {
                if char == 'm' {
                    break;
                }
            }
        } else {
            result.push(char);
        }
    }

    result
}

#[test]
fn test_get_digit() {
    assert_eq!(get_digit(0), 0);
    assert_eq!(get_digit(9), 1);
    assert_eq!(get_digit(10), 2);
    assert_eq!(get_digit(4096), 4);
}

#[test]
fn test_message_header() {
    let message = Message::new(Severity::Warning, "2 lexical errors");
    assert_eq!(strip_ansi(&message.to_string()), "[warning]: 2 lexical errors");
}

#[test]
fn test_source_code_display_layout() {
    let source_file = SourceFile::temp("debut\n  x @ y\nfin.").unwrap();
    let display = SourceCodeDisplay::new(&source_file, Location::new(2, 5), 1, Some("remove it"));
    let rendered = strip_ansi(&display.to_string());
    let lines: Vec<&str> = rendered.lines().collect();

    assert!(lines[0].ends_with(":2:5"));
    assert_eq!(lines[1], "  ┃ ");
    assert_eq!(lines[2], "1 ┃ debut");
    assert_eq!(lines[3], "2 ┃   x @ y");
    assert_eq!(lines[4], "  ┃     help: remove it");
    assert_eq!(lines[5], "3 ┃ fin.");
    assert_eq!(lines[6], "  ┃ ");
    assert_eq!(lines.len(), 7);
}

#[test]
fn test_marked_characters_are_highlighted() {
    let source_file = SourceFile::temp("x := 1.2.3").unwrap();
    let display = SourceCodeDisplay::new(&source_file, Location::new(1, 6), 5, None::<&str>);
    let rendered = display.to_string();

    let marked: String = "1.2.3"
        .chars()
        .map(|char| format!("\x1B[1;4;31m{char}\x1B[0m"))
        .collect();
    assert!(rendered.contains(&format!("x := {marked}\n")));

    let message = Message::new(Severity::Error, "boom").to_string();
    assert!(message.starts_with("\x1B[1;31m[error]:\x1B[0m "));
}
