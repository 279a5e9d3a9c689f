//! Provides the functions related to logging/printing messages to the console.

use std::fmt::Display;

use derive_new::new;

use crate::source_file::{Location, SourceFile};

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Info,
    Warning,
}

/// Is an enumeration of the highlights the console output uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Highlight {
    /// The `[severity]:` header of a message.
    Header(Severity),

    /// Message bodies and the `help` label.
    Strong,

    /// The arrow, line numbers and gutter of a source excerpt.
    Gutter,

    /// The characters a diagnostic points at.
    Marked,
}

impl Highlight {
    const RESET: &'static str = "\x1B[0m";

    const fn code(self) -> &'static str {
        match self {
            Self::Header(Severity::Error) => "\x1B[1;31m",
            Self::Header(Severity::Info) => "\x1B[1;32m",
            Self::Header(Severity::Warning) => "\x1B[1;33m",
            Self::Strong => "\x1B[1m",
            Self::Gutter => "\x1B[1;36m",
            Self::Marked => "\x1B[1;4;31m",
        }
    }

    fn paint<T>(self, display: T) -> Painted<T> {
        Painted {
            highlight: self,
            display,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Painted<T> {
    highlight: Highlight,
    display: T,
}

impl<T: Display> Display for Painted<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.highlight.code(), self.display, Highlight::RESET)
    }
}

/// Is a struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let log_header = Highlight::Header(self.severity).paint(match self.severity {
            Severity::Error => "[error]:",
            Severity::Info => "[info]:",
            Severity::Warning => "[warning]:",
        });

        let message_part = Highlight::Strong.paint(&self.display);

        write!(f, "{log_header} {message_part}")
    }
}

fn get_digit(mut number: usize) -> usize {
    let mut digit = 0;

    while number > 0 {
        number /= 10;
        digit += 1;
    }

    digit
}

/// Structure implementing [`Display`] that prints the source line around a location, marking the
/// `width` characters that start there.
#[derive(Debug, Clone, Copy, new)]
pub struct SourceCodeDisplay<'a, T> {
    /// The source file the location points into.
    pub source_file: &'a SourceFile,

    /// The location of the first marked character.
    pub location: Location,

    /// The number of characters to mark, starting at `location`.
    pub width: usize,

    /// The help message to be displayed.
    pub help_display: Option<T>,
}

impl<'a, T> SourceCodeDisplay<'a, T> {
    fn write_gutter(
        f: &mut std::fmt::Formatter<'_>,
        line_number: Option<usize>,
        digits: usize,
    ) -> std::fmt::Result {
        match line_number {
            Some(line_number) => write!(
                f,
                "{}{:width$}{} ",
                Highlight::Gutter.paint(line_number),
                "",
                Highlight::Gutter.paint("┃"),
                width = digits - get_digit(line_number) + 1
            ),
            None => write!(
                f,
                "{:width$}{} ",
                "",
                Highlight::Gutter.paint("┃"),
                width = digits + 1
            ),
        }
    }

    fn write_plain_line(f: &mut std::fmt::Formatter<'_>, line: &str) -> std::fmt::Result {
        for char in line.chars() {
            // if the char is tab, print 4 spaces
            if char == '\t' {
                write!(f, "    ")?;
            } else if char != '\n' && char != '\r' {
                write!(f, "{char}")?;
            }
        }

        writeln!(f)
    }
}

impl<'a, T: Display> Display for SourceCodeDisplay<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line_number = self.location.line;
        let marked = self.location.column..self.location.column + self.width.max(1);

        // when printing the source code, show the line before and the line after the location
        let digits = get_digit(line_number + 1);

        writeln!(
            f,
            "{:digits$}{} {}:{}",
            "",
            Highlight::Gutter.paint("-->"),
            self.source_file.full_path().display(),
            self.location
        )?;

        Self::write_gutter(f, None, digits)?;
        writeln!(f)?;

        if let Some(line) = self.source_file.get_line(line_number.saturating_sub(1)) {
            Self::write_gutter(f, Some(line_number - 1), digits)?;
            Self::write_plain_line(f, line)?;
        }

        let current_line = self.source_file.get_line(line_number).unwrap_or_default();

        Self::write_gutter(f, Some(line_number), digits)?;
        for (index, char) in current_line.chars().enumerate() {
            if char == '\n' || char == '\r' {
                continue;
            }

            let printed = if char == '\t' { "    ".to_string() } else { char.to_string() };

            if marked.contains(&(index + 1)) {
                write!(f, "{}", Highlight::Marked.paint(printed))?;
            } else {
                write!(f, "{printed}")?;
            }
        }
        writeln!(f)?;

        if let Some(message) = &self.help_display {
            Self::write_gutter(f, None, digits)?;

            // prints the whitespace until the start's column
            for (index, char) in current_line.chars().enumerate() {
                if index + 1 >= self.location.column {
                    break;
                }

                write!(f, "{}", if char == '\t' { "    " } else { " " })?;
            }

            writeln!(f, "{}: {message}", Highlight::Strong.paint("help"))?;
        }

        if let Some(line) = self.source_file.get_line(line_number.saturating_add(1)) {
            Self::write_gutter(f, Some(line_number + 1), digits)?;
            Self::write_plain_line(f, line)?;
        }

        Self::write_gutter(f, None, digits)?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests;
