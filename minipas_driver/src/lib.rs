//! The command line front end of the MiniPascal-Fr scanner.
//!
//! Reads one source file, scans it and writes the report in the requested format. Diagnostics
//! are always printed to the standard error stream so the report on the standard output stays
//! machine readable.

use std::{
    fs::File,
    io::Write as _,
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

pub use clap::Parser;
use minipas_base::{
    log::{Message, Severity, SourceCodeDisplay},
    source_file::{self, SourceFile},
};
use minipas_lexical::{
    error,
    policy::{CaseSensitivity, Policy},
    scan::ScanResult,
};

/// The format the scan report is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, clap::ValueEnum)]
pub enum Format {
    /// One `TYPE LEXEME LINE:COL` line per token, then the symbol table.
    #[default]
    Text,

    /// The whole scan result as a JSON document.
    Json,
}

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(name = "minipas", about = "Lexical scanner for the MiniPascal-Fr language.")]
pub struct Argument {
    /// The source file to scan.
    pub file: PathBuf,

    /// The format of the scan report.
    #[clap(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Writes the report to this file instead of the standard output.
    #[clap(long, short)]
    pub output: Option<PathBuf>,

    /// Matches the reserved words regardless of letter case.
    #[clap(long = "case-insensitive")]
    pub case_insensitive: bool,
}

impl Argument {
    /// Gets the scanning policy selected by the arguments.
    #[must_use]
    pub fn policy(&self) -> Policy {
        Policy::new(if self.case_insensitive {
            CaseSensitivity::Insensitive
        } else {
            CaseSensitivity::Sensitive
        })
    }
}

/// Is an error that prevents the scan from running or its report from being written.
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error("failed to open `{}`: {1}", .0.display())]
    Open(PathBuf, #[source] std::io::Error),

    #[error("failed to load `{}`: {1}", .0.display())]
    Load(PathBuf, #[source] source_file::Error),

    #[error("`{}` contains no source text", .0.display())]
    EmptySource(PathBuf),

    #[error("failed to encode the report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write the report: {0}")]
    Write(#[from] std::io::Error),
}

/// The outcome of one run of the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    /// The scan completed without any lexical error.
    Success,

    /// The scan completed but found lexical errors.
    LexicalErrors,

    /// The source could not be read or the report could not be written.
    TransportFailure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => Self::SUCCESS,
            Status::LexicalErrors => Self::from(1_u8),
            Status::TransportFailure => Self::from(2_u8),
        }
    }
}

/// Loads the source file at the given path.
///
/// # Errors
/// - [`Error::Open`]: the file does not exist or cannot be opened.
/// - [`Error::Load`]: the file cannot be mapped or is not valid UTF-8.
/// - [`Error::EmptySource`]: the file is empty.
pub fn load(path: &Path) -> Result<Arc<SourceFile>, Error> {
    let file = File::open(path).map_err(|error| Error::Open(path.to_path_buf(), error))?;
    let source_file = SourceFile::load(file, path.to_path_buf())
        .map_err(|error| Error::Load(path.to_path_buf(), error))?;

    if source_file.is_empty() {
        return Err(Error::EmptySource(path.to_path_buf()));
    }

    Ok(source_file)
}

/// Renders the scan result in the given format.
///
/// # Errors
/// - [`Error::Json`]: the result cannot be encoded as JSON.
pub fn render(result: &ScanResult, format: Format) -> Result<String, Error> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(result)?),
        Format::Text => {
            let tokens = result
                .tokens_without_eof()
                .iter()
                .map(|token| format!("{token}\n"));
            let symbols = result.symbols().iter().map(|(name, entry)| {
                format!(
                    "{name} {} occurrences={}\n",
                    entry.first_location(),
                    entry.occurrences()
                )
            });

            Ok(tokens
                .chain(std::iter::once("\nsymbol table:\n".to_string()))
                .chain(symbols)
                .collect())
        }
    }
}

/// Prints a lexical error to the standard error stream, with the source code around it.
pub fn print_diagnostic(source_file: &SourceFile, error: &error::Error) {
    eprintln!("{}", Message::new(Severity::Error, error));
    eprintln!(
        "{}",
        SourceCodeDisplay::new(source_file, error.location(), error.width(), error.help())
    );
}

fn write_report(report: &str, output: Option<&Path>) -> Result<(), Error> {
    match output {
        Some(path) => std::fs::write(path, report)?,
        None => std::io::stdout().lock().write_all(report.as_bytes())?,
    }

    Ok(())
}

/// Scans the file named by the arguments and writes its report.
#[must_use]
pub fn execute(argument: &Argument) -> Status {
    let source_file = match load(&argument.file) {
        Ok(source_file) => source_file,
        Err(error) => {
            eprintln!("{}", Message::new(Severity::Error, error));
            return Status::TransportFailure;
        }
    };

    let result = ScanResult::scan(source_file.content(), &argument.policy());

    for error in result.diagnostics() {
        print_diagnostic(&source_file, error);
    }

    if let Err(error) = render(&result, argument.format)
        .and_then(|report| write_report(&report, argument.output.as_deref()))
    {
        eprintln!("{}", Message::new(Severity::Error, error));
        return Status::TransportFailure;
    }

    if result.success() {
        eprintln!(
            "{}",
            Message::new(
                Severity::Info,
                format!(
                    "{}: {} tokens, {} identifiers",
                    argument.file.display(),
                    result.tokens_without_eof().len(),
                    result.symbols().len()
                )
            )
        );
        Status::Success
    } else {
        eprintln!(
            "{}",
            Message::new(
                Severity::Warning,
                format!(
                    "{}: {} lexical errors found",
                    argument.file.display(),
                    result.diagnostics().len()
                )
            )
        );
        Status::LexicalErrors
    }
}

/// Runs the program with the given arguments.
#[must_use]
pub fn run(argument: &Argument) -> ExitCode { execute(argument).into() }
