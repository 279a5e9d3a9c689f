//! Contains the [`SymbolTable`] built while scanning.

use derive_more::Deref;
use getset::{CopyGetters, Getters};
use indexmap::IndexMap;
use minipas_base::source_file::Location;
use serde::Serialize;

/// Represents everything recorded about one identifier spelling.
///
/// Serializes as `{"first_line": .., "first_col": .., "occurrences": ..}`, the name being the key
/// of the enclosing table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, CopyGetters, Serialize)]
pub struct SymbolEntry {
    /// Gets the exact spelling of the identifier.
    #[get = "pub"]
    #[serde(skip)]
    name: String,

    /// Gets the line of the first occurrence.
    #[get_copy = "pub"]
    first_line: usize,

    /// Gets the column of the first occurrence.
    #[get_copy = "pub"]
    #[serde(rename = "first_col")]
    first_column: usize,

    /// Gets the number of times the identifier appeared, the first time included.
    #[get_copy = "pub"]
    occurrences: usize,
}

impl SymbolEntry {
    /// Gets the location of the first occurrence.
    #[must_use]
    pub fn first_location(&self) -> Location { Location::new(self.first_line, self.first_column) }
}

/// Is a mapping from identifier spelling to its [`SymbolEntry`].
///
/// Entries are kept in the order their identifiers were first seen. They are only ever added or
/// incremented, never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, Serialize)]
#[serde(transparent)]
pub struct SymbolTable {
    #[deref]
    entries: IndexMap<String, SymbolEntry>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Records one occurrence of the identifier `name` found at `location`.
    pub fn record(&mut self, name: &str, location: Location) {
        if let Some(entry) = self.entries.get_mut(name) {
            entry.occurrences += 1;
            return;
        }

        self.entries.insert(name.to_owned(), SymbolEntry {
            name: name.to_owned(),
            first_line: location.line,
            first_column: location.column,
            occurrences: 1,
        });
    }

    /// Dissolves the table into its entries, in first-sighting order.
    #[must_use]
    pub fn dissolve(self) -> Vec<SymbolEntry> { self.entries.into_values().collect() }
}
