//! This crate implements the lexical analysis phase of the MiniPascal-Fr toolchain. This phase is
//! responsible for scanning the source code into a stream of tokens, together with the table of
//! identifiers it contains and the lexical errors it found.
//!
//! The final output of this phase is a [`scan::ScanResult`], produced by
//! [`scan::ScanResult::scan`] under a [`policy::Policy`].

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod classifier;
pub mod cursor;
pub mod error;
pub mod policy;
pub mod scan;
pub mod scanner;
pub mod symbol_table;
pub mod token;
