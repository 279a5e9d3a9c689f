//! Testing utilities shared by the MiniPascal-Fr crates.

#![deny(missing_docs, missing_debug_implementations)]

pub mod input;
