//! Library side of the `formcheck` binary: configuration loading and report
//! rendering, kept out of `main.rs` so they can be tested directly.

pub mod report;
pub mod settings;
