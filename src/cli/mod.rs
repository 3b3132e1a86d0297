//! Command Line Interface (CLI) layer for tobitmap.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`). It resolves user-provided
//! options into a single `ConvertParams` and hands it to `tobitmap::api`.
//!
//! If you are embedding tobitmap into another application, prefer using
//! the high-level `tobitmap::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
