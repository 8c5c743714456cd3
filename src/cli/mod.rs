//! Command Line Interface (CLI) layer for TILEGEN.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for single-office and batch
//! generation flows. It wires user-provided options to the underlying
//! library functionality exposed via `tilegen::api`.
//!
//! If you are embedding TILEGEN into another application, prefer using
//! the high-level `tilegen::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
