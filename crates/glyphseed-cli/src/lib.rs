//! Glyphseed CLI library.
//!
//! Command implementations for the `glyphseed` binary. Each command resolves
//! its options (config file first, then flags), calls into
//! `glyphseed-core`, and writes markup or a report.

pub mod commands;
