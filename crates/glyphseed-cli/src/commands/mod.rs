//! CLI command implementations

pub mod color;
pub mod connector;
pub mod crystal;
pub mod icon;
pub mod manifest;
pub mod palette;
pub mod sheet;

mod output;
