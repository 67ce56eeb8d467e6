//! Terminal and JSON output for the CLI

pub mod ci;
pub mod error;
pub mod json;
pub mod output;
pub mod terminal;
pub mod theme;
