//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;

pub use display::{print_definition, print_validation_report, print_validation_summary};
