// Rust guideline compliant 2026-10-14

//! Implementation of the `smc categories` command.

use crate::OutputFormatter;
use samachar_core::Category;

/// Prints the category navigation list.
pub fn execute(formatter: &dyn OutputFormatter) {
    println!("{}", formatter.format_categories(&Category::ALL));
}
