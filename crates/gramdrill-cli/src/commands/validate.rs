//! The `gramdrill validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(bank_path: PathBuf) -> Result<()> {
    let banks = if bank_path.is_dir() {
        gramdrill_core::parser::load_bank_directory(&bank_path)?
    } else {
        vec![gramdrill_core::parser::parse_bank(&bank_path)?]
    };

    let mut total_warnings = 0;

    for bank in &banks {
        println!("Bank: {} ({}, {} questions)", bank.name, bank.kind(), bank.len());

        let warnings = gramdrill_core::parser::validate_bank(bank);
        for w in &warnings {
            let prefix = w
                .item_index
                .map(|i| format!("  [item {i}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All banks valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
