//! The `gramdrill show` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use gramdrill_core::model::BankItems;

pub fn execute(kind: Option<String>, bank_path: Option<PathBuf>) -> Result<()> {
    let bank = super::resolve_bank(kind, bank_path)?;

    println!("{} ({}, {} questions)", bank.name, bank.kind(), bank.len());

    let mut table = Table::new();

    match &bank.items {
        BankItems::MultipleChoice(items) => {
            table.set_header(vec!["#", "Question", "Options"]);
            for (i, item) in items.iter().enumerate() {
                let options = item
                    .options
                    .iter()
                    .enumerate()
                    .map(|(n, o)| format!("{n}) {o}"))
                    .collect::<Vec<_>>()
                    .join("\n");
                table.add_row(vec![
                    Cell::new(i + 1),
                    Cell::new(&item.prompt),
                    Cell::new(options),
                ]);
            }
        }
        BankItems::FillBlank(items) => {
            table.set_header(vec!["#", "Sentence"]);
            for (i, item) in items.iter().enumerate() {
                table.add_row(vec![Cell::new(i + 1), Cell::new(&item.sentence)]);
            }
        }
        BankItems::Correction(items) => {
            table.set_header(vec!["#", "Sentence to correct"]);
            for (i, item) in items.iter().enumerate() {
                table.add_row(vec![Cell::new(i + 1), Cell::new(&item.incorrect)]);
            }
        }
    }

    println!("{table}");
    println!(
        "\nAnswer with a JSON array, e.g. [1, null, \"goes\"], then run: gramdrill grade --kind {} --responses answers.json",
        bank.kind()
    );

    Ok(())
}
