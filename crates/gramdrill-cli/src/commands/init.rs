//! The `gramdrill init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create an example custom bank
    std::fs::create_dir_all("banks")?;
    let bank_path = std::path::Path::new("banks/example.toml");
    if bank_path.exists() {
        println!("banks/example.toml already exists, skipping.");
    } else {
        std::fs::write(bank_path, EXAMPLE_BANK)?;
        println!("Created banks/example.toml");
    }

    // Create a response template
    let responses_path = std::path::Path::new("responses.json");
    if responses_path.exists() {
        println!("responses.json already exists, skipping.");
    } else {
        std::fs::write(responses_path, RESPONSE_TEMPLATE)?;
        println!("Created responses.json");
    }

    println!("\nNext steps:");
    println!("  1. Run: gramdrill show --kind fill-blank");
    println!("  2. Fill in responses.json with your answers");
    println!("  3. Run: gramdrill grade --kind fill-blank --responses responses.json");

    Ok(())
}

const EXAMPLE_BANK: &str = r#"# gramdrill custom question bank
#
# kind is one of: multiple-choice, fill-blank, correction.
# Every item must match the declared kind.

[bank]
id = "example"
name = "Example Bank"
kind = "fill-blank"

[[items]]
sentence = "He ___ his homework before dinner yesterday."
answer = "finished"

[[items]]
sentence = "We ___ lived here since 2010."
answer = "have"
"#;

const RESPONSE_TEMPLATE: &str = r#"[null, null, null, null]
"#;
