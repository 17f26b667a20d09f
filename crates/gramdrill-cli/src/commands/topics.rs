//! The `gramdrill topics` command.

use anyhow::Result;

use crate::topics;

pub fn execute(name: Option<String>) -> Result<()> {
    match name {
        None => {
            println!("Reference topics:\n");
            for topic in topics::TOPICS {
                println!("  {:<20} {}", topic.slug, topic.summary);
            }
            println!("\nShow one with: gramdrill topics <name>");
        }
        Some(name) => match topics::find(&name) {
            Some(topic) => {
                println!("{}\n", topic.title);
                println!("{}", topic.body);
            }
            None => {
                let available = topics::TOPICS
                    .iter()
                    .map(|t| t.slug)
                    .collect::<Vec<_>>()
                    .join(", ");
                anyhow::bail!("unknown topic \"{name}\" (available: {available})");
            }
        },
    }

    Ok(())
}
