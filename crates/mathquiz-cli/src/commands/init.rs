//! The `mathquiz init` command.

use std::path::Path;

use anyhow::Result;

use mathquiz_core::config::SAMPLE_CONFIG;

pub fn execute() -> Result<()> {
    let path = Path::new("mathquiz.toml");
    if path.exists() {
        println!("mathquiz.toml already exists, skipping.");
        return Ok(());
    }

    std::fs::write(path, SAMPLE_CONFIG)?;
    println!("Created mathquiz.toml");

    println!("\nNext steps:");
    println!("  1. Edit mathquiz.toml to pick colors, symbols, or a preset");
    println!("  2. Run: mathquiz play --config mathquiz.toml");

    Ok(())
}
