//! Reading and writing occurrence collections as JSON.
//!
//! `-` stands for stdin when reading. Output goes to stdout unless a path is given.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use recur_core::Occurrence;

pub fn read(input: &str) -> Result<Vec<Occurrence>> {
    let content = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read occurrences from stdin")?;
        buf
    } else {
        std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))?
    };

    parse(&content).with_context(|| format!("Invalid occurrence collection in {}", input))
}

fn parse(content: &str) -> Result<Vec<Occurrence>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(content)?)
}

pub fn write(occurrences: &[Occurrence], output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(occurrences)?;

    match output {
        Some(path) => std::fs::write(path, json + "\n")
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }

    Ok(())
}
