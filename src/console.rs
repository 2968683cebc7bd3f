//! Line-buffered console input helpers.
//!
//! The readers take any `BufRead`, so the core pipeline stays testable
//! without simulating console interaction.

use anyhow::Result;
use std::io::BufRead;

/// Read lines until a blank line or EOF; returns the block joined with `\n`.
/// The blank terminator is not included.
pub fn read_block(reader: &mut impl BufRead) -> Result<String> {
    let mut block = String::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        if !block.is_empty() {
            block.push('\n');
        }
        block.push_str(&line);
    }

    Ok(block)
}

/// Read a single line, trimmed. EOF yields an empty string.
pub fn read_line(reader: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
