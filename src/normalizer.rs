//! Declaration normalizer - turns a pasted multi-line block into a sequence
//! of single statement-lines.
//!
//! The paste may carry arbitrary original line wrapping, so line breaks are
//! meaningless; the structural delimiters are the only reliable statement
//! boundaries. All breaks are collapsed first, then the text is re-split
//! after each delimiter.

/// Collapse line breaks, then re-split after each delimiter character.
/// Chunks are trimmed; empty chunks are dropped.
pub fn normalize(input: &str, delimiters: &[char]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for c in input.chars() {
        if c == '\r' || c == '\n' {
            continue;
        }
        current.push(c);
        if delimiters.contains(&c) {
            push_trimmed(&mut lines, &current);
            current.clear();
        }
    }
    push_trimmed(&mut lines, &current);

    lines
}

fn push_trimmed(lines: &mut Vec<String>, chunk: &str) {
    let trimmed = chunk.trim();
    if !trimmed.is_empty() {
        lines.push(trimmed.to_string());
    }
}

/// Statement-lines for alias/constant blocks: split after `;`.
pub fn statement_lines(input: &str) -> Vec<String> {
    normalize(input, &[';'])
}

/// Statement-lines for struct blocks: split after the header's `{` and each
/// field's trailing `,`.
pub fn struct_lines(input: &str) -> Vec<String> {
    normalize(input, &['{', ','])
}
