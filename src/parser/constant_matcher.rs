//! Matcher for constant declarations belonging to one enum-like typedef:
//!
//! ```text
//! pub const D3D12_RESOURCE_FLAGS_D3D12_RESOURCE_FLAG_NONE: D3D12_RESOURCE_FLAGS = 0;
//! ```
//!
//! Built per invocation, parameterized by the raw enum name (from the alias
//! matcher) and the caller-supplied variant prefix. Only names are extracted;
//! the initializer value is never parsed or evaluated.

use crate::models::EnumConstantDecl;

use super::cursor::Cursor;

pub struct ConstantMatcher {
    raw_enum_name: String,
    prefix: String,
}

impl ConstantMatcher {
    pub fn new(raw_enum_name: &str, prefix: &str) -> Self {
        ConstantMatcher {
            raw_enum_name: raw_enum_name.to_string(),
            prefix: prefix.to_string(),
        }
    }

    /// Recognize a single statement-line as a constant of the scoping enum,
    /// returning the variant part of its name (prefix removed).
    pub fn match_line(&self, line: &str) -> Option<EnumConstantDecl> {
        let mut cur = Cursor::new(line);

        cur.skip_ws();
        if !cur.eat_keyword("pub") {
            return None;
        }
        cur.skip_ws();
        if !cur.eat_keyword("const") {
            return None;
        }
        cur.skip_ws();
        let name = cur.eat_ident()?;
        cur.skip_ws();
        if !cur.eat_char(':') {
            return None;
        }
        cur.skip_ws();
        if !cur.eat_keyword(&self.raw_enum_name) {
            return None;
        }
        cur.skip_ws();
        if !cur.eat_char('=') {
            return None;
        }
        // The value is opaque; require it to be present and terminated
        let value = cur.take_until(';')?;
        if value.trim().is_empty() || !cur.at_end() {
            return None;
        }

        let variant = name.strip_prefix(&self.prefix)?;
        if variant.is_empty() {
            return None;
        }

        Some(EnumConstantDecl {
            variant: variant.to_string(),
        })
    }

    /// Collect all matching constants from a normalized block, in statement
    /// order. Non-matching lines are skipped.
    pub fn collect(&self, lines: &[String]) -> Vec<EnumConstantDecl> {
        lines
            .iter()
            .filter_map(|line| self.match_line(line))
            .collect()
    }
}
