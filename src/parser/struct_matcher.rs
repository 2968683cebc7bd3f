//! Matchers for struct/union declarations:
//!
//! ```text
//! pub struct D3D12_DESCRIPTOR_RANGE {
//!     pub RangeType: D3D12_DESCRIPTOR_RANGE_TYPE,
//!     pub NumDescriptors: UINT,
//! }
//! ```
//!
//! Field type text is not semantically parsed; it is kept as an opaque token
//! string (pointer, array, and path syntax pass through untouched).

use anyhow::{bail, Result};

use crate::models::{StructDecl, StructFieldDecl};

use super::cursor::Cursor;

/// Recognize a struct/union header line, returning the raw type name.
///
/// Collapsing the paste can glue attribute debris (`#[repr(C)]...`) onto the
/// header chunk, so matching starts at the first `pub` in the line.
pub fn match_struct_header(line: &str) -> Option<String> {
    let start = line.find("pub")?;
    let mut cur = Cursor::new(&line[start..]);

    if !cur.eat_keyword("pub") {
        return None;
    }
    cur.skip_ws();
    if !cur.eat_keyword("struct") && !cur.eat_keyword("union") {
        return None;
    }
    cur.skip_ws();
    let name = cur.eat_ident()?;
    cur.skip_ws();
    if !cur.eat_char('{') || !cur.at_end() {
        return None;
    }

    Some(name.to_string())
}

/// Recognize a field line `pub Name: TypeText,`.
pub fn match_struct_field(line: &str) -> Option<StructFieldDecl> {
    let mut cur = Cursor::new(line);

    cur.skip_ws();
    if !cur.eat_keyword("pub") {
        return None;
    }
    cur.skip_ws();
    let name = cur.eat_ident()?;
    cur.skip_ws();
    if !cur.eat_char(':') {
        return None;
    }
    let raw_type = cur.take_until(',')?.trim();
    if raw_type.is_empty() || !cur.at_end() {
        return None;
    }

    Some(StructFieldDecl {
        raw_name: name.to_string(),
        raw_type: raw_type.to_string(),
    })
}

/// Extract the struct declaration from a normalized block.
///
/// The header must be found exactly once; anything else is a fatal input
/// error. Lines matching neither pattern are dropped without diagnostics.
pub fn parse_struct_block(lines: &[String]) -> Result<StructDecl> {
    let mut raw_name: Option<String> = None;
    let mut fields = Vec::new();

    for line in lines {
        if let Some(name) = match_struct_header(line) {
            if raw_name.is_some() {
                bail!("more than one struct/union header found in pasted block");
            }
            raw_name = Some(name);
            continue;
        }
        if let Some(field) = match_struct_field(line) {
            fields.push(field);
        }
    }

    match raw_name {
        Some(raw_name) => Ok(StructDecl { raw_name, fields }),
        None => bail!("no struct/union header found in pasted block"),
    }
}
