//! Matcher for the type-alias statement that names an enum-like typedef and
//! its underlying integer width:
//!
//! ```text
//! pub type D3D12_RESOURCE_FLAGS = ::std::os::raw::c_int;
//! ```

use crate::models::{IntWidth, TypeAliasDecl};

use super::cursor::Cursor;

/// Recognize a single statement-line as a type alias.
pub fn match_type_alias(line: &str) -> Option<TypeAliasDecl> {
    let mut cur = Cursor::new(line);

    cur.skip_ws();
    if !cur.eat_keyword("pub") {
        return None;
    }
    cur.skip_ws();
    if !cur.eat_keyword("type") {
        return None;
    }
    cur.skip_ws();
    let raw_name = cur.eat_ident()?;
    cur.skip_ws();
    if !cur.eat_char('=') {
        return None;
    }
    cur.skip_ws();
    if !cur.eat_exact("::std::os::raw::") {
        return None;
    }
    let alias = cur.eat_ident()?;
    cur.skip_ws();
    if !cur.eat_char(';') || !cur.at_end() {
        return None;
    }

    let width = match alias {
        "c_int" => IntWidth::I32,
        "c_uint" => IntWidth::U32,
        _ => return None,
    };

    Some(TypeAliasDecl {
        raw_name: raw_name.to_string(),
        width,
    })
}

/// Find the first type alias in a normalized block. Later matches in the
/// same block are ignored.
pub fn find_type_alias(lines: &[String]) -> Option<TypeAliasDecl> {
    lines.iter().find_map(|line| match_type_alias(line))
}
