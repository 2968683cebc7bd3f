//! Code generators - emit wrapper source text for one declaration.
//!
//! Struct fields are classified against the type registry here; the
//! classification picks the accessor generation strategy in `accessors`.

pub mod accessors;
pub mod enum_gen;
pub mod flags_gen;
pub mod struct_gen;

use crate::models::{Category, FieldKind};
use crate::names::wrapper_type_name;
use crate::registry::TypeRegistry;

/// Fixed-width substitutions applied to opaque type text, most specific
/// first so `UINT64` is consumed before `UINT`, and `UINT` before `INT`.
const WIDTH_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("UINT64", "u64"),
    ("UINT16", "u16"),
    ("UINT8", "u8"),
    ("UINT", "u32"),
    ("INT64", "i64"),
    ("INT16", "i16"),
    ("INT8", "i8"),
    ("INT", "i32"),
    ("FLOAT", "f32"),
];

/// Apply the fixed-width substitutions to a raw type text.
///
/// Tokens are replaced only at identifier boundaries, so an identifier that
/// merely contains a width token (`D3D12_POINT_DESC`) passes through intact.
pub fn substitute_widths(raw_type: &str) -> String {
    let mut text = raw_type.to_string();
    for (raw, rust) in WIDTH_SUBSTITUTIONS {
        text = replace_token(&text, raw, rust);
    }
    text
}

/// Replace whole-token occurrences of `token`: a match is skipped when an
/// identifier character directly precedes or follows it.
fn replace_token(text: &str, token: &str, replacement: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut pos = 0;

    while let Some(offset) = text[pos..].find(token) {
        let start = pos + offset;
        let end = start + token.len();
        let bounded = !text[..start].chars().next_back().is_some_and(is_ident_char)
            && !text[end..].chars().next().is_some_and(is_ident_char);

        result.push_str(&text[pos..start]);
        if bounded {
            result.push_str(replacement);
        } else {
            result.push_str(token);
        }
        pos = end;
    }
    result.push_str(&text[pos..]);

    result
}

/// Classify one field's raw type text against the registry.
///
/// Only a plain identifier can name a registered wrapper; pointer, array,
/// and path types never reach the registry and fall through to passthrough.
/// A plain identifier absent from the registry is a built-in, also
/// passthrough.
pub fn classify_field(raw_type: &str, registry: &TypeRegistry) -> FieldKind {
    let raw_type = raw_type.trim();

    if raw_type == "BOOL" {
        return FieldKind::Bool;
    }

    if is_plain_ident(raw_type) {
        let wrapper = wrapper_type_name(raw_type);
        match registry.classify(&wrapper) {
            Some(Category::Struct) => return FieldKind::Struct(wrapper),
            Some(Category::Enum) => return FieldKind::Enum(wrapper),
            Some(Category::BitFlags) => return FieldKind::Flags(wrapper),
            None => {}
        }
    }

    FieldKind::Numeric(substitute_widths(raw_type))
}

fn is_plain_ident(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_ident_char)
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
