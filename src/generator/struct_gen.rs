//! Struct wrapper emission: a `#[repr(transparent)]` newtype over the raw
//! struct plus one `impl` block with per-field accessor trios.

use crate::models::StructDecl;
use crate::names::wrapper_type_name;
use crate::registry::TypeRegistry;

use super::accessors::field_accessors;
use super::classify_field;

/// Emit the full wrapper definition for one struct declaration.
/// Fields are emitted in declaration order.
pub fn generate_struct(decl: &StructDecl, registry: &TypeRegistry) -> String {
    let name = wrapper_type_name(&decl.raw_name);

    let mut source = format!(
        "#[derive(Default)]\n\
         #[repr(transparent)]\n\
         pub struct {name}(pub {raw});\n\
         \n\
         impl {name} {{\n",
        raw = decl.raw_name,
    );

    for field in &decl.fields {
        let kind = classify_field(&field.raw_type, registry);
        source.push_str(&field_accessors(field, &kind));
    }

    // drop the blank line left after the last accessor
    if source.ends_with("\n\n") {
        source.pop();
    }
    source.push_str("}\n");

    source
}
