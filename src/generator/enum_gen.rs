//! Enum wrapper emission: a `#[repr(iN)]` enum whose variant initializers
//! reference the raw constants by name, keeping the generated code in sync
//! with the bindings without evaluating any values here.

use crate::models::{EnumConstantDecl, IntWidth};
use crate::names::variant_name;

/// Emit the enum definition. Variants appear in statement order.
pub fn generate_enum(
    name: &str,
    width: IntWidth,
    raw_prefix: &str,
    constants: &[EnumConstantDecl],
) -> String {
    let mut source = format!(
        "#[derive(Copy, Clone, Debug)]\n#[repr({})]\npub enum {} {{\n",
        width.rust_type(),
        name,
    );

    for constant in constants {
        source.push_str(&format!(
            "    {} = {}{},\n",
            variant_name(&constant.variant, name),
            raw_prefix,
            constant.variant,
        ));
    }

    source.push_str("}\n");
    source
}
