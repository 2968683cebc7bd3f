//! Bit-flag wrapper emission: a `bitflags!` container whose constant
//! initializers reference the raw constants by name. Bit values are never
//! evaluated here.

use crate::models::{EnumConstantDecl, IntWidth};
use crate::names::variant_name;

/// Emit the bitflags container. Constants appear in statement order.
pub fn generate_flags(
    name: &str,
    width: IntWidth,
    raw_prefix: &str,
    constants: &[EnumConstantDecl],
) -> String {
    let mut source = format!(
        "bitflags! {{\n    pub struct {}: {} {{\n",
        name,
        width.rust_type(),
    );

    for constant in constants {
        source.push_str(&format!(
            "        const {} = {}{};\n",
            variant_name(&constant.variant, name),
            raw_prefix,
            constant.variant,
        ));
    }

    source.push_str("    }\n}\n");
    source
}
