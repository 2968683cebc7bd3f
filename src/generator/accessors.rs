//! Per-field accessor emission, dispatched on the field's classification.
//!
//! Every field gets a setter, a fluent `with_` method that forwards to the
//! setter and returns the owning value, and a getter, in that order.
//!
//! The enum getter reinterprets the stored integer bits as the enum type
//! without validating that the bit pattern is a defined variant, and the
//! flags getter reconstructs the container without masking undefined bits;
//! both mirror the accessors already generated into the wrapper sources.

use crate::models::{FieldKind, StructFieldDecl};
use crate::names::to_snake_case;

/// Emit the setter / with / getter trio for one field, indented for an
/// `impl` block and followed by a blank line.
pub fn field_accessors(field: &StructFieldDecl, kind: &FieldKind) -> String {
    let raw = &field.raw_name;
    let name = to_snake_case(raw);

    let (param_ty, store_expr, get_ty, get_expr) = match kind {
        FieldKind::Numeric(ty) => (
            ty.clone(),
            name.clone(),
            ty.clone(),
            format!("self.0.{raw}"),
        ),
        FieldKind::Bool => (
            "bool".to_string(),
            format!("{name} as i32"),
            "bool".to_string(),
            format!("self.0.{raw} != 0"),
        ),
        FieldKind::Struct(wrapper) => (
            wrapper.clone(),
            format!("{name}.0"),
            wrapper.clone(),
            format!("{wrapper}(self.0.{raw})"),
        ),
        FieldKind::Enum(wrapper) => (
            wrapper.clone(),
            format!("{name} as i32"),
            wrapper.clone(),
            format!("unsafe {{ std::mem::transmute(self.0.{raw}) }}"),
        ),
        FieldKind::Flags(wrapper) => (
            wrapper.clone(),
            format!("{name}.bits()"),
            wrapper.clone(),
            format!("unsafe {{ {wrapper}::from_bits_unchecked(self.0.{raw}) }}"),
        ),
    };

    format!(
        r#"    pub fn set_{name}(&mut self, {name}: {param_ty}) {{
        self.0.{raw} = {store_expr};
    }}

    pub fn with_{name}(mut self, {name}: {param_ty}) -> Self {{
        self.set_{name}({name});
        self
    }}

    pub fn {name}(&self) -> {get_ty} {{
        {get_expr}
    }}

"#
    )
}
