/// Underlying integer width of an enum-like typedef, taken from its
/// `::std::os::raw` alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
    /// `c_int`
    I32,
    /// `c_uint`
    U32,
}

impl IntWidth {
    /// The Rust spelling used in generated code
    pub fn rust_type(self) -> &'static str {
        match self {
            IntWidth::I32 => "i32",
            IntWidth::U32 => "u32",
        }
    }
}

/// The type-alias statement naming an enum-like typedef and its width.
/// Exactly one must be present in a flags/enum paste.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAliasDecl {
    /// Raw vendor name (e.g. `D3D12_RESOURCE_FLAGS`)
    pub raw_name: String,
    pub width: IntWidth,
}

/// One constant declaration belonging to an enum-like typedef, already
/// stripped of the caller-supplied prefix. Order of appearance defines the
/// emitted variant order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumConstantDecl {
    /// Variant part of the raw constant name (prefix removed)
    pub variant: String,
}

/// A struct/union header plus its typed field list.
#[derive(Debug, Clone)]
pub struct StructDecl {
    /// Raw vendor name (e.g. `D3D12_VIEWPORT`)
    pub raw_name: String,
    /// Fields in declaration order; accessor emission preserves it
    pub fields: Vec<StructFieldDecl>,
}

/// One struct field declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructFieldDecl {
    /// Raw field name as it appears in the bindings (e.g. `NumDescriptors`)
    pub raw_name: String,
    /// Raw type text, kept opaque; may include pointer/array/path syntax
    pub raw_type: String,
}
