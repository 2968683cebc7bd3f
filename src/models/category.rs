/// Semantic category of a previously generated wrapper type, as recorded in
/// the type registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Newtype over a raw struct
    Struct,
    /// Plain `#[repr(iN)]` enum
    Enum,
    /// `bitflags!` container
    BitFlags,
}

/// Classification outcome for one struct field, driving accessor dispatch.
///
/// The set is closed: a field that matches nothing in the registry falls back
/// to `Numeric` passthrough, so every field classifies into exactly one of
/// these and the generators match exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Raw `BOOL` field, stored as an integer
    Bool,
    /// Passthrough with fixed-width substitutions already applied to the
    /// opaque type text
    Numeric(String),
    /// Field whose wrapper is a registered struct newtype; holds the wrapper name
    Struct(String),
    /// Field whose wrapper is a registered enum; holds the wrapper name
    Enum(String),
    /// Field whose wrapper is a registered bitflags container; holds the wrapper name
    Flags(String),
}
