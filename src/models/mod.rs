pub mod category;
pub mod decls;

pub use category::{Category, FieldKind};
pub use decls::{EnumConstantDecl, IntWidth, StructDecl, StructFieldDecl, TypeAliasDecl};
