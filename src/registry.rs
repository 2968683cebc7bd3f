//! Type registry - maps wrapper type names to their semantic category.
//!
//! Built once per run by scanning the wrapper sources already generated into
//! the target crate, then read-only. Struct-field classification looks
//! wrapper names up here to pick an accessor generation strategy; a name
//! that is absent is treated as a built-in/primitive type, not an error.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;

use crate::config::Config;
use crate::models::Category;
use crate::parser::cursor::Cursor;

#[derive(Debug)]
pub struct TypeRegistry {
    types: HashMap<String, Category>,
}

impl TypeRegistry {
    /// Build the registry from the two collaborator source texts.
    ///
    /// `struct_src` is scanned for newtype declarations
    /// (`pub struct Name(pub RAW);`), `enum_src` for plain enums
    /// (`pub enum Name {`) and bitflags containers
    /// (`pub struct Name: u32 {` inside a `bitflags!` block).
    ///
    /// No conflict policy: a name matched twice silently takes the
    /// last-assigned category. If both sources can declare the same name this
    /// is a correctness risk.
    pub fn build(struct_src: &str, enum_src: &str) -> Self {
        let mut types = HashMap::new();

        for line in struct_src.lines() {
            if let Some(name) = match_struct_wrapper(line) {
                types.insert(name, Category::Struct);
            }
        }

        for line in enum_src.lines() {
            if let Some(name) = match_enum_wrapper(line) {
                types.insert(name, Category::Enum);
            } else if let Some(name) = match_flags_wrapper(line) {
                types.insert(name, Category::BitFlags);
            }
        }

        TypeRegistry { types }
    }

    /// Build the registry from the seed files named by the config.
    /// Missing files are a fatal error.
    pub fn from_seed_files(config: &Config) -> Result<Self> {
        let struct_path = config.struct_wrappers_path();
        let struct_src = fs::read_to_string(&struct_path)
            .with_context(|| format!("Failed to read seed file: {}", struct_path.display()))?;

        let enum_path = config.enum_wrappers_path();
        let enum_src = fs::read_to_string(&enum_path)
            .with_context(|| format!("Failed to read seed file: {}", enum_path.display()))?;

        Ok(Self::build(&struct_src, &enum_src))
    }

    /// Look a wrapper name up. `None` means primitive/built-in.
    pub fn classify(&self, name: &str) -> Option<Category> {
        self.types.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// `pub struct Name(pub RAW);` - newtype wrapper over a raw struct
fn match_struct_wrapper(line: &str) -> Option<String> {
    let (name, mut cur) = match_pub_struct(line)?;
    if !cur.eat_char('(') {
        return None;
    }
    Some(name)
}

/// `pub enum Name {` - plain enum wrapper
fn match_enum_wrapper(line: &str) -> Option<String> {
    let mut cur = Cursor::new(line);
    cur.skip_ws();
    if !cur.eat_keyword("pub") {
        return None;
    }
    cur.skip_ws();
    if !cur.eat_keyword("enum") {
        return None;
    }
    cur.skip_ws();
    let name = cur.eat_ident()?;
    cur.skip_ws();
    if !cur.eat_char('{') {
        return None;
    }
    Some(name.to_string())
}

/// `pub struct Name: u32 {` - bitflags container body line
fn match_flags_wrapper(line: &str) -> Option<String> {
    let (name, mut cur) = match_pub_struct(line)?;
    if !cur.eat_char(':') {
        return None;
    }
    Some(name)
}

fn match_pub_struct(line: &str) -> Option<(String, Cursor<'_>)> {
    let mut cur = Cursor::new(line);
    cur.skip_ws();
    if !cur.eat_keyword("pub") {
        return None;
    }
    cur.skip_ws();
    if !cur.eat_keyword("struct") {
        return None;
    }
    cur.skip_ws();
    let name = cur.eat_ident()?;
    cur.skip_ws();
    Some((name.to_string(), cur))
}
