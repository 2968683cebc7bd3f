//! The three paste-and-emit orchestrators.
//!
//! Each takes already-materialized input text and returns the generated
//! wrapper source; console interaction lives in the binary. Detection
//! diagnostics go to stdout when verbose.

use anyhow::{Context, Result};

use crate::generator::{enum_gen::generate_enum, flags_gen::generate_flags, struct_gen::generate_struct};
use crate::models::{EnumConstantDecl, TypeAliasDecl};
use crate::names::{variant_name, wrapper_type_name};
use crate::normalizer::{statement_lines, struct_lines};
use crate::parser::{find_type_alias, parse_struct_block, ConstantMatcher};
use crate::registry::TypeRegistry;

pub struct Pipeline {
    verbose: bool,
}

impl Pipeline {
    pub fn new(verbose: bool) -> Self {
        Pipeline { verbose }
    }

    /// Flags mode: alias + prefixed constants -> `bitflags!` container.
    pub fn run_flags(&self, input: &str, prefix: &str) -> Result<String> {
        let (alias, name, constants) = self.detect_enum_like(input, prefix)?;
        Ok(generate_flags(&name, alias.width, prefix, &constants))
    }

    /// Enum mode: alias + prefixed constants -> `#[repr(iN)]` enum.
    pub fn run_enum(&self, input: &str, prefix: &str) -> Result<String> {
        let (alias, name, constants) = self.detect_enum_like(input, prefix)?;
        Ok(generate_enum(&name, alias.width, prefix, &constants))
    }

    /// Struct mode: header + fields -> newtype wrapper with accessor trios.
    /// The registry must be fully built before this is called.
    pub fn run_struct(&self, input: &str, registry: &TypeRegistry) -> Result<String> {
        let lines = struct_lines(input);
        let decl = parse_struct_block(&lines)?;

        if self.verbose {
            println!(
                "Detected struct name: raw '{}', formatted '{}', {} field(s)",
                decl.raw_name,
                wrapper_type_name(&decl.raw_name),
                decl.fields.len(),
            );
        }

        Ok(generate_struct(&decl, registry))
    }

    /// Shared front half of the flags and enum modes: find the type alias
    /// (fatal if absent), then collect the prefixed constants in order.
    fn detect_enum_like(
        &self,
        input: &str,
        prefix: &str,
    ) -> Result<(TypeAliasDecl, String, Vec<EnumConstantDecl>)> {
        let lines = statement_lines(input);

        let alias = find_type_alias(&lines)
            .context("no integer type alias found in pasted block")?;
        let name = wrapper_type_name(&alias.raw_name);

        if self.verbose {
            println!(
                "Detected enum name: raw '{}', formatted '{}', type '{}'",
                alias.raw_name,
                name,
                alias.width.rust_type(),
            );
        }

        let matcher = ConstantMatcher::new(&alias.raw_name, prefix);
        let constants = matcher.collect(&lines);

        if self.verbose {
            for constant in &constants {
                println!(
                    "Found variant name: raw '{}', formatted '{}'",
                    constant.variant,
                    variant_name(&constant.variant, &name),
                );
            }
        }

        Ok((alias, name, constants))
    }
}
