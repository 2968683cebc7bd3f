//! # d3d12-wrapgen
//!
//! A CLI tool and library for generating idiomatic Rust wrappers from raw
//! bindgen-emitted D3D12/DXGI declarations.
//!
//! You paste a declaration block from `bindings.rs` and the tool emits:
//! - **Newtype struct wrappers** with getter / setter / fluent-`with` accessor trios.
//! - **`#[repr(iN)]` enums** with variants stripped of their vendor prefix.
//! - **`bitflags!` containers** for bit-flag typedefs.
//!
//! Accessor generation is driven by a type registry built from the wrapper
//! sources already present in the target crate, so a field whose raw type has
//! a known wrapper gets an unwrap/rewrap accessor instead of a raw passthrough.
//!
//! ## Usage
//!
//! Although primarily used as a CLI tool, the pipeline is usable as a library:
//!
//! ```rust
//! use d3d12_wrapgen::pipeline::Pipeline;
//! use d3d12_wrapgen::registry::TypeRegistry;
//!
//! fn main() -> anyhow::Result<()> {
//!     let registry = TypeRegistry::build("", "");
//!     let pipeline = Pipeline::new(false);
//!     let source = pipeline.run_struct(
//!         "pub struct D3D12_VIEWPORT { pub Width: FLOAT, pub Height: FLOAT, }",
//!         &registry,
//!     )?;
//!     println!("{}", source);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod console;
pub mod generator;
pub mod models;
pub mod names;
pub mod normalizer;
pub mod parser;
pub mod pipeline;
pub mod registry;
