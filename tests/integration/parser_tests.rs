//! Integration tests for normalizing and matching pasted declaration blocks

use std::path::PathBuf;

use d3d12_wrapgen::normalizer::{statement_lines, struct_lines};
use d3d12_wrapgen::parser::{find_type_alias, parse_struct_block, ConstantMatcher};

/// Read fixture file content
fn read_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(path).expect("Failed to read fixture")
}

#[test]
fn test_alias_found_across_wrapped_lines() {
    let content = read_fixture("resource_flags.rs");
    let lines = statement_lines(&content);

    let alias = find_type_alias(&lines).expect("alias should be found");
    assert_eq!(alias.raw_name, "D3D12_RESOURCE_FLAGS");
    assert_eq!(alias.width.rust_type(), "i32");
}

#[test]
fn test_constants_collected_in_order_despite_wrapping() {
    let content = read_fixture("resource_flags.rs");
    let lines = statement_lines(&content);

    let matcher = ConstantMatcher::new(
        "D3D12_RESOURCE_FLAGS",
        "D3D12_RESOURCE_FLAGS_D3D12_RESOURCE_FLAG_",
    );
    let variants: Vec<_> = matcher
        .collect(&lines)
        .into_iter()
        .map(|c| c.variant)
        .collect();

    assert_eq!(
        variants,
        vec![
            "NONE",
            "ALLOW_RENDER_TARGET",
            "ALLOW_DEPTH_STENCIL",
            "ALLOW_UNORDERED_ACCESS",
        ]
    );
}

#[test]
fn test_struct_block_parsed_from_fixture() {
    let content = read_fixture("descriptor_range.rs");
    let lines = struct_lines(&content);

    let decl = parse_struct_block(&lines).expect("struct should parse");
    assert_eq!(decl.raw_name, "D3D12_DESCRIPTOR_RANGE");
    assert_eq!(decl.fields.len(), 5);
    assert_eq!(decl.fields[0].raw_name, "RangeType");
    assert_eq!(decl.fields[0].raw_type, "D3D12_DESCRIPTOR_RANGE_TYPE");
    assert_eq!(decl.fields[4].raw_name, "OffsetInDescriptorsFromTableStart");
}

#[test]
fn test_struct_block_tolerates_single_line_paste() {
    // the whole declaration on one line parses the same way
    let content = read_fixture("descriptor_range.rs").replace('\n', " ");
    let lines = struct_lines(&content);

    let decl = parse_struct_block(&lines).expect("struct should parse");
    assert_eq!(decl.fields.len(), 5);
}
