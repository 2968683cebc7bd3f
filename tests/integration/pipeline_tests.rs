//! Integration tests for the three paste-and-emit pipelines

use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

use d3d12_wrapgen::config::Config;
use d3d12_wrapgen::pipeline::Pipeline;
use d3d12_wrapgen::registry::TypeRegistry;

/// Read fixture file content
fn read_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(path).expect("Failed to read fixture")
}

/// Registry built from the seed fixtures, the way struct mode builds it
/// from the target crate's wrapper sources
fn seeded_registry() -> TypeRegistry {
    TypeRegistry::build(
        &read_fixture("seed_struct_wrappers.rs"),
        &read_fixture("seed_enum_wrappers.rs"),
    )
}

#[test]
fn test_flags_end_to_end() {
    let pipeline = Pipeline::new(false);
    let source = pipeline
        .run_flags(
            &read_fixture("resource_flags.rs"),
            "D3D12_RESOURCE_FLAGS_D3D12_RESOURCE_FLAG_",
        )
        .expect("flags pipeline should succeed");

    assert!(source.starts_with("bitflags! {"));
    assert!(source.contains("pub struct ResourceFlags: i32 {"));
    assert!(source
        .contains("const None = D3D12_RESOURCE_FLAGS_D3D12_RESOURCE_FLAG_NONE;"));
    assert!(source.contains(
        "const AllowRenderTarget = D3D12_RESOURCE_FLAGS_D3D12_RESOURCE_FLAG_ALLOW_RENDER_TARGET;"
    ));
    assert!(source.contains(
        "const AllowUnorderedAccess = D3D12_RESOURCE_FLAGS_D3D12_RESOURCE_FLAG_ALLOW_UNORDERED_ACCESS;"
    ));
}

#[test]
fn test_enum_end_to_end_variant_order() {
    let pipeline = Pipeline::new(false);
    let source = pipeline
        .run_enum(&read_fixture("dxgi_format.rs"), "DXGI_FORMAT_DXGI_FORMAT_")
        .expect("enum pipeline should succeed");

    assert!(source.contains("#[repr(i32)]"));
    assert!(source.contains("pub enum Format {"));

    let unknown = source.find("Unknown = ").expect("Unknown variant");
    let typeless = source
        .find("R32G32B32A32Typeless = ")
        .expect("typeless variant");
    let unorm = source.find("R8G8B8A8Unorm = ").expect("unorm variant");
    assert!(unknown < typeless && typeless < unorm);
}

#[test]
fn test_struct_end_to_end_simple_fields() {
    let pipeline = Pipeline::new(false);
    let registry = TypeRegistry::build("", "");

    let paste = "pub struct D3D12_BOX_DIMS {\n    pub Width: UINT,\n    pub Height: UINT,\n}";
    let source = pipeline.run_struct(paste, &registry).unwrap();

    assert!(source.contains("pub struct BoxDims(pub D3D12_BOX_DIMS);"));

    for method in [
        "pub fn set_width(&mut self, width: u32) {",
        "pub fn with_width(mut self, width: u32) -> Self {",
        "pub fn width(&self) -> u32 {",
        "pub fn set_height(&mut self, height: u32) {",
        "pub fn with_height(mut self, height: u32) -> Self {",
        "pub fn height(&self) -> u32 {",
    ] {
        assert!(source.contains(method), "missing: {}", method);
    }

    let width = source.find("set_width").unwrap();
    let height = source.find("set_height").unwrap();
    assert!(width < height, "fields must keep declaration order");
}

#[test]
fn test_struct_end_to_end_registry_dispatch() {
    let pipeline = Pipeline::new(false);
    let registry = seeded_registry();

    let source = pipeline
        .run_struct(&read_fixture("descriptor_range.rs"), &registry)
        .expect("struct pipeline should succeed");

    // enum-classified field narrows on store and transmutes on load
    assert!(source.contains("pub fn set_range_type(&mut self, range_type: DescriptorRangeType) {"));
    assert!(source.contains("self.0.RangeType = range_type as i32;"));
    assert!(source.contains("unsafe { std::mem::transmute(self.0.RangeType) }"));

    // UINT fields pass through as u32
    assert!(source.contains("pub fn num_descriptors(&self) -> u32 {"));
    assert!(source.contains("pub fn base_shader_register(&self) -> u32 {"));
}

#[test]
fn test_struct_end_to_end_nested_wrapper_and_flags() {
    let pipeline = Pipeline::new(false);
    let registry = seeded_registry();

    let paste = "pub struct D3D12_RESOURCE_DESC {\n\
                 pub SampleDesc: DXGI_SAMPLE_DESC,\n\
                 pub Flags: D3D12_RESOURCE_FLAGS,\n\
                 pub Visible: BOOL,\n\
                 }";
    let source = pipeline.run_struct(paste, &registry).unwrap();

    // nested wrapper unwraps on store, rewraps on load
    assert!(source.contains("self.0.SampleDesc = sample_desc.0;"));
    assert!(source.contains("SampleDesc(self.0.SampleDesc)"));

    // flags convert through the bit pattern
    assert!(source.contains("self.0.Flags = flags.bits();"));
    assert!(source.contains("unsafe { ResourceFlags::from_bits_unchecked(self.0.Flags) }"));

    // BOOL encodes to integer and decodes with a comparison
    assert!(source.contains("self.0.Visible = visible as i32;"));
    assert!(source.contains("self.0.Visible != 0"));
}

#[test]
fn test_struct_mode_with_seed_files_on_disk() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(
        src.join("struct_wrappers.rs"),
        read_fixture("seed_struct_wrappers.rs"),
    )
    .unwrap();
    fs::write(
        src.join("enum_wrappers.rs"),
        read_fixture("seed_enum_wrappers.rs"),
    )
    .unwrap();

    let mut config = Config::default_config();
    config.seed.source_dir = src;

    let registry = TypeRegistry::from_seed_files(&config).unwrap();
    assert_eq!(registry.len(), 4);

    let pipeline = Pipeline::new(false);
    let source = pipeline
        .run_struct(
            "pub struct D3D12_THING { pub Viewport: D3D12_VIEWPORT, }",
            &registry,
        )
        .unwrap();

    assert!(source.contains("Viewport(self.0.Viewport)"));
}

#[test]
fn test_struct_mode_missing_seed_files_is_fatal() {
    let dir = tempdir().unwrap();
    let mut config = Config::default_config();
    config.seed.source_dir = dir.path().join("missing");

    assert!(TypeRegistry::from_seed_files(&config).is_err());
}
