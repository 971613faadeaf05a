//! Shader Tests - WGSL Validation
//!
//! Parses and validates the sky shader with naga so a malformed WGSL file
//! fails in CI instead of at pipeline creation inside a running demo.

const SKY_DOME_WGSL: &str = include_str!("../../shaders/sky_dome.wgsl");

fn validate(source: &str, name: &str) -> naga::valid::ModuleInfo {
    let module = naga::front::wgsl::parse_str(source)
        .unwrap_or_else(|err| panic!("{} failed to parse: {}", name, err.emit_to_string(source)));

    naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::default(),
    )
    .validate(&module)
    .unwrap_or_else(|err| panic!("{} failed validation: {:?}", name, err))
}

#[test]
fn test_sky_dome_shader_is_valid_wgsl() {
    validate(SKY_DOME_WGSL, "sky_dome.wgsl");
}

#[test]
fn test_sky_dome_shader_has_expected_entry_points() {
    let module = naga::front::wgsl::parse_str(SKY_DOME_WGSL).unwrap();
    let names: Vec<_> = module.entry_points.iter().map(|ep| ep.name.as_str()).collect();
    assert!(names.contains(&"vs_main"), "missing vertex entry point");
    assert!(names.contains(&"fs_main"), "missing fragment entry point");
}

#[test]
fn test_sky_dome_uniform_struct_matches_rust_size() {
    // The Rust-side mirror is asserted to 176 bytes at compile time; the
    // WGSL struct must agree or the bind group will read garbage.
    let module = naga::front::wgsl::parse_str(SKY_DOME_WGSL).unwrap();

    let mut found = false;
    for (_, ty) in module.types.iter() {
        if ty.name.as_deref() == Some("SkyUniforms") {
            if let naga::TypeInner::Struct { span, .. } = &ty.inner {
                assert_eq!(*span, 176, "SkyUniforms WGSL size drifted from the Rust layout");
                found = true;
            }
        }
    }
    assert!(found, "SkyUniforms struct not found in shader");
}
