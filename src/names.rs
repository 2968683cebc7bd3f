//! Name transformation - converts vendor-style SCREAMING_SNAKE identifiers
//! into idiomatic PascalCase/snake_case names.
//!
//! `wrapper_type_name` is the canonical derivation: every wrapper type name
//! used anywhere (registry keys, generated type names) must come from it.

/// Vendor prefixes stripped from raw names, most specific first.
/// At most one prefix is removed.
const VENDOR_PREFIXES: &[&str] = &["D3D12_", "DXGI_", "D3D_"];

/// Convert SCREAMING_SNAKE (or snake_case) to PascalCase.
///
/// An all-caps segment is capitalized at its start and after every digit,
/// the rest is lowercased: `R8G8B8A8_UNORM` -> `R8G8B8A8Unorm`. A segment
/// that already contains lowercase letters only gets its first letter
/// capitalized, so an already-idiomatic name passes through unchanged.
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for segment in s.split('_') {
        if segment.chars().any(|c| c.is_ascii_lowercase()) {
            let mut chars = segment.chars();
            if let Some(first) = chars.next() {
                result.push(first.to_ascii_uppercase());
                result.extend(chars);
            }
            continue;
        }

        let mut capitalize_next = true;
        for c in segment.chars() {
            if c.is_ascii_alphabetic() {
                if capitalize_next {
                    result.push(c.to_ascii_uppercase());
                    capitalize_next = false;
                } else {
                    result.push(c.to_ascii_lowercase());
                }
            } else {
                result.push(c);
                capitalize_next = true;
            }
        }
    }

    result
}

/// Convert PascalCase to snake_case.
///
/// An underscore is inserted before every uppercase letter that is not at
/// position 0, then the whole string is lowercased. Acronym runs produce
/// single-letter segments (`GPUMask` -> `g_p_u_mask`); this quirk is accepted
/// and matches the wrapper sources already generated this way.
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);

    for (i, c) in s.chars().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            result.push('_');
        }
        result.push(c.to_ascii_lowercase());
    }

    result
}

/// Remove a leading vendor prefix, if present. At most one is stripped.
pub fn strip_vendor_prefix(name: &str) -> &str {
    for prefix in VENDOR_PREFIXES {
        if let Some(rest) = name.strip_prefix(prefix) {
            return rest;
        }
    }
    name
}

/// Remove a trailing run of decimal digits, if present.
///
/// Raw declarations carry version suffixes (`D3D12_RESOURCE_DESC1`) that the
/// wrapper names drop. Distinct raw names may collapse to the same idiomatic
/// name after stripping; collisions are not detected.
pub fn strip_version_suffix(name: &str) -> &str {
    name.trim_end_matches(|c: char| c.is_ascii_digit())
}

/// The canonical wrapper-type-name derivation.
pub fn wrapper_type_name(raw_name: &str) -> String {
    let pascal = to_pascal_case(strip_vendor_prefix(raw_name));
    strip_version_suffix(&pascal).to_string()
}

/// Derive an enum variant name from a raw constant name.
///
/// A variant whose derived name would start with a digit (illegal as an
/// identifier start) is prefixed with the first character of the enclosing
/// enum's idiomatic name: `12_0` in `FeatureLevel` becomes `F120`.
pub fn variant_name(raw_variant: &str, enum_name: &str) -> String {
    let name = to_pascal_case(raw_variant);
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        match enum_name.chars().next() {
            Some(initial) => format!("{}{}", initial, name),
            None => name,
        }
    } else {
        name
    }
}
