//! Name normalization helpers.
//!
//! Component names are kebab-case everywhere in the registry; titles and
//! import identifiers are derived from them.

/// Convert a file stem or identifier to kebab-case.
///
/// `useControllableState`, `use_controllable_state` and
/// `use-controllable-state` all become `use-controllable-state`.
pub fn kebab_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;

    for c in s.chars() {
        if c == '_' || c == ' ' || c == '-' {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            prev_lower = false;
        } else if c.is_ascii_uppercase() {
            if prev_lower && !out.ends_with('-') {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
            prev_lower = false;
        } else {
            out.push(c);
            prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        }
    }

    out.trim_end_matches('-').to_string()
}

/// Convert a kebab-case name to PascalCase (`card-input` -> `CardInput`).
pub fn pascal_case(s: &str) -> String {
    s.split(['-', '_', ' '])
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect()
}

/// Convert a kebab-case name to a human title (`card-input` -> `Card Input`).
pub fn title_case(s: &str) -> String {
    s.split(['-', '_', ' '])
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
