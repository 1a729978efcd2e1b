//! Helpers for qualified type names of the form `a.b.C`.

/// The package portion of a qualified name. Names without a package yield
/// the empty string, which is its own package.
pub fn package_of(qualified: &str) -> &str {
    qualified.rsplit_once('.').map(|(p, _)| p).unwrap_or("")
}

/// The final segment of a qualified name.
pub fn simple_name_of(qualified: &str) -> &str {
    qualified.rsplit_once('.').map(|(_, s)| s).unwrap_or(qualified)
}

/// Uppercases the first letter, as accessor method names require
/// (`age` becomes `Age`, giving `setAge`).
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
