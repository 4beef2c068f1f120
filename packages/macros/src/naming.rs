//! Field name to Rust method name conversion.

/// Converts a camelCase or kebab-case field name to snake_case.
///
/// Acronyms stay together: `parseURLPath` -> `parse_url_path`.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut result = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == ' ' {
            result.push('_');
            continue;
        }
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !result.ends_with('_') {
                result.push('_');
            }
        }
        result.extend(c.to_lowercase());
    }
    result
}

/// Whether `name` can follow `with_` in a Rust identifier.
///
/// Defers to the Rust lexer, so only XID_Continue characters pass.
pub fn is_identifier_tail(name: &str) -> bool {
    !name.is_empty() && syn::parse_str::<syn::Ident>(&format!("with_{name}")).is_ok()
}
