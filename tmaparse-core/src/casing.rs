//! camelCase <-> snake_case conversion for field names

/// Convert a camelCase identifier to snake_case.
///
/// Every ASCII uppercase letter `X` becomes `_x`; all other characters are
/// copied as-is. `firstName` becomes `first_name`, `tgWebAppData` becomes
/// `tg_web_app_data`.
pub fn camel_to_snake(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 4);
    for c in value.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert a snake_case identifier to camelCase.
///
/// Every `_` followed by an ASCII lowercase letter collapses into the
/// uppercase letter. Other underscores are kept (`a_1` stays `a_1`).
pub fn snake_to_camel(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('_', Some(next)) if next.is_ascii_lowercase() => {
                out.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => out.push(c),
        }
    }
    out
}
