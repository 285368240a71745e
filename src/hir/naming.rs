//! Attribute ↔ property name mapping and binding expression roots.
//!
//! Markup spells properties in dash-case (`local-property`), scripts in
//! camelCase (`localProperty`). The conversions here are total: every input
//! maps to exactly one output.
//!
//! Edge cases:
//! - consecutive capitals are split letter by letter (`URLValue` ↔ `-u-r-l-value`)
//! - a leading underscore is kept as-is (`_privateProp` ↔ `_private-prop`)
//! - a `-` not followed by a lowercase ASCII letter is kept (`a--b` → `a-B`)

/// Convert a camelCase property name to its dash-case attribute name.
pub fn camel_to_dash(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert a dash-case attribute name to its camelCase property name.
pub fn dash_to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&next) if c == '-' && next.is_ascii_lowercase() => {
                out.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => out.push(c),
        }
    }
    out
}

/// Check whether an attribute as written in markup names `property`.
///
/// A trailing `$` (attribute-binding form, `hidden$="..."`) is ignored and
/// the comparison is ASCII case-insensitive, as HTML attribute names are.
pub fn attribute_matches_property(attribute: &str, property: &str) -> bool {
    let attribute = attribute.strip_suffix('$').unwrap_or(attribute);
    attribute.eq_ignore_ascii_case(&camel_to_dash(property))
}

/// The property a binding expression reads from: its leading identifier.
///
/// `foo` → `foo`, `!foo` → `foo`, `item.name` → `item`, `compute(a)` → `compute`.
/// Returns `None` when the expression does not start with an identifier.
pub fn binding_root(expression: &str) -> Option<&str> {
    let trimmed = expression.trim_start().trim_start_matches('!').trim_start();
    let mut chars = trimmed.char_indices();
    let (_, first) = chars.next()?;
    if !is_ident_start(first) {
        return None;
    }
    let end = chars
        .find(|&(_, c)| !is_ident_continue(c))
        .map_or(trimmed.len(), |(i, _)| i);
    Some(&trimmed[..end])
}

#[inline]
fn is_ident_start(c: char) -> bool {
    c == '$' || c == '_' || unicode_ident::is_xid_start(c)
}

#[inline]
fn is_ident_continue(c: char) -> bool {
    c == '$' || unicode_ident::is_xid_continue(c)
}
