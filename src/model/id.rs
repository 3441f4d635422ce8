//! Identifier helpers.

/// URL prefix shared by ontology identifiers. Stripped for display and labels.
pub const ID_PREFIX: &str = "http://www.purl.org/";

/// The identifier without [`ID_PREFIX`] (e.g. `"ogit/Node"`).
///
/// Identifiers that don't carry the prefix are returned unchanged.
pub fn display_name(id: &str) -> &str {
    id.strip_prefix(ID_PREFIX).unwrap_or(id)
}

/// Namespace of an identifier: the first path segment of its display name.
///
/// `"http://www.purl.org/ogit/Auth/Account"` → `"ogit"`.
pub fn namespace_of(id: &str) -> &str {
    let name = display_name(id);
    name.split('/').next().unwrap_or(name)
}
