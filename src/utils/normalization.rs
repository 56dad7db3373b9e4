//! Query Normalization Utilities
//!
//! Both catalog searches normalize the query the same way: trim surrounding
//! whitespace, then ASCII lower-case. Field text is lower-cased the same way
//! before the containment check, so matching is case-insensitive.

/// Trim and ASCII-lowercase a search query
pub fn normalize_query(query: &str) -> String {
    query.trim().to_ascii_lowercase()
}

/// Does `field` contain an already-normalized `needle`, ignoring ASCII case?
///
/// An empty needle is contained in every field.
pub fn contains_normalized(field: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    field.to_ascii_lowercase().contains(needle)
}

/// Existential match: at least one entry contains the needle.
///
/// False for an empty sequence, even when the needle is empty.
pub fn any_contains_normalized<S: AsRef<str>>(fields: &[S], needle: &str) -> bool {
    fields
        .iter()
        .any(|field| contains_normalized(field.as_ref(), needle))
}
