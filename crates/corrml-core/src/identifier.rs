//! Item identifier resolution.
//!
//! Blocks in one translation often differ in granularity: one block may tag
//! whole phrases while another tags single words. Bare numeric ids inherit
//! the scope prefix of their enclosing line so that correlation across blocks
//! defaults sensibly, while an explicit letter prefix lets an item point into
//! a different line's scope.

/// Returns `true` if `raw_id` starts with an uppercase scope letter.
///
/// # Examples
///
/// ```
/// use corrml_core::identifier::is_prefixed;
///
/// assert!(is_prefixed("B3"));
/// assert!(!is_prefixed("3"));
/// ```
pub fn is_prefixed(raw_id: &str) -> bool {
    raw_id
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_uppercase())
}

/// Resolves raw item ids against the scope prefix of the enclosing line.
///
/// Bare ids get `scope_prefix` prepended when it is non-empty; prefixed ids
/// are kept as written. The resolved ids are joined with commas in their
/// original order.
///
/// # Arguments
///
/// * `scope_prefix` - The enclosing line's id, possibly empty.
/// * `raw_ids` - The comma-separated ids of one item, already split.
///
/// # Examples
///
/// ```
/// use corrml_core::identifier::resolve;
///
/// assert_eq!(resolve("A", &["1", "B3", "2"]), "A1,B3,A2");
/// assert_eq!(resolve("A", &["B2"]), "B2");
/// assert_eq!(resolve("", &["1", "2"]), "1,2");
/// ```
pub fn resolve<S: AsRef<str>>(scope_prefix: &str, raw_ids: &[S]) -> String {
    raw_ids
        .iter()
        .map(|raw_id| {
            let raw_id = raw_id.as_ref();
            if scope_prefix.is_empty() || is_prefixed(raw_id) {
                raw_id.to_string()
            } else {
                format!("{scope_prefix}{raw_id}")
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}
