//! Path-key formatting primitives for dot/bracket-addressed paths.

/// Appends an object key to a path: `user` + `name` gives `user.name`, and a
/// key at the root stays bare (`name`, no leading dot).
///
/// # Example
///
/// ```
/// use json_shape_diff::append_key;
///
/// assert_eq!(append_key("", "user"), "user");
/// assert_eq!(append_key("user", "name"), "user.name");
/// ```
pub fn append_key(base: &str, key: &str) -> String {
    if base.is_empty() {
        key.to_string()
    } else {
        format!("{base}.{key}")
    }
}

/// Appends an array index: `tags` + `2` gives `tags[2]`. No separator before
/// the bracket, also at the root (`[0]`).
///
/// # Example
///
/// ```
/// use json_shape_diff::append_index;
///
/// assert_eq!(append_index("tags", 2), "tags[2]");
/// assert_eq!(append_index("", 0), "[0]");
/// ```
pub fn append_index(base: &str, index: usize) -> String {
    format!("{base}[{index}]")
}
