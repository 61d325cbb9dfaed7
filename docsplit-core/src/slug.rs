/// Turn a heading title into the identifier used by `](#...)` links.
///
/// Alphanumeric characters (any script), spaces and hyphens survive; everything
/// else is dropped. Lowercasing happens before the filter, since some capitals
/// lowercase into a letter plus a combining mark. Each space becomes a hyphen.
/// Runs of spaces are not collapsed, so `"a  b"` becomes `"a--b"`.
pub fn slugify(title: &str) -> String {
    title
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '-')
        .map(|c| if c == ' ' { '-' } else { c })
        .collect()
}
