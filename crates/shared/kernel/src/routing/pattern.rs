use atlas_domain::constants::WILDCARD;

/// Segment-wise match of a request path against a binding pattern.
///
/// Empty segments are ignored, so `/404` and `/404/` are the same path.
/// `:name` matches exactly one segment; `*` matches the remainder, including nothing.
pub(crate) fn matches(pattern: &str, path: &str) -> bool {
    let mut remaining = segments(path);

    for expected in segments(pattern) {
        if expected == WILDCARD {
            return true;
        }
        match remaining.next() {
            Some(actual) if expected.starts_with(':') || expected == actual => {}
            _ => return false,
        }
    }

    remaining.next().is_none()
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}
