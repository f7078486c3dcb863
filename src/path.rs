/// Splits a route into the segments stored in the tree.
///
/// Empty segments are discarded, so `/p/:name/`, `/p/:name` and `//p//:name`
/// all produce `["p", ":name"]`. A catch-all must be the final segment; anything
/// after the first `*name` segment is ignored.
///
/// ```rust
/// use pathtrie::parse_pattern;
///
/// assert_eq!(parse_pattern("//p//:name/"), ["p", ":name"]);
/// assert_eq!(parse_pattern("/static/*filepath/ignored"), ["static", "*filepath"]);
/// assert!(parse_pattern("/").is_empty());
/// ```
pub fn parse_pattern(pattern: &str) -> Vec<&str> {
    let mut parts = Vec::new();

    for part in pattern.split('/').filter(|part| !part.is_empty()) {
        parts.push(part);
        if part.starts_with('*') {
            break;
        }
    }

    parts
}

/// Splits a request path into segments, discarding empty ones.
///
/// Unlike [`parse_pattern`], a segment starting with `*` has no special meaning.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|part| !part.is_empty()).collect()
}

/// Resolves `.` and `..` segments.
///
/// `.` is dropped and `..` removes the segment before it. A `..` at the root is
/// dropped, so a path can never climb above `/`.
///
/// ```rust
/// use pathtrie::clean_segments;
///
/// assert_eq!(clean_segments(vec!["a", ".", "b", "..", "c"]), ["a", "c"]);
/// assert_eq!(clean_segments(vec!["..", "..", "abc"]), ["abc"]);
/// ```
pub fn clean_segments(segments: Vec<&str>) -> Vec<&str> {
    let mut cleaned = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            "." => {}
            ".." => {
                cleaned.pop();
            }
            _ => cleaned.push(segment),
        }
    }

    cleaned
}
