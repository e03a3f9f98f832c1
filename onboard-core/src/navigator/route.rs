/// Path of a route with query string, fragment and trailing slashes removed.
fn normalize(route: &str) -> &str {
    let end = route.find(['?', '#']).unwrap_or(route.len());
    route[..end].trim_end_matches('/')
}

/// Final non-empty path segment, e.g. `experiences` for `/onboarding/experiences/`.
pub(crate) fn last_segment(route: &str) -> Option<&str> {
    normalize(route).rsplit('/').find(|s| !s.is_empty())
}

pub(crate) fn same_route(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_segment_ignores_query_and_trailing_slash() {
        assert_eq!(last_segment("/onboarding/agency/?from=home"), Some("agency"));
        assert_eq!(last_segment("/onboarding/agency#top"), Some("agency"));
        assert_eq!(last_segment("agency"), Some("agency"));
        assert_eq!(last_segment("/"), None);
        assert_eq!(last_segment(""), None);
    }

    #[test]
    fn same_route_compares_paths_only() {
        assert!(same_route("/a/b/", "/a/b?x=1"));
        assert!(!same_route("/a/b", "/b"));
    }
}
