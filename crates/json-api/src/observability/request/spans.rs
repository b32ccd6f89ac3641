//! Route label helpers.

/// Routes the app serves, with numeric ids collapsed to `{id}`.
const ROUTES: [&str; 7] = [
    "/",
    "/healthcheck",
    "/metrics",
    "/categories",
    "/categories/{id}",
    "/products",
    "/products/{id}",
];

/// Label for paths outside [`ROUTES`].
pub(super) const UNMATCHED: &str = "unmatched";

/// Maps a request path to a bounded metric label.
///
/// Numeric segments collapse to `{id}`. Any path that does not name a served
/// route shares the [`UNMATCHED`] label.
pub(super) fn route_for_path(path: &str) -> &'static str {
    let trimmed = path.trim_end_matches('/');

    let mut route = String::new();

    for segment in trimmed.split('/').skip(1) {
        route.push('/');

        if !segment.is_empty() && segment.bytes().all(|byte| byte.is_ascii_digit()) {
            route.push_str("{id}");
        } else {
            route.push_str(segment);
        }
    }

    if route.is_empty() {
        route.push('/');
    }

    ROUTES
        .into_iter()
        .find(|known| *known == route)
        .unwrap_or(UNMATCHED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_segments_become_placeholders() {
        assert_eq!(route_for_path("/products/42"), "/products/{id}");
        assert_eq!(route_for_path("/categories/7/"), "/categories/{id}");
    }

    #[test]
    fn test_collection_paths_are_unchanged() {
        assert_eq!(route_for_path("/categories"), "/categories");
        assert_eq!(route_for_path("/"), "/");
    }

    #[test]
    fn test_unknown_paths_share_one_label() {
        for path in [
            "/wp-admin",
            "/categories/books",
            "/products/1/reviews",
            "/a1b2c3d4",
            "/9999",
        ] {
            assert_eq!(route_for_path(path), UNMATCHED, "{path} should not get its own label");
        }
    }
}
