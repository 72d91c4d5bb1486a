//! Client-side routes.

use std::fmt;

use crate::model::PostId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// `/`
    #[default]
    List,
    /// `/post/{id}`
    Detail(PostId),
}

impl Route {
    /// Parse a path. Anything other than `/` or `/post/{id}` is rejected.
    pub fn parse(path: &str) -> Option<Self> {
        if path == "/" {
            return Some(Route::List);
        }
        let id = path.strip_prefix("/post/")?;
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        id.parse().ok().map(Route::Detail)
    }

    pub fn path(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::List => write!(f, "/"),
            Route::Detail(id) => write!(f, "/post/{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_routes() {
        assert_eq!(Route::parse("/"), Some(Route::List));
        assert_eq!(Route::parse("/post/42"), Some(Route::Detail(42)));
    }

    #[test]
    fn rejects_unknown_paths() {
        assert_eq!(Route::parse(""), None);
        assert_eq!(Route::parse("/posts"), None);
        assert_eq!(Route::parse("/post/"), None);
        assert_eq!(Route::parse("/post/-1"), None);
        assert_eq!(Route::parse("/post/1/comments"), None);
        assert_eq!(Route::parse("/post/1?x=2"), None);
    }

    #[test]
    fn display_matches_parse() {
        let route = Route::Detail(7);
        assert_eq!(route.path(), "/post/7");
        assert_eq!(Route::parse(&route.path()), Some(route));
    }
}
