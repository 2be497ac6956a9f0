use crate::locale::Language;
use crate::locale::routing::localize;

/// A page of the front-end, independent of its locale prefix
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    SearchResults {
        query: String,
    },
    TermDetail {
        id: String,
    },
    Login,
    NotFound {
        path: String,
    },
}

impl Route {
    /// Path without the locale prefix
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::SearchResults { query } => {
                format!("/terms?q={}", urlencoding::encode(query))
            }
            Route::TermDetail { id } => format!("/terms/{}", urlencoding::encode(id)),
            Route::Login => "/login".to_string(),
            Route::NotFound { path } => path.clone(),
        }
    }

    /// Path with the locale prefix
    pub fn localized_path(&self, lang: Language) -> String {
        localize(&self.path(), lang)
    }

    /// Parse a path (without locale prefix) back into a route
    pub fn parse(path: &str) -> Route {
        let (base, query_string) = match path.split_once('?') {
            Some((base, qs)) => (base, Some(qs)),
            None => (path, None),
        };
        let base = base.trim_end_matches('/');

        match base {
            "" => Route::Home,
            "/login" => Route::Login,
            "/terms" => Route::SearchResults {
                query: query_string
                    .and_then(|qs| query_param(qs, "q"))
                    .unwrap_or_default(),
            },
            _ => match base.strip_prefix("/terms/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Route::TermDetail {
                    id: decode(id),
                },
                _ => Route::NotFound {
                    path: path.to_string(),
                },
            },
        }
    }
}

fn query_param(query_string: &str, name: &str) -> Option<String> {
    query_string.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (key == name).then(|| decode(&value.replace('+', " ")))
    })
}

fn decode(value: &str) -> String {
    urlencoding::decode(value)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_search_path_is_percent_encoded() {
        let route = Route::SearchResults {
            query: "mạng máy tính".to_string(),
        };
        assert_snapshot!(route.path(), @"/terms?q=m%E1%BA%A1ng%20m%C3%A1y%20t%C3%ADnh");
    }

    #[test]
    fn test_localized_detail_path() {
        let route = Route::TermDetail {
            id: "65f0a1".to_string(),
        };
        assert_snapshot!(route.localized_path(Language::Lo), @"/lo/terms/65f0a1");
    }

    #[test]
    fn test_home_localizes_to_bare_prefix() {
        assert_eq!(Route::Home.localized_path(Language::En), "/en");
    }

    #[test]
    fn test_parse_inverts_path() {
        let routes = [
            Route::Home,
            Route::Login,
            Route::SearchResults {
                query: "ລາວ & co".to_string(),
            },
            Route::TermDetail {
                id: "abc123".to_string(),
            },
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_parse_plus_as_space() {
        assert_eq!(
            Route::parse("/terms?page=2&q=cloud+native"),
            Route::SearchResults {
                query: "cloud native".to_string()
            }
        );
    }

    #[test]
    fn test_parse_unknown_path_is_not_found() {
        assert_eq!(
            Route::parse("/admin/users"),
            Route::NotFound {
                path: "/admin/users".to_string()
            }
        );
    }

    #[test]
    fn test_parse_terms_without_query_is_empty_search() {
        assert_eq!(
            Route::parse("/terms"),
            Route::SearchResults {
                query: String::new()
            }
        );
    }
}
