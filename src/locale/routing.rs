//! Locale-prefixed routing
//!
//! Every page lives under a `/{lang}` prefix. Paths arriving without a
//! supported prefix are redirected to the default language rather than
//! rejected.

use super::Language;

/// Outcome of matching an incoming path against the locale prefixes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleMatch {
    /// Path carried a supported prefix; `rest` always starts with `/`
    Prefixed { lang: Language, rest: String },
    /// Path must be re-requested at `to`
    Redirect { to: String },
}

/// Prefix a route path with a language
pub fn localize(path: &str, lang: Language) -> String {
    if path.is_empty() || path == "/" {
        format!("/{}", lang.code())
    } else if path.starts_with('/') {
        format!("/{}{}", lang.code(), path)
    } else {
        format!("/{}/{}", lang.code(), path)
    }
}

/// Split the locale prefix off a path, if it has a supported one
pub fn split_locale(path: &str) -> Option<(Language, &str)> {
    let trimmed = path.strip_prefix('/')?;
    let (segment, rest) = match trimmed.find(['/', '?']) {
        Some(idx) => trimmed.split_at(idx),
        None => (trimmed, ""),
    };
    // Codes are matched exactly as they appear in paths
    let lang = Language::SUPPORTED
        .into_iter()
        .find(|lang| lang.code() == segment)?;
    Some((lang, rest))
}

/// Match a path the way the locale middleware does
pub fn resolve(path: &str) -> LocaleMatch {
    match split_locale(path) {
        Some((lang, rest)) => {
            let rest = if rest.is_empty() {
                "/".to_string()
            } else if rest.starts_with('?') {
                format!("/{}", rest)
            } else {
                rest.to_string()
            };
            LocaleMatch::Prefixed { lang, rest }
        }
        None => LocaleMatch::Redirect {
            to: localize(path, Language::DEFAULT),
        },
    }
}

/// Path of the same page in another language
pub fn switch_language(path: &str, lang: Language) -> String {
    match resolve(path) {
        LocaleMatch::Prefixed { rest, .. } => localize(&rest, lang),
        LocaleMatch::Redirect { .. } => localize(path, lang),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_localize_root() {
        assert_snapshot!(localize("/", Language::En), @"/en");
    }

    #[test]
    fn test_localize_nested_path() {
        assert_snapshot!(localize("/terms?q=api", Language::Lo), @"/lo/terms?q=api");
    }

    #[test]
    fn test_resolve_prefixed_path() {
        assert_eq!(
            resolve("/en/terms/42"),
            LocaleMatch::Prefixed {
                lang: Language::En,
                rest: "/terms/42".to_string()
            }
        );
    }

    #[test]
    fn test_resolve_bare_locale_is_home() {
        assert_eq!(
            resolve("/lo"),
            LocaleMatch::Prefixed {
                lang: Language::Lo,
                rest: "/".to_string()
            }
        );
    }

    #[test]
    fn test_resolve_locale_followed_by_query() {
        assert_eq!(
            resolve("/vi?ref=home"),
            LocaleMatch::Prefixed {
                lang: Language::Vi,
                rest: "/?ref=home".to_string()
            }
        );
    }

    #[test]
    fn test_unprefixed_path_redirects_to_default() {
        assert_eq!(
            resolve("/terms"),
            LocaleMatch::Redirect {
                to: "/vi/terms".to_string()
            }
        );
    }

    #[test]
    fn test_unsupported_prefix_redirects_under_default() {
        assert_eq!(
            resolve("/fr/terms"),
            LocaleMatch::Redirect {
                to: "/vi/fr/terms".to_string()
            }
        );
    }

    #[test]
    fn test_prefix_must_be_whole_segment() {
        assert!(split_locale("/english").is_none());
    }

    #[test]
    fn test_switch_language_keeps_route() {
        assert_snapshot!(switch_language("/vi/terms?q=m%E1%BA%A1ng", Language::En), @"/en/terms?q=m%E1%BA%A1ng");
        assert_snapshot!(switch_language("/en", Language::Lo), @"/lo");
    }
}
