use crate::error::InvalidUrl;

/// The structural pieces of a URL-shaped string.
///
/// This is deliberately lenient: deep-link routes are registered and matched
/// from strings with an optional `scheme://host` prefix, so full RFC 3986
/// parsing is neither possible (patterns like `:id` are not valid URLs) nor
/// wanted. Fragments are stripped, empty path segments collapse, and absent
/// or empty scheme/host come back as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Url<'u> {
    pub scheme: Option<&'u str>,
    pub host: Option<&'u str>,
    pub segments: Vec<&'u str>,
    pub query: Option<&'u str>,
}

impl<'u> Url<'u> {
    pub(crate) fn parse(raw: &'u str) -> Result<Self, InvalidUrl> {
        let raw = match raw.split_once('#') {
            Some((head, _)) => head,
            None => raw,
        };

        let (raw, query) = match raw.split_once('?') {
            Some((head, query)) => (head, (!query.is_empty()).then_some(query)),
            None => (raw, None),
        };

        if raw.is_empty() {
            return Err(InvalidUrl);
        }

        let (scheme, host, path) = match raw.split_once("://") {
            Some((scheme, rest)) => {
                let (host, path) = match rest.find('/') {
                    Some(index) => (&rest[..index], &rest[index..]),
                    None => (rest, ""),
                };

                (some_nonempty(scheme), some_nonempty(host), path)
            }
            // no authority prefix: the whole string is a path
            None => (None, None, raw),
        };

        let segments = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        Ok(Url {
            scheme,
            host,
            segments,
            query,
        })
    }
}

fn some_nonempty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_url() {
        let url = Url::parse("myapp://store/products/42?ref=home#top").unwrap();

        assert_eq!(url.scheme, Some("myapp"));
        assert_eq!(url.host, Some("store"));
        assert_eq!(url.segments, ["products", "42"]);
        assert_eq!(url.query, Some("ref=home"));
    }

    #[test]
    fn path_only() {
        let url = Url::parse("/users/42").unwrap();

        assert_eq!(url.scheme, None);
        assert_eq!(url.host, None);
        assert_eq!(url.segments, ["users", "42"]);
        assert_eq!(url.query, None);
    }

    #[test]
    fn relative_path() {
        let url = Url::parse("users/42").unwrap();
        assert_eq!(url.segments, ["users", "42"]);
    }

    #[test]
    fn host_without_path() {
        let url = Url::parse("http://example.com").unwrap();

        assert_eq!(url.scheme, Some("http"));
        assert_eq!(url.host, Some("example.com"));
        assert!(url.segments.is_empty());
    }

    #[test]
    fn empty_scheme_and_host() {
        let url = Url::parse(":///users").unwrap();

        assert_eq!(url.scheme, None);
        assert_eq!(url.host, None);
        assert_eq!(url.segments, ["users"]);
    }

    #[test]
    fn empty_segments_collapse() {
        // trailing and consecutive separators are equivalent to their absence
        let url = Url::parse("app://host/a//b/").unwrap();
        assert_eq!(url.segments, ["a", "b"]);

        let url = Url::parse("app://host/a/b").unwrap();
        assert_eq!(url.segments, ["a", "b"]);
    }

    #[test]
    fn empty_query_is_absent() {
        let url = Url::parse("app://host/a?").unwrap();
        assert_eq!(url.query, None);
    }

    #[test]
    fn unparsable() {
        assert_eq!(Url::parse(""), Err(InvalidUrl));
        assert_eq!(Url::parse("?a=1"), Err(InvalidUrl));
        assert_eq!(Url::parse("#frag"), Err(InvalidUrl));
    }
}
