//! Splits a validated selector into qualified-name segments
//!
//! Namespace URIs may contain `/`, so splitting has to skip over `{...}`
//! groups rather than cutting on every slash.

use super::qname::QualifiedName;

/// Segments, optional trailing attribute
pub(super) type ParsedSelector = (Vec<QualifiedName>, Option<String>);

/// Parse a selector that already passed [`super::validate_selector`]
pub(super) fn parse_segments(selector: &str) -> ParsedSelector {
    let mut segments = Vec::new();
    let mut attribute = None;
    let mut rest = selector.trim_start_matches('/');

    while !rest.is_empty() {
        let (namespace, after_ns) = match rest.strip_prefix('{') {
            Some(inner) => match inner.find('}') {
                Some(close) => (&inner[..close], &inner[close + 1..]),
                None => ("", rest),
            },
            None => ("", rest),
        };

        let end = after_ns.find(['/', '@']).unwrap_or(after_ns.len());
        let local_name = &after_ns[..end];
        if !local_name.is_empty() {
            segments.push(QualifiedName::new(namespace, local_name));
        }

        let tail = &after_ns[end..];
        if let Some(attr) = tail.strip_prefix('@') {
            attribute = Some(attr.to_string());
            break;
        }
        rest = tail.trim_start_matches('/');
    }

    (segments, attribute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_namespaced_segments() {
        let (segments, attribute) =
            parse_segments("//{http://com.example/order}foo/{http://com.example/orderitem}bar");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].local_name(), "foo");
        assert_eq!(segments[0].namespace(), "http://com.example/order");
        assert_eq!(segments[1].local_name(), "bar");
        assert_eq!(segments[1].namespace(), "http://com.example/orderitem");
        assert!(attribute.is_none());
    }

    #[test]
    fn splits_plain_segments() {
        let (segments, _) = parse_segments("/foo/bar");
        assert_eq!(segments, vec![QualifiedName::local("foo"), QualifiedName::local("bar")]);
    }

    #[test]
    fn keeps_trailing_attribute() {
        let (segments, attribute) = parse_segments("/foo/bar/car@attr");
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[2].local_name(), "car");
        assert_eq!(attribute.as_deref(), Some("attr"));
    }

    #[test]
    fn root_has_no_segments() {
        let (segments, attribute) = parse_segments("/");
        assert!(segments.is_empty());
        assert!(attribute.is_none());
    }
}
