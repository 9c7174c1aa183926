//! Two-stage selector validation
//!
//! The character class is checked first so that the shape pattern only ever
//! runs over plausible input.

use once_cell::sync::OnceCell;
use regex::Regex;

use crate::error::{SiftError, SiftResult};

const VALID_CHARS: &str = r"^[\w:.{}/@]+$";

const SHAPE: &str =
    r"^(?:/|//?(?:\{[\w:/.]+\})?\w+(?:/(?:\{[\w:/.]+\})?\w+)*(?:@\w+)?)$";

static VALID_CHARS_RE: OnceCell<Regex> = OnceCell::new();
static SHAPE_RE: OnceCell<Regex> = OnceCell::new();

fn compiled(cell: &'static OnceCell<Regex>, pattern: &str) -> SiftResult<&'static Regex> {
    cell.get_or_try_init(|| Regex::new(pattern))
        .map_err(|e| SiftError::selector_syntax(pattern, format!("validator unavailable: {e}")))
}

/// Validate a slash-prefixed selector
///
/// # Errors
/// Returns a selector syntax error naming the first failed check.
pub fn validate_selector(selector: &str) -> SiftResult<()> {
    if selector.is_empty() {
        return Err(SiftError::selector_syntax(selector, "selector is empty"));
    }

    if !compiled(&VALID_CHARS_RE, VALID_CHARS)?.is_match(selector) {
        let reason = if selector.contains('*') {
            "wildcards are not supported".to_string()
        } else {
            let bad: String = selector
                .chars()
                .filter(|c| !(c.is_alphanumeric() || *c == '_' || ":.{}/@".contains(*c)))
                .collect();
            format!("disallowed characters '{bad}'")
        };
        return Err(SiftError::selector_syntax(selector, reason));
    }

    if !compiled(&SHAPE_RE, SHAPE)?.is_match(selector) {
        let reason = if selector.len() > 1 && selector.ends_with('/') {
            "trailing slash"
        } else if selector.get(1..).is_some_and(|rest| rest.contains("//")) {
            "empty path segment"
        } else if selector.matches('{').count() != selector.matches('}').count() {
            "unbalanced namespace braces"
        } else {
            "malformed path"
        };
        return Err(SiftError::selector_syntax(selector, reason));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_expressions() {
        for selector in [
            "/",
            "//foo",
            "//foo/bar",
            "/foo",
            "/foo/bar",
            "/foo/bar/car",
            "/foo/bar/car@attr",
        ] {
            assert!(validate_selector(selector).is_ok(), "{selector} should be valid");
        }
    }

    #[test]
    fn accepts_namespaced_expressions() {
        for selector in [
            "//{namespace}foo",
            "//{http://com.example/order}foo/bar",
            "/{http://com.example/order}foo/bar",
            "//{http://com.example/order}foo/{http://com.example/orderitem}bar",
        ] {
            assert!(validate_selector(selector).is_ok(), "{selector} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_shapes() {
        for selector in [
            "foo/bar",
            "/foo/bar/car/",
            "//foo/bar/car*",
            "//foo/bar/car@",
            "/foo/bar/./car",
            "///",
            "//",
            "//{namespace{}}foo",
            "//{http://com.example/order}/foo",
            "//Order-id",
            "//Order.id",
            "/a@x/b",
        ] {
            let err = validate_selector(selector).expect_err(selector);
            assert!(err.is_selector_syntax());
        }
    }

    #[test]
    fn wildcard_reason_is_reported() {
        let err = validate_selector("//Name/*body").expect_err("wildcard");
        assert!(err.to_string().contains("wildcards are not supported"));
    }
}
