//! Edit-mode detection from the inbound referrer
//!
//! The editor issues its ribbon requests from a page opened in edit mode, so the
//! referrer's query tells whether the request comes from the page editor even on
//! sites that keep workflow disabled. Query tokens are split on `?`, `&` and `/`,
//! URL-decoded and compared case-insensitively. A `url=` token carries a nested
//! query which is searched once for `sc_mode=edit`.

use crate::constants::{EDIT_MODE_TOKEN, NESTED_EDIT_MODE_TOKEN, NESTED_URL_PREFIX};
use url::form_urlencoded;
use url::Url;

/// Outcome of scanning one query string
#[derive(Debug, Default, PartialEq, Eq)]
struct QueryScan {
    found: bool,
    nested_query: Option<String>,
}

/// Whether the referrer points at a page opened in edit mode
pub fn is_referrer_in_edit_mode(referrer: Option<&Url>) -> bool {
    let query = match referrer.and_then(|url| url.query()) {
        Some(query) if !query.trim().is_empty() => query,
        _ => return false,
    };

    let scan = scan_query(EDIT_MODE_TOKEN, query);
    if scan.found {
        return true;
    }

    match scan.nested_query {
        Some(inner) if !inner.trim().is_empty() => scan_query(NESTED_EDIT_MODE_TOKEN, &inner).found,
        _ => false,
    }
}

fn scan_query(token: &str, query: &str) -> QueryScan {
    let mut nested_query = None;

    for part in query
        .split(|c: char| matches!(c, '?' | '&' | '/'))
        .filter(|part| !part.is_empty())
    {
        let decoded = decode_token(part);
        if decoded.eq_ignore_ascii_case(token) {
            return QueryScan {
                found: true,
                nested_query: None,
            };
        }
        if starts_with_ignore_case(&decoded, NESTED_URL_PREFIX) {
            // Last `url=` token wins
            nested_query = Some(decoded);
        }
    }

    QueryScan {
        found: false,
        nested_query,
    }
}

/// Form-decode a single query token, keeping a literal `=` separator intact
fn decode_token(raw: &str) -> String {
    match form_urlencoded::parse(raw.as_bytes()).next() {
        Some((name, value)) if raw.contains('=') => format!("{}={}", name, value),
        Some((name, _)) => name.into_owned(),
        None => String::new(),
    }
}

fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .map(|head| head.eq_ignore_ascii_case(prefix))
        .unwrap_or(false)
}
