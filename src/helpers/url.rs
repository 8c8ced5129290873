//! URL helper functions

use percent_encoding::percent_decode_str;

/// Read a parameter from a query string.
///
/// Follows the browser's `URLSearchParams::get`: an optional leading `?`,
/// `&`-separated pairs, `+` decoded as a space, percent-decoding, and the
/// first occurrence wins. A key without `=` has an empty value.
///
/// # Examples
/// ```ignore
/// query_param("?id=http2-server", "id") // -> Some("http2-server")
/// ```
pub fn query_param(query: &str, name: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);

    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (decode(key), decode(value)),
            None => (decode(pair), String::new()),
        })
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}

fn decode(s: &str) -> String {
    let spaced = s.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
