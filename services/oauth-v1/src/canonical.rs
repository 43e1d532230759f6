//! Parameter normalization and signature base string construction.
//!
//! - [Signature Base String](https://www.rfc-editor.org/rfc/rfc5849#section-3.4.1)

use crate::constants::{FORM_URLENCODED, OAUTH_ENCODE_SET, PARAM_SIGNATURE};
use http::uri::{Authority, Scheme};
use http::{Method, Uri};
use oauth_sign_core::{Error, Result, SigningRequest};
use percent_encoding::utf8_percent_encode;
use std::str::FromStr;

/// Percent-encode input as OAuth requires.
///
/// Only `A-Z a-z 0-9 - . _ ~` are kept, every other byte of the UTF-8
/// representation becomes `%XX` with uppercase hex.
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, &OAUTH_ENCODE_SET).to_string()
}

/// Check whether body parameters take part in the signature.
///
/// That's the case when there is no content type at all, or when its media
/// type is `application/x-www-form-urlencoded`. Media type parameters like
/// `charset` are ignored.
pub fn is_form_content_type(content_type: Option<&str>) -> bool {
    let Some(content_type) = content_type else {
        return true;
    };

    let essence = content_type.split(';').next().unwrap_or_default().trim();
    essence.eq_ignore_ascii_case(FORM_URLENCODED)
}

/// Build the normalized parameter string.
///
/// Query parameters, body parameters (if the content type allows) and the
/// given protocol parameters are encoded, sorted by key then by value and
/// joined as `k=v&k=v`. Any `oauth_signature` is left out.
pub fn canonical_parameters<'a>(
    req: &SigningRequest,
    oauth_params: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Result<String> {
    let mut pairs = req.query.to_pairs();
    if is_form_content_type(req.content_type()?) {
        pairs.extend(req.body.to_pairs());
    }
    pairs.extend(
        oauth_params
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string())),
    );

    Ok(normalize_pairs(pairs))
}

fn normalize_pairs(pairs: Vec<(String, String)>) -> String {
    let mut encoded: Vec<(String, String)> = pairs
        .into_iter()
        .filter(|(k, _)| k != PARAM_SIGNATURE)
        .map(|(k, v)| (percent_encode(&k), percent_encode(&v)))
        .collect();
    // Tuples of String compare by key first, then by value, byte-wise.
    encoded.sort();

    encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Normalize `url` into the base string URI.
///
/// - Query and fragment are dropped.
/// - Scheme and host are lowercased.
/// - Default ports (80 for http, 443 for https) are dropped.
/// - An empty path becomes `/`.
///
/// Returns [`ErrorKind::RequestInvalid`](oauth_sign_core::ErrorKind::RequestInvalid)
/// if scheme or host can't be found.
pub fn base_string_uri(url: &str) -> Result<String> {
    let url = url.split_once('#').map_or(url, |(v, _)| v);

    let uri = Uri::from_str(url)?;
    let (Some(scheme), Some(authority)) = (uri.scheme(), uri.authority()) else {
        return Err(Error::request_invalid(format!(
            "url {url} must contain scheme and host"
        )));
    };
    if authority.host().is_empty() {
        return Err(Error::request_invalid(format!("url {url} has empty host")));
    }

    Ok(normalize_base_uri(scheme, authority, uri.path()))
}

/// Base string URI of a [`SigningRequest`], built from its parts.
pub(crate) fn request_base_uri(req: &SigningRequest) -> String {
    normalize_base_uri(&req.scheme, &req.authority, &req.path)
}

fn normalize_base_uri(scheme: &Scheme, authority: &Authority, path: &str) -> String {
    let scheme = scheme.as_str().to_ascii_lowercase();
    let host = authority.host().to_ascii_lowercase();
    let default_port = match scheme.as_str() {
        "http" => Some(80),
        "https" => Some(443),
        _ => None,
    };
    let port = authority
        .port_u16()
        .filter(|p| Some(*p) != default_port)
        .map(|p| format!(":{p}"))
        .unwrap_or_default();
    let path = match path {
        "" => "/",
        v => v,
    };

    format!("{scheme}://{host}{port}{path}")
}

/// Build the signature base string:
/// `METHOD&encode(base_string_uri)&encode(normalized_parameters)`.
pub fn string_to_sign(method: &Method, base_uri: &str, parameters: &str) -> String {
    format!(
        "{}&{}&{}",
        method.as_str().to_ascii_uppercase(),
        percent_encode(base_uri),
        percent_encode(parameters)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::CONTENT_TYPE;
    use oauth_sign_core::ErrorKind;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("abcXYZ019", "abcXYZ019"; "alphanumeric")]
    #[test_case("-._~", "-._~"; "unreserved marks")]
    #[test_case(" ", "%20"; "space")]
    #[test_case("+", "%2B"; "plus")]
    #[test_case("!*'()", "%21%2A%27%28%29"; "sub delims")]
    #[test_case("&=", "%26%3D"; "separators")]
    #[test_case("/?#[]@", "%2F%3F%23%5B%5D%40"; "gen delims")]
    #[test_case("%", "%25"; "percent")]
    #[test_case("é", "%C3%A9"; "utf8 uppercase hex")]
    #[test_case("\u{2603}", "%E2%98%83"; "snowman")]
    fn test_percent_encode(input: &str, expected: &str) {
        assert_eq!(percent_encode(input), expected);
    }

    #[test]
    fn test_percent_encode_every_ascii_byte() {
        for b in 0u8..0x80 {
            let s = (b as char).to_string();
            let encoded = percent_encode(&s);
            if b.is_ascii_alphanumeric() || b"-._~".contains(&b) {
                assert_eq!(encoded, s);
            } else {
                assert_eq!(encoded, format!("%{b:02X}"));
            }
        }
    }

    #[test_case(None, true; "absent")]
    #[test_case(Some("application/x-www-form-urlencoded"), true; "form")]
    #[test_case(Some("application/x-www-form-urlencoded; charset=utf-8"), true; "form with charset")]
    #[test_case(Some("Application/X-WWW-Form-Urlencoded"), true; "form mixed case")]
    #[test_case(Some("Foo"), false; "custom")]
    #[test_case(Some("application/json"), false; "json")]
    #[test_case(Some("multipart/form-data"), false; "multipart")]
    fn test_is_form_content_type(content_type: Option<&str>, expected: bool) {
        assert_eq!(is_form_content_type(content_type), expected);
    }

    fn post_request() -> SigningRequest {
        SigningRequest::new(Method::POST, "http://www.test.com/path?a=b&c=d")
            .expect("url must be valid")
            .with_form_body(b"e=f")
    }

    #[test]
    fn test_canonical_parameters_include_body() -> Result<()> {
        let req = post_request();
        let params = canonical_parameters(&req, [("oauth_nonce", "n"), ("oauth_consumer_key", "foo")])?;
        assert_eq!(params, "a=b&c=d&e=f&oauth_consumer_key=foo&oauth_nonce=n");
        Ok(())
    }

    #[test]
    fn test_canonical_parameters_skip_body_for_custom_content_type() -> Result<()> {
        let mut req = post_request();
        req.headers.insert(CONTENT_TYPE, "Foo".parse()?);
        let params = canonical_parameters(&req, [("oauth_consumer_key", "foo")])?;
        assert_eq!(params, "a=b&c=d&oauth_consumer_key=foo");
        Ok(())
    }

    #[test]
    fn test_canonical_parameters_sort_by_value_for_same_key() -> Result<()> {
        let mut req = SigningRequest::new(Method::GET, "http://example.com/?a=z&a=1&A=x")?;
        req.query.add("a", vec!["b", "a b"]);
        let params = canonical_parameters(&req, [])?;
        // Uppercase keys sort first, equal keys sort by encoded value.
        assert_eq!(params, "A=x&a=1&a=a%20b&a=b&a=z");
        Ok(())
    }

    #[test]
    fn test_canonical_parameters_ignore_insertion_order() -> Result<()> {
        let pairs = [("z", "1"), ("b", "2"), ("b", "1"), ("a~", "3"), ("a-", "4")];

        let mut forward = SigningRequest::new(Method::GET, "http://example.com/")?;
        let mut backward = forward.clone();
        pairs.iter().for_each(|(k, v)| forward.query.add(*k, *v));
        pairs.iter().rev().for_each(|(k, v)| backward.query.add(*k, *v));

        let expected = "a-=4&a~=3&b=1&b=2&z=1";
        assert_eq!(canonical_parameters(&forward, [])?, expected);
        assert_eq!(canonical_parameters(&backward, [])?, expected);
        Ok(())
    }

    #[test]
    fn test_canonical_parameters_booleans() -> Result<()> {
        let mut req = post_request();
        req.query.set("a", true);
        req.query.set("c", false);
        let params = canonical_parameters(&req, [])?;
        assert_eq!(params, "a=true&c=false&e=f");
        Ok(())
    }

    #[test]
    fn test_canonical_parameters_drop_signature() -> Result<()> {
        let req = SigningRequest::new(Method::GET, "http://example.com/?oauth_signature=abc&x=1")?;
        assert_eq!(canonical_parameters(&req, [("oauth_signature", "zzz")])?, "x=1");
        Ok(())
    }

    #[test_case("http://www.test.com/path", "http://www.test.com/path"; "plain")]
    #[test_case("http://www.test.com/path?a=b&c=d", "http://www.test.com/path"; "query")]
    #[test_case("http://www.test.com/path#", "http://www.test.com/path"; "empty fragment")]
    #[test_case("http://www.test.com/path?a=b#frag", "http://www.test.com/path"; "query and fragment")]
    #[test_case("HTTP://Example.COM:80/r%20v/X", "http://example.com/r%20v/X"; "case and default port")]
    #[test_case("https://example.net:443", "https://example.net/"; "https default port and empty path")]
    #[test_case("https://example.net:8443/a", "https://example.net:8443/a"; "custom port")]
    fn test_base_string_uri(url: &str, expected: &str) {
        assert_eq!(base_string_uri(url).expect("url must be valid"), expected);
    }

    #[test_case("/path/only"; "relative")]
    #[test_case("www.test.com/path"; "no scheme")]
    #[test_case("http://exa mple.com/"; "invalid character")]
    fn test_base_string_uri_invalid(url: &str) {
        let err = base_string_uri(url).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    }

    #[test_case("HTTP://Example.COM:80/r%20v/X?a=b#frag", "http://example.com/r%20v/X"; "case and default port")]
    #[test_case("https://example.net:443?x=1", "https://example.net/"; "https default port and empty path")]
    #[test_case("https://example.net:8443/a", "https://example.net:8443/a"; "custom port")]
    fn test_request_base_uri(url: &str, expected: &str) {
        let req = SigningRequest::new(Method::GET, url).expect("url must be valid");
        assert_eq!(request_base_uri(&req), expected);
        assert_eq!(base_string_uri(url).expect("url must be valid"), expected);
    }

    #[test]
    fn test_string_to_sign() {
        assert_eq!(
            string_to_sign(&Method::POST, "http://www.test.com/path", "a=b&c=d"),
            "POST&http%3A%2F%2Fwww.test.com%2Fpath&a%3Db%26c%3Dd"
        );
        let lower = Method::from_bytes(b"patch").expect("method must be valid");
        assert!(string_to_sign(&lower, "http://x.com/", "").starts_with("PATCH&"));
    }
}
