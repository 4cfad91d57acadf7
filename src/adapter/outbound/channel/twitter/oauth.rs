//! OAuth 1.0a request signing (HMAC-SHA1).

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// RFC 3986 unreserved characters stay literal; everything else is encoded.
const OAUTH_ENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const VERSION: &str = "1.0";

/// Consumer and access-token credentials for one signed request.
pub(crate) struct Credentials<'a> {
    pub consumer_key: &'a str,
    pub consumer_secret: &'a str,
    pub token: &'a str,
    pub token_secret: &'a str,
}

/// Per-request values that must differ between requests.
pub(crate) struct Nonce<'a> {
    pub nonce: &'a str,
    pub timestamp: i64,
}

/// Build the `Authorization` header for a request.
///
/// `params` holds query and form parameters; a JSON body is not signed.
pub(crate) fn authorization_header(
    credentials: &Credentials<'_>,
    nonce: &Nonce<'_>,
    method: &str,
    url: &str,
    params: &[(&str, &str)],
) -> String {
    let timestamp = nonce.timestamp.to_string();
    let oauth_params = [
        ("oauth_consumer_key", credentials.consumer_key),
        ("oauth_nonce", nonce.nonce),
        ("oauth_signature_method", SIGNATURE_METHOD),
        ("oauth_timestamp", timestamp.as_str()),
        ("oauth_token", credentials.token),
        ("oauth_version", VERSION),
    ];

    let mut all_params: Vec<(&str, &str)> = oauth_params.to_vec();
    all_params.extend_from_slice(params);
    let base = signature_base(method, url, &all_params);
    let signature = sign(&base, credentials.consumer_secret, credentials.token_secret);

    let mut fields: Vec<String> = oauth_params
        .iter()
        .map(|(key, value)| format!("{}=\"{}\"", encode(key), encode(value)))
        .collect();
    fields.push(format!("oauth_signature=\"{}\"", encode(&signature)));
    fields.sort();

    format!("OAuth {}", fields.join(", "))
}

/// `METHOD&url&params`, with params encoded, sorted and joined.
fn signature_base(method: &str, url: &str, params: &[(&str, &str)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(key, value)| (encode(key), encode(value)))
        .collect();
    encoded.sort();

    let joined = encoded
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        encode(url),
        encode(&joined)
    )
}

fn sign(base: &str, consumer_secret: &str, token_secret: &str) -> String {
    let key = format!("{}&{}", encode(consumer_secret), encode(token_secret));
    let mut mac =
        HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(base.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, OAUTH_ENCODE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Worked example from the X developer documentation.
    const CREDENTIALS: Credentials<'static> = Credentials {
        consumer_key: "xvz1evFS4wEEPTGEFPHBog",
        consumer_secret: "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
        token: "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
        token_secret: "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
    };
    const NONCE: Nonce<'static> = Nonce {
        nonce: "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg",
        timestamp: 1_318_622_958,
    };
    const URL: &str = "https://api.twitter.com/1.1/statuses/update.json";
    const PARAMS: [(&str, &str); 2] = [
        ("include_entities", "true"),
        ("status", "Hello Ladies + Gentlemen, a signed OAuth request!"),
    ];

    #[test]
    fn encodes_reserved_characters() {
        assert_eq!(encode("Ladies + Gentlemen"), "Ladies%20%2B%20Gentlemen");
        assert_eq!(encode("a-b.c_d~e"), "a-b.c_d~e");
        assert_eq!(encode("☃"), "%E2%98%83");
    }

    #[test]
    fn signature_base_sorts_encoded_params() {
        let base = signature_base("post", "https://example.com/x", &[("b", "2"), ("a", "1 1")]);
        assert_eq!(base, "POST&https%3A%2F%2Fexample.com%2Fx&a%3D1%25201%26b%3D2");
    }

    #[test]
    fn header_matches_documented_signature() {
        let header = authorization_header(&CREDENTIALS, &NONCE, "POST", URL, &PARAMS);

        assert!(header.starts_with("OAuth "));
        assert!(header.contains(r#"oauth_signature="hCtSmYh%2BiHYCEqBWrE7C7hYmtUk%3D""#));
        assert!(header.contains(r#"oauth_consumer_key="xvz1evFS4wEEPTGEFPHBog""#));
        assert!(header.contains(r#"oauth_timestamp="1318622958""#));
        assert!(!header.contains("include_entities"));
    }
}
