// ABOUTME: OAuth 1.0a HMAC-SHA1 request signing for two-legged consumer-only flows
// ABOUTME: RFC 3986 percent-encoding, signature base string construction, nonce and timestamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # OAuth 1.0a Request Signing
//!
//! Signs requests the way the `FatSecret` Platform API expects for
//! consumer-only (no user token) calls:
//!
//! 1. every parameter key and value is percent-encoded per RFC 3986, so
//!    `! ' ( ) *` are escaped as well, with uppercase hex
//! 2. encoded pairs are sorted by key and joined as `key=value&...`
//! 3. the base string is `METHOD&enc(url)&enc(params)`
//! 4. the signing key is `consumer_secret&` (empty token secret)
//! 5. the signature is base64(HMAC-SHA1(key, base string))
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use nutrition_gateway::oauth1::sign;
//!
//! let mut params = BTreeMap::new();
//! params.insert("method".to_owned(), "foods.search".to_owned());
//! let signature = sign("GET", "https://example.com/api", &params, "secret");
//! assert_eq!(signature, sign("GET", "https://example.com/api", &params, "secret"));
//! ```

use crate::constants::oauth1::{NONCE_LENGTH, SIGNATURE_METHOD, VERSION};
use base64::{engine::general_purpose::STANDARD, Engine};
use rand::{distributions::Alphanumeric, rngs::OsRng, Rng};
use ring::hmac;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Parameter name carrying the computed signature
pub const OAUTH_SIGNATURE: &str = "oauth_signature";

/// Percent-encode a string per RFC 3986
///
/// Only unreserved characters (`A-Z a-z 0-9 - . _ ~`) pass through. Everything
/// else, including `! ' ( ) *`, is escaped bytewise as `%XX` in uppercase hex.
#[must_use]
pub fn percent_encode(input: &str) -> Cow<'_, str> {
    urlencoding::encode(input)
}

/// Inputs to a single signature computation
#[derive(Debug, Clone, Copy)]
pub struct SignatureRequest<'a> {
    /// HTTP method, any case
    pub method: &'a str,
    /// Request URL without query string
    pub base_url: &'a str,
    /// All request and protocol parameters except `oauth_signature`
    pub params: &'a BTreeMap<String, String>,
    /// Consumer secret issued by the provider
    pub consumer_secret: &'a str,
}

impl SignatureRequest<'_> {
    /// Sorted, encoded `key=value&...` parameter string
    #[must_use]
    pub fn normalized_parameters(&self) -> String {
        let mut pairs: Vec<(Cow<'_, str>, Cow<'_, str>)> = self
            .params
            .iter()
            .map(|(key, value)| (percent_encode(key), percent_encode(value)))
            .collect();
        pairs.sort();

        pairs
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Signature base string: `METHOD&enc(url)&enc(params)`
    #[must_use]
    pub fn base_string(&self) -> String {
        format!(
            "{}&{}&{}",
            self.method.to_uppercase(),
            percent_encode(self.base_url),
            percent_encode(&self.normalized_parameters())
        )
    }

    /// Compute the base64-encoded HMAC-SHA1 signature
    #[must_use]
    pub fn signature(&self) -> String {
        let signing_key = format!("{}&", self.consumer_secret);
        let key = hmac::Key::new(hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, signing_key.as_bytes());
        let tag = hmac::sign(&key, self.base_string().as_bytes());
        STANDARD.encode(tag.as_ref())
    }
}

/// Sign a request and return the base64 signature
#[must_use]
pub fn sign(
    method: &str,
    base_url: &str,
    params: &BTreeMap<String, String>,
    consumer_secret: &str,
) -> String {
    SignatureRequest {
        method,
        base_url,
        params,
        consumer_secret,
    }
    .signature()
}

/// Generate a random alphanumeric nonce from the OS CSPRNG
#[must_use]
pub fn generate_nonce() -> String {
    OsRng
        .sample_iter(&Alphanumeric)
        .take(NONCE_LENGTH)
        .map(char::from)
        .collect()
}

/// Current Unix time in seconds, as sent in `oauth_timestamp`
#[must_use]
pub fn timestamp() -> String {
    chrono::Utc::now().timestamp().to_string()
}

/// Builder for a consumer-only signed parameter set
///
/// Collects request parameters, then adds the OAuth protocol parameters and
/// the signature in [`OAuthRequestBuilder::sign`].
#[derive(Debug, Clone)]
pub struct OAuthRequestBuilder<'a> {
    consumer_key: &'a str,
    consumer_secret: &'a str,
    params: BTreeMap<String, String>,
}

impl<'a> OAuthRequestBuilder<'a> {
    /// Start a parameter set for the given consumer credentials
    #[must_use]
    pub const fn new(consumer_key: &'a str, consumer_secret: &'a str) -> Self {
        Self {
            consumer_key,
            consumer_secret,
            params: BTreeMap::new(),
        }
    }

    /// Add a request parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Sign with a fresh nonce and the current timestamp
    #[must_use]
    pub fn sign(self, method: &str, base_url: &str) -> BTreeMap<String, String> {
        self.sign_with(method, base_url, &generate_nonce(), &timestamp())
    }

    /// Sign with an explicit nonce and timestamp
    ///
    /// Returns every parameter to send, `oauth_signature` included.
    #[must_use]
    pub fn sign_with(
        self,
        method: &str,
        base_url: &str,
        nonce: &str,
        timestamp: &str,
    ) -> BTreeMap<String, String> {
        let mut params = self.params;
        params.insert("oauth_consumer_key".to_owned(), self.consumer_key.to_owned());
        params.insert("oauth_nonce".to_owned(), nonce.to_owned());
        params.insert(
            "oauth_signature_method".to_owned(),
            SIGNATURE_METHOD.to_owned(),
        );
        params.insert("oauth_timestamp".to_owned(), timestamp.to_owned());
        params.insert("oauth_version".to_owned(), VERSION.to_owned());

        let signature = sign(method, base_url, &params, self.consumer_secret);
        params.insert(OAUTH_SIGNATURE.to_owned(), signature);
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const API_URL: &str = "https://platform.fatsecret.com/rest/server.api";

    fn search_params() -> BTreeMap<String, String> {
        [
            ("method", "foods.search"),
            ("search_expression", "chicken breast"),
            ("format", "json"),
            ("max_results", "20"),
            ("oauth_consumer_key", "demo_key"),
            ("oauth_nonce", "abcdefghijklmnopqrstuvwxyz"),
            ("oauth_signature_method", "HMAC-SHA1"),
            ("oauth_timestamp", "1700000000"),
            ("oauth_version", "1.0"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect()
    }

    #[test]
    fn test_percent_encode_escapes_sub_delims() {
        assert_eq!(
            percent_encode("it's (a) test! *"),
            "it%27s%20%28a%29%20test%21%20%2A"
        );
    }

    #[test]
    fn test_percent_encode_keeps_unreserved() {
        assert_eq!(percent_encode("AZaz09-._~"), "AZaz09-._~");
        assert_eq!(percent_encode("a+b=c&d/e"), "a%2Bb%3Dc%26d%2Fe");
    }

    #[test]
    fn test_percent_encode_utf8_uppercase_hex() {
        assert_eq!(percent_encode("café"), "caf%C3%A9");
    }

    #[test]
    fn test_base_string_known_answer() {
        let params = search_params();
        let request = SignatureRequest {
            method: "get",
            base_url: API_URL,
            params: &params,
            consumer_secret: "demo_secret",
        };

        assert_eq!(
            request.base_string(),
            "GET&https%3A%2F%2Fplatform.fatsecret.com%2Frest%2Fserver.api&format%3Djson\
             %26max_results%3D20%26method%3Dfoods.search%26oauth_consumer_key%3Ddemo_key\
             %26oauth_nonce%3Dabcdefghijklmnopqrstuvwxyz%26oauth_signature_method%3DHMAC-SHA1\
             %26oauth_timestamp%3D1700000000%26oauth_version%3D1.0\
             %26search_expression%3Dchicken%2520breast"
        );
    }

    #[test]
    fn test_signature_known_answer() {
        let params = search_params();
        assert_eq!(
            sign("GET", API_URL, &params, "demo_secret"),
            "zbfF2iNtbSVnP8+slt3Cu8uFcOw="
        );
    }

    #[test]
    fn test_signature_is_deterministic() {
        let params = search_params();
        let first = sign("GET", API_URL, &params, "demo_secret");
        let second = sign("GET", API_URL, &params, "demo_secret");
        assert_eq!(first, second);
    }

    #[test]
    fn test_any_parameter_change_changes_signature() {
        let params = search_params();
        let baseline = sign("GET", API_URL, &params, "demo_secret");

        for key in params.keys() {
            let mut changed = params.clone();
            changed.insert(key.clone(), format!("{}x", params[key]));
            assert_ne!(
                sign("GET", API_URL, &changed, "demo_secret"),
                baseline,
                "changing {key} should change the signature"
            );
        }

        assert_ne!(sign("POST", API_URL, &params, "demo_secret"), baseline);
        assert_ne!(sign("GET", API_URL, &params, "other_secret"), baseline);
    }

    #[test]
    fn test_normalized_parameters_sorted_by_encoded_key() {
        let params: BTreeMap<String, String> = [("b", "2"), ("a", "x y"), ("c!", "*")]
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        let request = SignatureRequest {
            method: "GET",
            base_url: API_URL,
            params: &params,
            consumer_secret: "s",
        };
        assert_eq!(request.normalized_parameters(), "a=x%20y&b=2&c%21=%2A");
    }

    #[test]
    fn test_generate_nonce_shape() {
        let nonce = generate_nonce();
        assert_eq!(nonce.len(), NONCE_LENGTH);
        assert!(nonce.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(nonce, generate_nonce());
    }

    #[test]
    fn test_builder_adds_protocol_params_and_signature() {
        let signed = OAuthRequestBuilder::new("demo_key", "demo_secret")
            .param("method", "foods.search")
            .param("search_expression", "chicken breast")
            .param("format", "json")
            .param("max_results", "20")
            .sign_with("GET", API_URL, "abcdefghijklmnopqrstuvwxyz", "1700000000");

        assert_eq!(signed["oauth_consumer_key"], "demo_key");
        assert_eq!(signed["oauth_signature_method"], "HMAC-SHA1");
        assert_eq!(signed["oauth_version"], "1.0");
        assert_eq!(signed[OAUTH_SIGNATURE], "zbfF2iNtbSVnP8+slt3Cu8uFcOw=");
    }

    #[test]
    fn test_builder_sign_uses_fresh_nonce() {
        let first = OAuthRequestBuilder::new("k", "s").sign("GET", API_URL);
        let second = OAuthRequestBuilder::new("k", "s").sign("GET", API_URL);
        assert_eq!(first["oauth_nonce"].len(), NONCE_LENGTH);
        assert_ne!(first["oauth_nonce"], second["oauth_nonce"]);
        assert!(first["oauth_timestamp"].parse::<i64>().is_ok());
    }
}
