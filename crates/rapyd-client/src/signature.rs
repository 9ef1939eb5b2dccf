//! # Request Signing
//!
//! Rapyd authenticates every request with an HMAC-SHA256 signature over the
//! method, path, salt, timestamp, key pair, and body:
//!
//! ```text
//! to_sign   = lowercase_method + path + salt + timestamp + access_key + secret_key + body
//! signature = base64(hex(hmac_sha256(secret_key, to_sign)))
//! ```
//!
//! The signed path includes the `/v1` prefix; the body string is empty for
//! bodiless requests and the exact serialized JSON otherwise.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use rapyd_core::Method;
use sha2::Sha256;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// The auth header values attached to a signed request
#[derive(Debug, Clone)]
pub struct Signature {
    pub salt: String,
    pub timestamp: i64,
    pub signature: String,
}

/// Sign a request with a fresh random salt
pub fn sign(
    access_key: &str,
    secret_key: &str,
    method: Method,
    path: &str,
    timestamp: i64,
    body: &str,
) -> Signature {
    let salt = Uuid::new_v4().simple().to_string();
    let signature = sign_with_salt(access_key, secret_key, method, path, &salt, timestamp, body);
    Signature {
        salt,
        timestamp,
        signature,
    }
}

/// Deterministic signing primitive; exposed for verification in tests
pub fn sign_with_salt(
    access_key: &str,
    secret_key: &str,
    method: Method,
    path: &str,
    salt: &str,
    timestamp: i64,
    body: &str,
) -> String {
    let to_sign = format!(
        "{}{}{}{}{}{}{}",
        method.signing_str(),
        path,
        salt,
        timestamp,
        access_key,
        secret_key,
        body
    );

    let mut mac =
        HmacSha256::new_from_slice(secret_key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(to_sign.as_bytes());
    let digest_hex = hex::encode(mac.finalize().into_bytes());

    BASE64.encode(digest_hex.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_is_base64_of_hex_digest() {
        let sig = sign_with_salt("ak", "sk", Method::Get, "/v1/data/countries", "salt", 1658198483, "");

        let decoded = BASE64.decode(&sig).unwrap();
        // hex rendering of a 32-byte HMAC-SHA256 digest
        assert_eq!(decoded.len(), 64);
        assert!(decoded
            .iter()
            .all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
    }

    #[test]
    fn test_signing_is_deterministic() {
        let a = sign_with_salt("ak", "sk", Method::Post, "/v1/payouts", "salt", 1, "{}");
        let b = sign_with_salt("ak", "sk", Method::Post, "/v1/payouts", "salt", 1, "{}");
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_component_binds_the_signature() {
        let base = sign_with_salt("ak", "sk", Method::Post, "/v1/payouts", "salt", 1, "{}");
        assert_ne!(
            base,
            sign_with_salt("ak", "sk", Method::Get, "/v1/payouts", "salt", 1, "{}")
        );
        assert_ne!(
            base,
            sign_with_salt("ak", "sk", Method::Post, "/v1/checkout", "salt", 1, "{}")
        );
        assert_ne!(
            base,
            sign_with_salt("ak", "sk", Method::Post, "/v1/payouts", "other", 1, "{}")
        );
        assert_ne!(
            base,
            sign_with_salt("ak", "sk", Method::Post, "/v1/payouts", "salt", 2, "{}")
        );
        assert_ne!(
            base,
            sign_with_salt("ak", "sk", Method::Post, "/v1/payouts", "salt", 1, "null")
        );
    }

    #[test]
    fn test_fresh_salts_differ() {
        let a = sign("ak", "sk", Method::Get, "/v1/user/x", 1, "");
        let b = sign("ak", "sk", Method::Get, "/v1/user/x", 1, "");
        assert_ne!(a.salt, b.salt);
        assert_ne!(a.signature, b.signature);
    }
}
