//! Bearer Token Signing and Parsing
//!
//! A token is `<session_id>.<base64url(HMAC-SHA256(session_id))>`. The
//! session ID alone is not a credential; the signature binds it to the
//! server secret, and revocation works by deleting the session row.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Sign a session ID into a bearer token
pub fn sign(session_id: Uuid, secret: &[u8; 32]) -> String {
    let session_id = session_id.to_string();

    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id.as_bytes());
    let signature = mac.finalize().into_bytes();

    format!("{}.{}", session_id, URL_SAFE_NO_PAD.encode(signature))
}

/// Parse and verify a bearer token, returning the session ID
///
/// Fails with `Unauthenticated` on any structural or signature defect;
/// callers still have to check the session row itself.
pub fn parse(token: &str, secret: &[u8; 32]) -> AuthResult<Uuid> {
    let (session_id_str, signature_b64) = token
        .split_once('.')
        .ok_or(AuthError::Unauthenticated)?;

    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id_str.as_bytes());

    let signature = URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| AuthError::Unauthenticated)?;

    mac.verify_slice(&signature)
        .map_err(|_| AuthError::Unauthenticated)?;

    session_id_str
        .parse()
        .map_err(|_| AuthError::Unauthenticated)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: [u8; 32] = [7u8; 32];

    #[test]
    fn test_sign_parse_roundtrip() {
        let session_id = Uuid::new_v4();
        let token = sign(session_id, &SECRET);

        assert_eq!(parse(&token, &SECRET).unwrap(), session_id);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = sign(Uuid::new_v4(), &SECRET);
        let other: [u8; 32] = [8u8; 32];

        assert!(parse(&token, &other).is_err());
    }

    #[test]
    fn test_tampered_subject_rejected() {
        let token = sign(Uuid::new_v4(), &SECRET);
        let (_, signature) = token.split_once('.').unwrap();
        let forged = format!("{}.{}", Uuid::new_v4(), signature);

        assert!(parse(&forged, &SECRET).is_err());
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        assert!(parse("", &SECRET).is_err());
        assert!(parse("no-dot-here", &SECRET).is_err());
        assert!(parse("a.b.c", &SECRET).is_err());
        assert!(parse("not-a-uuid.!!!not-base64!!!", &SECRET).is_err());
    }
}
