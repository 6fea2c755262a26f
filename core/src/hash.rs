//! Hash related utils.

use crate::Error;
use base64::prelude::BASE64_URL_SAFE;
use base64::Engine;
use hmac::Hmac;
use hmac::Mac;
use sha1::Sha1;

/// URL-safe base64 encode (padded alphabet).
pub fn base64url_encode(content: &[u8]) -> String {
    BASE64_URL_SAFE.encode(content)
}

/// URL-safe base64 decode.
pub fn base64url_decode(content: &str) -> crate::Result<Vec<u8>> {
    BASE64_URL_SAFE
        .decode(content)
        .map_err(|e| Error::unexpected("base64 decode failed").with_source(e))
}

/// HMAC with SHA1 hash.
pub fn hmac_sha1(key: &[u8], content: &[u8]) -> Vec<u8> {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha1>::new_from_slice(key).unwrap();
    h.update(content);

    h.finalize().into_bytes().to_vec()
}

/// URL-safe base64 encoded HMAC with SHA1 hash.
///
/// Use this function instead of `base64url_encode(&hmac_sha1(key, content))`
/// can reduce extra copy.
pub fn base64url_hmac_sha1(key: &[u8], content: &[u8]) -> String {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha1>::new_from_slice(key).unwrap();
    h.update(content);

    base64url_encode(&h.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64url_roundtrip() {
        let cases: Vec<&[u8]> = vec![b"", b"hello", b"\xff\xfe\xfd", b"{}"];

        for input in cases {
            let encoded = base64url_encode(input);
            assert_eq!(base64url_decode(&encoded).unwrap(), input);
        }
    }

    #[test]
    fn test_base64url_uses_urlsafe_alphabet() {
        // 0xff 0xef encodes to "/+" under the standard alphabet.
        assert_eq!(base64url_encode(&[0xff, 0xef]), "_-8=");
    }

    #[test]
    fn test_hmac_sha1_accepts_any_input() {
        // Never fails, including empty key and empty content.
        assert_eq!(hmac_sha1(b"", b"").len(), 20);
        assert_eq!(hmac_sha1(b"key", b"").len(), 20);

        assert_eq!(
            base64url_hmac_sha1(b"secret_key", b"hello"),
            "ruS4kLV06o-k9qZq7ZbD5ZDlklo="
        );
    }
}
