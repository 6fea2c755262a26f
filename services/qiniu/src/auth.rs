//! Qiniu token generation and callback verification.
//!
//! All operations are pure functions of (credential, input): there is no
//! session state, and a single [`Authorization`] value can serve any number
//! of concurrent calls.

use std::fmt::Debug;
use std::fmt::Formatter;

use http::header::AUTHORIZATION;
use http::header::CONTENT_TYPE;
use log::debug;
use qsign_core::hash::base64url_encode;
use qsign_core::hash::base64url_hmac_sha1;
use qsign_core::read_restored;
use qsign_core::utils::Redact;
use qsign_core::ReadSeekSend;
use qsign_core::Result;
use qsign_core::SigningRequest;

use crate::constants::*;
use crate::Credential;

/// Which canonicalization a request token binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignVersion {
    /// Legacy canonicalization: path, query, and form-encoded bodies only.
    ///
    /// Retained for backward compatibility with older clients and for
    /// callback verification, which Qiniu performs against V1 tokens.
    #[default]
    V1,
    /// Extended canonicalization that also binds method, host, and content
    /// type, so a token computed for one verb/endpoint/body-type cannot be
    /// replayed against another.
    V2,
}

/// Qiniu authorization: an immutable access key / secret key pair exposing
/// pure signing operations.
///
/// Tokens have the shape `access_key ":" base64url(hmac_sha1)`, optionally
/// followed by `":" base64url(payload)` for data-carrying tokens.
#[derive(Clone)]
pub struct Authorization {
    access_key: String,
    secret_key: Vec<u8>,
}

impl Debug for Authorization {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // The secret key does not appear in debug output at all.
        f.debug_struct("Authorization")
            .field("access_key", &Redact::from(&self.access_key))
            .finish_non_exhaustive()
    }
}

impl From<&Credential> for Authorization {
    fn from(cred: &Credential) -> Self {
        Self::new(&cred.access_key, &cred.secret_key)
    }
}

impl Authorization {
    /// Create a new authorization from an access key / secret key pair.
    pub fn new(access_key: &str, secret_key: &str) -> Self {
        Self {
            access_key: access_key.to_string(),
            secret_key: secret_key.as_bytes().to_vec(),
        }
    }

    fn digest(&self, data: &[u8]) -> String {
        base64url_hmac_sha1(&self.secret_key, data)
    }

    /// Sign raw data, typically used for private resource download URLs.
    ///
    /// Deterministic and infallible for any input, including empty data.
    /// Never call this on data that must stay secret: the token reveals
    /// nothing about the key, but the caller usually transmits the signed
    /// data alongside it.
    pub fn sign(&self, data: &[u8]) -> String {
        format!("{}:{}", self.access_key, self.digest(data))
    }

    /// Sign data and carry the encoded payload inside the token, typically
    /// used for upload policy tokens.
    ///
    /// The signature covers the raw payload, not its encoded form, and the
    /// payload travels as the third colon-delimited segment so a third party
    /// can decode and validate it later. No structural validation of the
    /// payload is performed.
    pub fn sign_with_data(&self, data: &[u8]) -> String {
        format!(
            "{}:{}:{}",
            self.access_key,
            self.digest(data),
            base64url_encode(data)
        )
    }

    /// Sign a request with the legacy (V1) canonicalization, typically used
    /// for management API tokens.
    pub fn sign_request(
        &self,
        req: &SigningRequest,
        body: Option<&mut dyn ReadSeekSend>,
    ) -> Result<String> {
        let data = canonical_v1(req, body)?;
        debug!("canonical request (v1): {:?}", String::from_utf8_lossy(&data));

        Ok(self.sign(&data))
    }

    /// Sign a request with the extended (V2) canonicalization, typically
    /// used for advanced management API tokens.
    pub fn sign_request_v2(
        &self,
        req: &SigningRequest,
        body: Option<&mut dyn ReadSeekSend>,
    ) -> Result<String> {
        let data = canonical_v2(req, body)?;
        debug!("canonical request (v2): {:?}", String::from_utf8_lossy(&data));

        Ok(self.sign(&data))
    }

    /// Verify that an upload callback request was signed by the holder of
    /// this credential.
    ///
    /// A missing `Authorization` header is a normal negative result, not a
    /// failure: it returns `Ok(false)` without any computation. A body that
    /// cannot be re-read surfaces as an error and must not be taken for an
    /// invalid signature.
    pub fn verify_callback(
        &self,
        req: &SigningRequest,
        body: Option<&mut dyn ReadSeekSend>,
    ) -> Result<bool> {
        let auth = req.header_get_or_default(&AUTHORIZATION)?;
        if auth.is_empty() {
            return Ok(false);
        }

        let token = self.sign_request(req, body)?;

        Ok(auth == format!("{QBOX_SCHEME} {token}"))
    }
}

/// Legacy canonicalization:
///
/// ```text
/// <path>[?<rawQuery>]\n[<body>]
/// ```
///
/// The body is covered iff present and the content type is exactly the
/// form-encoded type. Any other content type excludes the body regardless of
/// its size, this is long-standing wire behavior that older clients depend
/// on.
fn canonical_v1(req: &SigningRequest, body: Option<&mut dyn ReadSeekSend>) -> Result<Vec<u8>> {
    let mut data = Vec::with_capacity(req.path.len() + req.query.len() + 2);
    data.extend_from_slice(req.path.as_bytes());
    if !req.query.is_empty() {
        data.push(b'?');
        data.extend_from_slice(req.query.as_bytes());
    }
    data.push(b'\n');

    if let Some(body) = body {
        if req.header_get_or_default(&CONTENT_TYPE)? == CONTENT_TYPE_FORM {
            data.extend_from_slice(&read_restored(body)?);
        }
    }

    Ok(data)
}

/// Extended canonicalization:
///
/// ```text
/// <METHOD> <path>[?<rawQuery>]\n
/// Host: <host>\n
/// [Content-Type: <contentType>\n]
/// \n
/// [<body>]
/// ```
///
/// The body is covered iff present and the content type is the form-encoded
/// or the JSON type.
fn canonical_v2(req: &SigningRequest, body: Option<&mut dyn ReadSeekSend>) -> Result<Vec<u8>> {
    let mut s = String::new();
    s.push_str(req.method.as_str());
    s.push(' ');
    s.push_str(&req.path);
    if !req.query.is_empty() {
        s.push('?');
        s.push_str(&req.query);
    }

    s.push_str("\nHost: ");
    s.push_str(req.host()?);

    let content_type = req.header_get_or_default(&CONTENT_TYPE)?;
    if !content_type.is_empty() {
        s.push_str("\nContent-Type: ");
        s.push_str(content_type);
    }
    s.push_str("\n\n");

    let include_body = content_type == CONTENT_TYPE_FORM || content_type == CONTENT_TYPE_JSON;

    let mut data = s.into_bytes();
    if let Some(body) = body {
        if include_body {
            data.extend_from_slice(&read_restored(body)?);
        }
    }

    Ok(data)
}
