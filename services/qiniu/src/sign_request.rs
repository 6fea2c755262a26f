//! Qiniu storage API request signer.

use http::header::AUTHORIZATION;
use http::HeaderValue;
use qsign_core::Context;
use qsign_core::Error;
use qsign_core::ReadSeekSend;
use qsign_core::Result;
use qsign_core::SignRequest;
use qsign_core::SigningRequest;

use crate::auth::Authorization;
use crate::auth::SignVersion;
use crate::constants::*;
use crate::Credential;

/// RequestSigner that implements Qiniu management authorization.
///
/// V1 tokens are attached as `Authorization: QBox <token>`, V2 tokens as
/// `Authorization: Qiniu <token>`.
///
/// - [Management Credentials](https://developer.qiniu.com/kodo/1201/access-token)
#[derive(Debug, Default)]
pub struct RequestSigner {
    version: SignVersion,
}

impl RequestSigner {
    /// Create a request signer using the legacy (V1) canonicalization.
    pub fn new() -> Self {
        Self {
            version: SignVersion::V1,
        }
    }

    /// Select the canonicalization version.
    pub fn with_version(mut self, version: SignVersion) -> Self {
        self.version = version;
        self
    }
}

#[async_trait::async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        parts: &mut http::request::Parts,
        body: Option<&mut dyn ReadSeekSend>,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let cred = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;
        let auth = Authorization::from(cred);

        let mut req = SigningRequest::build(parts)?;

        let (scheme, token) = match self.version {
            SignVersion::V1 => (QBOX_SCHEME, auth.sign_request(&req, body)?),
            SignVersion::V2 => (QINIU_SCHEME, auth.sign_request_v2(&req, body)?),
        };

        req.headers.insert(AUTHORIZATION, {
            let mut value: HeaderValue = format!("{scheme} {token}").parse()?;
            value.set_sensitive(true);

            value
        });

        req.apply(parts)
    }
}
