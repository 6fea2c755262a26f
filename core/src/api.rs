use std::fmt::Debug;

use crate::body::ReadSeekSend;
use crate::Context;
use crate::Result;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is valid.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential is the trait used by signer to load credentials.
///
/// Credential material is always supplied in memory: from static
/// configuration, from the environment, or from a caller-provided chain.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this provider.
    type Credential: SigningCredential;

    /// Load credential from the given context.
    ///
    /// Returns `None` when this provider has nothing to offer, so a chain
    /// can move on to the next provider.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// SignRequest is the trait used by signer to build the signing request.
#[async_trait::async_trait]
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this builder.
    type Credential: SigningCredential;

    /// Sign the request parts in place.
    ///
    /// ## Body
    ///
    /// Canonicalizations that cover the request body receive it as an
    /// optional rewindable byte source. Implementations must leave the
    /// body's read position untouched, see [`crate::read_restored`].
    async fn sign_request(
        &self,
        ctx: &Context,
        parts: &mut http::request::Parts,
        body: Option<&mut dyn ReadSeekSend>,
        credential: Option<&Self::Credential>,
    ) -> Result<()>;
}
