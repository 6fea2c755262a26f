use std::sync::Arc;
use std::sync::Mutex;

use crate::body::ReadSeekSend;
use crate::Context;
use crate::ProvideCredential;
use crate::Result;
use crate::SignRequest;
use crate::SigningCredential;

/// Signer is the main struct used to sign the request.
///
/// It is safe for unlimited concurrent use: each signing call works on its
/// own state, the only shared piece is the cached credential.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
    credential: Arc<Mutex<Option<K>>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,

            loader: Arc::new(loader),
            builder: Arc::new(builder),
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// Signing request.
    ///
    /// The optional body is read for canonicalization but never consumed,
    /// its read position is the same before and after this call.
    pub async fn sign(
        &self,
        req: &mut http::request::Parts,
        body: Option<&mut dyn ReadSeekSend>,
    ) -> Result<()> {
        let cred = self.credential.lock().expect("lock poisoned").clone();
        let cred = if cred.is_valid() {
            cred
        } else {
            let loaded = self.loader.provide_credential(&self.ctx).await?;
            *self.credential.lock().expect("lock poisoned") = loaded.clone();
            loaded
        };

        self.builder
            .sign_request(&self.ctx, req, body, cred.as_ref())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::AUTHORIZATION;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    #[derive(Debug, Clone)]
    struct TestCredential {
        token: String,
    }

    impl SigningCredential for TestCredential {
        fn is_valid(&self) -> bool {
            !self.token.is_empty()
        }
    }

    #[derive(Debug)]
    struct TestProvider {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl ProvideCredential for TestProvider {
        type Credential = TestCredential;

        async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Some(TestCredential {
                token: "token".to_string(),
            }))
        }
    }

    #[derive(Debug)]
    struct TestBuilder;

    #[async_trait::async_trait]
    impl SignRequest for TestBuilder {
        type Credential = TestCredential;

        async fn sign_request(
            &self,
            _: &Context,
            parts: &mut http::request::Parts,
            _: Option<&mut dyn ReadSeekSend>,
            credential: Option<&Self::Credential>,
        ) -> Result<()> {
            let cred = credential
                .ok_or_else(|| crate::Error::credential_invalid("missing credential"))?;
            parts.headers.insert(AUTHORIZATION, cred.token.parse()?);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_signer_caches_credential() -> Result<()> {
        let calls = Arc::new(AtomicUsize::new(0));
        let signer = Signer::new(
            Context::new(),
            TestProvider {
                calls: calls.clone(),
            },
            TestBuilder,
        );

        for _ in 0..3 {
            let (mut parts, _) = http::Request::get("https://x.com/foo")
                .body(())
                .unwrap()
                .into_parts();
            signer.sign(&mut parts, None).await?;
            assert_eq!(parts.headers.get(AUTHORIZATION).unwrap(), "token");
        }

        // A valid credential is loaded once and reused.
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        Ok(())
    }
}
