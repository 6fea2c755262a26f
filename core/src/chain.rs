use std::sync::Arc;

use log::debug;

use crate::Context;
use crate::ProvideCredential;
use crate::Result;
use crate::SigningCredential;

/// A chain of credential providers, tried in order until one yields a
/// credential.
///
/// Providers that return `Ok(None)` are skipped; errors abort the chain.
#[derive(Debug)]
pub struct ProvideCredentialChain<K: SigningCredential> {
    providers: Vec<Arc<dyn ProvideCredential<Credential = K>>>,
}

impl<K: SigningCredential> Default for ProvideCredentialChain<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: SigningCredential> ProvideCredentialChain<K> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Append a provider to the end of the chain.
    pub fn push(mut self, provider: impl ProvideCredential<Credential = K> + 'static) -> Self {
        self.providers.push(Arc::new(provider));
        self
    }

    /// Insert a provider at the front of the chain.
    pub fn push_front(
        mut self,
        provider: impl ProvideCredential<Credential = K> + 'static,
    ) -> Self {
        self.providers.insert(0, Arc::new(provider));
        self
    }
}

#[async_trait::async_trait]
impl<K: SigningCredential> ProvideCredential for ProvideCredentialChain<K> {
    type Credential = K;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        for provider in &self.providers {
            if let Some(cred) = provider.provide_credential(ctx).await? {
                debug!("credential loaded via {provider:?}");
                return Ok(Some(cred));
            }
        }

        Ok(None)
    }
}
