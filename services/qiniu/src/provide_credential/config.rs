use std::sync::Arc;

use async_trait::async_trait;
use qsign_core::Context;
use qsign_core::ProvideCredential;
use qsign_core::Result;

use crate::Config;
use crate::Credential;

/// ConfigCredentialProvider loads credential from static config.
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new `ConfigCredentialProvider` instance.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
        if let (Some(access_key), Some(secret_key)) =
            (&self.config.access_key, &self.config.secret_key)
        {
            Ok(Some(Credential {
                access_key: access_key.clone(),
                secret_key: secret_key.clone(),
            }))
        } else {
            Ok(None)
        }
    }
}
