use async_trait::async_trait;
use qsign_core::Context;
use qsign_core::ProvideCredential;
use qsign_core::Result;

use crate::constants::*;
use crate::Credential;

/// EnvCredentialProvider loads Qiniu credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `QINIU_ACCESS_KEY`: the Qiniu access key
/// - `QINIU_SECRET_KEY`: the Qiniu secret key
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        match (envs.get(QINIU_ACCESS_KEY), envs.get(QINIU_SECRET_KEY)) {
            (Some(ak), Some(sk)) => Ok(Some(Credential {
                access_key: ak.clone(),
                secret_key: sk.clone(),
            })),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qsign_core::StaticEnv;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_env_credential_provider() -> Result<()> {
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from([
                (QINIU_ACCESS_KEY.to_string(), "test_access_key".to_string()),
                (QINIU_SECRET_KEY.to_string(), "test_secret_key".to_string()),
            ]),
        });

        let provider = EnvCredentialProvider::new();
        let cred = provider.provide_credential(&ctx).await?.unwrap();
        assert_eq!(cred.access_key, "test_access_key");
        assert_eq!(cred.secret_key, "test_secret_key");

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_partial_credentials() -> Result<()> {
        // Only the access key is set.
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from([(
                QINIU_ACCESS_KEY.to_string(),
                "test_access_key".to_string(),
            )]),
        });

        let provider = EnvCredentialProvider::new();
        assert!(provider.provide_credential(&ctx).await?.is_none());

        Ok(())
    }
}
