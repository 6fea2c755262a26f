use std::sync::Arc;

use async_trait::async_trait;
use qsign_core::Context;
use qsign_core::ProvideCredential;
use qsign_core::ProvideCredentialChain;
use qsign_core::Result;

use crate::provide_credential::ConfigCredentialProvider;
use crate::provide_credential::EnvCredentialProvider;
use crate::Config;
use crate::Credential;

/// DefaultCredentialProvider is a loader that will try to load credential via default chains.
///
/// Resolution order:
///
/// 1. Static configuration
/// 2. Environment variables
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultCredentialProvider {
    /// Create a new `DefaultCredentialProvider` instance with an empty config.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a `DefaultCredentialProvider` that consults the given config
    /// before falling back to the environment.
    pub fn with_config(config: Config) -> Self {
        let chain = ProvideCredentialChain::new()
            .push(ConfigCredentialProvider::new(Arc::new(config)))
            .push(EnvCredentialProvider::new());

        Self { chain }
    }

    /// Create with a custom credential chain.
    pub fn with_chain(chain: ProvideCredentialChain<Credential>) -> Self {
        Self { chain }
    }

    /// Add a credential provider to the front of the default chain.
    ///
    /// This allows adding a high-priority credential source that will be tried
    /// before all other providers in the default chain.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use qsign_qiniu::{DefaultCredentialProvider, StaticCredentialProvider};
    ///
    /// let provider = DefaultCredentialProvider::new()
    ///     .push_front(StaticCredentialProvider::new("access_key", "secret_key"));
    /// ```
    pub fn push_front(
        mut self,
        provider: impl ProvideCredential<Credential = Credential> + 'static,
    ) -> Self {
        self.chain = self.chain.push_front(provider);
        self
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::provide_credential::StaticCredentialProvider;
    use qsign_core::StaticEnv;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_default_loader_without_env() {
        let _ = env_logger::builder().is_test(true).try_init();

        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::new(),
        });

        let loader = DefaultCredentialProvider::new();
        let credential = loader.provide_credential(&ctx).await.unwrap();

        assert!(credential.is_none());
    }

    #[tokio::test]
    async fn test_default_loader_with_env() {
        let _ = env_logger::builder().is_test(true).try_init();

        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from_iter([
                (QINIU_ACCESS_KEY.to_string(), "access_key".to_string()),
                (QINIU_SECRET_KEY.to_string(), "secret_key".to_string()),
            ]),
        });

        let loader = DefaultCredentialProvider::new();
        let credential = loader.provide_credential(&ctx).await.unwrap().unwrap();

        assert_eq!("access_key", credential.access_key);
        assert_eq!("secret_key", credential.secret_key);
    }

    #[tokio::test]
    async fn test_default_loader_prefers_config_over_env() {
        let _ = env_logger::builder().is_test(true).try_init();

        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from_iter([
                (QINIU_ACCESS_KEY.to_string(), "env_access_key".to_string()),
                (QINIU_SECRET_KEY.to_string(), "env_secret_key".to_string()),
            ]),
        });

        let loader = DefaultCredentialProvider::with_config(Config {
            access_key: Some("config_access_key".to_string()),
            secret_key: Some("config_secret_key".to_string()),
        });
        let credential = loader.provide_credential(&ctx).await.unwrap().unwrap();

        assert_eq!("config_access_key", credential.access_key);
        assert_eq!("config_secret_key", credential.secret_key);
    }

    #[tokio::test]
    async fn test_default_loader_falls_back_to_env_on_partial_config() {
        let _ = env_logger::builder().is_test(true).try_init();

        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from_iter([
                (QINIU_ACCESS_KEY.to_string(), "env_access_key".to_string()),
                (QINIU_SECRET_KEY.to_string(), "env_secret_key".to_string()),
            ]),
        });

        let loader = DefaultCredentialProvider::with_config(Config {
            access_key: Some("config_access_key".to_string()),
            secret_key: None,
        });
        let credential = loader.provide_credential(&ctx).await.unwrap().unwrap();

        assert_eq!("env_access_key", credential.access_key);
    }

    #[tokio::test]
    async fn test_default_loader_prefers_front_provider() {
        let _ = env_logger::builder().is_test(true).try_init();

        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from_iter([
                (QINIU_ACCESS_KEY.to_string(), "env_access_key".to_string()),
                (QINIU_SECRET_KEY.to_string(), "env_secret_key".to_string()),
            ]),
        });

        let loader = DefaultCredentialProvider::new()
            .push_front(StaticCredentialProvider::new("static_ak", "static_sk"));
        let credential = loader.provide_credential(&ctx).await.unwrap().unwrap();

        assert_eq!("static_ak", credential.access_key);
    }
}
