use std::fmt::Debug;
use std::fmt::Formatter;

use qsign_core::utils::Redact;
use qsign_core::Context;

use crate::constants::*;

/// Config carries all the configuration for Qiniu services.
#[derive(Clone, Default)]
pub struct Config {
    /// `access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `QINIU_ACCESS_KEY`
    pub access_key: Option<String>,
    /// `secret_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `QINIU_SECRET_KEY`
    pub secret_key: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key", &self.access_key)
            .field("secret_key", &Redact::secret(&self.secret_key))
            .finish()
    }
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(QINIU_ACCESS_KEY) {
            self.access_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(QINIU_SECRET_KEY) {
            self.secret_key.get_or_insert(v);
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qsign_core::StaticEnv;
    use std::collections::HashMap;

    #[test]
    fn test_config_from_env() {
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from([
                (QINIU_ACCESS_KEY.to_string(), "ak".to_string()),
                (QINIU_SECRET_KEY.to_string(), "sk".to_string()),
            ]),
        });

        let config = Config::default().from_env(&ctx);
        assert_eq!(config.access_key.as_deref(), Some("ak"));
        assert_eq!(config.secret_key.as_deref(), Some("sk"));
    }

    #[test]
    fn test_config_prefers_explicit_values() {
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from([(QINIU_ACCESS_KEY.to_string(), "from_env".to_string())]),
        });

        let config = Config {
            access_key: Some("explicit".to_string()),
            secret_key: None,
        }
        .from_env(&ctx);

        assert_eq!(config.access_key.as_deref(), Some("explicit"));
        assert_eq!(config.secret_key, None);
    }
}
