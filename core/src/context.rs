use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::env::Env;
use crate::env::OsEnv;

/// Context holds the ambient capabilities signing needs.
///
/// Signing itself is pure computation; the context only exists so that
/// credential providers and configuration loading can reach the environment
/// in a swappable way.
#[derive(Debug, Clone)]
pub struct Context {
    env: Arc<dyn Env>,
}

impl Context {
    /// Create a new context backed by the OS environment.
    pub fn new() -> Self {
        Self {
            env: Arc::new(OsEnv),
        }
    }

    /// Replace the environment implementation.
    pub fn with_env(mut self, env: impl Env) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Get an environment variable by name.
    pub fn env_var(&self, key: &str) -> Option<String> {
        self.env.var(key)
    }

    /// Get all environment variables.
    pub fn env_vars(&self) -> HashMap<String, String> {
        self.env.vars()
    }

    /// Get the home directory of the current user.
    pub fn env_home_dir(&self) -> Option<PathBuf> {
        self.env.home_dir()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
