//! Core components for signing Qiniu API requests.
//!
//! This crate provides the foundational types and traits for the qsign
//! ecosystem: a request-shaped signing view, a keyed-hash primitive,
//! non-destructive body access, and the traits that connect credential
//! loading with request signing.
//!
//! ## Overview
//!
//! The crate is built around a few key concepts:
//!
//! - **Context**: ambient capabilities (environment access) used by
//!   credential providers and configuration loading
//! - **Traits**: abstract interfaces for credential loading
//!   (`ProvideCredential`) and request signing (`SignRequest`)
//! - **Signer**: the orchestrator that coordinates credential loading and
//!   request signing
//! - **SigningRequest**: a deterministic view over a request, with the raw
//!   query string preserved byte for byte
//! - **Body access**: [`read_restored`] reads a body fully for hashing and
//!   guarantees the stream is rewound on every exit path
//!
//! ## Example
//!
//! ```no_run
//! use qsign_core::{Context, ProvideCredential, ReadSeekSend, Result, SignRequest, Signer, SigningCredential};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//!     secret: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty() && !self.secret.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyLoader;
//!
//! #[async_trait]
//! impl ProvideCredential for MyLoader {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential {
//!             key: "my-access-key".to_string(),
//!             secret: "my-secret-key".to_string(),
//!         }))
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyBuilder;
//!
//! #[async_trait]
//! impl SignRequest for MyBuilder {
//!     type Credential = MyCredential;
//!
//!     async fn sign_request(
//!         &self,
//!         _ctx: &Context,
//!         _parts: &mut http::request::Parts,
//!         _body: Option<&mut dyn ReadSeekSend>,
//!         _cred: Option<&Self::Credential>,
//!     ) -> Result<()> {
//!         // Build your signing request here
//!         todo!()
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let signer = Signer::new(Context::new(), MyLoader, MyBuilder);
//!
//! let mut parts = http::Request::builder()
//!     .method("GET")
//!     .uri("https://example.com")
//!     .body(())
//!     .unwrap()
//!     .into_parts()
//!     .0;
//!
//! signer.sign(&mut parts, None).await?;
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod utils;

mod body;
pub use body::read_restored;
pub use body::ReadSeekSend;
mod context;
pub use context::Context;
mod env;
pub use env::Env;
pub use env::OsEnv;
pub use env::StaticEnv;
mod error;
pub use error::Error;
pub use error::ErrorKind;
pub use error::Result;

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};
mod chain;
pub use chain::ProvideCredentialChain;
mod request;
pub use request::SigningRequest;
mod signer;
pub use signer::Signer;
