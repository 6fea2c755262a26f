//! Qiniu signing implementation for qsign.
//!
//! This crate generates and verifies the tokens the Qiniu storage API uses
//! to prove possession of a shared secret without transmitting it: QBox (V1)
//! and Qiniu (V2) request tokens, data-carrying upload tokens, and callback
//! verification.
//!
//! ## Overview
//!
//! Qiniu authorization is a keyed hash (HMAC-SHA1, URL-safe base64 encoded)
//! over a deterministic canonicalization of the request. The legacy V1
//! canonicalization covers path, query, and form-encoded bodies; the
//! extended V2 canonicalization additionally binds method, host, and
//! content type. Both funnel into the same keyed-hash primitive.
//!
//! ## Quick Start
//!
//! ```no_run
//! use qsign_core::{Context, Result, Signer};
//! use qsign_qiniu::{RequestSigner, StaticCredentialProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let loader = StaticCredentialProvider::new("access_key", "secret_key");
//!     let builder = RequestSigner::new();
//!     let signer = Signer::new(Context::new(), loader, builder);
//!
//!     let mut parts = http::Request::get("https://rs.qbox.me/stat/ZW5jb2RlZA==")
//!         .body(())
//!         .unwrap()
//!         .into_parts()
//!         .0;
//!
//!     signer.sign(&mut parts, None).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Credential Sources
//!
//! ### Environment Variables
//!
//! ```bash
//! export QINIU_ACCESS_KEY=your-access-key
//! export QINIU_SECRET_KEY=your-secret-key
//! ```
//!
//! ## Lower-level API
//!
//! The [`Authorization`] value type exposes the pure signing operations when
//! you do not need the request-signing orchestration:
//!
//! ```
//! use qsign_qiniu::Authorization;
//!
//! let auth = Authorization::new("access_key", "secret_key");
//!
//! // Download token over an arbitrary byte string.
//! let token = auth.sign(b"https://media.example.com/file?e=1451491200");
//!
//! // Upload token carrying its (encoded) policy payload.
//! let upload_token = auth.sign_with_data(br#"{"scope":"bucket:key"}"#);
//! ```

mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod auth;
pub use auth::Authorization;
pub use auth::SignVersion;

mod sign_request;
pub use sign_request::RequestSigner;

mod provide_credential;
pub use provide_credential::*;
