use std::fmt::Debug;
use std::fmt::Formatter;

use qsign_core::utils::Redact;
use qsign_core::SigningCredential;

/// Credential that holds the Qiniu access key and secret key.
///
/// Immutable after construction. The secret key is used only as hashing key
/// material; it is never transmitted, serialized, or logged.
#[derive(Default, Clone)]
pub struct Credential {
    /// Access key for Qiniu services, sent in the clear as token prefix.
    pub access_key: String,
    /// Secret key for Qiniu services.
    pub secret_key: String,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key", &Redact::from(&self.access_key))
            .field("secret_key", &Redact::secret(&self.secret_key))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.access_key.is_empty() && !self.secret_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_never_reveals_secret() {
        let cred = Credential {
            access_key: "2fLHmnbUZXNkTG9pcm92bW93cZkY".to_string(),
            secret_key: "VGhpc0lzVGhlU2VjcmV0S2V5".to_string(),
        };

        let out = format!("{cred:?}");
        // The access key stays distinguishable, the secret key does not
        // leak a single character.
        assert!(out.contains("2fL***ZkY"), "unexpected debug output: {out}");
        assert!(!out.contains("VGh"), "secret leaked into debug output: {out}");
        assert!(!out.contains("2V5"), "secret leaked into debug output: {out}");
    }
}
