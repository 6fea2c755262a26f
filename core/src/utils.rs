//! Utility functions and types.

use std::fmt::Debug;

/// Debug formatter for credential material.
///
/// Two kinds of values show up in credential debug output and they have
/// different disclosure rules:
///
/// - **Public identifiers** (access keys): shown with the middle elided, so
///   operators can tell two credentials apart in logs without printing the
///   full key. Values too short to elide safely are hidden entirely.
/// - **Secret key material**: never shown at all, not even partially. Use
///   [`Redact::secret`], which prints a fixed marker and ignores the value.
pub struct Redact<'a> {
    value: &'a str,
    secret: bool,
}

impl<'a> Redact<'a> {
    /// Redaction that reveals nothing about the value, for secret keys.
    ///
    /// Unlike the identifier form, the output carries no length or content
    /// information whatsoever.
    pub fn secret(value: impl Into<Redact<'a>>) -> Self {
        let mut v = value.into();
        v.secret = true;
        v
    }
}

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact {
            value,
            secret: false,
        }
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact::from(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        match value {
            None => Redact::from(""),
            Some(v) => Redact::from(v.as_str()),
        }
    }
}

impl<'a> Debug for Redact<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.secret {
            return f.write_str("***");
        }

        let length = self.value.len();
        if length == 0 {
            f.write_str("EMPTY")
        } else if length < 12 {
            // Too short to elide: showing any part would give away most of it.
            f.write_str("***")
        } else {
            f.write_str(&self.value[..3])?;
            f.write_str("***")?;
            f.write_str(&self.value[length - 3..])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_identifier() {
        let cases = vec![
            // Realistic access-key shape: long enough to elide.
            ("2fLHmnbUZXNkTG9pcm92bW93cZkYtRiwxvnb", "2fL***vnb"),
            ("exactly12chr", "exa***2chr"),
            // Too short to reveal anything.
            ("shortkey", "***"),
            ("", "EMPTY"),
        ];

        for (input, expected) in cases {
            assert_eq!(
                format!("{:?}", Redact::from(input)),
                expected,
                "Failed on input: {}",
                input
            );
        }
    }

    #[test]
    fn test_redact_secret_reveals_nothing() {
        // No prefix, no suffix, no length: every secret looks the same.
        assert_eq!(format!("{:?}", Redact::secret("MY_SECRET_KEY")), "***");
        assert_eq!(format!("{:?}", Redact::secret("x")), "***");
        assert_eq!(format!("{:?}", Redact::secret("")), "***");

        let opt = Some("MY_SECRET_KEY".to_string());
        assert_eq!(format!("{:?}", Redact::secret(&opt)), "***");
    }
}
