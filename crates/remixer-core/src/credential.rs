//! Credential wrapper for the two external boundaries.
//!
//! The raw value is only reachable through [`ApiKey::expose`]; `Debug` is
//! redacted so a key can sit inside config structs that get logged.

use std::fmt;

use crate::error::CoreError;

#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Validate and wrap a raw key. Surrounding whitespace is trimmed; an
    /// empty key or one containing inner whitespace or control characters
    /// cannot be sent as a header and is rejected.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let key = raw.trim();
        if key.is_empty() {
            return Err(CoreError::InvalidCredential("key is empty".to_string()));
        }
        if key.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(CoreError::InvalidCredential(
                "key contains whitespace or control characters".to_string(),
            ));
        }
        Ok(Self(key.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Short hint safe for logs: first and last four characters.
    pub fn hint(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 8 {
            return "****".to_string();
        }
        let prefix: String = chars[..4].iter().collect();
        let suffix: String = chars[chars.len() - 4..].iter().collect();
        format!("{prefix}...{suffix}")
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}
