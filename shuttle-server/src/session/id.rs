//! Session identifiers.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;

/// Random bytes behind a session id.
const ID_BYTES: usize = 16;

/// Length of the encoded id: 16 bytes in unpadded base64.
const ID_LEN: usize = 22;

/// Error returned when parsing a malformed session id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid session id: {reason}")]
pub struct InvalidSessionId {
    reason: &'static str,
}

/// An opaque, URL-safe session token.
///
/// Always 22 characters of unpadded base64url encoding 16 random bytes.
/// This type guarantees that any `SessionId` value is well-formed.
///
/// # Examples
///
/// ```
/// use shuttle_server::session::SessionId;
///
/// let id = SessionId::generate();
/// assert_eq!(SessionId::parse(id.as_str()).unwrap(), id);
///
/// assert!(SessionId::parse("not-a-session").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Create a fresh random id.
    pub fn generate() -> Self {
        let mut bytes = [0u8; ID_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);
        SessionId(URL_SAFE_NO_PAD.encode(bytes))
    }

    /// Parse an id received from a client.
    pub fn parse(s: &str) -> Result<Self, InvalidSessionId> {
        if s.len() != ID_LEN {
            return Err(InvalidSessionId {
                reason: "must be exactly 22 characters",
            });
        }

        let decoded = URL_SAFE_NO_PAD.decode(s).map_err(|_| InvalidSessionId {
            reason: "must be unpadded base64url",
        })?;
        if decoded.len() != ID_BYTES {
            return Err(InvalidSessionId {
                reason: "must encode 16 bytes",
            });
        }

        Ok(SessionId(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({})", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_parse() {
        let id = SessionId::generate();
        assert_eq!(id.as_str().len(), ID_LEN);
        assert_eq!(SessionId::parse(id.as_str()), Ok(id));
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(SessionId::generate(), SessionId::generate());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(SessionId::parse("").is_err());
        assert!(SessionId::parse("abc").is_err());
        assert!(SessionId::parse("AAAAAAAAAAAAAAAAAAAAAAA").is_err());
    }

    #[test]
    fn reject_non_base64url() {
        // Right length, but '+' and '/' belong to the standard alphabet
        assert!(SessionId::parse("AAAAAAAAAAAAAAAAAAAA+/").is_err());
        assert!(SessionId::parse("AAAAAAAAAAAAAAAAAAAA==").is_err());
    }

    #[test]
    fn display_and_debug() {
        let id = SessionId::parse("AAAAAAAAAAAAAAAAAAAAAA").unwrap();
        assert_eq!(id.to_string(), "AAAAAAAAAAAAAAAAAAAAAA");
        assert_eq!(format!("{id:?}"), "SessionId(AAAAAAAAAAAAAAAAAAAAAA)");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any 16 bytes encode to an id that parses back unchanged
        #[test]
        fn roundtrip(bytes in any::<[u8; 16]>()) {
            let s = URL_SAFE_NO_PAD.encode(bytes);
            let id = SessionId::parse(&s).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// Strings of any other length are rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Za-z0-9_-]{0,21}|[A-Za-z0-9_-]{23,40}") {
            prop_assert!(SessionId::parse(&s).is_err());
        }
    }
}
