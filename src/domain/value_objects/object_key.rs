use crate::domain::errors::ValidationError;

/// Maximum key length accepted by S3, in bytes
const MAX_KEY_BYTES: usize = 1024;

/// A decoded object key in a bucket
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Create a new ObjectKey from an already decoded key
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::EmptyObjectKey);
        }

        if value.len() > MAX_KEY_BYTES {
            return Err(ValidationError::ObjectKeyTooLong {
                actual: value.len(),
                max: MAX_KEY_BYTES,
            });
        }

        Ok(Self(value))
    }

    /// Create an ObjectKey from the form-encoded key carried by S3 event notifications.
    ///
    /// `+` decodes to a space before percent escapes are resolved, so `%2B` still
    /// yields a literal plus. Byte sequences that are not valid UTF-8 after decoding
    /// are replaced with U+FFFD.
    pub fn from_url_encoded(encoded: &str) -> Result<Self, ValidationError> {
        let spaced = encoded.replace('+', " ");
        let bytes = urlencoding::decode_binary(spaced.as_bytes());
        Self::new(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Get the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
