use crate::domain::errors::ValidationError;

/// Longest name S3 ever allowed, for legacy us-east-1 buckets
const MAX_BUCKET_NAME_LEN: usize = 255;

/// Name of the bucket an event came from.
///
/// Accepts legacy us-east-1 names as well as current ones: upper case
/// letters, underscores and names up to 255 characters still show up in
/// notifications for buckets created before March 2018.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BucketName(String);

impl BucketName {
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::EmptyBucketName);
        }

        if value.len() > MAX_BUCKET_NAME_LEN {
            return Err(ValidationError::BucketNameTooLong {
                actual: value.len(),
                max: MAX_BUCKET_NAME_LEN,
            });
        }

        for c in value.chars() {
            if !c.is_ascii_alphanumeric() && !matches!(c, '-' | '.' | '_') {
                return Err(ValidationError::BucketNameInvalidCharacter(c));
            }
        }

        Ok(Self(value))
    }

    /// Get the bucket name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BucketName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
