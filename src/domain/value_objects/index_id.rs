use crate::domain::errors::ValidationError;

const INDEX_ID_LEN: usize = 36;

/// Identifier of a search index
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndexId(String);

impl IndexId {
    /// Create a new IndexId, `[a-zA-Z0-9][a-zA-Z0-9-]*` with a fixed length of 36
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.len() != INDEX_ID_LEN {
            return Err(ValidationError::IndexIdInvalidLength {
                actual: value.len(),
                expected: INDEX_ID_LEN,
            });
        }

        if !value
            .chars()
            .next()
            .map_or(false, |c| c.is_ascii_alphanumeric())
        {
            return Err(ValidationError::IndexIdInvalidStart);
        }

        if let Some(c) = value
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && *c != '-')
        {
            return Err(ValidationError::IndexIdInvalidCharacter(c));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IndexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
