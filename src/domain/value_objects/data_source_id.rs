use crate::domain::errors::ValidationError;

const MAX_DATA_SOURCE_ID_LEN: usize = 100;

/// Identifier of a data source connected to a search index
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataSourceId(String);

impl DataSourceId {
    /// Create a new DataSourceId, `[a-zA-Z0-9][a-zA-Z0-9_-]*` up to 100 characters
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::EmptyDataSourceId);
        }

        if value.len() > MAX_DATA_SOURCE_ID_LEN {
            return Err(ValidationError::DataSourceIdTooLong {
                actual: value.len(),
                max: MAX_DATA_SOURCE_ID_LEN,
            });
        }

        if !value
            .chars()
            .next()
            .map_or(false, |c| c.is_ascii_alphanumeric())
        {
            return Err(ValidationError::DataSourceIdInvalidStart);
        }

        for c in value.chars() {
            if !c.is_ascii_alphanumeric() && c != '-' && c != '_' {
                return Err(ValidationError::DataSourceIdInvalidCharacter(c));
            }
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DataSourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
