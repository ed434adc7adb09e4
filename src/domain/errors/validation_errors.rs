/// Validation errors for domain value objects
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    // ObjectKey validation errors
    EmptyObjectKey,
    ObjectKeyTooLong {
        actual: usize,
        max: usize,
    },

    // BucketName validation errors
    EmptyBucketName,
    BucketNameTooLong {
        actual: usize,
        max: usize,
    },
    BucketNameInvalidCharacter(char),

    // IndexId validation errors
    IndexIdInvalidLength {
        actual: usize,
        expected: usize,
    },
    IndexIdInvalidStart,
    IndexIdInvalidCharacter(char),

    // DataSourceId validation errors
    EmptyDataSourceId,
    DataSourceIdTooLong {
        actual: usize,
        max: usize,
    },
    DataSourceIdInvalidStart,
    DataSourceIdInvalidCharacter(char),

    // Notification validation errors
    EmptyNotification,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ObjectKey errors
            ValidationError::EmptyObjectKey => write!(f, "Object key cannot be empty"),
            ValidationError::ObjectKeyTooLong { actual, max } => {
                write!(f, "Object key too long: {} bytes (max: {})", actual, max)
            }

            // BucketName errors
            ValidationError::EmptyBucketName => write!(f, "Bucket name cannot be empty"),
            ValidationError::BucketNameTooLong { actual, max } => {
                write!(
                    f,
                    "Bucket name too long: {} characters (max: {})",
                    actual, max
                )
            }
            ValidationError::BucketNameInvalidCharacter(c) => {
                write!(
                    f,
                    "Invalid character in bucket name: '{}'. Only letters, numbers, hyphens, underscores and periods allowed",
                    c
                )
            }

            // IndexId errors
            ValidationError::IndexIdInvalidLength { actual, expected } => {
                write!(
                    f,
                    "Index ID must be exactly {} characters, got {}",
                    expected, actual
                )
            }
            ValidationError::IndexIdInvalidStart => {
                write!(f, "Index ID must start with a letter or number")
            }
            ValidationError::IndexIdInvalidCharacter(c) => {
                write!(f, "Invalid character in index ID: '{}'", c)
            }

            // DataSourceId errors
            ValidationError::EmptyDataSourceId => write!(f, "Data source ID cannot be empty"),
            ValidationError::DataSourceIdTooLong { actual, max } => {
                write!(
                    f,
                    "Data source ID too long: {} characters (max: {})",
                    actual, max
                )
            }
            ValidationError::DataSourceIdInvalidStart => {
                write!(f, "Data source ID must start with a letter or number")
            }
            ValidationError::DataSourceIdInvalidCharacter(c) => {
                write!(f, "Invalid character in data source ID: '{}'", c)
            }

            ValidationError::EmptyNotification => {
                write!(f, "Upload notification must contain at least one object")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
