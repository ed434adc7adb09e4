use crate::domain::models::SyncTarget;

/// Errors that can occur while starting a data source sync job
#[derive(Debug, Clone)]
pub enum SyncError {
    /// A sync job for the data source is already running
    SyncAlreadyRunning { target: SyncTarget, message: String },

    /// The index or data source does not exist
    TargetNotFound { target: SyncTarget, message: String },

    /// The request was throttled by the service
    Throttled { message: String },

    /// The caller is not allowed to start the sync job
    AccessDenied { message: String },

    /// The service rejected the request parameters
    InvalidRequest { message: String },

    /// Any other error reported by the service
    ServiceError {
        code: Option<String>,
        message: String,
    },

    /// The request never produced a service response (dispatch, timeout, parsing)
    TransportError { message: String },
}

impl std::fmt::Display for SyncError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncError::SyncAlreadyRunning { target, message } => {
                write!(
                    f,
                    "Sync job already running for data source '{}' on index '{}': {}",
                    target.data_source_id, target.index_id, message
                )
            }
            SyncError::TargetNotFound { target, message } => {
                write!(
                    f,
                    "Data source '{}' or index '{}' not found: {}",
                    target.data_source_id, target.index_id, message
                )
            }
            SyncError::Throttled { message } => {
                write!(f, "Sync request throttled: {}", message)
            }
            SyncError::AccessDenied { message } => {
                write!(f, "Access denied starting sync job: {}", message)
            }
            SyncError::InvalidRequest { message } => {
                write!(f, "Invalid sync request: {}", message)
            }
            SyncError::ServiceError { code, message } => match code {
                Some(code) => write!(f, "Index service error ({}): {}", code, message),
                None => write!(f, "Index service error: {}", message),
            },
            SyncError::TransportError { message } => {
                write!(f, "Failed to reach index service: {}", message)
            }
        }
    }
}

impl std::error::Error for SyncError {}

/// Result type for sync operations
pub type SyncResult<T> = Result<T, SyncError>;
