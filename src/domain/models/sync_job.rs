use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::value_objects::{DataSourceId, IndexId};

/// The data source and index a sync job runs against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncTarget {
    pub data_source_id: DataSourceId,
    pub index_id: IndexId,
}

impl SyncTarget {
    pub fn new(data_source_id: DataSourceId, index_id: IndexId) -> Self {
        Self {
            data_source_id,
            index_id,
        }
    }
}

/// Response of a successful start-sync request
#[derive(Debug, Clone, PartialEq)]
pub struct SyncJobStarted {
    /// Identifier of the sync job execution, when the service returns one
    pub execution_id: Option<String>,
    /// Request id assigned by the service, for correlation in its logs
    pub request_id: Option<String>,
    pub started_at: DateTime<Utc>,
}

/// Summary of one handled notification, returned to the invoker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyncTriggerOutcome {
    pub data_source_id: String,
    pub index_id: String,
    pub execution_id: Option<String>,
    pub objects: Vec<String>,
}
