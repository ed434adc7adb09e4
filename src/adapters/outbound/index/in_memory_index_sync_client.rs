use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    domain::{
        errors::{SyncError, SyncResult},
        models::{SyncJobStarted, SyncTarget},
    },
    ports::index::IndexSyncClient,
};

/// In-memory implementation of IndexSyncClient for testing and local runs
#[derive(Clone, Default)]
pub struct InMemoryIndexSyncClient {
    data: Arc<RwLock<ClientData>>,
}

#[derive(Default)]
struct ClientData {
    calls: Vec<SyncTarget>,
    // Returned for every call while set
    failure: Option<SyncError>,
}

impl InMemoryIndexSyncClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following call fail with `error`
    pub async fn fail_with(&self, error: SyncError) {
        self.data.write().await.failure = Some(error);
    }

    /// Targets of every call made so far, in order
    pub async fn calls(&self) -> Vec<SyncTarget> {
        self.data.read().await.calls.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.data.read().await.calls.len()
    }
}

#[async_trait]
impl IndexSyncClient for InMemoryIndexSyncClient {
    async fn start_data_source_sync_job(&self, target: &SyncTarget) -> SyncResult<SyncJobStarted> {
        let mut data = self.data.write().await;
        data.calls.push(target.clone());

        if let Some(err) = &data.failure {
            return Err(err.clone());
        }

        let started = SyncJobStarted {
            execution_id: Some(Uuid::new_v4().to_string()),
            request_id: None,
            started_at: chrono::Utc::now(),
        };
        tracing::debug!(?started, "recorded in-memory sync job");

        Ok(started)
    }
}
