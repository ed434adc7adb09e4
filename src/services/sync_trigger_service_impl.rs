use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    domain::{
        errors::SyncResult,
        models::{SyncTarget, SyncTriggerOutcome, UploadNotification},
    },
    ports::{index::IndexSyncClient, services::SyncTriggerService},
};

/// Implementation of SyncTriggerService that re-syncs one data source per notification
#[derive(Clone)]
pub struct SyncTriggerServiceImpl {
    client: Arc<dyn IndexSyncClient>,
    target: SyncTarget,
}

impl SyncTriggerServiceImpl {
    /// Create a new SyncTriggerServiceImpl instance
    pub fn new(client: Arc<dyn IndexSyncClient>, target: SyncTarget) -> Self {
        Self { client, target }
    }
}

#[async_trait]
impl SyncTriggerService for SyncTriggerServiceImpl {
    #[tracing::instrument(skip_all, fields(object_count = notification.len()))]
    async fn handle_upload(
        &self,
        notification: UploadNotification,
    ) -> SyncResult<SyncTriggerOutcome> {
        for object in notification.objects() {
            tracing::info!(
                bucket = %object.bucket,
                key = %object.key,
                event_name = object.event_name.as_deref(),
                size = object.size,
                "Received {} PUT notification",
                object.uri()
            );
        }

        // One sync covers every object in the event; the job re-crawls the whole source.
        let started = self.client.start_data_source_sync_job(&self.target).await?;

        tracing::info!(
            data_source_id = %self.target.data_source_id,
            index_id = %self.target.index_id,
            execution_id = started.execution_id.as_deref(),
            request_id = started.request_id.as_deref(),
            started_at = %started.started_at,
            "data source sync job started"
        );

        Ok(SyncTriggerOutcome {
            data_source_id: self.target.data_source_id.to_string(),
            index_id: self.target.index_id.to_string(),
            execution_id: started.execution_id,
            objects: notification.objects().iter().map(|o| o.uri()).collect(),
        })
    }

    fn target(&self) -> &SyncTarget {
        &self.target
    }
}

/// Builder for SyncTriggerServiceImpl
pub struct SyncTriggerServiceBuilder {
    client: Option<Arc<dyn IndexSyncClient>>,
    target: Option<SyncTarget>,
}

impl SyncTriggerServiceBuilder {
    pub fn new() -> Self {
        Self {
            client: None,
            target: None,
        }
    }

    pub fn client(mut self, client: Arc<dyn IndexSyncClient>) -> Self {
        self.client = Some(client);
        self
    }

    pub fn target(mut self, target: SyncTarget) -> Self {
        self.target = Some(target);
        self
    }

    pub fn build(self) -> Result<SyncTriggerServiceImpl, &'static str> {
        let client = self.client.ok_or("Index sync client is required")?;
        let target = self.target.ok_or("Sync target is required")?;

        Ok(SyncTriggerServiceImpl::new(client, target))
    }
}

impl Default for SyncTriggerServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
