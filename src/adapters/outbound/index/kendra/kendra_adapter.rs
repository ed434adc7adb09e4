use async_trait::async_trait;
use aws_sdk_kendra::operation::RequestId;

use super::error::map_start_sync_error;
use crate::{
    domain::{
        errors::SyncResult,
        models::{SyncJobStarted, SyncTarget},
    },
    ports::index::IndexSyncClient,
};

/// Kendra adapter that implements the IndexSyncClient trait
#[derive(Clone, Debug)]
pub struct KendraIndexSyncClient {
    client: aws_sdk_kendra::Client,
}

impl KendraIndexSyncClient {
    pub fn new(client: aws_sdk_kendra::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IndexSyncClient for KendraIndexSyncClient {
    #[tracing::instrument(
        skip_all,
        fields(data_source_id = %target.data_source_id, index_id = %target.index_id)
    )]
    async fn start_data_source_sync_job(&self, target: &SyncTarget) -> SyncResult<SyncJobStarted> {
        let output = self
            .client
            .start_data_source_sync_job()
            .id(target.data_source_id.as_str())
            .index_id(target.index_id.as_str())
            .send()
            .await
            .map_err(|err| map_start_sync_error(err, target))?;

        tracing::info!(response = ?output, "StartDataSourceSyncJob response");

        Ok(SyncJobStarted {
            execution_id: output.execution_id().map(str::to_string),
            request_id: output.request_id().map(str::to_string),
            started_at: chrono::Utc::now(),
        })
    }
}
