use crate::domain::{
    errors::SyncResult,
    models::{SyncJobStarted, SyncTarget},
};
use async_trait::async_trait;

/// Port for the managed search index service
/// This abstracts the actual index backend (Kendra, in-memory, etc.)
#[async_trait]
pub trait IndexSyncClient: Send + Sync + 'static {
    /// Start a sync job that re-crawls the data source into its index
    async fn start_data_source_sync_job(&self, target: &SyncTarget) -> SyncResult<SyncJobStarted>;
}
