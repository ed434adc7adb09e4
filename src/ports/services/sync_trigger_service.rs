use crate::domain::{
    errors::SyncResult,
    models::{SyncTarget, SyncTriggerOutcome, UploadNotification},
};
use async_trait::async_trait;

/// Port for the upload-to-sync use case
#[async_trait]
pub trait SyncTriggerService: Send + Sync + 'static {
    /// Log the uploaded objects and start one sync job for the configured target
    async fn handle_upload(
        &self,
        notification: UploadNotification,
    ) -> SyncResult<SyncTriggerOutcome>;

    /// The data source and index this service syncs
    fn target(&self) -> &SyncTarget;
}
