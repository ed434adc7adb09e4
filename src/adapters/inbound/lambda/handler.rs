use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent};

use super::event::notification_from_event;
use crate::{domain::models::SyncTriggerOutcome, ports::services::SyncTriggerService};

/// Handles the S3 event delivered by the Lambda runtime.
///
/// Every failure is returned to the runtime, which owns retries and dead-lettering.
#[tracing::instrument(skip_all, fields(request_id = %event.context.request_id))]
pub async fn handler(
    service: &dyn SyncTriggerService,
    event: LambdaEvent<S3Event>,
) -> Result<SyncTriggerOutcome, Error> {
    tracing::debug!(
        record_count = event.payload.records.len(),
        "processing s3 event"
    );

    process_event(service, &event.payload).await
}

/// Runs one S3 event through the sync trigger
pub async fn process_event(
    service: &dyn SyncTriggerService,
    event: &S3Event,
) -> Result<SyncTriggerOutcome, Error> {
    let notification = notification_from_event(event)
        .inspect_err(|err| tracing::error!(error = %err, "malformed s3 event"))?;

    let outcome = service
        .handle_upload(notification)
        .await
        .inspect_err(|err| tracing::error!(error = %err, "failed to start data source sync job"))?;

    Ok(outcome)
}
