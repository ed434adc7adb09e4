use aws_sdk_kendra::{
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
    operation::start_data_source_sync_job::StartDataSourceSyncJobError,
};

use crate::domain::{errors::SyncError, models::SyncTarget};

/// Convert an SDK failure of StartDataSourceSyncJob to a domain SyncError
pub(crate) fn map_start_sync_error<R>(
    err: SdkError<StartDataSourceSyncJobError, R>,
    target: &SyncTarget,
) -> SyncError
where
    R: std::fmt::Debug,
{
    match err {
        SdkError::ServiceError(service_err) => from_service_error(service_err.into_err(), target),
        other => SyncError::TransportError {
            message: DisplayErrorContext(&other).to_string(),
        },
    }
}

fn from_service_error(err: StartDataSourceSyncJobError, target: &SyncTarget) -> SyncError {
    let message = err
        .message()
        .map(str::to_string)
        .unwrap_or_else(|| err.to_string());

    if err.is_conflict_exception() || err.is_resource_in_use_exception() {
        SyncError::SyncAlreadyRunning {
            target: target.clone(),
            message,
        }
    } else if err.is_resource_not_found_exception() {
        SyncError::TargetNotFound {
            target: target.clone(),
            message,
        }
    } else if err.is_throttling_exception() {
        SyncError::Throttled { message }
    } else if err.is_access_denied_exception() {
        SyncError::AccessDenied { message }
    } else if err.is_validation_exception() {
        SyncError::InvalidRequest { message }
    } else {
        SyncError::ServiceError {
            code: err.code().map(str::to_string),
            message,
        }
    }
}
