//! Maps S3 event notifications onto domain upload notifications.

use aws_lambda_events::event::s3::{S3Event, S3EventRecord};

use crate::domain::{
    errors::ValidationError,
    models::{UploadNotification, UploadedObject},
    value_objects::{BucketName, ObjectKey},
};

/// Errors raised for events that do not describe an uploaded object
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("S3 event contains no records")]
    NoRecords,

    #[error("S3 event record {index} has no bucket name")]
    MissingBucket { index: usize },

    #[error("S3 event record {index} has no object key")]
    MissingKey { index: usize },

    #[error("S3 event record {index} is invalid: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: ValidationError,
    },
}

/// Build an UploadNotification from the usable records of the event.
///
/// Keys are decoded from the form-encoded `key` field. Records that cannot be
/// mapped are skipped; the first of their errors is returned when nothing
/// usable is left.
pub fn notification_from_event(event: &S3Event) -> Result<UploadNotification, EventError> {
    let mut objects = Vec::with_capacity(event.records.len());
    let mut first_error = None;

    for (index, record) in event.records.iter().enumerate() {
        match uploaded_object(index, record) {
            Ok(object) => objects.push(object),
            Err(err) => {
                tracing::warn!(error = %err, "skipping s3 event record");
                first_error.get_or_insert(err);
            }
        }
    }

    UploadNotification::new(objects).map_err(|_| first_error.unwrap_or(EventError::NoRecords))
}

fn uploaded_object(index: usize, record: &S3EventRecord) -> Result<UploadedObject, EventError> {
    let bucket = record
        .s3
        .bucket
        .name
        .clone()
        .ok_or(EventError::MissingBucket { index })?;
    let key = record
        .s3
        .object
        .key
        .as_deref()
        .ok_or(EventError::MissingKey { index })?;

    let invalid = |source| EventError::InvalidRecord { index, source };
    let bucket = BucketName::new(bucket).map_err(invalid)?;
    let key = ObjectKey::from_url_encoded(key).map_err(invalid)?;

    let mut object = UploadedObject::new(bucket, key);
    if let Some(event_name) = &record.event_name {
        object = object.with_event_name(event_name.as_str());
    }
    if let Some(size) = record.s3.object.size.and_then(|s| u64::try_from(s).ok()) {
        object = object.with_size(size);
    }

    Ok(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event_with_records(records: Vec<serde_json::Value>) -> S3Event {
        serde_json::from_value(json!({ "Records": records })).unwrap()
    }

    fn record(bucket: Option<&str>, key: Option<&str>) -> serde_json::Value {
        let mut bucket_json = json!({ "arn": "arn:aws:s3:::docs-bucket" });
        if let Some(name) = bucket {
            bucket_json["name"] = json!(name);
        }
        let mut object_json = json!({ "size": 1024, "eTag": "0123456789abcdef0123456789abcdef" });
        if let Some(key) = key {
            object_json["key"] = json!(key);
        }

        json!({
            "eventVersion": "2.1",
            "eventSource": "aws:s3",
            "awsRegion": "us-east-1",
            "eventTime": "2024-05-01T12:00:00.000Z",
            "eventName": "ObjectCreated:Put",
            "userIdentity": { "principalId": "EXAMPLE" },
            "requestParameters": { "sourceIPAddress": "127.0.0.1" },
            "responseElements": {},
            "s3": {
                "s3SchemaVersion": "1.0",
                "configurationId": "kendra-sync",
                "bucket": bucket_json,
                "object": object_json
            }
        })
    }

    #[test]
    fn test_decodes_key_and_keeps_metadata() {
        let event = event_with_records(vec![record(
            Some("docs-bucket"),
            Some("handbook/team+onboarding%282024%29.pdf"),
        )]);

        let notification = notification_from_event(&event).unwrap();
        let object = &notification.objects()[0];

        assert_eq!(object.bucket.as_str(), "docs-bucket");
        assert_eq!(object.key.as_str(), "handbook/team onboarding(2024).pdf");
        assert_eq!(object.event_name.as_deref(), Some("ObjectCreated:Put"));
        assert_eq!(object.size, Some(1024));
    }

    #[test]
    fn test_all_records_are_mapped() {
        let event = event_with_records(vec![
            record(Some("docs-bucket"), Some("a.txt")),
            record(Some("docs-bucket"), Some("b.txt")),
        ]);

        assert_eq!(notification_from_event(&event).unwrap().len(), 2);
    }

    #[test]
    fn test_empty_event() {
        let event = event_with_records(vec![]);
        assert!(matches!(
            notification_from_event(&event),
            Err(EventError::NoRecords)
        ));
    }

    #[test]
    fn test_unusable_records_are_skipped() {
        let event = event_with_records(vec![
            record(Some("docs-bucket"), Some("a.txt")),
            record(None, Some("b.txt")),
            record(Some("docs-bucket"), None),
        ]);

        let notification = notification_from_event(&event).unwrap();
        assert_eq!(notification.len(), 1);
        assert_eq!(notification.objects()[0].key.as_str(), "a.txt");
    }

    #[test]
    fn test_first_error_when_no_record_is_usable() {
        let event = event_with_records(vec![
            record(Some("docs-bucket"), None),
            record(None, Some("b.txt")),
        ]);
        assert!(matches!(
            notification_from_event(&event),
            Err(EventError::MissingKey { index: 0 })
        ));

        let event = event_with_records(vec![record(None, Some("b.txt"))]);
        assert!(matches!(
            notification_from_event(&event),
            Err(EventError::MissingBucket { index: 0 })
        ));
    }

    #[test]
    fn test_legacy_bucket_name() {
        let event = event_with_records(vec![record(Some("Legacy_Bucket"), Some("a.txt"))]);

        let notification = notification_from_event(&event).unwrap();
        assert_eq!(notification.objects()[0].bucket.as_str(), "Legacy_Bucket");
    }

    #[test]
    fn test_invalid_bucket() {
        let event = event_with_records(vec![record(Some("docs/bucket"), Some("a.txt"))]);
        assert!(matches!(
            notification_from_event(&event),
            Err(EventError::InvalidRecord { index: 0, .. })
        ));
    }
}
