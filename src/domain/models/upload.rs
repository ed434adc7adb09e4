use crate::domain::{
    errors::ValidationError,
    value_objects::{BucketName, ObjectKey},
};

/// An object reported by a storage "object created" notification
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedObject {
    pub bucket: BucketName,
    pub key: ObjectKey,
    /// Notification type as reported by the store, e.g. `ObjectCreated:Put`
    pub event_name: Option<String>,
    pub size: Option<u64>,
}

impl UploadedObject {
    pub fn new(bucket: BucketName, key: ObjectKey) -> Self {
        Self {
            bucket,
            key,
            event_name: None,
            size: None,
        }
    }

    pub fn with_event_name(mut self, event_name: impl Into<String>) -> Self {
        self.event_name = Some(event_name.into());
        self
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    /// `s3://bucket/key` form of the location
    pub fn uri(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.key)
    }
}

/// All objects carried by a single triggering event. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadNotification {
    objects: Vec<UploadedObject>,
}

impl UploadNotification {
    pub fn new(objects: Vec<UploadedObject>) -> Result<Self, ValidationError> {
        if objects.is_empty() {
            return Err(ValidationError::EmptyNotification);
        }
        Ok(Self { objects })
    }

    pub fn objects(&self) -> &[UploadedObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
