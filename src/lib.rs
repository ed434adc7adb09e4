pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;
pub mod telemetry;

// Re-export key types for convenience

// Domain types - core entities and value objects
pub use domain::{
    // Value objects
    BucketName,
    DataSourceId,
    IndexId,
    ObjectKey,
    // Errors
    SyncError,
    SyncJobStarted,
    SyncResult,
    // Models
    SyncTarget,
    SyncTriggerOutcome,
    UploadNotification,
    UploadedObject,
    ValidationError,
};

// Port types - interfaces for external systems
pub use ports::{IndexSyncClient, SyncTriggerService};

// Service implementations - business logic
pub use services::{SyncTriggerServiceBuilder, SyncTriggerServiceImpl};

// Application factory and configuration
pub use app::{create_in_memory_app, AppBuilder, AppConfig, AppError, AppServices, SyncBackend};

// Adapter types - infrastructure implementations
pub use adapters::inbound::lambda::{handler, notification_from_event, process_event, EventError};
pub use adapters::outbound::index::{InMemoryIndexSyncClient, KendraConfig, KendraIndexSyncClient};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        create_in_memory_app, handler, AppBuilder, AppConfig, AppServices, BucketName,
        DataSourceId, InMemoryIndexSyncClient, IndexId, IndexSyncClient, ObjectKey, SyncBackend,
        SyncTarget, SyncTriggerService, SyncTriggerServiceImpl,
    };
}
