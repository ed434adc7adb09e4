pub mod index;
pub mod services;

// Re-export all port traits for convenience
pub use index::IndexSyncClient;
pub use services::SyncTriggerService;
