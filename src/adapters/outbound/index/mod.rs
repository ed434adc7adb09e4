// Index service implementations
pub mod in_memory_index_sync_client;

// Provider-specific implementations
pub mod kendra;

// Re-export key types
pub use in_memory_index_sync_client::InMemoryIndexSyncClient;
pub use kendra::{create_kendra_client, KendraConfig, KendraIndexSyncClient};
