mod index_sync_client;

pub use index_sync_client::IndexSyncClient;
