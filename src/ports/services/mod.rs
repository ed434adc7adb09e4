mod sync_trigger_service;

pub use sync_trigger_service::SyncTriggerService;
