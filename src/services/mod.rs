mod sync_trigger_service_impl;

pub use sync_trigger_service_impl::{SyncTriggerServiceBuilder, SyncTriggerServiceImpl};
