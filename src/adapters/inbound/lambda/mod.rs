pub mod event;
pub mod handler;

pub use event::{notification_from_event, EventError};
pub use handler::{handler, process_event};
