pub mod sync_job;
pub mod upload;

pub use sync_job::*;
pub use upload::*;
