mod sync_errors;
mod validation_errors;

pub use sync_errors::*;
pub use validation_errors::*;
