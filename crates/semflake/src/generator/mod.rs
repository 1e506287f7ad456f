mod lock;
mod mutex;
mod status;

pub use lock::*;
pub use status::*;
