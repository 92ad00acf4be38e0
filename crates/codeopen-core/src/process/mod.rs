pub mod errors;
pub mod operations;

pub use errors::ProcessError;
pub use operations::{find_matching_process, is_pattern_running};
