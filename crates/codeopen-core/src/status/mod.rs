//! Window classifier: turns the editor's status report into window records.

pub mod parser;
pub mod types;

pub use parser::parse_status_report;
pub use types::{StatusReport, WindowKind, WindowRecord};
