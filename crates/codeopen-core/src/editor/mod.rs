//! Editor launcher integration.
//!
//! The editor is an external collaborator: it is only ever probed for a
//! running process, asked for its status report, and told to open files.

pub mod errors;
pub mod traits;
pub mod types;
pub mod vscode;

pub use errors::EditorError;
pub use traits::EditorBackend;
pub use types::OpenMode;
pub use vscode::VSCodeBackend;
