//! Pasteboard vocabulary shared by the adapter and the engine.
mod drag;
mod options;
mod role;

pub use drag::DragData;
pub use options::{PasteboardPlainText, PasteboardUrl, SelectedTextMode, SmartReplaceOption};
pub use role::{PasteboardRole, WritableDisposition};
