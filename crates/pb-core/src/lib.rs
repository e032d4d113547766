//! # pb-core
//!
//! Core domain models and ports for the pasteboard adapter.
//!
//! This crate contains pure data and contracts without any host dependencies:
//! the MIME dictionary exchanged with the host clipboard, the pasteboard roles,
//! and the interfaces the web engine and the host have to provide.

pub mod clipboard;
pub mod config;
pub mod pasteboard;
pub mod ports;

// Re-export commonly used types at the crate root
pub use clipboard::{ClipboardSelection, MimeBag, MimeType, NativeImage};
pub use config::PasteboardConfig;
pub use pasteboard::{DragData, PasteboardRole};
pub use ports::{ClipboardError, SystemClipboardPort};
