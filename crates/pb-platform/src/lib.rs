//! # pb-platform
//!
//! Host clipboard implementations for the pasteboard adapter.
//!
//! This crate contains the [`SystemClipboardPort`](pb_core::ports::SystemClipboardPort)
//! adapters that talk to the operating system, plus the process-wide facade
//! the engine reaches the host clipboard through.

pub mod capability;
pub mod clipboard;

pub use capability::{detect_clipboard_capability, ClipboardCapability};
pub use clipboard::{
    install_system_clipboard, open_host_clipboard, system_clipboard, ClipboardRsClipboard,
    InMemoryClipboard, NullClipboard,
};
