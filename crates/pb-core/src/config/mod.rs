//! Configuration DTOs.
mod pasteboard_config;

pub use pasteboard_config::PasteboardConfig;
