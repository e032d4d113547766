//! Port interfaces for the pasteboard adapter
//!
//! Ports define the contract between the adapter logic and the two worlds it
//! bridges: the host clipboard below it and the web engine above it. This
//! follows Hexagonal Architecture principles, keeping the adapter independent
//! of any particular windowing system or DOM implementation.
//!
//! ## Port Placement Guidelines
//!
//! - Implemented by the host layer (`pb-platform`): [`SystemClipboardPort`].
//! - Implemented by the engine: [`MarkupBridgePort`], [`FramePort`],
//!   [`ImageExtractorPort`], [`CachedImagePort`].

pub mod errors;
mod image_extractor;
mod markup_bridge;
mod system_clipboard;

pub use errors::ClipboardError;
pub use image_extractor::{CachedImagePort, ImageExtractorPort};
pub use markup_bridge::{
    AnnotateMode, FramePort, MarkupBridgePort, ScriptingPolicy, UrlResolution,
};
pub use system_clipboard::SystemClipboardPort;
