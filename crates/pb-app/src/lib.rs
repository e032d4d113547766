//! # pb-app
//!
//! The pasteboard adapter: translates the engine's editing and drag-and-drop
//! operations into MIME bags read from and committed to the host clipboard.
//!
//! Everything runs on the engine's main thread. Host failures are logged and
//! degrade to empty results; nothing here returns an error to the engine.

pub mod pasteboard;

pub use pasteboard::{
    EffectiveBag, HtmlWrapping, PastedFragment, PasteboardFactory, PasteboardInstance,
};
