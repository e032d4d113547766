//! System clipboard port - abstracts the host clipboard service
//!
//! The host exposes up to two selections (see [`ClipboardSelection`]). Every
//! call is synchronous; on some hosts it performs IPC to a clipboard daemon.

use std::sync::Arc;

use crate::clipboard::{ClipboardSelection, MimeBag, NativeImage};
use crate::ports::ClipboardError;

/// Host clipboard facade.
///
/// A host without a clipboard facility implements every method as a no-op and
/// returns an empty bag from reads; that is a capability, not an error.
pub trait SystemClipboardPort: Send + Sync {
    /// Current contents of `selection`, shared read-only with the caller.
    fn mime_bag(&self, selection: ClipboardSelection) -> Result<Arc<MimeBag>, ClipboardError>;

    /// Replace the contents of `selection`.
    ///
    /// The host takes ownership of `bag`. `None` clears the selection.
    fn set_mime_bag(
        &self,
        selection: ClipboardSelection,
        bag: Option<MimeBag>,
    ) -> Result<(), ClipboardError>;

    /// Put a decoded image on `selection`. The pixels are copied.
    fn set_image(
        &self,
        selection: ClipboardSelection,
        image: &NativeImage,
    ) -> Result<(), ClipboardError>;

    fn has_format(
        &self,
        selection: ClipboardSelection,
        mime: &str,
    ) -> Result<bool, ClipboardError> {
        Ok(self.mime_bag(selection)?.has_format(mime))
    }

    fn text(&self, selection: ClipboardSelection) -> Result<String, ClipboardError> {
        Ok(self.mime_bag(selection)?.text())
    }
}
