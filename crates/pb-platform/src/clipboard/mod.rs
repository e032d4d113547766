mod clipboard_rs;
mod global;
mod in_memory;
mod null;
mod png;
mod primary;

use std::sync::Arc;

use pb_core::ports::{ClipboardError, SystemClipboardPort};

use crate::capability::ClipboardCapability;

pub use clipboard_rs::ClipboardRsClipboard;
pub use global::{install_system_clipboard, system_clipboard};
pub use in_memory::InMemoryClipboard;
pub use null::NullClipboard;
pub use primary::PrimarySelection;

/// Open the real host clipboard for `capability`.
///
/// Hosts without a clipboard service get a [`NullClipboard`].
pub fn open_host_clipboard(
    capability: ClipboardCapability,
) -> Result<Arc<dyn SystemClipboardPort>, ClipboardError> {
    if !capability.has_clipboard() {
        return Ok(Arc::new(NullClipboard));
    }
    Ok(Arc::new(ClipboardRsClipboard::new(capability)?))
}
