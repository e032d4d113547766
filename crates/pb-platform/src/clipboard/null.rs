use std::sync::Arc;

use pb_core::clipboard::{ClipboardSelection, MimeBag, NativeImage};
use pb_core::ports::{ClipboardError, SystemClipboardPort};

/// Host without a clipboard facility: reads are empty, writes vanish.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullClipboard;

impl SystemClipboardPort for NullClipboard {
    fn mime_bag(&self, _selection: ClipboardSelection) -> Result<Arc<MimeBag>, ClipboardError> {
        Ok(Arc::default())
    }

    fn set_mime_bag(
        &self,
        _selection: ClipboardSelection,
        _bag: Option<MimeBag>,
    ) -> Result<(), ClipboardError> {
        Ok(())
    }

    fn set_image(
        &self,
        _selection: ClipboardSelection,
        _image: &NativeImage,
    ) -> Result<(), ClipboardError> {
        Ok(())
    }
}
