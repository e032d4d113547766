use std::sync::Arc;

use pb_core::clipboard::MimeBag;
use pb_core::pasteboard::{DragData, PasteboardRole};
use pb_core::ports::SystemClipboardPort;

use super::{HtmlWrapping, PasteboardInstance};

/// Creates pasteboard instances bound to one host clipboard.
#[derive(Clone)]
pub struct PasteboardFactory {
    clipboard: Arc<dyn SystemClipboardPort>,
    html_wrapping: HtmlWrapping,
}

impl PasteboardFactory {
    pub fn new(clipboard: Arc<dyn SystemClipboardPort>) -> Self {
        Self {
            clipboard,
            html_wrapping: HtmlWrapping::for_host(),
        }
    }

    pub fn with_html_wrapping(mut self, html_wrapping: HtmlWrapping) -> Self {
        self.html_wrapping = html_wrapping;
        self
    }

    pub fn clipboard(&self) -> &Arc<dyn SystemClipboardPort> {
        &self.clipboard
    }

    /// Reads the clipboard selection live.
    pub fn create_for_copy_and_paste(&self) -> PasteboardInstance {
        self.create(PasteboardRole::CopyAndPaste, None)
    }

    /// Like copy and paste, but on the host's primary selection.
    pub fn create_for_global_selection(&self) -> PasteboardInstance {
        self.create(PasteboardRole::GlobalSelection, None)
    }

    /// Engine-local staging with nothing to read.
    pub fn create_private(&self) -> PasteboardInstance {
        self.create(PasteboardRole::Private, None)
    }

    /// Drag source side: nothing to read yet.
    pub fn create_for_drag_and_drop(&self) -> PasteboardInstance {
        self.create(PasteboardRole::DragAndDrop, None)
    }

    /// Drop target side: reads the bag carried by `drag_data`.
    pub fn create_for_drag_and_drop_from(&self, drag_data: &DragData) -> PasteboardInstance {
        self.create(PasteboardRole::DragAndDrop, Some(drag_data.platform_data()))
    }

    fn create(
        &self,
        role: PasteboardRole,
        readable: Option<Arc<MimeBag>>,
    ) -> PasteboardInstance {
        PasteboardInstance::create(
            Arc::clone(&self.clipboard),
            role,
            readable,
            self.html_wrapping,
        )
    }
}
