use serde::{Deserialize, Serialize};

use crate::clipboard::ClipboardSelection;

/// The purpose a pasteboard instance was created for.
///
/// The role fixes which host selection is targeted and who owns the
/// writable bag once the instance goes away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasteboardRole {
    CopyAndPaste,
    GlobalSelection,
    Private,
    DragAndDrop,
}

/// What happens to a staged writable bag when it leaves the instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritableDisposition {
    /// Ownership moves to the host clipboard on commit.
    HandOffToHost,
    /// The instance owns the bag and frees it itself.
    DropLocally,
}

impl PasteboardRole {
    /// Host selection read from and written to by this role.
    pub fn target_selection(self) -> ClipboardSelection {
        match self {
            PasteboardRole::GlobalSelection => ClipboardSelection::Primary,
            PasteboardRole::CopyAndPaste
            | PasteboardRole::Private
            | PasteboardRole::DragAndDrop => ClipboardSelection::Clipboard,
        }
    }

    pub fn writable_disposition(self) -> WritableDisposition {
        match self {
            PasteboardRole::CopyAndPaste | PasteboardRole::GlobalSelection => {
                WritableDisposition::HandOffToHost
            }
            PasteboardRole::Private | PasteboardRole::DragAndDrop => {
                WritableDisposition::DropLocally
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_global_selection_targets_primary() {
        assert_eq!(
            PasteboardRole::GlobalSelection.target_selection(),
            ClipboardSelection::Primary
        );
        for role in [
            PasteboardRole::CopyAndPaste,
            PasteboardRole::Private,
            PasteboardRole::DragAndDrop,
        ] {
            assert_eq!(role.target_selection(), ClipboardSelection::Clipboard);
        }
    }

    #[test]
    fn test_disposition_by_role() {
        assert_eq!(
            PasteboardRole::CopyAndPaste.writable_disposition(),
            WritableDisposition::HandOffToHost
        );
        assert_eq!(
            PasteboardRole::GlobalSelection.writable_disposition(),
            WritableDisposition::HandOffToHost
        );
        assert_eq!(
            PasteboardRole::Private.writable_disposition(),
            WritableDisposition::DropLocally
        );
        assert_eq!(
            PasteboardRole::DragAndDrop.writable_disposition(),
            WritableDisposition::DropLocally
        );
    }
}
