use thiserror::Error;

use crate::clipboard::ClipboardSelection;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("host clipboard is unavailable")]
    Unavailable,

    #[error("{0} selection is not supported by this host")]
    SelectionUnsupported(ClipboardSelection),

    #[error("clipboard backend error: {0}")]
    Backend(String),

    #[error("image error: {0}")]
    Image(String),
}
