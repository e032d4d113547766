use serde::{Deserialize, Serialize};
use std::fmt;

/// Which channel of the host clipboard an operation targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipboardSelection {
    /// The regular copy/paste clipboard.
    #[default]
    Clipboard,
    /// The X11/Wayland primary selection (select to copy, middle-click to paste).
    Primary,
}

impl fmt::Display for ClipboardSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardSelection::Clipboard => write!(f, "clipboard"),
            ClipboardSelection::Primary => write!(f, "primary"),
        }
    }
}
