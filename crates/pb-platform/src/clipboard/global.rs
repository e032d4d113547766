//! Process-wide host clipboard.
//!
//! The engine owns one host clipboard per process. Bootstrap installs it
//! once; until then every caller sees a [`NullClipboard`].

use std::sync::Arc;

use once_cell::sync::OnceCell;
use pb_core::ports::SystemClipboardPort;

use super::NullClipboard;

static SYSTEM_CLIPBOARD: OnceCell<Arc<dyn SystemClipboardPort>> = OnceCell::new();

/// Install the process-wide host clipboard. The first install wins.
///
/// Returns `false` if a clipboard was already installed.
pub fn install_system_clipboard(clipboard: Arc<dyn SystemClipboardPort>) -> bool {
    let installed = SYSTEM_CLIPBOARD.set(clipboard).is_ok();
    if !installed {
        tracing::warn!("system clipboard already installed, keeping the first one");
    }
    installed
}

pub fn system_clipboard() -> Arc<dyn SystemClipboardPort> {
    match SYSTEM_CLIPBOARD.get() {
        Some(clipboard) => Arc::clone(clipboard),
        None => Arc::new(NullClipboard),
    }
}
