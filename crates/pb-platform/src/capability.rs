//! Platform capability detection for the host clipboard.
//!
//! Detects whether the host has a clipboard service at all, and whether it
//! also offers a primary selection.

/// Represents the clipboard capability of the current host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardCapability {
    /// Regular clipboard plus the X11/Wayland primary selection
    ClipboardAndSelection,
    /// Regular clipboard only (macOS, Windows)
    ClipboardOnly,
    /// No clipboard service reachable (headless Linux, unsupported targets)
    Unavailable,
}

impl ClipboardCapability {
    pub fn has_clipboard(self) -> bool {
        self != ClipboardCapability::Unavailable
    }

    pub fn has_primary_selection(self) -> bool {
        self == ClipboardCapability::ClipboardAndSelection
    }
}

/// Detect the clipboard capability of the current host.
///
/// # Detection Logic
///
/// - **macOS**: Always `ClipboardOnly` (NSPasteboard)
/// - **Windows**: Always `ClipboardOnly` (Win32 clipboard)
/// - **Linux**:
///   - If a display server is reachable (`DISPLAY` or `WAYLAND_DISPLAY`) → `ClipboardAndSelection`
///   - Otherwise → `Unavailable`
/// - **Other**: `Unavailable`
pub fn detect_clipboard_capability() -> ClipboardCapability {
    #[cfg(any(target_os = "macos", target_os = "windows"))]
    {
        return ClipboardCapability::ClipboardOnly;
    }

    #[cfg(target_os = "linux")]
    {
        if has_display_server() {
            tracing::debug!("display server detected, clipboard and primary selection available");
            return ClipboardCapability::ClipboardAndSelection;
        }

        tracing::warn!("no display server detected, host clipboard unavailable");
        ClipboardCapability::Unavailable
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
    {
        tracing::warn!("unsupported platform for the host clipboard");
        ClipboardCapability::Unavailable
    }
}

/// Detect if a Linux display server is reachable.
///
/// X11 exports `DISPLAY`; Wayland compositors export `WAYLAND_DISPLAY`.
/// Either one is enough for a clipboard owner to exist.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn has_display_server() -> bool {
    std::env::var_os("DISPLAY").is_some_and(|v| !v.is_empty())
        || std::env::var_os("WAYLAND_DISPLAY").is_some_and(|v| !v.is_empty())
}
