//! X11/Wayland primary selection.
//!
//! clipboard-rs only reaches the regular clipboard, so the primary selection
//! goes through arboard's Linux extensions. arboard carries plain text and
//! HTML only; any other key in a committed bag, the smart-paste marker
//! included, is dropped with a warning. Other targets have no primary
//! selection and get an inert stand-in.

use pb_core::clipboard::{MimeBag, MimeType};

/// Keys of `bag` the primary selection cannot carry.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn unsupported_formats(bag: &MimeBag) -> Vec<String> {
    bag.formats()
        .into_iter()
        .filter(|mime| !mime.is_text() && !mime.is_html())
        .map(|mime| mime.0)
        .collect()
}

/// Bag for what the primary selection currently offers.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn bag_from_selection(text: Option<String>, html: Option<String>) -> MimeBag {
    let mut bag = MimeBag::new();
    // Host text is taken verbatim; normalization only applies to engine writes.
    if let Some(text) = text {
        bag.set_data(MimeType::text_plain(), text.into_bytes());
    }
    if let Some(html) = html {
        bag.set_html(&html);
    }
    bag
}

#[cfg(target_os = "linux")]
mod imp {
    use std::borrow::Cow;
    use std::sync::{Mutex, MutexGuard};

    use arboard::{
        ClearExtLinux, Clipboard, GetExtLinux, ImageData, LinuxClipboardKind, SetExtLinux,
    };
    use pb_core::clipboard::{MimeBag, NativeImage};
    use pb_core::ports::ClipboardError;

    use super::{bag_from_selection, unsupported_formats};

    fn map_arboard_err(e: arboard::Error) -> ClipboardError {
        match e {
            arboard::Error::ClipboardNotSupported => ClipboardError::Unavailable,
            other => ClipboardError::Backend(other.to_string()),
        }
    }

    /// An unowned selection, or one without this representation, reads as absent.
    fn optional<T>(result: Result<T, arboard::Error>) -> Result<Option<T>, ClipboardError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(map_arboard_err(e)),
        }
    }

    pub struct PrimarySelection {
        inner: Mutex<Clipboard>,
    }

    impl PrimarySelection {
        pub fn new() -> Result<Self, ClipboardError> {
            let clipboard = Clipboard::new().map_err(map_arboard_err)?;
            Ok(Self {
                inner: Mutex::new(clipboard),
            })
        }

        fn clipboard(&self) -> Result<MutexGuard<'_, Clipboard>, ClipboardError> {
            self.inner
                .lock()
                .map_err(|_| ClipboardError::Backend("primary selection lock poisoned".into()))
        }

        pub fn mime_bag(&self) -> Result<MimeBag, ClipboardError> {
            let mut clipboard = self.clipboard()?;
            let text = optional(clipboard.get().clipboard(LinuxClipboardKind::Primary).text())?;
            let html = optional(clipboard.get().clipboard(LinuxClipboardKind::Primary).html())?;
            Ok(bag_from_selection(text, html))
        }

        pub fn set_mime_bag(&self, bag: Option<&MimeBag>) -> Result<(), ClipboardError> {
            let mut clipboard = self.clipboard()?;
            let Some(bag) = bag.filter(|bag| !bag.is_empty()) else {
                return clipboard
                    .clear_with()
                    .clipboard(LinuxClipboardKind::Primary)
                    .map_err(map_arboard_err);
            };

            let dropped = unsupported_formats(bag);
            if !dropped.is_empty() {
                tracing::warn!(
                    dropped = ?dropped,
                    "primary selection keeps only text and html"
                );
            }

            let text = bag.text();
            if bag.has_html() {
                clipboard
                    .set()
                    .clipboard(LinuxClipboardKind::Primary)
                    .html(bag.html(), Some(text))
                    .map_err(map_arboard_err)
            } else {
                clipboard
                    .set()
                    .clipboard(LinuxClipboardKind::Primary)
                    .text(text)
                    .map_err(map_arboard_err)
            }
        }

        pub fn set_image(&self, image: &NativeImage) -> Result<(), ClipboardError> {
            let data = ImageData {
                width: image.width() as usize,
                height: image.height() as usize,
                bytes: Cow::Borrowed(image.rgba()),
            };
            self.clipboard()?
                .set()
                .clipboard(LinuxClipboardKind::Primary)
                .image(data)
                .map_err(map_arboard_err)
        }
    }
}

#[cfg(not(target_os = "linux"))]
mod imp {
    use pb_core::clipboard::{ClipboardSelection, MimeBag, NativeImage};
    use pb_core::ports::ClipboardError;

    pub struct PrimarySelection;

    impl PrimarySelection {
        pub fn new() -> Result<Self, ClipboardError> {
            Err(ClipboardError::SelectionUnsupported(ClipboardSelection::Primary))
        }

        pub fn mime_bag(&self) -> Result<MimeBag, ClipboardError> {
            Ok(MimeBag::new())
        }

        pub fn set_mime_bag(&self, _bag: Option<&MimeBag>) -> Result<(), ClipboardError> {
            Ok(())
        }

        pub fn set_image(&self, _image: &NativeImage) -> Result<(), ClipboardError> {
            Ok(())
        }
    }
}

pub use imp::PrimarySelection;
