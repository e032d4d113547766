use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use clipboard_rs::common::RustImage;
use clipboard_rs::{Clipboard, ClipboardContent, ClipboardContext, ContentFormat, RustImageData};
use pb_core::clipboard::{ClipboardSelection, MimeBag, MimeType, NativeImage};
use pb_core::ports::{ClipboardError, SystemClipboardPort};
use tracing::{debug, debug_span};

use super::png::{encode_png, IMAGE_PNG};
use super::primary::PrimarySelection;
use crate::capability::ClipboardCapability;

fn map_clipboard_err<T>(
    result: std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
) -> Result<T, ClipboardError> {
    result.map_err(|e| ClipboardError::Backend(e.to_string()))
}

/// Desktop clipboard backed by clipboard-rs.
///
/// The regular clipboard goes through clipboard-rs; the primary selection,
/// where the host has one, is delegated to [`PrimarySelection`].
pub struct ClipboardRsClipboard {
    inner: Mutex<ClipboardContext>,
    primary: Option<PrimarySelection>,
}

impl ClipboardRsClipboard {
    pub fn new(capability: ClipboardCapability) -> Result<Self, ClipboardError> {
        let context = map_clipboard_err(ClipboardContext::new())?;
        let primary = if capability.has_primary_selection() {
            match PrimarySelection::new() {
                Ok(primary) => Some(primary),
                Err(e) => {
                    tracing::warn!(error = %e, "primary selection unavailable");
                    None
                }
            }
        } else {
            None
        };

        Ok(Self {
            inner: Mutex::new(context),
            primary,
        })
    }

    fn context(&self) -> Result<MutexGuard<'_, ClipboardContext>, ClipboardError> {
        self.inner
            .lock()
            .map_err(|_| ClipboardError::Backend("clipboard context lock poisoned".into()))
    }

    fn primary(&self) -> Result<&PrimarySelection, ClipboardError> {
        self.primary
            .as_ref()
            .ok_or(ClipboardError::SelectionUnsupported(ClipboardSelection::Primary))
    }

    fn read_bag(ctx: &mut ClipboardContext) -> Result<MimeBag, ClipboardError> {
        let available = map_clipboard_err(ctx.available_formats())?;
        let mut bag = MimeBag::new();

        if ctx.has(ContentFormat::Text) {
            if let Ok(text) = ctx.get_text() {
                // Host text is taken verbatim; normalization only applies to engine writes.
                bag.set_data(MimeType::text_plain(), text.into_bytes());
            }
        }

        if ctx.has(ContentFormat::Html) {
            if let Ok(html) = ctx.get_html() {
                bag.set_html(&html);
            }
        }

        if ctx.has(ContentFormat::Files) {
            if let Ok(files) = ctx.get_files() {
                let list: String = files.iter().map(|f| format!("{f}\r\n")).collect();
                bag.set_data(MimeType::uri_list(), list.into_bytes());
            }
        }

        if ctx.has(ContentFormat::Image) {
            if let Ok(img) = ctx.get_image() {
                if let Ok(png) = img.to_png() {
                    bag.set_data(IMAGE_PNG, png.get_bytes().to_vec());
                }
            }
        }

        // raw fallback for MIME-named formats the typed getters did not cover
        let seen: HashSet<String> = bag.formats().into_iter().map(|m| m.0).collect();
        for format_id in available {
            if !format_id.contains('/') || seen.contains(&format_id) {
                continue;
            }
            if let Ok(buf) = ctx.get_buffer(&format_id) {
                bag.set_data(format_id, buf);
            }
        }

        Ok(bag)
    }

    fn write_bag(ctx: &mut ClipboardContext, bag: &MimeBag) -> Result<(), ClipboardError> {
        let mut contents = Vec::with_capacity(bag.len());
        for entry in bag.entries() {
            let content = match entry.mime.as_str() {
                "text/plain" => {
                    ClipboardContent::Text(String::from_utf8_lossy(&entry.bytes).into_owned())
                }
                "text/html" => {
                    ClipboardContent::Html(String::from_utf8_lossy(&entry.bytes).into_owned())
                }
                other => ClipboardContent::Other(other.to_string(), entry.bytes.clone()),
            };
            contents.push(content);
        }
        map_clipboard_err(ctx.set(contents))
    }
}

impl SystemClipboardPort for ClipboardRsClipboard {
    fn mime_bag(&self, selection: ClipboardSelection) -> Result<Arc<MimeBag>, ClipboardError> {
        if selection == ClipboardSelection::Primary {
            return self.primary()?.mime_bag().map(Arc::new);
        }

        let span = debug_span!("platform.clipboard_rs.read");
        span.in_scope(|| {
            let mut ctx = self.context()?;
            let bag = Self::read_bag(&mut ctx)?;
            debug!(formats = bag.len(), "captured host clipboard");
            Ok(Arc::new(bag))
        })
    }

    fn set_mime_bag(
        &self,
        selection: ClipboardSelection,
        bag: Option<MimeBag>,
    ) -> Result<(), ClipboardError> {
        if selection == ClipboardSelection::Primary {
            return self.primary()?.set_mime_bag(bag.as_ref());
        }

        let span = debug_span!(
            "platform.clipboard_rs.write",
            formats = bag.as_ref().map_or(0, MimeBag::len),
        );
        span.in_scope(|| {
            let mut ctx = self.context()?;
            match bag {
                Some(bag) if !bag.is_empty() => Self::write_bag(&mut ctx, &bag)?,
                _ => map_clipboard_err(ctx.clear())?,
            }
            debug!("wrote host clipboard");
            Ok(())
        })
    }

    fn set_image(
        &self,
        selection: ClipboardSelection,
        image: &NativeImage,
    ) -> Result<(), ClipboardError> {
        if selection == ClipboardSelection::Primary {
            return self.primary()?.set_image(image);
        }

        let png = encode_png(image)?;
        let data = map_clipboard_err(RustImageData::from_bytes(&png))?;
        let ctx = self.context()?;
        map_clipboard_err(ctx.set_image(data))
    }
}
