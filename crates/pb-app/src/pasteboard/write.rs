use pb_core::clipboard::{smart_paste, utf16, ClipboardSelection, MimeBag, MimeType};
use pb_core::pasteboard::{PasteboardUrl, SelectedTextMode, SmartReplaceOption};
use pb_core::ports::{
    AnnotateMode, CachedImagePort, FramePort, ImageExtractorPort, MarkupBridgePort, UrlResolution,
};
use tracing::{debug, debug_span, warn};

use super::instance::BagSlot;
use super::{HtmlWrapping, PasteboardInstance};

impl PasteboardInstance {
    /// Copy the selected range as plain text plus interchange HTML.
    pub fn write_selection<B, F>(
        &self,
        bridge: &B,
        range: &B::Range,
        can_smart_copy: bool,
        frame: &F,
        text_mode: SelectedTextMode,
    ) where
        B: MarkupBridgePort,
        F: FramePort,
    {
        let _span = debug_span!("pasteboard.write_selection", role = ?self.role()).entered();

        let mut bag = MimeBag::new();

        let text = match text_mode {
            SelectedTextMode::IncludeImageAltText => frame.selected_text_for_data_transfer(),
            SelectedTextMode::DefaultSelectedText => frame.selected_text(),
        };
        bag.set_text(&text);

        let markup = bridge.serialize(
            range,
            AnnotateMode::AnnotateForInterchange,
            UrlResolution::ResolveNonLocalUrls,
        );
        match self.html_wrapping {
            HtmlWrapping::Utf8Document => bag.set_data(
                MimeType::text_html(),
                self.html_wrapping.apply(&markup).into_bytes(),
            ),
            HtmlWrapping::Fragment => bag.set_html(&markup),
        }

        if can_smart_copy {
            smart_paste::mark(&mut bag);
        }

        self.commit(self.selection(), Some(bag));
    }

    pub fn write_plain_text(&self, text: &str, smart_replace: SmartReplaceOption) {
        let mut bag = MimeBag::new();
        bag.set_text(text);
        if smart_replace == SmartReplaceOption::CanSmartReplace {
            smart_paste::mark(&mut bag);
        }
        self.commit(self.selection(), Some(bag));
    }

    /// Copy a single URL as text and as a one-entry URI list.
    pub fn write_url(&self, url: &PasteboardUrl) {
        debug_assert!(!url.url.is_empty(), "write_url requires a non-empty URL");
        if url.url.is_empty() {
            warn!("ignoring write of an empty URL");
            return;
        }

        let mut bag = MimeBag::new();
        bag.set_text(&url.url);
        bag.set_urls(&[url.url.as_str()]);
        self.commit(self.selection(), Some(bag));
    }

    /// Put the decoded image of `element` on the clipboard selection.
    ///
    /// Elements without an image renderer, cache misses, cache errors and
    /// frames without a native image are all silent no-ops.
    pub fn write_image<X>(&self, extractor: &X, element: &X::Element)
    where
        X: ImageExtractorPort,
    {
        if !extractor.renders_image(element) {
            return;
        }

        let Some(cached) = extractor.cached_image(element) else {
            debug!("no cached image for element");
            return;
        };
        if cached.error_occurred() {
            debug!("cached image reported an error");
            return;
        }

        let Some(image) = cached.native_image_for_current_frame() else {
            debug!("cached image has no native frame");
            return;
        };

        // Images always go to the clipboard, never the primary selection.
        if let Err(err) = self
            .clipboard
            .set_image(ClipboardSelection::Clipboard, &image)
        {
            warn!(error = %err, "failed to write image to host clipboard");
        }
    }

    /// Stage `data` under `mime` for a web-facing `setData` call.
    ///
    /// This only touches the local writable bag; nothing reaches the host.
    pub fn write_string(&mut self, mime: &str, data: &str) {
        if matches!(self.slot, BagSlot::Snapshot(_) | BagSlot::Host) {
            debug!(role = ?self.role(), "staging a writable bag over the read source");
            self.slot = BagSlot::Empty;
        }
        if let BagSlot::Empty = self.slot {
            self.slot = BagSlot::Writable(MimeBag::new());
        }
        let BagSlot::Writable(bag) = &mut self.slot else {
            return;
        };

        let mime_type = MimeType::from(mime);
        if mime_type.is_text() {
            bag.set_text(data);
        } else if mime_type.is_html() {
            bag.set_html(data);
        } else {
            bag.set_data(mime_type, utf16::encode(data));
        }
    }

    /// Publish the bag of `source` on the clipboard selection.
    pub fn write_pasteboard(&self, source: &PasteboardInstance) {
        let bag = source.clipboard_data().map(|bag| MimeBag::clone(&bag));
        self.commit(ClipboardSelection::Clipboard, bag);
    }
}
