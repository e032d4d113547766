use std::collections::HashSet;
use std::path::PathBuf;

use pb_core::clipboard::{smart_paste, uri, utf16, MimeType};
use pb_core::pasteboard::PasteboardPlainText;
use pb_core::ports::{FramePort, MarkupBridgePort, ScriptingPolicy};
use tracing::{debug, debug_span, warn};

use super::PasteboardInstance;

/// Result of turning the host clipboard into a DOM fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PastedFragment<T> {
    pub fragment: Option<T>,
    /// The plain-text path was taken, whether or not it produced a fragment.
    pub chose_plain_text: bool,
}

impl PasteboardInstance {
    /// Host clipboard text for this instance's selection.
    pub fn read_plain_text(&self) -> PasteboardPlainText {
        let selection = self.selection();
        let text = self.clipboard.text(selection).unwrap_or_else(|err| {
            warn!(selection = %selection, error = %err, "failed to read host clipboard text");
            String::new()
        });
        PasteboardPlainText { text }
    }

    /// Build a fragment from the host clipboard, preferring HTML.
    ///
    /// Markup is parsed with scripting and plugin content disallowed. Plain
    /// text is only consulted when `allow_plain_text` is set and the HTML is
    /// missing, empty, or fails to parse.
    pub fn document_fragment<B, F>(
        &self,
        bridge: &B,
        frame: &F,
        context: &B::Range,
        allow_plain_text: bool,
    ) -> PastedFragment<B::Fragment>
    where
        B: MarkupBridgePort,
        F: FramePort<Document = B::Document>,
    {
        let _span = debug_span!("pasteboard.document_fragment", role = ?self.role()).entered();

        let bag = self.host_bag();

        if bag.has_html() {
            let html = bag.html();
            if !html.is_empty() {
                let fragment = bridge.parse_fragment_from_markup(
                    frame.document(),
                    &html,
                    "",
                    ScriptingPolicy::DisallowScriptingAndPluginContent,
                );
                if fragment.is_some() {
                    return PastedFragment {
                        fragment,
                        chose_plain_text: false,
                    };
                }
                debug!("clipboard markup produced no fragment");
            }
        }

        if allow_plain_text && bag.has_text() {
            return PastedFragment {
                fragment: bridge.parse_fragment_from_text(context, &bag.text()),
                chose_plain_text: true,
            };
        }

        PastedFragment {
            fragment: None,
            chose_plain_text: false,
        }
    }

    /// Read `mime` from the effective bag as a string.
    ///
    /// Text and HTML come back through their typed accessors; every other
    /// type is decoded from UTF-16. Missing data yields an empty string.
    pub fn read_string(&self, mime: &str) -> String {
        let Some(bag) = self.clipboard_data() else {
            return String::new();
        };

        let mime_type = MimeType::from(mime);
        if mime_type.is_html() && bag.has_html() {
            return bag.html();
        }
        if mime_type.is_text() && bag.has_text() {
            return bag.text();
        }

        bag.data(mime).map(utf16::decode).unwrap_or_default()
    }

    /// Format keys of the effective bag, first occurrence order, no duplicates.
    pub fn types(&self) -> Vec<String> {
        let Some(bag) = self.clipboard_data() else {
            return Vec::new();
        };

        let mut seen = HashSet::new();
        bag.formats()
            .into_iter()
            .map(|mime| mime.0)
            .filter(|mime| seen.insert(mime.clone()))
            .collect()
    }

    /// Local paths of the `file:` URLs in the effective bag, in order.
    pub fn read_filenames(&self) -> Vec<PathBuf> {
        let Some(bag) = self.clipboard_data() else {
            return Vec::new();
        };

        if !bag.has_urls() {
            return Vec::new();
        }

        bag.urls()
            .iter()
            .filter_map(|url| uri::local_file_path(url))
            .collect()
    }

    pub fn has_data(&self) -> bool {
        self.clipboard_data().is_some_and(|bag| !bag.is_empty())
    }

    /// Whether the last copy on the host selection allows smart replacement.
    ///
    /// Only the live host clipboard is consulted, never a drag bag.
    pub fn can_smart_replace(&self) -> bool {
        let selection = self.selection();
        self.clipboard
            .has_format(selection, smart_paste::SMART_PASTE_MIME)
            .unwrap_or_else(|err| {
                warn!(selection = %selection, error = %err, "failed to query smart paste marker");
                false
            })
    }
}
