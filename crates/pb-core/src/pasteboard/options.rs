/// Whether a plain-text copy licenses word-boundary-aware replacement on paste.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmartReplaceOption {
    CanSmartReplace,
    CannotSmartReplace,
}

/// Which editor text becomes the `text/plain` representation of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectedTextMode {
    /// Substitute image alt text, as DataTransfer consumers expect.
    IncludeImageAltText,
    /// The visible selected text only.
    DefaultSelectedText,
}

/// A URL handed to the pasteboard by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteboardUrl {
    pub url: String,
    pub title: String,
}

impl PasteboardUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: String::new(),
        }
    }
}

/// Plain text read back from the host clipboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasteboardPlainText {
    pub text: String,
}
