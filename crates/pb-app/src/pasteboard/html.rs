const DOCUMENT_PREFIX: &str =
    "<html><head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\" /></head><body>";
const DOCUMENT_SUFFIX: &str = "</body></html>";

/// How copied interchange markup is laid out under `text/html`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlWrapping {
    /// Store the serialized fragment as is.
    Fragment,
    /// Wrap the fragment in a document whose `<meta>` declares UTF-8.
    ///
    /// Native macOS editors infer the encoding from that tag.
    Utf8Document,
}

impl HtmlWrapping {
    /// The layout native applications on this host expect.
    pub fn for_host() -> Self {
        if cfg!(target_os = "macos") {
            HtmlWrapping::Utf8Document
        } else {
            HtmlWrapping::Fragment
        }
    }

    pub fn from_override(wrap_document: Option<bool>) -> Self {
        match wrap_document {
            Some(true) => HtmlWrapping::Utf8Document,
            Some(false) => HtmlWrapping::Fragment,
            None => Self::for_host(),
        }
    }

    pub(crate) fn apply(self, markup: &str) -> String {
        match self {
            HtmlWrapping::Fragment => markup.to_string(),
            HtmlWrapping::Utf8Document => {
                let mut document =
                    String::with_capacity(DOCUMENT_PREFIX.len() + markup.len() + DOCUMENT_SUFFIX.len());
                document.push_str(DOCUMENT_PREFIX);
                document.push_str(markup);
                document.push_str(DOCUMENT_SUFFIX);
                document
            }
        }
    }
}
