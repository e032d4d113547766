//! MIME-keyed payload container exchanged with the host clipboard.
//!
//! A [`MimeBag`] is the unit the pasteboard reads from and commits to the host:
//! one copy operation produces one bag holding every representation of the
//! copied content (plain text, HTML, URI list, arbitrary web types).
//!
//! Keys are unique and enumerate in insertion order. Typed accessors for plain
//! text and HTML match stored keys by family, so a bag holding
//! `text/plain;charset=utf-8` answers `has_text()`.

use serde::{Deserialize, Serialize};

use super::mime::{is_html_mime_type, is_text_mime_type, MimeType};

const NO_BREAK_SPACE: char = '\u{a0}';

/// Replace every NO-BREAK SPACE with an ordinary space.
///
/// Non-breaking spaces inserted by the editor for layout must not leak into
/// plain-text consumers; nothing else in the string is touched.
pub fn normalize_text(text: &str) -> String {
    text.replace(NO_BREAK_SPACE, " ")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MimeEntry {
    pub mime: MimeType,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MimeBag {
    entries: Vec<MimeEntry>,
}

impl MimeBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `bytes` under the exact key `mime`.
    ///
    /// Replacing an existing key keeps its original position in [`formats`](Self::formats).
    pub fn set_data(&mut self, mime: impl Into<MimeType>, bytes: Vec<u8>) {
        let mime = mime.into();
        match self.entries.iter_mut().find(|entry| entry.mime == mime) {
            Some(entry) => entry.bytes = bytes,
            None => self.entries.push(MimeEntry { mime, bytes }),
        }
    }

    /// Store plain text under `text/plain`, with U+00A0 replaced by U+0020.
    pub fn set_text(&mut self, text: &str) {
        self.set_data(MimeType::text_plain(), normalize_text(text).into_bytes());
    }

    pub fn set_html(&mut self, html: &str) {
        self.set_data(MimeType::text_html(), html.as_bytes().to_vec());
    }

    /// Store `urls` as a `text/uri-list`.
    ///
    /// When no plain text is present yet, the first URL also becomes the
    /// `text/plain` representation so text-only consumers still get something.
    pub fn set_urls<S: AsRef<str>>(&mut self, urls: &[S]) {
        let mut list = String::new();
        for url in urls {
            list.push_str(url.as_ref());
            list.push_str("\r\n");
        }
        self.set_data(MimeType::uri_list(), list.into_bytes());

        if !self.has_text() {
            if let Some(first) = urls.first() {
                self.set_text(first.as_ref());
            }
        }
    }

    /// Remove the entry stored under the exact key `mime`.
    ///
    /// Returns `true` if an entry was removed.
    pub fn remove_format(&mut self, mime: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.mime.as_str() != mime);
        self.entries.len() != before
    }

    pub fn has_format(&self, mime: &str) -> bool {
        self.position(mime).is_some()
    }

    pub fn has_text(&self) -> bool {
        self.entries.iter().any(|entry| entry.mime.is_text())
    }

    pub fn has_html(&self) -> bool {
        self.entries.iter().any(|entry| entry.mime.is_html())
    }

    pub fn has_urls(&self) -> bool {
        self.position(MimeType::uri_list().as_str()).is_some()
    }

    /// Plain text, or an empty string when no text representation exists.
    pub fn text(&self) -> String {
        self.family_string(is_text_mime_type)
    }

    /// HTML, or an empty string when no HTML representation exists.
    pub fn html(&self) -> String {
        self.family_string(is_html_mime_type)
    }

    /// URIs of the `text/uri-list` representation, in order.
    ///
    /// Blank lines and `#` comment lines are skipped.
    pub fn urls(&self) -> Vec<String> {
        let Some(bytes) = self.data(MimeType::uri_list().as_str()) else {
            return Vec::new();
        };

        String::from_utf8_lossy(bytes)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect()
    }

    /// The stored bytes for `mime`, without any encoding conversion.
    ///
    /// An exact key wins; a `text/plain` or `text/html` query falls back to any
    /// stored key of the same family.
    pub fn data(&self, mime: &str) -> Option<&[u8]> {
        self.position(mime)
            .map(|index| self.entries[index].bytes.as_slice())
    }

    /// Present format keys, in insertion order.
    pub fn formats(&self) -> Vec<MimeType> {
        self.entries.iter().map(|entry| entry.mime.clone()).collect()
    }

    pub fn entries(&self) -> impl Iterator<Item = &MimeEntry> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn position(&self, mime: &str) -> Option<usize> {
        if let Some(index) = self.entries.iter().position(|e| e.mime.as_str() == mime) {
            return Some(index);
        }

        let family: fn(&str) -> bool = if is_text_mime_type(mime) {
            is_text_mime_type
        } else if is_html_mime_type(mime) {
            is_html_mime_type
        } else {
            return None;
        };
        self.entries.iter().position(|e| family(e.mime.as_str()))
    }

    fn family_string(&self, family: fn(&str) -> bool) -> String {
        self.entries
            .iter()
            .find(|entry| family(entry.mime.as_str()))
            .map(|entry| String::from_utf8_lossy(&entry.bytes).into_owned())
            .unwrap_or_default()
    }
}
