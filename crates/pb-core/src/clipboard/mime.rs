use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

const TEXT_PLAIN: &str = "text/plain";
const TEXT_HTML: &str = "text/html";
const URI_LIST: &str = "text/uri-list";

/// A MIME type key as it appears on the host clipboard, e.g. `text/plain;charset=utf-8`.
///
/// The key is kept verbatim: parameters are never stripped, because arbitrary
/// web-facing types must round-trip under the exact key they were written with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MimeType(pub String);

impl MimeType {
    pub fn text_plain() -> Self {
        Self(TEXT_PLAIN.into())
    }
    pub fn text_html() -> Self {
        Self(TEXT_HTML.into())
    }
    pub fn uri_list() -> Self {
        Self(URI_LIST.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `text/plain` or `text/plain;<params>`.
    pub fn is_text(&self) -> bool {
        is_text_mime_type(&self.0)
    }

    /// `text/html` or `text/html;<params>`.
    pub fn is_html(&self) -> bool {
        is_html_mime_type(&self.0)
    }
}

pub(crate) fn is_text_mime_type(mime: &str) -> bool {
    has_family(mime, TEXT_PLAIN)
}

pub(crate) fn is_html_mime_type(mime: &str) -> bool {
    has_family(mime, TEXT_HTML)
}

fn has_family(mime: &str, family: &str) -> bool {
    mime == family
        || mime
            .strip_prefix(family)
            .is_some_and(|rest| rest.starts_with(';'))
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MimeType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(MimeType(s.to_string()))
    }
}

impl From<&str> for MimeType {
    fn from(s: &str) -> Self {
        MimeType(s.to_string())
    }
}

impl From<String> for MimeType {
    fn from(s: String) -> Self {
        MimeType(s)
    }
}

impl AsRef<str> for MimeType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_family_accepts_parameters() {
        assert!(MimeType::from("text/plain").is_text());
        assert!(MimeType::from("text/plain;charset=utf-8").is_text());
        assert!(!MimeType::from("text/plainish").is_text());
        assert!(!MimeType::from("text/html").is_text());
    }

    #[test]
    fn test_html_family_accepts_parameters() {
        assert!(MimeType::text_html().is_html());
        assert!(MimeType::from("text/html;charset=utf-16").is_html());
        assert!(!MimeType::from("text/htmlx").is_html());
    }

    #[test]
    fn test_from_str_keeps_key_verbatim() {
        let mime = MimeType::from_str("Application/X-Custom; q=1").unwrap();
        assert_eq!(mime.as_str(), "Application/X-Custom; q=1");
    }
}
