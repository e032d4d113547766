//! Smart-paste sentinel.
//!
//! A zero-length entry under [`SMART_PASTE_MIME`] tells the next paste that
//! the copy came from an editor that recorded word-boundary context, so the
//! paste site may adjust surrounding whitespace. Absence is the default.

use super::{MimeBag, MimeType};

pub const SMART_PASTE_MIME: &str = "application/vnd.webkit.smartpaste";

pub fn smart_paste_mime() -> MimeType {
    MimeType::from(SMART_PASTE_MIME)
}

pub fn mark(bag: &mut MimeBag) {
    bag.set_data(smart_paste_mime(), Vec::new());
}

pub fn is_marked(bag: &MimeBag) -> bool {
    bag.has_format(SMART_PASTE_MIME)
}
