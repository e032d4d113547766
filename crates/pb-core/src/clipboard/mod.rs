//! Clipboard domain models.
mod image;
mod mime;
mod mime_bag;
mod selection;
pub mod smart_paste;
pub mod uri;
pub mod utf16;

pub use image::NativeImage;
pub use mime::MimeType;
pub use mime_bag::{normalize_text, MimeBag, MimeEntry};
pub use selection::ClipboardSelection;

#[cfg(test)]
mod tests;
