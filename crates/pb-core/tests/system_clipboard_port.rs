//! Regression tests for the default methods of [`SystemClipboardPort`].
//!
//! `has_format` and `text` must be answered from a single `mime_bag` read of the
//! requested selection and must never touch the write side.

use std::sync::Arc;

use mockall::{mock, predicate::eq};
use pb_core::clipboard::{ClipboardSelection, MimeBag, NativeImage};
use pb_core::ports::{ClipboardError, SystemClipboardPort};

mock! {
    pub Host {}

    impl SystemClipboardPort for Host {
        fn mime_bag(&self, selection: ClipboardSelection) -> Result<Arc<MimeBag>, ClipboardError>;
        fn set_mime_bag(
            &self,
            selection: ClipboardSelection,
            bag: Option<MimeBag>,
        ) -> Result<(), ClipboardError>;
        fn set_image(
            &self,
            selection: ClipboardSelection,
            image: &NativeImage,
        ) -> Result<(), ClipboardError>;
    }
}

fn bag_with_text(text: &str) -> Arc<MimeBag> {
    let mut bag = MimeBag::new();
    bag.set_text(text);
    Arc::new(bag)
}

#[test]
fn test_has_format_reads_requested_selection_once() {
    let mut host = MockHost::new();
    host.expect_mime_bag()
        .with(eq(ClipboardSelection::Primary))
        .times(1)
        .returning(|_| Ok(bag_with_text("x")));
    host.expect_set_mime_bag().never();

    assert!(host
        .has_format(ClipboardSelection::Primary, "text/plain;charset=utf-8")
        .unwrap());
}

#[test]
fn test_text_defaults_to_bag_text() {
    let mut host = MockHost::new();
    host.expect_mime_bag()
        .times(1)
        .returning(|_| Ok(bag_with_text("hello\u{a0}world")));

    assert_eq!(
        host.text(ClipboardSelection::Clipboard).unwrap(),
        "hello world"
    );
}

#[test]
fn test_read_errors_propagate() {
    let mut host = MockHost::new();
    host.expect_mime_bag()
        .returning(|_| Err(ClipboardError::Unavailable));

    assert!(matches!(
        host.has_format(ClipboardSelection::Clipboard, "text/html"),
        Err(ClipboardError::Unavailable)
    ));
}
