//! End-to-end copy and paste flows against an in-memory host clipboard.

mod common;

use std::path::PathBuf;

use common::{factory, FakeBridge, FakeFragment, FakeFrame, FakeRange};
use pb_core::clipboard::{smart_paste, ClipboardSelection, MimeBag};
use pb_core::pasteboard::{DragData, PasteboardUrl, SelectedTextMode, SmartReplaceOption};
use pb_core::ports::{AnnotateMode, ScriptingPolicy, SystemClipboardPort, UrlResolution};

#[test]
fn plain_copy_normalizes_nbsp_and_is_not_smart() {
    let (host, factory) = factory();

    let pasteboard = factory.create_for_copy_and_paste();
    pasteboard.write_plain_text("hello\u{a0}world", SmartReplaceOption::CannotSmartReplace);

    assert_eq!(
        host.text(ClipboardSelection::Clipboard).unwrap(),
        "hello world"
    );
    assert!(!factory.create_for_copy_and_paste().can_smart_replace());
}

#[test]
fn selection_copy_writes_text_html_and_smart_marker() {
    let (host, factory) = factory();
    let bridge = FakeBridge::default();
    let frame = FakeFrame::selecting("a b");

    let pasteboard = factory.create_for_copy_and_paste();
    pasteboard.write_selection(
        &bridge,
        &FakeRange::new("<i>a b</i>"),
        true,
        &frame,
        SelectedTextMode::IncludeImageAltText,
    );

    let bag = host.mime_bag(ClipboardSelection::Clipboard).unwrap();
    assert_eq!(bag.text(), "a b");
    assert!(bag.html().contains("<i>a b</i>"));
    assert!(smart_paste::is_marked(&bag));
    assert_eq!(
        bridge.last_serialize.get(),
        Some((
            AnnotateMode::AnnotateForInterchange,
            UrlResolution::ResolveNonLocalUrls
        ))
    );
}

#[test]
fn selection_copy_normalizes_nbsp() {
    let (host, factory) = factory();
    let frame = FakeFrame {
        selected_text: "unused".into(),
        selected_text_with_alt: "a\u{a0}b".into(),
        ..FakeFrame::default()
    };

    let pasteboard = factory.create_for_copy_and_paste();
    pasteboard.write_selection(
        &FakeBridge::default(),
        &FakeRange::new("<p>a&nbsp;b</p>"),
        false,
        &frame,
        SelectedTextMode::IncludeImageAltText,
    );

    assert_eq!(host.text(ClipboardSelection::Clipboard).unwrap(), "a b");
    assert_eq!(pasteboard.read_string("text/plain"), "a b");
    assert_eq!(
        host.mime_bag(ClipboardSelection::Clipboard).unwrap().html(),
        "<p>a&nbsp;b</p>"
    );
}

#[test]
fn selection_copy_picks_text_by_mode() {
    let (host, factory) = factory();
    let bridge = FakeBridge::default();
    let frame = FakeFrame {
        selected_text: "plain".into(),
        selected_text_with_alt: "plain [logo]".into(),
        ..FakeFrame::default()
    };

    let pasteboard = factory.create_for_copy_and_paste();
    pasteboard.write_selection(
        &bridge,
        &FakeRange::new("<p>plain</p>"),
        false,
        &frame,
        SelectedTextMode::DefaultSelectedText,
    );
    assert_eq!(host.text(ClipboardSelection::Clipboard).unwrap(), "plain");

    pasteboard.write_selection(
        &bridge,
        &FakeRange::new("<p>plain</p>"),
        false,
        &frame,
        SelectedTextMode::IncludeImageAltText,
    );
    assert_eq!(
        host.text(ClipboardSelection::Clipboard).unwrap(),
        "plain [logo]"
    );
}

#[test]
fn url_copy_writes_text_and_uri_list() {
    let (host, factory) = factory();

    let pasteboard = factory.create_for_copy_and_paste();
    pasteboard.write_url(&PasteboardUrl::new("https://example.org/"));

    let bag = host.mime_bag(ClipboardSelection::Clipboard).unwrap();
    assert_eq!(bag.text(), "https://example.org/");
    assert_eq!(bag.urls(), vec!["https://example.org/".to_string()]);
}

#[test]
fn paste_prefers_html() {
    let (host, factory) = factory();
    let mut bag = MimeBag::new();
    bag.set_html("<b>x</b>");
    bag.set_text("x");
    host.seed(ClipboardSelection::Clipboard, bag).unwrap();

    let bridge = FakeBridge::default();
    let frame = FakeFrame::default();
    let pasted = factory.create_for_copy_and_paste().document_fragment(
        &bridge,
        &frame,
        &FakeRange::new(""),
        true,
    );

    assert_eq!(
        pasted.fragment,
        Some(FakeFragment::FromMarkup("<b>x</b>".into()))
    );
    assert!(!pasted.chose_plain_text);
    assert_eq!(
        bridge.last_policy.get(),
        Some(ScriptingPolicy::DisallowScriptingAndPluginContent)
    );
}

#[test]
fn paste_falls_back_to_plain_text() {
    let (host, factory) = factory();
    let mut bag = MimeBag::new();
    bag.set_text("x");
    host.seed(ClipboardSelection::Clipboard, bag).unwrap();

    let pasted = factory.create_for_copy_and_paste().document_fragment(
        &FakeBridge::default(),
        &FakeFrame::default(),
        &FakeRange::new(""),
        true,
    );

    assert_eq!(pasted.fragment, Some(FakeFragment::FromText("x".into())));
    assert!(pasted.chose_plain_text);
}

#[test]
fn paste_falls_back_when_markup_does_not_parse() {
    let (host, factory) = factory();
    let mut bag = MimeBag::new();
    bag.set_html("<unparseable");
    bag.set_text("x");
    host.seed(ClipboardSelection::Clipboard, bag).unwrap();

    let pasteboard = factory.create_for_copy_and_paste();
    let bridge = FakeBridge::default();
    let frame = FakeFrame::default();

    let pasted = pasteboard.document_fragment(&bridge, &frame, &FakeRange::new(""), true);
    assert_eq!(pasted.fragment, Some(FakeFragment::FromText("x".into())));
    assert!(pasted.chose_plain_text);

    let refused = pasteboard.document_fragment(&bridge, &frame, &FakeRange::new(""), false);
    assert_eq!(refused.fragment, None);
    assert!(!refused.chose_plain_text);
}

#[test]
fn paste_from_empty_clipboard_yields_nothing() {
    let (_host, factory) = factory();

    let pasted = factory.create_for_copy_and_paste().document_fragment(
        &FakeBridge::default(),
        &FakeFrame::default(),
        &FakeRange::new(""),
        true,
    );

    assert_eq!(pasted.fragment, None);
    assert!(!pasted.chose_plain_text);
}

#[test]
fn file_drop_reads_only_local_files() {
    let (_host, factory) = factory();
    let mut bag = MimeBag::new();
    bag.set_urls(&["file:///tmp/a", "https://x"]);
    let drag = DragData::new(bag);

    let target = factory.create_for_drag_and_drop_from(&drag);

    assert_eq!(target.read_filenames(), vec![PathBuf::from("/tmp/a")]);
}

#[test]
fn smart_paste_round_trip() {
    let (_host, factory) = factory();
    let bridge = FakeBridge::default();
    let frame = FakeFrame::selecting("word");

    factory.create_for_copy_and_paste().write_selection(
        &bridge,
        &FakeRange::new("word"),
        true,
        &frame,
        SelectedTextMode::DefaultSelectedText,
    );
    assert!(factory.create_for_copy_and_paste().can_smart_replace());

    factory.create_for_copy_and_paste().write_selection(
        &bridge,
        &FakeRange::new("word"),
        false,
        &frame,
        SelectedTextMode::DefaultSelectedText,
    );
    assert!(!factory.create_for_copy_and_paste().can_smart_replace());

    factory
        .create_for_copy_and_paste()
        .write_plain_text("word", SmartReplaceOption::CanSmartReplace);
    assert!(factory.create_for_copy_and_paste().can_smart_replace());
}

#[test]
fn global_selection_uses_primary() {
    let (host, factory) = factory();
    let mut seeded = MimeBag::new();
    seeded.set_text("selected elsewhere");
    host.seed(ClipboardSelection::Primary, seeded).unwrap();

    let pasteboard = factory.create_for_global_selection();
    assert!(pasteboard.selection_mode());
    assert_eq!(pasteboard.read_plain_text().text, "selected elsewhere");

    pasteboard.write_plain_text("mine", SmartReplaceOption::CannotSmartReplace);
    assert_eq!(host.text(ClipboardSelection::Primary).unwrap(), "mine");
    assert_eq!(host.commit_count(ClipboardSelection::Clipboard), 0);
}
