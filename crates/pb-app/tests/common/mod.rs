//! Hand-written engine fakes shared by the pasteboard integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use pb_app::{HtmlWrapping, PasteboardFactory};
use pb_core::clipboard::NativeImage;
use pb_core::ports::{
    AnnotateMode, CachedImagePort, FramePort, ImageExtractorPort, MarkupBridgePort,
    ScriptingPolicy, UrlResolution,
};
use pb_platform::InMemoryClipboard;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

/// Factory over a fresh in-memory host, without document wrapping.
pub fn factory() -> (Arc<InMemoryClipboard>, PasteboardFactory) {
    init_tracing();
    let host = Arc::new(InMemoryClipboard::new());
    let factory =
        PasteboardFactory::new(host.clone()).with_html_wrapping(HtmlWrapping::Fragment);
    (host, factory)
}

/// A selected range, reduced to the markup it serializes to.
#[derive(Debug, Clone)]
pub struct FakeRange {
    pub markup: String,
}

impl FakeRange {
    pub fn new(markup: &str) -> Self {
        Self {
            markup: markup.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeFragment {
    FromMarkup(String),
    FromText(String),
}

#[derive(Debug, Default)]
pub struct FakeDocument;

/// Markup bridge that records the policies it was called with.
#[derive(Debug, Default)]
pub struct FakeBridge {
    pub last_policy: std::cell::Cell<Option<ScriptingPolicy>>,
    pub last_serialize: std::cell::Cell<Option<(AnnotateMode, UrlResolution)>>,
}

impl MarkupBridgePort for FakeBridge {
    type Range = FakeRange;
    type Document = FakeDocument;
    type Fragment = FakeFragment;

    fn serialize(&self, range: &FakeRange, annotate: AnnotateMode, urls: UrlResolution) -> String {
        self.last_serialize.set(Some((annotate, urls)));
        range.markup.clone()
    }

    fn parse_fragment_from_markup(
        &self,
        _document: &FakeDocument,
        markup: &str,
        _base_url: &str,
        policy: ScriptingPolicy,
    ) -> Option<FakeFragment> {
        self.last_policy.set(Some(policy));
        if markup.contains("<unparseable") {
            return None;
        }
        Some(FakeFragment::FromMarkup(markup.to_string()))
    }

    fn parse_fragment_from_text(&self, _context: &FakeRange, text: &str) -> Option<FakeFragment> {
        Some(FakeFragment::FromText(text.to_string()))
    }
}

#[derive(Debug, Default)]
pub struct FakeFrame {
    pub document: FakeDocument,
    pub selected_text: String,
    pub selected_text_with_alt: String,
}

impl FakeFrame {
    pub fn selecting(text: &str) -> Self {
        Self {
            document: FakeDocument,
            selected_text: text.to_string(),
            selected_text_with_alt: text.to_string(),
        }
    }
}

impl FramePort for FakeFrame {
    type Document = FakeDocument;

    fn document(&self) -> &FakeDocument {
        &self.document
    }

    fn selected_text(&self) -> String {
        self.selected_text.clone()
    }

    fn selected_text_for_data_transfer(&self) -> String {
        self.selected_text_with_alt.clone()
    }
}

#[derive(Debug, Clone)]
pub struct FakeCachedImage {
    pub error: bool,
    pub frame: Option<NativeImage>,
}

impl CachedImagePort for FakeCachedImage {
    fn error_occurred(&self) -> bool {
        self.error
    }

    fn native_image_for_current_frame(&self) -> Option<NativeImage> {
        self.frame.clone()
    }
}

#[derive(Debug, Clone)]
pub enum FakeElement {
    Paragraph,
    Image(Option<FakeCachedImage>),
}

#[derive(Debug, Default)]
pub struct FakeExtractor;

impl ImageExtractorPort for FakeExtractor {
    type Element = FakeElement;
    type Image = FakeCachedImage;

    fn renders_image(&self, element: &FakeElement) -> bool {
        matches!(element, FakeElement::Image(_))
    }

    fn cached_image(&self, element: &FakeElement) -> Option<FakeCachedImage> {
        match element {
            FakeElement::Image(cached) => cached.clone(),
            FakeElement::Paragraph => None,
        }
    }
}

pub fn red_pixel() -> NativeImage {
    NativeImage::new(1, 1, vec![255, 0, 0, 255]).unwrap()
}
