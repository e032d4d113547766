//! Engine-side markup and selection services consumed by the pasteboard.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotateMode {
    DoNotAnnotate,
    /// Add the styling annotations that keep markup intact across a paste.
    AnnotateForInterchange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlResolution {
    DoNotResolveUrls,
    ResolveNonLocalUrls,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptingPolicy {
    AllowScriptingContent,
    DisallowScriptingAndPluginContent,
}

/// Markup serializer and fragment parser of the engine.
///
/// The DOM handles stay opaque to the pasteboard: it only passes them back
/// into the engine.
pub trait MarkupBridgePort {
    /// A selected DOM range, also used as the context for text fragments.
    type Range;
    type Document;
    /// A detached DOM fragment ready for insertion.
    type Fragment;

    fn serialize(
        &self,
        range: &Self::Range,
        annotate: AnnotateMode,
        urls: UrlResolution,
    ) -> String;

    fn parse_fragment_from_markup(
        &self,
        document: &Self::Document,
        markup: &str,
        base_url: &str,
        policy: ScriptingPolicy,
    ) -> Option<Self::Fragment>;

    fn parse_fragment_from_text(
        &self,
        context: &Self::Range,
        text: &str,
    ) -> Option<Self::Fragment>;
}

/// The frame hosting the selection: its document and editor text.
pub trait FramePort {
    type Document;

    fn document(&self) -> &Self::Document;

    fn selected_text(&self) -> String;

    /// Selected text with images replaced by their alt text.
    fn selected_text_for_data_transfer(&self) -> String;
}
