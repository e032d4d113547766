use crate::clipboard::NativeImage;

/// An entry of the engine image cache.
pub trait CachedImagePort {
    /// The fetch or decode of this image failed.
    fn error_occurred(&self) -> bool;

    /// The decoded frame currently shown, if any.
    fn native_image_for_current_frame(&self) -> Option<NativeImage>;
}

/// Resolves a DOM element to its cached image.
pub trait ImageExtractorPort {
    type Element;
    type Image: CachedImagePort;

    /// Whether `element` is rendered by an image renderer.
    fn renders_image(&self, element: &Self::Element) -> bool;

    fn cached_image(&self, element: &Self::Element) -> Option<Self::Image>;
}
