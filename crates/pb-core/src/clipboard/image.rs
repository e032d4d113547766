use crate::ports::ClipboardError;

/// A decoded frame handed to the host clipboard, as tightly packed RGBA8.
///
/// The host copies the pixels at the boundary; the caller keeps its image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeImage {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl NativeImage {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, ClipboardError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(|| ClipboardError::Image(format!("{width}x{height} overflows")))?;

        if rgba.len() != expected {
            return Err(ClipboardError::Image(format!(
                "expected {expected} bytes for {width}x{height} RGBA, got {}",
                rgba.len()
            )));
        }

        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_mismatched_buffer() {
        assert!(NativeImage::new(2, 2, vec![0; 15]).is_err());
        assert!(NativeImage::new(2, 2, vec![0; 16]).is_ok());
    }
}
