//! Encode parameters shared by the JPEG and WebP codecs.

/// Encoder quality on the 1-100 scale both codecs use.
///
/// Values outside the range are clamped on construction, so a `Quality` is
/// always valid by the time it reaches an encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Quality(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    /// The hi-res JPEG default.
    fn default() -> Self {
        Quality(85)
    }
}
