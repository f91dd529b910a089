/// Window size in logical pixels.
///
/// Replaced wholesale on every resize; nothing mutates it in place.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True for a positive, finite size. Minimized windows report zero.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_size_is_valid() {
        assert!(Viewport::new(800.0, 600.0).is_valid());
    }

    #[test]
    fn zero_or_non_finite_is_invalid() {
        assert!(!Viewport::new(0.0, 600.0).is_valid());
        assert!(!Viewport::new(800.0, 0.0).is_valid());
        assert!(!Viewport::new(f64::INFINITY, 600.0).is_valid());
        assert!(!Viewport::new(800.0, f64::NAN).is_valid());
    }
}
