/// Viewport size in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// False for zero-area (minimized) or non-finite sizes.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Logical size of a physical extent at `scale_factor`.
    #[inline]
    pub fn from_physical(width: u32, height: u32, scale_factor: f64) -> Self {
        let scale = if scale_factor > 0.0 { scale_factor } else { 1.0 };
        Self::new((width as f64 / scale) as f32, (height as f64 / scale) as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physical_size_is_scaled_down() {
        assert_eq!(Viewport::from_physical(1600, 1200, 2.0), Viewport::new(800.0, 600.0));
        assert_eq!(Viewport::from_physical(800, 600, 1.0), Viewport::new(800.0, 600.0));
    }

    #[test]
    fn non_positive_scale_falls_back_to_one() {
        assert_eq!(Viewport::from_physical(640, 480, 0.0), Viewport::new(640.0, 480.0));
    }

    #[test]
    fn minimized_window_is_invalid() {
        assert!(!Viewport::from_physical(0, 0, 1.0).is_valid());
        assert!(Viewport::from_physical(1, 1, 1.0).is_valid());
    }
}
