/// Straight-alpha RGBA color.
///
/// Used for clear colors and uniform color values. Channels are not clamped
/// here; the surface clamps out-of-range values on output.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Conversion for wgpu clear-color operations.
    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn constructor_and_array_round_trip() {
        let c = Color::new(0.2, 0.3, 0.3, 1.0);
        assert_eq!(c.to_array(), [0.2, 0.3, 0.3, 1.0]);
    }

    #[test]
    fn opaque_sets_full_alpha() {
        let c = Color::opaque(0.1, 0.2, 0.3);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn wgpu_conversion_widens_channels() {
        let c = Color::new(0.2, 0.3, 0.3, 1.0).to_wgpu();
        assert_relative_eq!(c.r, 0.2, epsilon = 1e-7);
        assert_relative_eq!(c.g, 0.3, epsilon = 1e-7);
        assert_relative_eq!(c.b, 0.3, epsilon = 1e-7);
        assert_eq!(c.a, 1.0);
    }
}
