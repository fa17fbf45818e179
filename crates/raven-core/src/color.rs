//! Color handling for Raven figures
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Figures are drawn in shades of gray, so the only
//! constructor is [`Color::gray`].

use color::{AlphaColor, DynamicColor, Srgb};

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Creates an opaque gray with the given lightness.
    ///
    /// The lightness is clamped to `0.0..=1.0`, where `0.0` is black and
    /// `1.0` is white. Every channel of the sRGB color receives the same value.
    ///
    /// # Examples
    ///
    /// ```
    /// use raven_core::color::Color;
    ///
    /// let gray = Color::gray(0.5);
    /// assert_eq!(gray.components(), [0.5, 0.5, 0.5, 1.0]);
    /// ```
    pub fn gray(lightness: f32) -> Self {
        let lightness = lightness.clamp(0.0, 1.0);
        let srgb = AlphaColor::<Srgb>::new([lightness, lightness, lightness, 1.0]);
        Self {
            color: DynamicColor::from_alpha_color(srgb),
        }
    }

    /// Returns the raw color components, alpha last.
    pub fn components(&self) -> [f32; 4] {
        self.color.components
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_color_gray_channels() {
        let gray = Color::gray(0.25);
        let [r, g, b, a] = gray.components();

        assert_approx_eq!(f32, r, 0.25);
        assert_approx_eq!(f32, g, 0.25);
        assert_approx_eq!(f32, b, 0.25);
        assert_approx_eq!(f32, a, 1.0);
    }

    #[test]
    fn test_color_gray_is_clamped() {
        assert_eq!(Color::gray(3.0), Color::gray(1.0));
        assert_eq!(Color::gray(-1.0), Color::gray(0.0));
    }
}
