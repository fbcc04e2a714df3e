//! Interpolation between two colors in a chosen space. Hue channels
//! travel along the shorter arc of the circle; every other channel is
//! blended linearly. Alpha always blends linearly regardless of the
//! chosen space.

use num_traits::Float;

use crate::{
    color::{ChannelFlags, Color, Component, Components, Space},
    math::normalize_hue,
};

/// Linear interpolation between two values, with `t` already clamped by
/// the caller.
pub(crate) fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Interpolate between two hue angles along the shorter arc. The delta
/// is folded into a signed offset before blending, so 350 to 10 degrees
/// passes through 0, never the long way around.
pub(crate) fn lerp_hue(a: Component, b: Component, t: Component) -> Component {
    let a = normalize_hue(a);
    let b = normalize_hue(b);

    let delta = ((b - a).rem_euclid(360.0) + 540.0).rem_euclid(360.0) - 180.0;
    normalize_hue(a + delta * t)
}

/// A prepared interpolation from one color to another in a fixed space.
///
/// ```
/// use tinct::{Color, Space};
/// let left = Color::from_rgb(255.0, 0.0, 0.0, 1.0)?;
/// let right = Color::from_rgb(0.0, 0.0, 255.0, 1.0)?;
/// let middle = left.interpolate(&right, Space::Oklab).at(0.5);
/// # let _ = middle;
/// # Ok::<(), tinct::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Interpolation {
    left: Color,
    right: Color,
    space: Space,
    fade_boost: bool,
}

impl Interpolation {
    pub(crate) fn new(left: Color, right: Color, space: Space) -> Self {
        Self {
            left,
            right,
            space,
            fade_boost: false,
        }
    }

    /// Enable the perceptual correction for fade-outs: when the blended
    /// alpha drops below the left color's alpha, the result's Oklch
    /// chroma is boosted by `1 + t`, capped at an absolute ceiling, to
    /// offset the perceived desaturation of a fading color.
    pub fn with_fade_boost(mut self) -> Self {
        self.fade_boost = true;
        self
    }

    /// Evaluate the interpolation at `t`, clamped into [0, 1].
    pub fn at(&self, t: Component) -> Color {
        let t = t.clamp(0.0, 1.0);

        let (left, left_alpha) = self.left.components_in(self.space);
        let (right, right_alpha) = self.right.components_in(self.space);

        let hues = self.space.hue_channels();
        let mix = |flag: ChannelFlags, a: Component, b: Component| {
            if hues.contains(flag) {
                lerp_hue(a, b, t)
            } else {
                lerp(a, b, t)
            }
        };

        let blended = Components(
            mix(ChannelFlags::C0_IS_HUE, left.0, right.0),
            mix(ChannelFlags::C1_IS_HUE, left.1, right.1),
            mix(ChannelFlags::C2_IS_HUE, left.2, right.2),
        );
        let alpha = lerp(left_alpha, right_alpha, t).clamp(0.0, 1.0);

        let color = Color::from_components_in(self.space, blended, alpha);
        if self.fade_boost && alpha < left_alpha {
            boost_chroma(&color, t)
        } else {
            color
        }
    }
}

/// The ceiling for the fade-boosted Oklch chroma.
const CHROMA_CEILING: Component = 0.55;

fn boost_chroma(color: &Color, t: Component) -> Color {
    let oklch = color.oklch();
    let chroma = (oklch.chroma * (1.0 + t)).min(CHROMA_CEILING);

    Color::from_components_in(
        Space::Oklch,
        Components(oklch.lightness, chroma, oklch.hue),
        oklch.alpha,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    const SPACES: [Space; 6] = [
        Space::Rgb,
        Space::Hsv,
        Space::Lab,
        Space::Lch,
        Space::Oklab,
        Space::Oklch,
    ];

    fn assert_close(left: &Color, right: &Color) {
        let a = left.lab();
        let b = right.lab();
        assert_component_eq!(a.lightness / 100.0, b.lightness / 100.0);
        assert_component_eq!(a.a / 100.0, b.a / 100.0);
        assert_component_eq!(a.b / 100.0, b.b / 100.0);
        assert_component_eq!(a.alpha, b.alpha);
    }

    #[test]
    fn interpolating_a_color_with_itself_is_the_identity() {
        let color = Color::from_rgb(210.0, 105.0, 30.0, 0.8).unwrap();

        for space in SPACES {
            let interp = color.interpolate(&color, space);
            for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
                println!("{:?} at {}", space, t);
                assert_close(&interp.at(t), &color);
            }
        }
    }

    #[test]
    fn endpoints_reproduce_the_inputs() {
        let left = Color::from_rgb(210.0, 105.0, 30.0, 1.0).unwrap();
        let right = Color::from_rgb(30.0, 105.0, 210.0, 0.25).unwrap();

        for space in SPACES {
            println!("{:?}", space);
            let interp = left.interpolate(&right, space);
            assert_close(&interp.at(0.0), &left);
            assert_close(&interp.at(1.0), &right);
        }
    }

    #[test]
    fn progress_is_clamped_into_the_unit_interval() {
        let left = Color::from_rgb(255.0, 0.0, 0.0, 1.0).unwrap();
        let right = Color::from_rgb(0.0, 0.0, 255.0, 1.0).unwrap();
        let interp = left.interpolate(&right, Space::Lab);

        assert_close(&interp.at(-1.0), &interp.at(0.0));
        assert_close(&interp.at(2.0), &interp.at(1.0));
    }

    #[test]
    fn rgb_midpoint_is_the_channel_average() {
        let left = Color::from_rgb(50.0, 100.0, 150.0, 1.0).unwrap();
        let right = Color::from_rgb(150.0, 100.0, 50.0, 0.5).unwrap();
        let middle = left.interpolate(&right, Space::Rgb).at(0.5);

        let rgb = middle.rgb();
        approx::assert_abs_diff_eq!(rgb.red, 100.0, epsilon = 1.0e-3);
        approx::assert_abs_diff_eq!(rgb.green, 100.0, epsilon = 1.0e-3);
        approx::assert_abs_diff_eq!(rgb.blue, 100.0, epsilon = 1.0e-3);
        assert_component_eq!(middle.alpha(), 0.75);
    }

    #[test]
    fn hue_interpolation_takes_the_shorter_arc() {
        assert_component_eq!(lerp_hue(350.0, 10.0, 0.5), 0.0);
        assert_component_eq!(lerp_hue(10.0, 350.0, 0.5), 0.0);
        assert_component_eq!(lerp_hue(0.0, 120.0, 0.5), 60.0);
        assert_component_eq!(lerp_hue(350.0, 10.0, 0.25) / 100.0, 3.55);

        let left = Color::from_hsv(350.0, 1.0, 1.0, 1.0).unwrap();
        let right = Color::from_hsv(10.0, 1.0, 1.0, 1.0).unwrap();
        let middle = left.interpolate(&right, Space::Hsv).at(0.5);

        // The blended hue sits at the wraparound point; accept either
        // side of it.
        let hue = middle.hsv().hue;
        let distance = hue.min(360.0 - hue);
        assert!(distance < 1.0e-3, "hue {} is not at the wrap point", hue);
    }

    #[test]
    fn alpha_blends_independently_of_the_space() {
        let left = Color::from_rgb(255.0, 0.0, 0.0, 1.0).unwrap();
        let right = Color::from_rgb(0.0, 255.0, 0.0, 0.0).unwrap();

        for space in SPACES {
            println!("{:?}", space);
            let middle = left.interpolate(&right, space).at(0.5);
            assert_component_eq!(middle.alpha(), 0.5);
        }
    }

    #[test]
    fn fade_boost_raises_chroma_while_fading_out() {
        let left = Color::from_rgb(210.0, 105.0, 30.0, 1.0).unwrap();
        let right = Color::from_rgb(210.0, 105.0, 30.0, 0.0).unwrap();

        let plain = left.interpolate(&right, Space::Oklab).at(0.5);
        let boosted = left
            .interpolate(&right, Space::Oklab)
            .with_fade_boost()
            .at(0.5);

        let expected = (plain.oklch().chroma * 1.5).min(0.55);
        assert_component_eq!(boosted.oklch().chroma, expected);
        assert_component_eq!(boosted.alpha(), 0.5);
    }

    #[test]
    fn fade_boost_is_inert_when_alpha_does_not_drop() {
        let left = Color::from_rgb(210.0, 105.0, 30.0, 0.5).unwrap();
        let right = Color::from_rgb(30.0, 105.0, 210.0, 1.0).unwrap();

        let plain = left.interpolate(&right, Space::Oklab).at(0.5);
        let boosted = left
            .interpolate(&right, Space::Oklab)
            .with_fade_boost()
            .at(0.5);

        assert_close(&plain, &boosted);
    }
}
