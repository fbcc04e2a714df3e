//! Owned per-space snapshots of a color, and their CSS-style notation.
//! A snapshot is computed from the canonical value at the moment it is
//! requested and never aliases the color it came from.

use crate::color::Component;
use crate::math::round_to;

tinct_macros::gen_view! {
    /// A snapshot in gamma-encoded sRGB, channels on the [0, 255] scale.
    pub struct Rgb {
        /// The red channel.
        red: Component,
        /// The green channel.
        green: Component,
        /// The blue channel.
        blue: Component,
    }
}

impl Rgb {
    /// The CSS notation `rgb(r g b / alpha)` with integer channels.
    pub fn css(&self) -> String {
        format!(
            "rgb({} {} {} / {})",
            round_to(self.red, 0),
            round_to(self.green, 0),
            round_to(self.blue, 0),
            round_to(self.alpha, 4),
        )
    }
}

tinct_macros::gen_view! {
    /// A snapshot in HSV over sRGB.
    pub struct Hsv {
        /// The hue angle in degrees, in [0, 360).
        hue: Component,
        /// The saturation, in [0, 1].
        saturation: Component,
        /// The value, in [0, 1].
        value: Component,
    }
}

impl Hsv {
    /// The notation `hsv(h s% v% / alpha)`. HSV has no notation in CSS;
    /// this placeholder form mirrors the modern syntax of the others.
    pub fn css(&self) -> String {
        format!(
            "hsv({} {}% {}% / {})",
            round_to(self.hue, 2),
            round_to(self.saturation * 100.0, 2),
            round_to(self.value * 100.0, 2),
            round_to(self.alpha, 4),
        )
    }
}

tinct_macros::gen_view! {
    /// A snapshot of the canonical CIE-Lab value.
    pub struct Lab {
        /// The lightness, in [0, 100].
        lightness: Component,
        /// The green-red axis.
        a: Component,
        /// The blue-yellow axis.
        b: Component,
    }
}

impl Lab {
    /// The CSS notation `lab(L% a b / alpha)`.
    pub fn css(&self) -> String {
        format!(
            "lab({}% {} {} / {})",
            round_to(self.lightness, 4),
            round_to(self.a, 4),
            round_to(self.b, 4),
            round_to(self.alpha, 4),
        )
    }
}

tinct_macros::gen_view! {
    /// A snapshot in CIE-LCH, the polar form of CIE-Lab.
    pub struct Lch {
        /// The lightness, in [0, 100].
        lightness: Component,
        /// The chroma, never negative.
        chroma: Component,
        /// The hue angle in degrees, in [0, 360).
        hue: Component,
    }
}

impl Lch {
    /// The CSS notation `lch(L% c h / alpha)`.
    pub fn css(&self) -> String {
        format!(
            "lch({}% {} {} / {})",
            round_to(self.lightness, 4),
            round_to(self.chroma, 4),
            round_to(self.hue, 2),
            round_to(self.alpha, 4),
        )
    }
}

tinct_macros::gen_view! {
    /// A snapshot in Oklab.
    pub struct Oklab {
        /// The lightness, in [0, 1].
        lightness: Component,
        /// The green-red axis.
        a: Component,
        /// The blue-yellow axis.
        b: Component,
    }
}

impl Oklab {
    /// The CSS notation `oklab(L% a b / alpha)`; the unit lightness is
    /// rendered as a percentage.
    pub fn css(&self) -> String {
        format!(
            "oklab({}% {} {} / {})",
            round_to(self.lightness * 100.0, 4),
            round_to(self.a, 5),
            round_to(self.b, 5),
            round_to(self.alpha, 4),
        )
    }
}

tinct_macros::gen_view! {
    /// A snapshot in Oklch, the polar form of Oklab.
    pub struct Oklch {
        /// The lightness, in [0, 1].
        lightness: Component,
        /// The chroma, never negative.
        chroma: Component,
        /// The hue angle in degrees, in [0, 360).
        hue: Component,
    }
}

impl Oklch {
    /// The CSS notation `oklch(L% c h / alpha)`; the unit lightness is
    /// rendered as a percentage.
    pub fn css(&self) -> String {
        format!(
            "oklch({}% {} {} / {})",
            round_to(self.lightness * 100.0, 4),
            round_to(self.chroma, 5),
            round_to(self.hue, 2),
            round_to(self.alpha, 4),
        )
    }
}
