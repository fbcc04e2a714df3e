//! A [`Color`] holds a single canonical CIE-Lab value plus alpha. Every
//! other supported space is a projection recomputed from the canonical
//! value on each read; writing through any space replaces the whole
//! canonical value at once.

use bitflags::bitflags;

use crate::{
    channel::{self, AlphaValue, ChannelValue},
    convert,
    error::Error,
    interpolate::Interpolation,
    views,
};

#[cfg(not(feature = "f32"))]
/// A 64-bit floating point value that all channels are stored as.
pub type Component = f64;

#[cfg(feature = "f32")]
/// A 32-bit floating point value that all channels are stored as.
pub type Component = f32;

/// Represent the three channels that describe a color in any space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

bitflags! {
    /// Flags marking which channels of a color space hold hue angles,
    /// and therefore interpolate along the shorter arc of the circle
    /// instead of linearly.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct ChannelFlags : u8 {
        /// Set when the first channel of a space is a hue angle.
        const C0_IS_HUE = 1 << 0;
        /// Set when the second channel of a space is a hue angle.
        const C1_IS_HUE = 1 << 1;
        /// Set when the third channel of a space is a hue angle.
        const C2_IS_HUE = 1 << 2;
    }
}

/// The color spaces a [`Color`] can be read and written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Space {
    /// Gamma-encoded sRGB with channels on the [0, 255] scale.
    Rgb,
    /// Hue, saturation and value over gamma-encoded sRGB.
    Hsv,
    /// CIE-Lab, the canonical space.
    Lab,
    /// CIE-LCH, the cylindrical form of CIE-Lab.
    Lch,
    /// Oklab.
    Oklab,
    /// Oklch, the cylindrical form of Oklab.
    Oklch,
}

impl Space {
    /// Return the flags for the channels of this space that hold hue
    /// angles.
    pub fn hue_channels(self) -> ChannelFlags {
        match self {
            Space::Hsv => ChannelFlags::C0_IS_HUE,
            Space::Lch | Space::Oklch => ChannelFlags::C2_IS_HUE,
            Space::Rgb | Space::Lab | Space::Oklab => ChannelFlags::empty(),
        }
    }
}

impl std::fmt::Display for Space {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Space::Rgb => "rgb",
            Space::Hsv => "hsv",
            Space::Lab => "lab",
            Space::Lch => "lch",
            Space::Oklab => "oklab",
            Space::Oklch => "oklch",
        })
    }
}

/// A color stored as a canonical CIE-Lab value plus alpha.
#[derive(Clone, Debug, PartialEq)]
pub struct Color {
    lab: Components,
    alpha: Component,
}

impl Default for Color {
    fn default() -> Self {
        Self::new()
    }
}

impl Color {
    /// Create a fully opaque black, Lab (0, 0, 0).
    pub fn new() -> Self {
        Self {
            lab: Components(0.0, 0.0, 0.0),
            alpha: 1.0,
        }
    }

    /// Return the alpha component of the color.
    pub fn alpha(&self) -> Component {
        self.alpha
    }

    /// Snapshot of this color in gamma-encoded sRGB, channels clamped to
    /// the [0, 255] gamut.
    pub fn rgb(&self) -> views::Rgb {
        let Components(red, green, blue) =
            self.unit_rgb().map(|v| (v * 255.0).clamp(0.0, 255.0));
        views::Rgb::new(red, green, blue, self.alpha)
    }

    /// Snapshot of this color in HSV, computed over the gamut-clamped
    /// sRGB projection.
    pub fn hsv(&self) -> views::Hsv {
        let rgb = self.unit_rgb().map(|v| v.clamp(0.0, 1.0));
        let Components(hue, saturation, value) = convert::rgb_to_hsv(rgb);
        views::Hsv::new(hue, saturation, value, self.alpha)
    }

    /// Snapshot of the canonical CIE-Lab value.
    pub fn lab(&self) -> views::Lab {
        views::Lab::new(self.lab.0, self.lab.1, self.lab.2, self.alpha)
    }

    /// Snapshot of this color in CIE-LCH.
    pub fn lch(&self) -> views::Lch {
        let Components(lightness, chroma, hue) = convert::rectangular_to_polar(self.lab);
        views::Lch::new(lightness, chroma, hue, self.alpha)
    }

    /// Snapshot of this color in Oklab.
    pub fn oklab(&self) -> views::Oklab {
        let linear = convert::xyz_to_linear_srgb(convert::lab_to_xyz(self.lab));
        let Components(lightness, a, b) = convert::linear_srgb_to_oklab(linear);
        views::Oklab::new(lightness, a, b, self.alpha)
    }

    /// Snapshot of this color in Oklch.
    pub fn oklch(&self) -> views::Oklch {
        let Components(lightness, chroma, hue) =
            convert::rectangular_to_polar(self.oklab().components());
        views::Oklch::new(lightness, chroma, hue, self.alpha)
    }

    /// Set this color from gamma-encoded sRGB channels on the [0, 255]
    /// scale. Channels are clamped into the sRGB gamut; percentages
    /// scale the full range.
    pub fn set_rgb(
        &mut self,
        red: impl Into<ChannelValue>,
        green: impl Into<ChannelValue>,
        blue: impl Into<ChannelValue>,
        alpha: impl Into<AlphaValue>,
    ) -> Result<(), Error> {
        let red = channel::byte_scaled("red", red.into())?;
        let green = channel::byte_scaled("green", green.into())?;
        let blue = channel::byte_scaled("blue", blue.into())?;
        let alpha = channel::alpha(alpha.into(), self.alpha)?;

        *self = Self::from_components_in(Space::Rgb, Components(red, green, blue), alpha);
        Ok(())
    }

    /// Set this color from HSV channels. Saturation and value must lie
    /// in [0, 1] or be given as percentages; the hue is normalized into
    /// [0, 360).
    pub fn set_hsv(
        &mut self,
        hue: impl Into<ChannelValue>,
        saturation: impl Into<ChannelValue>,
        value: impl Into<ChannelValue>,
        alpha: impl Into<AlphaValue>,
    ) -> Result<(), Error> {
        let hue = channel::hue("hue", hue.into())?;
        let saturation = channel::unit("saturation", saturation.into())?;
        let value = channel::unit("value", value.into())?;
        let alpha = channel::alpha(alpha.into(), self.alpha)?;

        *self = Self::from_components_in(Space::Hsv, Components(hue, saturation, value), alpha);
        Ok(())
    }

    /// Set the canonical CIE-Lab value directly. A lightness up to 1 is
    /// taken as a fraction of 100; the result is clamped to [0, 100].
    pub fn set_lab(
        &mut self,
        lightness: impl Into<ChannelValue>,
        a: impl Into<ChannelValue>,
        b: impl Into<ChannelValue>,
        alpha: impl Into<AlphaValue>,
    ) -> Result<(), Error> {
        let lightness = channel::cie_lightness("lightness", lightness.into())?;
        let a = channel::unbounded("a", a.into())?;
        let b = channel::unbounded("b", b.into())?;
        let alpha = channel::alpha(alpha.into(), self.alpha)?;

        *self = Self::from_components_in(Space::Lab, Components(lightness, a, b), alpha);
        Ok(())
    }

    /// Set this color from CIE-LCH channels. Negative chroma clamps to
    /// zero; the hue is normalized into [0, 360).
    pub fn set_lch(
        &mut self,
        lightness: impl Into<ChannelValue>,
        chroma: impl Into<ChannelValue>,
        hue: impl Into<ChannelValue>,
        alpha: impl Into<AlphaValue>,
    ) -> Result<(), Error> {
        let lightness = channel::cie_lightness("lightness", lightness.into())?;
        let chroma = channel::chroma("chroma", chroma.into())?;
        let hue = channel::hue("hue", hue.into())?;
        let alpha = channel::alpha(alpha.into(), self.alpha)?;

        *self = Self::from_components_in(Space::Lch, Components(lightness, chroma, hue), alpha);
        Ok(())
    }

    /// Set this color from Oklab channels. The lightness must lie in
    /// [0, 1] or be given as a percentage.
    pub fn set_oklab(
        &mut self,
        lightness: impl Into<ChannelValue>,
        a: impl Into<ChannelValue>,
        b: impl Into<ChannelValue>,
        alpha: impl Into<AlphaValue>,
    ) -> Result<(), Error> {
        let lightness = channel::unit("lightness", lightness.into())?;
        let a = channel::unbounded("a", a.into())?;
        let b = channel::unbounded("b", b.into())?;
        let alpha = channel::alpha(alpha.into(), self.alpha)?;

        *self = Self::from_components_in(Space::Oklab, Components(lightness, a, b), alpha);
        Ok(())
    }

    /// Set this color from Oklch channels. The lightness must lie in
    /// [0, 1] or be given as a percentage; negative chroma clamps to
    /// zero; the hue is normalized into [0, 360).
    pub fn set_oklch(
        &mut self,
        lightness: impl Into<ChannelValue>,
        chroma: impl Into<ChannelValue>,
        hue: impl Into<ChannelValue>,
        alpha: impl Into<AlphaValue>,
    ) -> Result<(), Error> {
        let lightness = channel::unit("lightness", lightness.into())?;
        let chroma = channel::chroma("chroma", chroma.into())?;
        let hue = channel::hue("hue", hue.into())?;
        let alpha = channel::alpha(alpha.into(), self.alpha)?;

        *self = Self::from_components_in(Space::Oklch, Components(lightness, chroma, hue), alpha);
        Ok(())
    }

    /// Create a color from gamma-encoded sRGB channels on the [0, 255]
    /// scale.
    pub fn from_rgb(
        red: impl Into<ChannelValue>,
        green: impl Into<ChannelValue>,
        blue: impl Into<ChannelValue>,
        alpha: impl Into<AlphaValue>,
    ) -> Result<Self, Error> {
        let mut color = Self::new();
        color.set_rgb(red, green, blue, alpha)?;
        Ok(color)
    }

    /// Create a color from HSV channels.
    pub fn from_hsv(
        hue: impl Into<ChannelValue>,
        saturation: impl Into<ChannelValue>,
        value: impl Into<ChannelValue>,
        alpha: impl Into<AlphaValue>,
    ) -> Result<Self, Error> {
        let mut color = Self::new();
        color.set_hsv(hue, saturation, value, alpha)?;
        Ok(color)
    }

    /// Create a color from CIE-Lab channels.
    pub fn from_lab(
        lightness: impl Into<ChannelValue>,
        a: impl Into<ChannelValue>,
        b: impl Into<ChannelValue>,
        alpha: impl Into<AlphaValue>,
    ) -> Result<Self, Error> {
        let mut color = Self::new();
        color.set_lab(lightness, a, b, alpha)?;
        Ok(color)
    }

    /// Create a color from CIE-LCH channels.
    pub fn from_lch(
        lightness: impl Into<ChannelValue>,
        chroma: impl Into<ChannelValue>,
        hue: impl Into<ChannelValue>,
        alpha: impl Into<AlphaValue>,
    ) -> Result<Self, Error> {
        let mut color = Self::new();
        color.set_lch(lightness, chroma, hue, alpha)?;
        Ok(color)
    }

    /// Create a color from Oklab channels.
    pub fn from_oklab(
        lightness: impl Into<ChannelValue>,
        a: impl Into<ChannelValue>,
        b: impl Into<ChannelValue>,
        alpha: impl Into<AlphaValue>,
    ) -> Result<Self, Error> {
        let mut color = Self::new();
        color.set_oklab(lightness, a, b, alpha)?;
        Ok(color)
    }

    /// Create a color from Oklch channels.
    pub fn from_oklch(
        lightness: impl Into<ChannelValue>,
        chroma: impl Into<ChannelValue>,
        hue: impl Into<ChannelValue>,
        alpha: impl Into<AlphaValue>,
    ) -> Result<Self, Error> {
        let mut color = Self::new();
        color.set_oklch(lightness, chroma, hue, alpha)?;
        Ok(color)
    }

    /// Serialize this color in the CSS-style notation of the given
    /// space.
    pub fn css(&self, space: Space) -> String {
        match space {
            Space::Rgb => self.rgb().css(),
            Space::Hsv => self.hsv().css(),
            Space::Lab => self.lab().css(),
            Space::Lch => self.lch().css(),
            Space::Oklab => self.oklab().css(),
            Space::Oklch => self.oklch().css(),
        }
    }

    /// Prepare an interpolation from this color to another in the given
    /// space.
    pub fn interpolate(&self, other: &Self, space: Space) -> Interpolation {
        Interpolation::new(self.clone(), other.clone(), space)
    }

    fn unit_rgb(&self) -> Components {
        convert::gamma_encode(convert::xyz_to_linear_srgb(convert::lab_to_xyz(self.lab)))
    }

    /// Project the color into the given space, returning the raw channel
    /// tuple and alpha the way the space's snapshot exposes them.
    pub(crate) fn components_in(&self, space: Space) -> (Components, Component) {
        let components = match space {
            Space::Rgb => self.rgb().components(),
            Space::Hsv => self.hsv().components(),
            Space::Lab => self.lab,
            Space::Lch => self.lch().components(),
            Space::Oklab => self.oklab().components(),
            Space::Oklch => self.oklch().components(),
        };
        (components, self.alpha)
    }

    /// Build a color from a raw channel tuple in the given space. The
    /// caller is responsible for the tuple being meaningful in that
    /// space; lightness and alpha are clamped to their domains.
    pub(crate) fn from_components_in(
        space: Space,
        components: Components,
        alpha: Component,
    ) -> Self {
        let lab = match space {
            Space::Rgb => {
                let linear = convert::gamma_decode(components.map(|v| v / 255.0));
                convert::xyz_to_lab(convert::linear_srgb_to_xyz(linear))
            }
            Space::Hsv => {
                let linear = convert::gamma_decode(convert::hsv_to_rgb(components));
                convert::xyz_to_lab(convert::linear_srgb_to_xyz(linear))
            }
            Space::Lab => components,
            Space::Lch => convert::polar_to_rectangular(components),
            Space::Oklab => {
                let linear = convert::oklab_to_linear_srgb(components);
                convert::xyz_to_lab(convert::linear_srgb_to_xyz(linear))
            }
            Space::Oklch => {
                let rect = convert::polar_to_rectangular(components);
                let linear = convert::oklab_to_linear_srgb(rect);
                convert::xyz_to_lab(convert::linear_srgb_to_xyz(linear))
            }
        };

        Self {
            lab: Components(lab.0.clamp(0.0, 100.0), lab.1, lab.2),
            alpha: alpha.clamp(0.0, 1.0),
        }
    }
}
