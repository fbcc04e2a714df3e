//! Typed channel arguments and their validation at the mutation
//! boundary. Every setter argument is either a plain number or a value
//! explicitly tagged as a percentage; validation happens once, here,
//! before any canonical state is replaced.

use crate::{
    color::Component,
    error::Error,
    math::normalize_hue,
};

/// A channel argument: a plain number on the channel's own scale, or a
/// percentage on the 0..100 scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChannelValue {
    /// A plain number, interpreted on the channel's own scale.
    Number(Component),
    /// A percentage, interpreted on the 0..100 scale.
    Percent(Component),
}

/// Tag a channel argument as a percentage.
///
/// ```
/// use tinct::{Color, Percent};
/// let color = Color::from_hsv(120.0, Percent(50.0), 0.25, 1.0)?;
/// assert!((color.hsv().saturation - 0.5).abs() < 1.0e-6);
/// # Ok::<(), tinct::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Percent(pub Component);

impl From<Component> for ChannelValue {
    fn from(value: Component) -> Self {
        Self::Number(value)
    }
}

impl From<Percent> for ChannelValue {
    fn from(value: Percent) -> Self {
        Self::Percent(value.0)
    }
}

/// An alpha argument for the setters; an absent value keeps the current
/// alpha of the color being mutated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlphaValue(Option<ChannelValue>);

impl From<Component> for AlphaValue {
    fn from(value: Component) -> Self {
        Self(Some(ChannelValue::Number(value)))
    }
}

impl From<Percent> for AlphaValue {
    fn from(value: Percent) -> Self {
        Self(Some(ChannelValue::Percent(value.0)))
    }
}

impl From<Option<Component>> for AlphaValue {
    fn from(value: Option<Component>) -> Self {
        Self(value.map(ChannelValue::Number))
    }
}

fn finite(field: &'static str, value: ChannelValue) -> Result<ChannelValue, Error> {
    let raw = match value {
        ChannelValue::Number(v) | ChannelValue::Percent(v) => v,
    };

    if raw.is_finite() {
        Ok(value)
    } else {
        Err(Error::TypeMismatch { field })
    }
}

/// Validate a channel constrained to [0, 1]; percentages scale down.
pub(crate) fn unit(field: &'static str, value: ChannelValue) -> Result<Component, Error> {
    match finite(field, value)? {
        ChannelValue::Number(v) => {
            if (0.0..=1.0).contains(&v) {
                Ok(v)
            } else {
                Err(Error::Range { field, value: v })
            }
        }
        ChannelValue::Percent(v) => {
            if (0.0..=100.0).contains(&v) {
                Ok(v / 100.0)
            } else {
                Err(Error::Range { field, value: v })
            }
        }
    }
}

/// Validate a hue angle: any finite number of degrees, normalized into
/// [0, 360). There is no percentage form for angles.
pub(crate) fn hue(field: &'static str, value: ChannelValue) -> Result<Component, Error> {
    match finite(field, value)? {
        ChannelValue::Number(v) => Ok(normalize_hue(v)),
        ChannelValue::Percent(_) => Err(Error::TypeMismatch { field }),
    }
}

/// Validate a chroma: negative values clamp to zero instead of being
/// rejected.
pub(crate) fn chroma(field: &'static str, value: ChannelValue) -> Result<Component, Error> {
    match finite(field, value)? {
        ChannelValue::Number(v) => Ok(v.max(0.0)),
        ChannelValue::Percent(_) => Err(Error::TypeMismatch { field }),
    }
}

/// Validate a CIE lightness. A number up to 1 is taken as a fraction and
/// scaled to [0, 100]; anything larger is taken as a percentage value
/// already on that scale. The result is clamped to [0, 100].
pub(crate) fn cie_lightness(field: &'static str, value: ChannelValue) -> Result<Component, Error> {
    match finite(field, value)? {
        ChannelValue::Number(v) => {
            let scaled = if v <= 1.0 { v * 100.0 } else { v };
            Ok(scaled.clamp(0.0, 100.0))
        }
        ChannelValue::Percent(v) => Ok(v.clamp(0.0, 100.0)),
    }
}

/// Validate an sRGB channel on the [0, 255] scale; percentages scale up.
pub(crate) fn byte_scaled(field: &'static str, value: ChannelValue) -> Result<Component, Error> {
    match finite(field, value)? {
        ChannelValue::Number(v) => Ok(v.clamp(0.0, 255.0)),
        ChannelValue::Percent(v) => Ok((v / 100.0 * 255.0).clamp(0.0, 255.0)),
    }
}

/// Validate an unbounded rectangular channel (the a and b axes of Lab
/// and Oklab).
pub(crate) fn unbounded(field: &'static str, value: ChannelValue) -> Result<Component, Error> {
    match finite(field, value)? {
        ChannelValue::Number(v) => Ok(v),
        ChannelValue::Percent(_) => Err(Error::TypeMismatch { field }),
    }
}

/// Validate an alpha argument; an absent value keeps `current`.
pub(crate) fn alpha(value: AlphaValue, current: Component) -> Result<Component, Error> {
    let Some(value) = value.0 else {
        return Ok(current);
    };

    match finite("alpha", value)? {
        ChannelValue::Number(v) => {
            if (0.0..=1.0).contains(&v) {
                Ok(v)
            } else {
                Err(Error::Range { field: "alpha", value: v })
            }
        }
        ChannelValue::Percent(v) => {
            if (0.0..=100.0).contains(&v) {
                Ok(v / 100.0)
            } else {
                Err(Error::Range { field: "alpha", value: v })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_accepts_fractions_and_percentages() {
        assert_eq!(unit("saturation", ChannelValue::Number(0.5)), Ok(0.5));
        assert_eq!(unit("saturation", ChannelValue::Percent(50.0)), Ok(0.5));
        assert_eq!(
            unit("saturation", ChannelValue::Number(1.5)),
            Err(Error::Range { field: "saturation", value: 1.5 })
        );
        assert_eq!(
            unit("saturation", ChannelValue::Percent(150.0)),
            Err(Error::Range { field: "saturation", value: 150.0 })
        );
    }

    #[test]
    fn non_finite_input_is_a_type_mismatch() {
        assert_eq!(
            unit("value", ChannelValue::Number(Component::NAN)),
            Err(Error::TypeMismatch { field: "value" })
        );
        assert_eq!(
            hue("hue", ChannelValue::Number(Component::INFINITY)),
            Err(Error::TypeMismatch { field: "hue" })
        );
    }

    #[test]
    fn hue_is_normalized_and_rejects_percentages() {
        assert_eq!(hue("hue", ChannelValue::Number(-20.0)), Ok(340.0));
        assert_eq!(hue("hue", ChannelValue::Number(725.0)), Ok(5.0));
        assert_eq!(
            hue("hue", ChannelValue::Percent(50.0)),
            Err(Error::TypeMismatch { field: "hue" })
        );
    }

    #[test]
    fn chroma_clamps_below_zero() {
        assert_eq!(chroma("chroma", ChannelValue::Number(-5.0)), Ok(0.0));
        assert_eq!(chroma("chroma", ChannelValue::Number(42.0)), Ok(42.0));
    }

    #[test]
    fn cie_lightness_accepts_fraction_or_percentage_scale() {
        assert_eq!(cie_lightness("lightness", ChannelValue::Number(0.5)), Ok(50.0));
        assert_eq!(cie_lightness("lightness", ChannelValue::Number(50.0)), Ok(50.0));
        assert_eq!(cie_lightness("lightness", ChannelValue::Percent(50.0)), Ok(50.0));
        assert_eq!(cie_lightness("lightness", ChannelValue::Number(150.0)), Ok(100.0));
        assert_eq!(cie_lightness("lightness", ChannelValue::Number(-0.5)), Ok(0.0));
    }

    #[test]
    fn byte_channels_scale_percentages() {
        assert_eq!(byte_scaled("red", ChannelValue::Percent(100.0)), Ok(255.0));
        assert_eq!(byte_scaled("red", ChannelValue::Number(300.0)), Ok(255.0));
        assert_eq!(byte_scaled("red", ChannelValue::Number(-1.0)), Ok(0.0));
    }

    #[test]
    fn absent_alpha_keeps_the_current_value() {
        assert_eq!(alpha(AlphaValue::from(None), 0.25), Ok(0.25));
        assert_eq!(alpha(AlphaValue::from(0.5), 0.25), Ok(0.5));
        assert_eq!(alpha(AlphaValue::from(Percent(50.0)), 0.25), Ok(0.5));
        assert_eq!(
            alpha(AlphaValue::from(1.5), 0.25),
            Err(Error::Range { field: "alpha", value: 1.5 })
        );
    }
}
