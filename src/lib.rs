//! tinct keeps a single canonical CIE-Lab value for every color and
//! recomputes any other supported space from it on demand. On top of the
//! conversions it provides hue-aware interpolation between colors and
//! multi-stop gradient evaluation.

#![deny(missing_docs)]

mod channel;
mod color;
mod convert;
mod error;
mod gradient;
mod interpolate;
mod math;
#[cfg(test)]
mod test;
mod views;

pub use channel::{AlphaValue, ChannelValue, Percent};
pub use color::{ChannelFlags, Color, Component, Components, Space};
pub use error::Error;
pub use gradient::{Gradient, Scale, Stop};
pub use interpolate::Interpolation;
pub use views::{Hsv, Lab, Lch, Oklab, Oklch, Rgb};
