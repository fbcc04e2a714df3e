//! Ordered multi-stop gradients and multi-color scales. A gradient owns
//! its stops sorted ascending by position and evaluates colors by
//! interpolating inside the interval a position falls into; positions
//! outside the covered range take the nearest stop's color unchanged.

use std::cmp::Ordering;

use crate::{
    color::{Color, Component, Space},
    error::Error,
    interpolate::lerp,
    math::round_to,
};

/// A positioned color stop. A stop without a position can be resolved
/// with [`Gradient::fill_missing_positions`].
#[derive(Clone, Debug)]
pub struct Stop {
    /// The color of the gradient at this stop.
    pub color: Color,
    /// The position along the gradient axis, if resolved.
    pub position: Option<Component>,
}

impl Stop {
    /// Create a stop from a color and an optional position.
    pub fn new(color: Color, position: impl Into<Option<Component>>) -> Self {
        Self {
            color,
            position: position.into(),
        }
    }
}

/// An ordered sequence of color stops with an angle and the space the
/// gradient interpolates in.
#[derive(Clone, Debug)]
pub struct Gradient {
    stops: Vec<Stop>,
    angle: Component,
    space: Space,
}

impl Gradient {
    /// Create a gradient from an initial stop list; the stops are sorted
    /// ascending by position immediately.
    pub fn new(stops: Vec<Stop>, angle: Component, space: Space) -> Self {
        let mut gradient = Self {
            stops,
            angle,
            space,
        };
        gradient.sort_stops();
        gradient
    }

    /// The gradient's angle in degrees.
    pub fn angle(&self) -> Component {
        self.angle
    }

    /// The space the gradient interpolates in.
    pub fn space(&self) -> Space {
        self.space
    }

    /// The stops, ordered ascending by position.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Insert a stop and restore the ordering. Stops sharing a position
    /// keep their insertion order relative to each other.
    pub fn add_stop(&mut self, color: Color, position: impl Into<Option<Component>>) {
        self.stops.push(Stop::new(color, position));
        self.sort_stops();
    }

    // An unpositioned stop is ordered at the position of the nearest
    // positioned stop before it, so interior runs stay attached to
    // their anchor through the stable sort.
    fn sort_stops(&mut self) {
        let mut anchor = Component::NEG_INFINITY;
        let mut keyed = self
            .stops
            .drain(..)
            .map(|stop| {
                if let Some(position) = stop.position {
                    anchor = position;
                }
                (anchor, stop)
            })
            .collect::<Vec<_>>();

        keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        self.stops = keyed.into_iter().map(|(_, stop)| stop).collect();
    }

    /// Resolve every run of unpositioned stops by distributing them
    /// linearly between their resolved neighbors. Fails when the first
    /// or last stop has no position, since there is nothing to
    /// distribute from.
    pub fn fill_missing_positions(&mut self) -> Result<(), Error> {
        if self.stops.is_empty() {
            return Ok(());
        }

        const UNANCHORED: Error =
            Error::Config("cannot infer positions without a positioned first and last stop");

        let mut positions = self
            .stops
            .iter()
            .map(|stop| stop.position)
            .collect::<Vec<_>>();

        let mut previous = 0;
        let mut previous_position = positions[0].ok_or(UNANCHORED)?;

        for index in 1..positions.len() {
            let Some(position) = positions[index] else {
                continue;
            };

            let gap = index - previous;
            if gap > 1 {
                let step = (position - previous_position) / gap as Component;
                for (offset, slot) in positions[previous + 1..index].iter_mut().enumerate() {
                    *slot = Some(previous_position + step * (offset + 1) as Component);
                }
            }

            previous = index;
            previous_position = position;
        }

        if previous != positions.len() - 1 {
            return Err(UNANCHORED);
        }

        for (stop, position) in self.stops.iter_mut().zip(positions) {
            stop.position = position;
        }

        Ok(())
    }

    /// Evaluate the gradient at a position along its axis. The position
    /// is clamped into the covered range; at or beyond an extreme stop
    /// the stop's color is returned unchanged, without extrapolation.
    pub fn color_at(&self, position: Component) -> Result<Color, Error> {
        let positions = self.resolved_positions()?;

        let first = positions[0];
        let last = positions[positions.len() - 1];
        let position = position.clamp(first, last);

        if position <= first {
            return Ok(self.stops[0].color.clone());
        }
        if position >= last {
            return Ok(self.stops[self.stops.len() - 1].color.clone());
        }

        let mut segment = 0;
        while segment + 2 < positions.len() && positions[segment + 1] < position {
            segment += 1;
        }

        let span = positions[segment + 1] - positions[segment];
        if span <= 0.0 {
            return Ok(self.stops[segment].color.clone());
        }

        let t = (position - positions[segment]) / span;
        Ok(self.stops[segment]
            .color
            .interpolate(&self.stops[segment + 1].color, self.space)
            .at(t))
    }

    /// Blend this whole gradient toward another. The angle interpolates
    /// linearly; the stops of the result sit at the union of both
    /// gradients' stop positions, each colored by evaluating both
    /// gradients there and blending with the fade-corrected
    /// interpolation. Resampling at the union avoids artifacts when the
    /// two gradients have mismatched stop counts.
    pub fn morph(&self, other: &Gradient, t: Component) -> Result<Gradient, Error> {
        let t = t.clamp(0.0, 1.0);

        let mut positions = self.resolved_positions()?;
        positions.extend(other.resolved_positions()?);
        positions.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        positions.dedup();

        let mut stops = Vec::with_capacity(positions.len());
        for position in positions {
            let left = self.color_at(position)?;
            let right = other.color_at(position)?;

            let color = left
                .interpolate(&right, self.space)
                .with_fade_boost()
                .at(t);
            stops.push(Stop::new(color, position));
        }

        Ok(Gradient {
            stops,
            angle: lerp(self.angle, other.angle, t),
            space: self.space,
        })
    }

    /// Serialize the gradient as
    /// `linear-gradient(<angle>deg in <space>, <color> <position>%, ...)`.
    ///
    /// A stored position up to 1 is rendered as a fraction of 100; a
    /// larger value is assumed to already be a percentage and rendered
    /// as-is. Unpositioned stops render without a position.
    pub fn css(&self) -> String {
        let mut out = format!("linear-gradient({}deg in {}", round_to(self.angle, 2), self.space);

        for stop in &self.stops {
            out.push_str(", ");
            out.push_str(&stop.color.css(self.space));

            if let Some(position) = stop.position {
                let percent = if position <= 1.0 {
                    position * 100.0
                } else {
                    position
                };
                out.push_str(&format!(" {}%", round_to(percent, 2)));
            }
        }

        out.push(')');
        out
    }

    fn resolved_positions(&self) -> Result<Vec<Component>, Error> {
        if self.stops.is_empty() {
            return Err(Error::Config("gradient has no stops"));
        }

        self.stops
            .iter()
            .map(|stop| {
                stop.position
                    .ok_or(Error::Config("gradient has unresolved stop positions"))
            })
            .collect()
    }
}

/// A reusable evaluator over a sequence of colors spread evenly along
/// the unit interval.
#[derive(Clone, Debug)]
pub struct Scale {
    colors: Vec<Color>,
    space: Space,
}

impl Scale {
    /// Create a scale over one or more colors.
    pub fn new(colors: Vec<Color>, space: Space) -> Result<Self, Error> {
        if colors.is_empty() {
            return Err(Error::Config("scale needs at least one color"));
        }

        Ok(Self { colors, space })
    }

    /// Evaluate the scale at `t` in [0, 1]. A single-color scale is a
    /// constant function.
    pub fn at(&self, t: Component) -> Color {
        if self.colors.len() == 1 {
            return self.colors[0].clone();
        }

        let t = t.clamp(0.0, 1.0);
        let scaled = t * (self.colors.len() - 1) as Component;
        let segment = (scaled.floor() as usize).min(self.colors.len() - 2);
        let local = scaled - segment as Component;

        self.colors[segment]
            .interpolate(&self.colors[segment + 1], self.space)
            .at(local)
    }
}
