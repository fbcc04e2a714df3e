//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};

use crate::color::{Component, Components};

/// A transform holding a 3x3 matrix over components.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Create a transform from a 3x3 matrix, given in column-major order.
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(
        components.0,
        components.1,
        components.2,
    ));
    Components(x, y, z)
}

/// Normalize a hue angle in degrees into [0, 360).
pub fn normalize_hue(hue: Component) -> Component {
    hue.rem_euclid(360.0)
}

/// Whether the value is close enough to zero to be treated as zero.
pub fn almost_zero(value: Component) -> bool {
    value.abs() < 1.0e-7
}

/// Round a value to a fixed number of decimals for serialization. The
/// result is normalized so that negative zero renders as plain zero.
pub fn round_to(value: Component, decimals: i32) -> Component {
    let factor = (10.0 as Component).powi(decimals);
    (value * factor).round() / factor + 0.0
}
