//! Pure conversion functions between adjacent pairs of color models.
//! Every function is total for finite inputs and never panics; longer
//! conversion paths are composed from these single steps.
//!
//! CIE-XYZ components ride the 0..100 scale throughout, so the D65 white
//! point appears with its conventional values.

use crate::{
    color::{Component, Components},
    math::{almost_zero, normalize_hue, transform, transform_3x3, Transform},
};

/// The D65 reference white, on the 0..100 XYZ scale.
pub const D65_WHITE: Components = Components(95.047, 100.0, 108.883);

const EPSILON: Component = 216.0 / 24389.0;
const KAPPA: Component = 24389.0 / 27.0;

/// Convert CIE-Lab to CIE-XYZ (D65). The inverse transfer branches on
/// the cube of each intermediate against epsilon, and on lightness
/// directly for the Y axis.
pub fn lab_to_xyz(lab: Components) -> Components {
    let Components(lightness, a, b) = lab;

    let fy = (lightness + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;

    let fx_cubed = fx * fx * fx;
    let x = if fx_cubed > EPSILON {
        fx_cubed
    } else {
        (116.0 * fx - 16.0) / KAPPA
    };

    let y = if lightness > KAPPA * EPSILON {
        fy * fy * fy
    } else {
        lightness / KAPPA
    };

    let fz_cubed = fz * fz * fz;
    let z = if fz_cubed > EPSILON {
        fz_cubed
    } else {
        (116.0 * fz - 16.0) / KAPPA
    };

    Components(x * D65_WHITE.0, y * D65_WHITE.1, z * D65_WHITE.2)
}

/// Convert CIE-XYZ (D65) to CIE-Lab.
pub fn xyz_to_lab(xyz: Components) -> Components {
    let scaled = Components(
        xyz.0 / D65_WHITE.0,
        xyz.1 / D65_WHITE.1,
        xyz.2 / D65_WHITE.2,
    );

    let Components(fx, fy, fz) = scaled.map(|v| {
        if v > EPSILON {
            v.cbrt()
        } else {
            (KAPPA * v + 16.0) / 116.0
        }
    });

    Components(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// Convert CIE-XYZ (D65) to linear-light sRGB on the unit scale.
pub fn xyz_to_linear_srgb(xyz: Components) -> Components {
    #[rustfmt::skip]
    const FROM_XYZ: Transform = transform_3x3(
         3.2404542, -0.9692660,  0.0556434,
        -1.5371385,  1.8760108, -0.2040259,
        -0.4985314,  0.0415560,  1.0572252,
    );

    transform(&FROM_XYZ, xyz.map(|v| v / 100.0))
}

/// Convert linear-light sRGB on the unit scale to CIE-XYZ (D65).
pub fn linear_srgb_to_xyz(rgb: Components) -> Components {
    #[rustfmt::skip]
    const TO_XYZ: Transform = transform_3x3(
        0.4124564, 0.2126729, 0.0193339,
        0.3575761, 0.7151522, 0.1191920,
        0.1804375, 0.0721750, 0.9503041,
    );

    transform(&TO_XYZ, rgb).map(|v| v * 100.0)
}

/// Apply the piecewise sRGB transfer function to linear-light values.
pub fn gamma_encode(rgb: Components) -> Components {
    rgb.map(|value| {
        let abs = value.abs();

        if abs > 0.0031308 {
            value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
        } else {
            12.92 * value
        }
    })
}

/// Invert the piecewise sRGB transfer function back to linear light.
pub fn gamma_decode(rgb: Components) -> Components {
    rgb.map(|value| {
        let abs = value.abs();

        if abs <= 0.04045 {
            value / 12.92
        } else {
            value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
        }
    })
}

/// Convert gamma-encoded sRGB on the unit scale to HSV. A color without
/// chroma has its hue defined as 0.
pub fn rgb_to_hsv(rgb: Components) -> Components {
    let Components(red, green, blue) = rgb;

    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let delta = max - min;

    let hue = if almost_zero(delta) {
        0.0
    } else {
        60.0 * if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        }
    };

    let saturation = if almost_zero(max) { 0.0 } else { delta / max };

    Components(normalize_hue(hue), saturation, max)
}

/// Convert HSV to gamma-encoded sRGB on the unit scale.
pub fn hsv_to_rgb(hsv: Components) -> Components {
    let Components(hue, saturation, value) = hsv;

    if saturation <= 0.0 {
        return Components(value, value, value);
    }

    let hue = normalize_hue(hue);

    macro_rules! f {
        ($n:expr) => {{
            let k = ($n + hue / 60.0) % 6.0;
            value - value * saturation * k.min(4.0 - k).clamp(0.0, 1.0)
        }};
    }

    Components(f!(5.0), f!(3.0), f!(1.0))
}

/// Convert linear-light sRGB to Oklab.
pub fn linear_srgb_to_oklab(rgb: Components) -> Components {
    #[rustfmt::skip]
    const RGB_TO_LMS: Transform = transform_3x3(
        0.4122214708, 0.2119034982, 0.0883024619,
        0.5363325363, 0.6806995451, 0.2817188376,
        0.0514459929, 0.1073969566, 0.6299787005,
    );

    #[rustfmt::skip]
    const LMS_TO_OKLAB: Transform = transform_3x3(
         0.2104542553,  1.9779984951,  0.0259040371,
         0.7936177850, -2.4285922050,  0.7827717662,
        -0.0040720468,  0.4505937099, -0.8086757660,
    );

    let lms = transform(&RGB_TO_LMS, rgb).map(|v| v.cbrt());
    transform(&LMS_TO_OKLAB, lms)
}

/// Convert Oklab to linear-light sRGB.
pub fn oklab_to_linear_srgb(lab: Components) -> Components {
    #[rustfmt::skip]
    const OKLAB_TO_LMS: Transform = transform_3x3(
        1.0,           1.0,           1.0,
        0.3963377774, -0.1055613458, -0.0894841775,
        0.2158037573, -0.0638541728, -1.2914855480,
    );

    #[rustfmt::skip]
    const LMS_TO_RGB: Transform = transform_3x3(
         4.0767416621, -1.2684380046, -0.0041960863,
        -3.3077115913,  2.6097574011, -0.7034186147,
         0.2309699292, -0.3413193965,  1.7076147010,
    );

    let lms = transform(&OKLAB_TO_LMS, lab).map(|v| v * v * v);
    transform(&LMS_TO_RGB, lms)
}

/// Convert a rectangular (lightness, a, b) form to its polar
/// (lightness, chroma, hue) form. Zero chroma yields hue 0.
pub fn rectangular_to_polar(rect: Components) -> Components {
    let Components(lightness, a, b) = rect;

    let chroma = (a * a + b * b).sqrt();
    let hue = if almost_zero(chroma) {
        0.0
    } else {
        normalize_hue(b.atan2(a).to_degrees())
    };

    Components(lightness, chroma, hue)
}

/// Convert a polar (lightness, chroma, hue) form back to its rectangular
/// form.
pub fn polar_to_rectangular(polar: Components) -> Components {
    let Components(lightness, chroma, hue) = polar;

    let hue = hue.to_radians();
    Components(lightness, chroma * hue.cos(), chroma * hue.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    // rgb(210, 105, 30)
    const CHOCOLATE: Components = Components(
        210.0 / 255.0, //
        105.0 / 255.0,
        30.0 / 255.0,
    );

    #[test]
    fn reference_color_through_every_step() {
        let linear = gamma_decode(CHOCOLATE);
        assert_component_eq!(linear.0, 0.6444796819705821);
        assert_component_eq!(linear.1, 0.14126329114027164);
        assert_component_eq!(linear.2, 0.012983032342173012);

        let xyz = linear_srgb_to_xyz(linear);
        assert_component_eq!(xyz.0 / 100.0, 0.31867477211607497);
        assert_component_eq!(xyz.1 / 100.0, 0.23902516675326353);
        assert_component_eq!(xyz.2 / 100.0, 0.04163558878604191);

        let lab = xyz_to_lab(xyz);
        assert_component_eq!(lab.0 / 100.0, 0.559900594998559);
        assert_component_eq!(lab.1 / 100.0, 0.3705265126222618);
        assert_component_eq!(lab.2 / 100.0, 0.567407095280427);

        let lch = rectangular_to_polar(lab);
        assert_component_eq!(lch.1 / 100.0, 0.6776730098879449);
        assert_component_eq!(lch.2 / 100.0, 0.56854778136375884);

        let oklab = linear_srgb_to_oklab(linear);
        assert_component_eq!(oklab.0, 0.6343984169310191);
        assert_component_eq!(oklab.1, 0.09907390956414183);
        assert_component_eq!(oklab.2, 0.1191931595546783);

        let oklch = rectangular_to_polar(oklab);
        assert_component_eq!(oklch.1, 0.1549924154304034);
        assert_component_eq!(oklch.2 / 100.0, 0.5026648308315725);

        let hsv = rgb_to_hsv(CHOCOLATE);
        assert_component_eq!(hsv.0 / 100.0, 0.25);
        assert_component_eq!(hsv.1, 0.8571428571428571);
        assert_component_eq!(hsv.2, 0.8235294117647058);
    }

    #[test]
    fn rgb_round_trips_through_lab() {
        for (red, green, blue) in [
            (0.0, 0.0, 0.0),
            (1.0, 1.0, 1.0),
            (1.0, 0.0, 0.0),
            (0.0, 1.0, 0.0),
            (0.0, 0.0, 1.0),
            (210.0 / 255.0, 105.0 / 255.0, 30.0 / 255.0),
            (0.25, 0.5, 0.75),
            (0.9, 0.1, 0.4),
        ] {
            let lab = xyz_to_lab(linear_srgb_to_xyz(gamma_decode(Components(red, green, blue))));
            let back = gamma_encode(xyz_to_linear_srgb(lab_to_xyz(lab)));

            approx::assert_abs_diff_eq!(back.0, red, epsilon = 1.0e-4);
            approx::assert_abs_diff_eq!(back.1, green, epsilon = 1.0e-4);
            approx::assert_abs_diff_eq!(back.2, blue, epsilon = 1.0e-4);
        }
    }

    #[test]
    fn lab_round_trips_through_polar() {
        let lab = Components(56.0, 37.0, 56.7);
        let back = polar_to_rectangular(rectangular_to_polar(lab));

        assert_component_eq!(back.0, lab.0);
        assert_component_eq!(back.1, lab.1);
        assert_component_eq!(back.2, lab.2);
    }

    #[test]
    fn hsv_round_trips_through_rgb() {
        let hsv = Components(25.0, 0.857142857, 0.82352941);
        let back = rgb_to_hsv(hsv_to_rgb(hsv));

        assert_component_eq!(back.0 / 100.0, hsv.0 / 100.0);
        assert_component_eq!(back.1, hsv.1);
        assert_component_eq!(back.2, hsv.2);
    }

    #[test]
    fn hue_is_zero_when_there_is_no_chroma() {
        assert_eq!(rgb_to_hsv(Components(1.0, 1.0, 1.0)).0, 0.0);
        assert_eq!(rgb_to_hsv(Components(0.0, 0.0, 0.0)).0, 0.0);
        assert_eq!(rgb_to_hsv(Components(0.5, 0.5, 0.5)).0, 0.0);
        assert_eq!(rectangular_to_polar(Components(50.0, 0.0, 0.0)).2, 0.0);
    }

    #[test]
    fn hsv_primaries() {
        let red = hsv_to_rgb(Components(0.0, 1.0, 1.0));
        assert_component_eq!(red.0, 1.0);
        assert_component_eq!(red.1, 0.0);
        assert_component_eq!(red.2, 0.0);

        let green = hsv_to_rgb(Components(120.0, 1.0, 1.0));
        assert_component_eq!(green.0, 0.0);
        assert_component_eq!(green.1, 1.0);
        assert_component_eq!(green.2, 0.0);

        let blue = hsv_to_rgb(Components(240.0, 1.0, 1.0));
        assert_component_eq!(blue.0, 0.0);
        assert_component_eq!(blue.1, 0.0);
        assert_component_eq!(blue.2, 1.0);
    }

    #[test]
    fn white_is_achromatic_in_oklab() {
        let oklab = linear_srgb_to_oklab(Components(1.0, 1.0, 1.0));
        assert_component_eq!(oklab.0, 1.0);
        assert_component_eq!(oklab.1, 0.0);
        assert_component_eq!(oklab.2, 0.0);
    }
}
