use solar_core::angle::normalize_degrees;
use solar_core::{Orientation, Real, Vsop87Orientation};

/// Obliquity of the ecliptic at J2000.0 in degrees (84381.406″).
#[allow(clippy::excessive_precision)]
pub const EARTH_AXIAL_TILT_DEG: f64 = 23.439_280_305_555_555_555_6;

/// Small meridian offset aligning the converted spin angle with VSOP87 positions.
///
/// Same value Stellarium applies when it places planets in the VSOP87 frame.
pub const VSOP87_EPOCH_OFFSET_DEG: f64 = 0.000_027_5;

/// Earth's axial tilt in the working precision.
#[inline]
pub fn axial_tilt<T: Real>() -> T {
    T::lit(EARTH_AXIAL_TILT_DEG)
}

/// Remap a raw `(α, δ, W)` triple into VSOP87 rotation angles.
///
/// `x = δ + (90° − ε)` and `y = α + W − 180° + offset`, both reduced into
/// `[0, 360)`. The convention has no third rotation, so `z` is zero.
pub fn to_vsop87<T: Real>(raw: Orientation<T>) -> Vsop87Orientation<T> {
    let x_offset = T::lit(90.0) - axial_tilt::<T>();
    let y_offset = T::lit(VSOP87_EPOCH_OFFSET_DEG);

    Vsop87Orientation {
        x: normalize_degrees(raw.declination + x_offset),
        y: normalize_degrees(((raw.right_ascension + raw.rotation) - T::lit(180.0)) + y_offset),
        z: T::zero(),
    }
}
