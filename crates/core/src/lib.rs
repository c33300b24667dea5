//! Core scalars, angle helpers, and shared value types for the body orientation workspace.

pub use real::Real;

/// Constants shared across crates (degrees and days unless stated otherwise).
pub mod constants {
    /// Days per Julian millennium; converts elapsed millennia into the `d` argument.
    pub const DAYS_PER_JULIAN_MILLENNIUM: f64 = 365_250.0;
    /// Julian Date of the J2000.0 reference epoch.
    pub const J2000_JD: f64 = 2_451_545.0;
    /// Julian Date of the Unix epoch (1970-01-01T00:00:00 UTC).
    pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;
    /// Seconds per day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    /// One full turn in degrees.
    pub const FULL_TURN_DEG: f64 = 360.0;
}

/// Floating-point scalar abstraction so callers pick the working precision.
pub mod real {
    use std::fmt::{Debug, Display};

    use num_traits::{Float, FloatConst};

    /// A floating-point type the orientation formulas can be evaluated in.
    ///
    /// Coefficients are tabulated as `f64` and converted once per use with
    /// [`Real::lit`], so an `f32` evaluation rounds the published values to
    /// `f32` instead of mixing precisions mid-expression.
    pub trait Real: Float + FloatConst + Debug + Display + Send + Sync + 'static {
        /// Convert a tabulated `f64` coefficient into this precision.
        fn lit(value: f64) -> Self;
    }

    impl Real for f64 {
        #[inline]
        fn lit(value: f64) -> Self {
            value
        }
    }

    impl Real for f32 {
        #[inline]
        fn lit(value: f64) -> Self {
            value as f32
        }
    }
}

/// Degree-based trigonometry with explicit reduction modulo a full turn.
pub mod angle {
    use super::constants::FULL_TURN_DEG;
    use super::real::Real;

    /// π/180 computed in the working precision.
    #[inline]
    pub fn deg_to_rad<T: Real>() -> T {
        T::PI() / T::lit(180.0)
    }

    /// 180/π computed in the working precision.
    #[inline]
    pub fn rad_to_deg<T: Real>() -> T {
        T::lit(180.0) / T::PI()
    }

    /// Reduce an angle in degrees into `[0, 360)`.
    ///
    /// Non-finite input yields NaN.
    #[inline]
    pub fn normalize_degrees<T: Real>(x: T) -> T {
        let full = T::lit(FULL_TURN_DEG);
        let r = x % full;
        let r = if r < T::zero() { r + full } else { r };
        // a tiny negative remainder can round up to exactly one full turn
        if r >= full { T::zero() } else { r }
    }

    /// Sine of an angle in degrees, scaled back onto the degree scale.
    ///
    /// The argument is reduced modulo 360° before conversion to radians, so
    /// angles accumulated over millennia keep their precision. The result is
    /// multiplied by 180/π; the WGCCRE amplitudes used in this workspace are
    /// tabulated against that scale.
    #[inline]
    pub fn sin_d<T: Real>(x: T) -> T {
        (normalize_degrees(x) * deg_to_rad::<T>()).sin() * rad_to_deg::<T>()
    }

    /// Cosine counterpart of [`sin_d`].
    #[inline]
    pub fn cos_d<T: Real>(x: T) -> T {
        (normalize_degrees(x) * deg_to_rad::<T>()).cos() * rad_to_deg::<T>()
    }

}

/// Conversions between Julian dates and the elapsed-time unit of the formulas.
pub mod time {
    use super::constants::{DAYS_PER_JULIAN_MILLENNIUM, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD};
    use super::real::Real;

    /// Days elapsed for an elapsed time given in Julian millennia.
    #[inline]
    pub fn days_elapsed<T: Real>(millennia: T) -> T {
        millennia * T::lit(DAYS_PER_JULIAN_MILLENNIUM)
    }

    /// Julian millennia between J2000.0 and the given Julian Date.
    #[inline]
    pub fn julian_millennia_since_j2000(jd: f64) -> f64 {
        (jd - J2000_JD) / DAYS_PER_JULIAN_MILLENNIUM
    }

    /// Julian Date for a count of seconds since the Unix epoch.
    #[inline]
    pub fn unix_seconds_to_jd(seconds: f64) -> f64 {
        UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY
    }
}

/// Orientation triples as they flow between the formulas and frame conversion.
pub mod orientation {
    use super::real::Real;

    /// Pole right ascension, pole declination, and prime-meridian angle, all in degrees.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Orientation<T> {
        pub right_ascension: T,
        pub declination: T,
        pub rotation: T,
    }

    impl<T: Real> Orientation<T> {
        pub fn new(right_ascension: T, declination: T, rotation: T) -> Self {
            Self {
                right_ascension,
                declination,
                rotation,
            }
        }

        /// `[α, δ, W]`.
        pub fn to_array(self) -> [T; 3] {
            [self.right_ascension, self.declination, self.rotation]
        }
    }

    /// Rotation angles in the VSOP87 convention, in degrees.
    ///
    /// `x` is the tilt of the pole away from the ecliptic frame, `y` the spin
    /// about it. `z` is always zero in this convention.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Vsop87Orientation<T> {
        pub x: T,
        pub y: T,
        pub z: T,
    }

    impl<T: Real> Vsop87Orientation<T> {
        pub fn to_array(self) -> [T; 3] {
            [self.x, self.y, self.z]
        }
    }
}

pub use orientation::{Orientation, Vsop87Orientation};
