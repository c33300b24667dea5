//! Frame conversion from WGCCRE rotational elements into the VSOP87 convention.
//!
//! The WGCCRE reports give a body's orientation as the right ascension and
//! declination of its north pole plus the angle of its prime meridian. Orbit
//! models built on VSOP87 instead expect two rotations relative to the
//! ecliptic of J2000, which is what [`to_vsop87`] produces.

pub mod vsop87;

pub use vsop87::{EARTH_AXIAL_TILT_DEG, VSOP87_EPOCH_OFFSET_DEG, axial_tilt, to_vsop87};
