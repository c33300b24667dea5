//! Rotational orientation of the Sun, planets, and Moon from the WGCCRE reports.
//!
//! The workspace is split the same way the computation is: `solar_core` holds
//! the scalar and degree-trig primitives, `solar_wgccre` the published models
//! and body dispatch, and `solar_frames` the VSOP87 conversion. This crate
//! re-exports them together with the plan loader and exporters used by the
//! command-line front end.

pub use solar_config as config;
pub use solar_core as primitives;
pub use solar_export as export;
pub use solar_frames as frames;
pub use solar_wgccre as wgccre;

pub use solar_core::{Orientation, Real, Vsop87Orientation};
pub use solar_wgccre::{
    Body, OrientationError, Report, axial_tilt, orientation, orientation_raw,
};

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
