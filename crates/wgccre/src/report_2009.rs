//! Rotational elements from the 2009 WGCCRE report (Archinal et al. 2011).
//!
//! Earth and the Moon. The lunar model carries thirteen arguments E1–E13 and a
//! small secular `d²` term on the prime meridian.

use solar_core::{Orientation, Real};

use crate::model::{AngleSeries, Argument, BodyModel, Linear, PeriodicTerm};
use crate::{Body, Report};

use Argument::Shared;

pub static EARTH: BodyModel = BodyModel {
    body: Body::Earth,
    report: Report::Wgccre2009,
    arguments: &[],
    right_ascension: AngleSeries::new(Linear::millennia(0.00, -0.641)),
    declination: AngleSeries::new(Linear::millennia(90.00, -0.557)),
    rotation: AngleSeries::new(Linear::days(190.147, 360.985_623_5)),
};

// E1..E13, indexed from zero.
static MOON_ARGUMENTS: [Linear; 13] = [
    Linear::days(125.045, -0.052_992_1),
    Linear::days(250.089, -0.105_984_2),
    Linear::days(260.008, 13.012_000_9),
    Linear::days(176.625, 13.340_715_4),
    Linear::days(357.529, 0.985_600_3),
    Linear::days(311.589, 26.405_708_4),
    Linear::days(134.963, 13.064_993_0),
    Linear::days(276.617, 0.328_714_6),
    Linear::days(34.226, 1.748_487_7),
    Linear::days(15.134, -0.158_976_3),
    Linear::days(119.743, 0.003_609_6),
    Linear::days(239.961, 0.164_357_3),
    Linear::days(25.053, 12.959_008_8),
];

static MOON_ALPHA: [PeriodicTerm; 7] = [
    PeriodicTerm::sin(-3.8787, Shared(0)),
    PeriodicTerm::sin(-0.1204, Shared(1)),
    PeriodicTerm::sin(0.0700, Shared(2)),
    PeriodicTerm::sin(-0.0172, Shared(3)),
    PeriodicTerm::sin(0.0072, Shared(5)),
    PeriodicTerm::sin(-0.0052, Shared(9)),
    PeriodicTerm::sin(0.0043, Shared(12)),
];

static MOON_DELTA: [PeriodicTerm; 8] = [
    PeriodicTerm::cos(1.5419, Shared(0)),
    PeriodicTerm::cos(0.0239, Shared(1)),
    PeriodicTerm::cos(-0.0278, Shared(2)),
    PeriodicTerm::cos(0.0068, Shared(3)),
    PeriodicTerm::cos(-0.0029, Shared(5)),
    PeriodicTerm::cos(0.0009, Shared(6)),
    PeriodicTerm::cos(0.0008, Shared(9)),
    PeriodicTerm::cos(-0.0009, Shared(12)),
];

static MOON_W: [PeriodicTerm; 13] = [
    PeriodicTerm::sin(3.5610, Shared(0)),
    PeriodicTerm::sin(0.1208, Shared(1)),
    PeriodicTerm::sin(-0.0642, Shared(2)),
    PeriodicTerm::sin(0.0158, Shared(3)),
    PeriodicTerm::sin(0.0252, Shared(4)),
    PeriodicTerm::sin(-0.0066, Shared(5)),
    PeriodicTerm::sin(-0.0047, Shared(6)),
    PeriodicTerm::sin(-0.0046, Shared(7)),
    PeriodicTerm::sin(0.0028, Shared(8)),
    PeriodicTerm::sin(0.0052, Shared(9)),
    PeriodicTerm::sin(0.0040, Shared(10)),
    PeriodicTerm::sin(0.0019, Shared(11)),
    PeriodicTerm::sin(-0.0044, Shared(12)),
];

/// Secular slowdown of the lunar rotation, degrees per day².
pub const MOON_W_QUADRATIC: f64 = -1.4e-12;

pub static MOON: BodyModel = BodyModel {
    body: Body::Moon,
    report: Report::Wgccre2009,
    arguments: &MOON_ARGUMENTS,
    right_ascension: AngleSeries::with_terms(Linear::millennia(269.9949, 0.0031), &MOON_ALPHA),
    declination: AngleSeries::with_terms(Linear::millennia(66.5392, 0.0130), &MOON_DELTA),
    rotation: AngleSeries {
        base: Linear::days(38.3213, 13.176_358_15),
        quadratic_days: Some(MOON_W_QUADRATIC),
        terms: &MOON_W,
    },
};

pub fn earth<T: Real>(t: T) -> Orientation<T> {
    EARTH.evaluate(t)
}

pub fn moon<T: Real>(t: T) -> Orientation<T> {
    MOON.evaluate(t)
}
