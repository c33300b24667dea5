//! Rotational elements from the 2015 WGCCRE report (Archinal et al. 2018).
//!
//! Sun, Mercury, Venus, Mars, and the giant planets. Every function takes
//! elapsed Julian millennia and returns `(α, δ, W)` in degrees, before any
//! frame conversion.

use solar_core::{Orientation, Real};

use crate::model::{AngleSeries, Argument, BodyModel, Linear, PeriodicTerm};
use crate::{Body, Report};

use Argument::{Inline, Shared};

pub static SOL: BodyModel = BodyModel {
    body: Body::Sol,
    report: Report::Wgccre2015,
    arguments: &[],
    right_ascension: AngleSeries::new(Linear::constant(286.13)),
    declination: AngleSeries::new(Linear::constant(63.87)),
    rotation: AngleSeries::new(Linear::days(84.176, 14.184_400_0)),
};

// M1..M5
static MERCURY_ARGUMENTS: [Linear; 5] = [
    Linear::days(174.791_085_7, 4.092_335),
    Linear::days(349.582_171_4, 8.184_670),
    Linear::days(164.373_257_1, 12.277_005),
    Linear::days(339.164_342_9, 16.369_340),
    Linear::days(153.955_428_6, 20.461_675),
];

// Libration in longitude; ±0.0037° on the linear rate.
static MERCURY_W: [PeriodicTerm; 5] = [
    PeriodicTerm::sin(0.010_672_57, Shared(0)),
    PeriodicTerm::sin(-0.001_123_09, Shared(1)),
    PeriodicTerm::sin(-0.000_110_40, Shared(2)),
    PeriodicTerm::sin(-0.000_025_39, Shared(3)),
    PeriodicTerm::sin(-0.000_005_71, Shared(4)),
];

pub static MERCURY: BodyModel = BodyModel {
    body: Body::Mercury,
    report: Report::Wgccre2015,
    arguments: &MERCURY_ARGUMENTS,
    right_ascension: AngleSeries::new(Linear::millennia(281.0103, -0.0328)),
    declination: AngleSeries::new(Linear::millennia(61.4155, -0.0049)),
    rotation: AngleSeries::with_terms(Linear::days(329.5988, 6.138_510_8), &MERCURY_W),
};

pub static VENUS: BodyModel = BodyModel {
    body: Body::Venus,
    report: Report::Wgccre2015,
    arguments: &[],
    right_ascension: AngleSeries::new(Linear::constant(272.76)),
    declination: AngleSeries::new(Linear::constant(67.16)),
    rotation: AngleSeries::new(Linear::days(160.20, -1.481_368_8)),
};

static MARS_ALPHA: [PeriodicTerm; 5] = [
    PeriodicTerm::sin(0.000_068, Inline(Linear::millennia(198.991_226, 19_139.481_998_5))),
    PeriodicTerm::sin(0.000_238, Inline(Linear::millennia(226.292_679, 38_280.851_128_1))),
    PeriodicTerm::sin(0.000_052, Inline(Linear::millennia(249.663_391, 57_420.725_159_3))),
    PeriodicTerm::sin(0.000_009, Inline(Linear::millennia(266.183_510, 76_560.636_795_0))),
    PeriodicTerm::sin(0.419_057, Inline(Linear::millennia(79.398_797, 0.504_261_5))),
];

static MARS_DELTA: [PeriodicTerm; 5] = [
    PeriodicTerm::cos(0.000_051, Inline(Linear::millennia(122.433_576, 19_139.940_747_6))),
    PeriodicTerm::cos(0.000_141, Inline(Linear::millennia(43.058_401, 38_280.875_327_2))),
    PeriodicTerm::cos(0.000_031, Inline(Linear::millennia(57.663_379, 57_420.751_720_5))),
    PeriodicTerm::cos(0.000_005, Inline(Linear::millennia(79.476_401, 76_560.649_500_4))),
    PeriodicTerm::cos(1.591_274, Inline(Linear::millennia(166.325_722, 0.504_261_5))),
];

static MARS_W: [PeriodicTerm; 6] = [
    PeriodicTerm::sin(0.000_145, Inline(Linear::millennia(129.071_773, 19_140.032_824_4))),
    PeriodicTerm::sin(0.000_157, Inline(Linear::millennia(36.352_167, 38_281.047_359_1))),
    PeriodicTerm::sin(0.000_040, Inline(Linear::millennia(56.668_646, 57_420.929_536_0))),
    PeriodicTerm::sin(0.000_001, Inline(Linear::millennia(67.364_003, 76_560.255_221_5))),
    PeriodicTerm::sin(0.000_001, Inline(Linear::millennia(104.792_680, 95_700.438_757_8))),
    PeriodicTerm::sin(0.584_542, Inline(Linear::millennia(95.391_654, 0.504_261_5))),
];

pub static MARS: BodyModel = BodyModel {
    body: Body::Mars,
    report: Report::Wgccre2015,
    arguments: &[],
    right_ascension: AngleSeries::with_terms(
        Linear::millennia(317.269_202, -0.109_275_47),
        &MARS_ALPHA,
    ),
    declination: AngleSeries::with_terms(Linear::millennia(54.432_516, -0.058_271_05), &MARS_DELTA),
    rotation: AngleSeries::with_terms(Linear::days(176.049_863, 350.891_982_443_297), &MARS_W),
};

// Ja..Je
static JUPITER_ARGUMENTS: [Linear; 5] = [
    Linear::millennia(99.360_714, 4850.4046),
    Linear::millennia(175.895_369, 1191.9605),
    Linear::millennia(300.323_162, 262.5475),
    Linear::millennia(114.012_305, 6070.2476),
    Linear::millennia(49.511_251, 64.3000),
];

static JUPITER_ALPHA: [PeriodicTerm; 5] = [
    PeriodicTerm::sin(0.000_117, Shared(0)),
    PeriodicTerm::sin(0.000_938, Shared(1)),
    PeriodicTerm::sin(0.001_432, Shared(2)),
    PeriodicTerm::sin(0.000_030, Shared(3)),
    PeriodicTerm::sin(0.002_150, Shared(4)),
];

static JUPITER_DELTA: [PeriodicTerm; 5] = [
    PeriodicTerm::cos(0.000_050, Shared(0)),
    PeriodicTerm::cos(0.000_404, Shared(1)),
    PeriodicTerm::cos(0.000_617, Shared(2)),
    PeriodicTerm::cos(-0.000_013, Shared(3)),
    PeriodicTerm::cos(0.000_926, Shared(4)),
];

pub static JUPITER: BodyModel = BodyModel {
    body: Body::Jupiter,
    report: Report::Wgccre2015,
    arguments: &JUPITER_ARGUMENTS,
    right_ascension: AngleSeries::with_terms(
        Linear::millennia(268.056_595, -0.006_499),
        &JUPITER_ALPHA,
    ),
    declination: AngleSeries::with_terms(Linear::millennia(64.495_303, 0.002_413), &JUPITER_DELTA),
    rotation: AngleSeries::new(Linear::days(284.95, 870.536_000_0)),
};

pub static SATURN: BodyModel = BodyModel {
    body: Body::Saturn,
    report: Report::Wgccre2015,
    arguments: &[],
    right_ascension: AngleSeries::new(Linear::millennia(40.589, -0.036)),
    declination: AngleSeries::new(Linear::millennia(83.537, -0.004)),
    rotation: AngleSeries::new(Linear::days(38.90, 810.793_902_4)),
};

pub static URANUS: BodyModel = BodyModel {
    body: Body::Uranus,
    report: Report::Wgccre2015,
    arguments: &[],
    right_ascension: AngleSeries::new(Linear::constant(257.311)),
    declination: AngleSeries::new(Linear::constant(-15.175)),
    rotation: AngleSeries::new(Linear::days(203.81, -501.160_092_8)),
};

// N
static NEPTUNE_ARGUMENTS: [Linear; 1] = [Linear::millennia(357.85, 52.316)];

static NEPTUNE_ALPHA: [PeriodicTerm; 1] = [PeriodicTerm::sin(0.70, Shared(0))];
static NEPTUNE_DELTA: [PeriodicTerm; 1] = [PeriodicTerm::cos(-0.51, Shared(0))];
static NEPTUNE_W: [PeriodicTerm; 1] = [PeriodicTerm::sin(-0.48, Shared(0))];

pub static NEPTUNE: BodyModel = BodyModel {
    body: Body::Neptune,
    report: Report::Wgccre2015,
    arguments: &NEPTUNE_ARGUMENTS,
    right_ascension: AngleSeries::with_terms(Linear::constant(299.36), &NEPTUNE_ALPHA),
    declination: AngleSeries::with_terms(Linear::constant(43.46), &NEPTUNE_DELTA),
    rotation: AngleSeries::with_terms(Linear::days(249.978, 541.139_775_7), &NEPTUNE_W),
};

pub fn sol<T: Real>(t: T) -> Orientation<T> {
    SOL.evaluate(t)
}

pub fn mercury<T: Real>(t: T) -> Orientation<T> {
    MERCURY.evaluate(t)
}

pub fn venus<T: Real>(t: T) -> Orientation<T> {
    VENUS.evaluate(t)
}

pub fn mars<T: Real>(t: T) -> Orientation<T> {
    MARS.evaluate(t)
}

pub fn jupiter<T: Real>(t: T) -> Orientation<T> {
    JUPITER.evaluate(t)
}

pub fn saturn<T: Real>(t: T) -> Orientation<T> {
    SATURN.evaluate(t)
}

pub fn uranus<T: Real>(t: T) -> Orientation<T> {
    URANUS.evaluate(t)
}

pub fn neptune<T: Real>(t: T) -> Orientation<T> {
    NEPTUNE.evaluate(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use solar_core::angle::{cos_d, sin_d};

    #[test]
    fn unperturbed_bodies_at_epoch() {
        assert_eq!(sol(0.0_f64).to_array(), [286.13, 63.87, 84.176]);
        assert_eq!(venus(0.0_f64).to_array(), [272.76, 67.16, 160.20]);
        assert_eq!(saturn(0.0_f64).to_array(), [40.589, 83.537, 38.90]);
        assert_eq!(uranus(0.0_f64).to_array(), [257.311, -15.175, 203.81]);
    }

    #[test]
    fn unperturbed_bodies_follow_linear_rates() {
        let t = 0.0375_f64;
        let d = t * 365_250.0;
        assert_eq!(sol(t).to_array(), [286.13, 63.87, 84.176 + (14.1844000 * d)]);
        assert_eq!(venus(t).to_array(), [272.76, 67.16, 160.20 - (1.4813688 * d)]);
        assert_eq!(
            saturn(t).to_array(),
            [40.589 - (0.036 * t), 83.537 - (0.004 * t), 38.90 + (810.7939024 * d)]
        );
        assert_eq!(
            uranus(t).to_array(),
            [257.311, -15.175, 203.81 - (501.1600928 * d)]
        );
    }

    #[test]
    fn mercury_matches_hand_expansion() {
        let t = 0.0123_f64;
        let d = t * 365_250.0;
        let m1 = 174.7910857 + (4.092335 * d);
        let m2 = 349.5821714 + (8.184670 * d);
        let m3 = 164.3732571 + (12.277005 * d);
        let m4 = 339.1643429 + (16.369340 * d);
        let m5 = 153.9554286 + (20.461675 * d);
        let w = 329.5988 + (6.1385108 * d) + 0.01067257 * sin_d(m1)
            - 0.00112309 * sin_d(m2)
            - 0.00011040 * sin_d(m3)
            - 0.00002539 * sin_d(m4)
            - 0.00000571 * sin_d(m5);

        let orientation = mercury(t);
        assert_eq!(orientation.right_ascension, 281.0103 - (0.0328 * t));
        assert_eq!(orientation.declination, 61.4155 - (0.0049 * t));
        assert_eq!(orientation.rotation, w);
    }

    #[test]
    fn mars_angles_use_independent_arguments() {
        let t = -0.25_f64;
        let alpha = 317.269202 - (0.10927547 * t)
            + (0.000068 * sin_d(198.991226 + (19139.4819985 * t)))
            + (0.000238 * sin_d(226.292679 + (38280.8511281 * t)))
            + (0.000052 * sin_d(249.663391 + (57420.7251593 * t)))
            + (0.000009 * sin_d(266.183510 + (76560.6367950 * t)))
            + (0.419057 * sin_d(79.398797 + (0.5042615 * t)));
        let delta = 54.432516 - (0.05827105 * t)
            + (0.000051 * cos_d(122.433576 + (19139.9407476 * t)))
            + (0.000141 * cos_d(43.058401 + (38280.8753272 * t)))
            + (0.000031 * cos_d(57.663379 + (57420.7517205 * t)))
            + (0.000005 * cos_d(79.476401 + (76560.6495004 * t)))
            + (1.591274 * cos_d(166.325722 + (0.5042615 * t)));

        let d = t * 365_250.0;
        let w = 176.049863 + (350.891982443297 * d)
            + (0.000145 * sin_d(129.071773 + (19140.0328244 * t)))
            + (0.000157 * sin_d(36.352167 + (38281.0473591 * t)))
            + (0.000040 * sin_d(56.668646 + (57420.9295360 * t)))
            + (0.000001 * sin_d(67.364003 + (76560.2552215 * t)))
            + (0.000001 * sin_d(104.792680 + (95700.4387578 * t)))
            + (0.584542 * sin_d(95.391654 + (0.5042615 * t)));

        let orientation = mars(t);
        assert_eq!(orientation.right_ascension, alpha);
        assert_eq!(orientation.declination, delta);
        assert_eq!(orientation.rotation, w);
    }

    #[test]
    fn jupiter_shares_arguments_between_pole_angles() {
        let t = 0.5_f64;
        let d = t * 365_250.0;
        let ja = 99.360714 + (4850.4046 * t);
        let jb = 175.895369 + (1191.9605 * t);
        let jc = 300.323162 + (262.5475 * t);
        let jd = 114.012305 + (6070.2476 * t);
        let je = 49.511251 + (64.3000 * t);
        let alpha = 268.056595 - (0.006499 * t) + (0.000117 * sin_d(ja)) + (0.000938 * sin_d(jb))
            + (0.001432 * sin_d(jc))
            + (0.000030 * sin_d(jd))
            + (0.002150 * sin_d(je));
        let delta = 64.495303 + (0.002413 * t) + (0.000050 * cos_d(ja)) + (0.000404 * cos_d(jb))
            + (0.000617 * cos_d(jc))
            - (0.000013 * cos_d(jd))
            + (0.000926 * cos_d(je));

        let orientation = jupiter(t);
        assert_eq!(orientation.right_ascension, alpha);
        assert_eq!(orientation.declination, delta);
        assert_eq!(orientation.rotation, 284.95 + (870.5360000 * d));
    }

    #[test]
    fn single_precision_stays_close_to_double() {
        let t = 0.024;
        let wide = jupiter(t as f64);
        let narrow = jupiter(t as f32);
        assert_abs_diff_eq!(narrow.declination as f64, wide.declination, epsilon = 1e-3);
        assert_abs_diff_eq!(narrow.right_ascension as f64, wide.right_ascension, epsilon = 1e-3);
    }

    #[test]
    fn neptune_terms_share_one_argument() {
        let t = 0.02_f64;
        let d = t * 365_250.0;
        let n = 357.85 + (52.316 * t);
        let orientation = neptune(t);
        assert_eq!(orientation.right_ascension, 299.36 + (0.70 * sin_d(n)));
        assert_eq!(orientation.declination, 43.46 - (0.51 * cos_d(n)));
        assert_eq!(orientation.rotation, 249.978 + (541.1397757 * d) - (0.48 * sin_d(n)));
    }
}
