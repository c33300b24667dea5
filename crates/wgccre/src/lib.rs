//! WGCCRE rotational elements for the Sun, the planets, and the Moon.
//!
//! Orientations follow the 2015 report for the Sun and planets (Earth
//! excepted) and the 2009 report for Earth and the Moon. [`orientation`]
//! resolves a body by name, evaluates its model, and converts the result into
//! the VSOP87 convention; [`orientation_raw`] skips the frame step.

use std::fmt;
use std::str::FromStr;

use solar_core::{Orientation, Real, Vsop87Orientation};
use thiserror::Error;

pub mod model;
pub mod report_2009;
pub mod report_2015;

pub use model::BodyModel;

/// Errors surfaced while resolving a body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrientationError {
    #[error("unsupported body `{0}` (expected one of: {supported})", supported = Body::supported_names())]
    UnsupportedBody(String),
}

/// WGCCRE report a body's model is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Report {
    Wgccre2009,
    Wgccre2015,
}

impl Report {
    pub fn year(self) -> u16 {
        match self {
            Self::Wgccre2009 => 2009,
            Self::Wgccre2015 => 2015,
        }
    }

    /// Where the published report can be downloaded.
    pub fn reference_url(self) -> &'static str {
        match self {
            Self::Wgccre2009 => {
                "https://astropedia.astrogeology.usgs.gov/download/Docs/WGCCRE/WGCCRE2009reprint.pdf"
            }
            Self::Wgccre2015 => {
                "https://astropedia.astrogeology.usgs.gov/download/Docs/WGCCRE/WGCCRE2015reprint.pdf"
            }
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WGCCRE {}", self.year())
    }
}

/// The closed set of bodies with a published model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sol,
    Mercury,
    Venus,
    Earth,
    Moon,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Body {
    pub const ALL: [Body; 10] = [
        Body::Sol,
        Body::Mercury,
        Body::Venus,
        Body::Earth,
        Body::Moon,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
    ];

    /// Identifier accepted by [`Body::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Sol => "Sol",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Earth => "Earth",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
        }
    }

    pub fn model(self) -> &'static BodyModel {
        match self {
            Self::Sol => &report_2015::SOL,
            Self::Mercury => &report_2015::MERCURY,
            Self::Venus => &report_2015::VENUS,
            Self::Earth => &report_2009::EARTH,
            Self::Moon => &report_2009::MOON,
            Self::Mars => &report_2015::MARS,
            Self::Jupiter => &report_2015::JUPITER,
            Self::Saturn => &report_2015::SATURN,
            Self::Uranus => &report_2015::URANUS,
            Self::Neptune => &report_2015::NEPTUNE,
        }
    }

    pub fn report(self) -> Report {
        self.model().report
    }

    /// `(α, δ, W)` in the body's native WGCCRE convention.
    pub fn raw_orientation<T: Real>(self, millennia: T) -> Orientation<T> {
        self.model().evaluate(millennia)
    }

    /// Orientation converted into the VSOP87 frame.
    pub fn vsop87_orientation<T: Real>(self, millennia: T) -> Vsop87Orientation<T> {
        solar_frames::to_vsop87(self.raw_orientation(millennia))
    }

    fn supported_names() -> String {
        Self::ALL
            .iter()
            .map(|body| body.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = OrientationError;

    /// Exact, case-sensitive match on [`Body::name`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|body| body.name() == s)
            .ok_or_else(|| OrientationError::UnsupportedBody(s.to_string()))
    }
}

/// Orientation of `name` at `millennia` since the reference epoch, in the VSOP87 frame.
pub fn orientation<T: Real>(
    name: &str,
    millennia: T,
) -> Result<Vsop87Orientation<T>, OrientationError> {
    let body: Body = name.parse()?;
    Ok(body.vsop87_orientation(millennia))
}

/// Same lookup as [`orientation`] without the frame conversion.
pub fn orientation_raw<T: Real>(
    name: &str,
    millennia: T,
) -> Result<Orientation<T>, OrientationError> {
    let body: Body = name.parse()?;
    Ok(body.raw_orientation(millennia))
}

/// Earth's axial tilt in degrees, as used by the frame conversion.
pub fn axial_tilt<T: Real>() -> T {
    solar_frames::axial_tilt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_body_resolves_to_its_own_model() {
        for body in Body::ALL {
            assert_eq!(body.model().body, body);
            assert_eq!(body.name().parse::<Body>(), Ok(body));
        }
    }

    #[test]
    fn report_grouping() {
        assert_eq!(Body::Earth.report(), Report::Wgccre2009);
        assert_eq!(Body::Moon.report(), Report::Wgccre2009);
        for body in Body::ALL {
            if !matches!(body, Body::Earth | Body::Moon) {
                assert_eq!(body.report(), Report::Wgccre2015, "{body}");
            }
        }
    }

    #[test]
    fn names_are_case_sensitive() {
        for name in ["earth", "EARTH", "Pluto", "", " Mars", "Mars ", "Luna"] {
            assert_eq!(
                name.parse::<Body>(),
                Err(OrientationError::UnsupportedBody(name.to_string()))
            );
        }
    }

    #[test]
    fn error_lists_supported_bodies() {
        let err = orientation::<f64>("Pluto", 0.0).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("`Pluto`"));
        assert!(message.contains("Sol, Mercury, Venus, Earth, Moon, Mars"));
    }

    #[test]
    fn moon_is_the_most_perturbed_model() {
        let busiest = Body::ALL
            .into_iter()
            .max_by_key(|body| body.model().periodic_term_count())
            .unwrap();
        assert_eq!(busiest, Body::Moon);
        assert_eq!(Body::Moon.model().rotation.terms.len(), 13);
    }
}
