//! Coefficient descriptors and their evaluation.
//!
//! Each WGCCRE expression is a polynomial in time plus an ordered list of
//! `amplitude · sin/cos(argument)` terms. The tables in the report modules are
//! plain static data in this shape, and [`BodyModel::evaluate`] sums them left
//! to right in the order the report prints them.

use solar_core::angle::{cos_d, sin_d};
use solar_core::time::days_elapsed;
use solar_core::{Orientation, Real};

use crate::{Body, Report};

/// Time variable a linear expression is written against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeScale {
    /// Elapsed Julian millennia, the `t` the caller passes in.
    Millennia,
    /// Elapsed days, `t × 365250`.
    Days,
}

/// `offset + rate · time` in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linear {
    pub offset: f64,
    pub rate: f64,
    pub scale: TimeScale,
}

impl Linear {
    pub const fn millennia(offset: f64, rate: f64) -> Self {
        Self {
            offset,
            rate,
            scale: TimeScale::Millennia,
        }
    }

    pub const fn days(offset: f64, rate: f64) -> Self {
        Self {
            offset,
            rate,
            scale: TimeScale::Days,
        }
    }

    /// A value that does not change with time.
    pub const fn constant(offset: f64) -> Self {
        Self::millennia(offset, 0.0)
    }

    #[inline]
    fn evaluate<T: Real>(&self, time: &Time<T>) -> T {
        T::lit(self.offset) + T::lit(self.rate) * time.get(self.scale)
    }
}

/// Trigonometric function applied to a periodic argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trig {
    Sin,
    Cos,
}

/// Where a periodic term takes its argument from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Argument {
    /// Index into the body's shared argument table (e.g. the Moon's E1–E13).
    Shared(usize),
    /// An argument used by this term only.
    Inline(Linear),
}

/// `amplitude · trig(argument)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodicTerm {
    pub amplitude: f64,
    pub trig: Trig,
    pub argument: Argument,
}

impl PeriodicTerm {
    pub const fn sin(amplitude: f64, argument: Argument) -> Self {
        Self {
            amplitude,
            trig: Trig::Sin,
            argument,
        }
    }

    pub const fn cos(amplitude: f64, argument: Argument) -> Self {
        Self {
            amplitude,
            trig: Trig::Cos,
            argument,
        }
    }
}

/// One output angle: polynomial base, optional `d²` term, then periodic terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleSeries {
    pub base: Linear,
    pub quadratic_days: Option<f64>,
    pub terms: &'static [PeriodicTerm],
}

impl AngleSeries {
    pub const fn new(base: Linear) -> Self {
        Self {
            base,
            quadratic_days: None,
            terms: &[],
        }
    }

    pub const fn with_terms(base: Linear, terms: &'static [PeriodicTerm]) -> Self {
        Self {
            base,
            quadratic_days: None,
            terms,
        }
    }

    fn evaluate<T: Real>(&self, time: &Time<T>, shared: &[T]) -> T {
        let mut value = self.base.evaluate(time);
        if let Some(coefficient) = self.quadratic_days {
            value = value + T::lit(coefficient) * (time.days * time.days);
        }
        for term in self.terms {
            let argument = match term.argument {
                Argument::Shared(index) => shared[index],
                Argument::Inline(linear) => linear.evaluate(time),
            };
            let periodic = match term.trig {
                Trig::Sin => sin_d(argument),
                Trig::Cos => cos_d(argument),
            };
            value = value + T::lit(term.amplitude) * periodic;
        }
        value
    }
}

/// Largest shared argument table any body uses (the Moon's E1–E13).
pub const MAX_SHARED_ARGUMENTS: usize = 13;

/// Complete rotational model for one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyModel {
    pub body: Body,
    pub report: Report,
    pub arguments: &'static [Linear],
    pub right_ascension: AngleSeries,
    pub declination: AngleSeries,
    pub rotation: AngleSeries,
}

impl BodyModel {
    /// Evaluate `(α, δ, W)` in the body's native WGCCRE convention.
    pub fn evaluate<T: Real>(&self, millennia: T) -> Orientation<T> {
        let time = Time::new(millennia);
        let mut shared = [T::zero(); MAX_SHARED_ARGUMENTS];
        for (slot, argument) in shared.iter_mut().zip(self.arguments) {
            *slot = argument.evaluate(&time);
        }
        let shared = &shared[..self.arguments.len()];

        Orientation::new(
            self.right_ascension.evaluate(&time, shared),
            self.declination.evaluate(&time, shared),
            self.rotation.evaluate(&time, shared),
        )
    }

    /// Number of periodic terms across all three angles.
    pub fn periodic_term_count(&self) -> usize {
        self.right_ascension.terms.len() + self.declination.terms.len() + self.rotation.terms.len()
    }
}

struct Time<T> {
    millennia: T,
    days: T,
}

impl<T: Real> Time<T> {
    fn new(millennia: T) -> Self {
        Self {
            millennia,
            days: days_elapsed(millennia),
        }
    }

    #[inline]
    fn get(&self, scale: TimeScale) -> T {
        match scale {
            TimeScale::Millennia => self.millennia,
            TimeScale::Days => self.days,
        }
    }
}
