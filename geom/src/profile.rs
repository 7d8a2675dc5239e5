use serde::{Deserialize, Serialize};

use crate::Distance;

/// `a + b*ds + c*ds^2 + d*ds^3`, where `ds` is measured from `s0`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Polynomial {
    pub s0: Distance,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Polynomial {
    pub fn new(s0: Distance, a: f64, b: f64, c: f64, d: f64) -> Polynomial {
        Polynomial { s0, a, b, c, d }
    }

    pub fn constant(value: Distance) -> Polynomial {
        Polynomial::new(Distance::ZERO, value.inner_meters(), 0.0, 0.0, 0.0)
    }

    /// Starts at `value` at `s0` and changes by `slope` meters per meter.
    pub fn linear(s0: Distance, value: Distance, slope: f64) -> Polynomial {
        Polynomial::new(s0, value.inner_meters(), slope, 0.0, 0.0)
    }

    pub fn get(&self, x: Distance) -> Distance {
        let ds = (x - self.s0).inner_meters();
        Distance::meters(self.a + ds * (self.b + ds * (self.c + ds * self.d)))
    }
}

/// A sequence of polynomials, each one taking over from its `s0`. Before the first `s0`, the
/// first polynomial applies. An empty sequence is zero everywhere.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Polynomial>", into = "Vec<Polynomial>")]
pub struct PiecewisePolynomial {
    // Sorted by s0
    segments: Vec<Polynomial>,
}

impl PiecewisePolynomial {
    pub fn new(mut segments: Vec<Polynomial>) -> PiecewisePolynomial {
        segments.sort_by_key(|p| p.s0);
        PiecewisePolynomial { segments }
    }

    pub fn segments(&self) -> &Vec<Polynomial> {
        &self.segments
    }

    /// The polynomial in effect at `x`, if there are any.
    pub fn segment_at(&self, x: Distance) -> Option<&Polynomial> {
        let idx = self.segments.partition_point(|p| p.s0 <= x);
        self.segments.get(idx.saturating_sub(1))
    }

    pub fn get(&self, x: Distance) -> Distance {
        match self.segment_at(x) {
            Some(p) => p.get(x),
            None => Distance::ZERO,
        }
    }
}

impl From<Vec<Polynomial>> for PiecewisePolynomial {
    fn from(segments: Vec<Polynomial>) -> PiecewisePolynomial {
        PiecewisePolynomial::new(segments)
    }
}

impl From<PiecewisePolynomial> for Vec<Polynomial> {
    fn from(p: PiecewisePolynomial) -> Vec<Polynomial> {
        p.segments
    }
}

/// Some function of distance along a road, like a lane's width or the road's lateral offset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Profile {
    Constant(Distance),
    Cubic(Polynomial),
    Piecewise(PiecewisePolynomial),
}

impl Profile {
    pub fn zero() -> Profile {
        Profile::Constant(Distance::ZERO)
    }

    pub fn get(&self, x: Distance) -> Distance {
        match self {
            Profile::Constant(value) => *value,
            Profile::Cubic(p) => p.get(x),
            Profile::Piecewise(p) => p.get(x),
        }
    }
}

impl Default for Profile {
    fn default() -> Profile {
        Profile::zero()
    }
}
