//! Unit-safe distances and the 1D functions (lane widths, lateral offsets) evaluated along a
//! road.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use crate::distance::Distance;
pub use crate::profile::{PiecewisePolynomial, Polynomial, Profile};

mod distance;
mod profile;

/// Reduce the precision of an f64. This helps ensure serialization is idempotent (everything is
/// exactly the same before and after saving/loading). Ideally we'd use some kind of proper
/// fixed-precision type instead of f64.
pub fn trim_f64(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

/// Serializes a trimmed `f64`. We MUST round here, the same as `trim_f64`.
fn serialize_f64<S: Serializer>(x: &f64, s: S) -> Result<S::Ok, S::Error> {
    trim_f64(*x).serialize(s)
}

/// Deserializes an `f64`, trimming it the same way construction does.
fn deserialize_f64<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    let x = <f64>::deserialize(d)?;
    if !x.is_finite() {
        return Err(serde::de::Error::custom(format!("non-finite value {}", x)));
    }
    Ok(trim_f64(x))
}

/// The smallest difference between two distinct `Distance`s.
pub const EPSILON_DIST: Distance = Distance::const_meters(0.0001);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimming_is_stable() {
        for x in [0.0, 3.5, -3.5, 1.23456789, -0.00004, 214_000.12345] {
            assert_eq!(trim_f64(x), trim_f64(trim_f64(x)));
        }
        assert_eq!(trim_f64(1.23456789), 1.2346);
        assert_eq!(trim_f64(-0.00004), 0.0);
    }
}
