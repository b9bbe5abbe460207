/*

    Responsible for creating a struct that represents
    ranges from a to b and functionality to check if
    x is in range [a,b].

    See also associated constants of Interval class:
    - EMPTY: (inf, -inf)
    - UNIVERSE: (-inf, inf)
    - NONNEGATIVE: [0, inf)

    Rays are tested against boxes over an Interval of
    their parameter t, e.g. [epsilon, inf) for primary
    rays or [0, distance] for shadow rays.

    @author: Bartu
    @date: Sept 2025

*/

use crate::numeric::Float;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: Float,
    pub max: Float,
}

impl Interval {

    pub const EMPTY: Self = Self {
        min: FloatConst::INF,
        max: FloatConst::NEG_INF,
    };

    pub const UNIVERSE: Self = Self {
        min: FloatConst::NEG_INF,
        max: FloatConst::INF,
    };

    pub const NONNEGATIVE: Self = Self {
        min: 0.0,
        max: FloatConst::INF,
    };

    pub fn new(min: Float, max: Float) -> Self {
        Self {
            min,
            max,
        }
    }

    /// False for EMPTY and anything else with max < min.
    pub fn validate(&self) -> bool {
        self.max >= self.min
    }

    pub fn contains(&self, x: Float) -> bool {
        self.min <= x && x <= self.max
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::EMPTY
    }
}


pub trait FloatConst: Copy {
    const INF: Self;
    const NEG_INF: Self;
}

impl FloatConst for f32 {
    const INF: Self = f32::INFINITY;
    const NEG_INF: Self = f32::NEG_INFINITY;
}

impl FloatConst for f64 {
    const INF: Self = f64::INFINITY;
    const NEG_INF: Self = f64::NEG_INFINITY;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_interval_is_invalid() {
        assert!(!Interval::default().validate());
        assert!(Interval::new(2.0, 2.0).validate());
        assert!(!Interval::new(2.0, 1.0).validate());
    }

    #[test]
    fn contains_is_closed() {
        let unit = Interval::new(0.0, 1.0);
        assert!(unit.contains(0.0) && unit.contains(1.0));
        assert!(!unit.contains(1.5));
        assert!(Interval::NONNEGATIVE.contains(Float::INF));
        assert!(Interval::UNIVERSE.contains(Float::MIN));
    }
}
