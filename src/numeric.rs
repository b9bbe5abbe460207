/*

    Declare numeric types used throughout this repo.

    Precision is selected once for the whole crate. By default
    computations are done in f64 with DVec3; enabling the
    `single-precision` feature switches both of these together:
    pub type Float = f32;
    pub type Vector3 = Vec3;

    so they can never go out of sync with each other.

    @date: 2 Oct, 2025
    @author: Bartu
*/

#[cfg(not(feature = "single-precision"))]
use bevy_math::DVec3;
#[cfg(feature = "single-precision")]
use bevy_math::Vec3;

pub type Int = i32;

#[cfg(not(feature = "single-precision"))]
pub type Float = f64;
#[cfg(not(feature = "single-precision"))]
pub type Vector3 = DVec3;

#[cfg(feature = "single-precision")]
pub type Float = f32;
#[cfg(feature = "single-precision")]
pub type Vector3 = Vec3;

/// Number of axes a Vector3 has, handy for per-axis loops.
pub const AXES: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_components_are_indexable_per_axis() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let collected: Vec<Float> = (0..AXES).map(|i| v[i]).collect();
        assert_eq!(collected, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn division_by_zero_gives_signed_infinity() {
        let pos: Float = 0.0;
        let neg: Float = -0.0;
        assert_eq!(1.0 / pos, Float::INFINITY);
        assert_eq!(1.0 / neg, Float::NEG_INFINITY);
    }
}
