/*

    Axis Aligned Bounding Box.

    A box is stored as its two extreme corners. A freshly
    created box is EMPTY, i.e. min = (inf, inf, inf) and
    max = (-inf, -inf, -inf), which makes it the identity
    of expand( ): growing an empty box by a point or by
    another box gives exactly that point or box.

    Ray intersection uses the slab method: the ray's valid
    range of t is clipped by the pair of planes on every
    axis, see intersection( ) below.

    @author: bartu
    @date: 9 Nov, 2025
*/

use serde::Serialize;

use crate::prelude::*;
use crate::interval::Interval;
use crate::ray::Ray;


/// Axis aligned box spanned by `min` and `max` corners.
///
/// Except for the empty state, `min[i] <= max[i]` holds on every axis.
#[derive(Debug, Clone, Copy, PartialEq, SmartDefault, Serialize, Deserialize)]
#[serde(from = "CornerPair")]
pub struct AABB {
    #[default(Vector3::INFINITY)]
    pub min: Vector3,
    #[default(Vector3::NEG_INFINITY)]
    pub max: Vector3,
}

impl AABB {

    pub const EMPTY: Self = Self {
        min: Vector3::INFINITY,
        max: Vector3::NEG_INFINITY,
    };

    /// Returned by intersection( ) when the ray misses the box in the given range.
    pub const MISS: Float = -1.0;

    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Cube [lo, lo, lo] - [hi, hi, hi] where the two scalars are ordered
    /// as a pair, i.e. from_scalars(5., 2.) is [2, 2, 2] - [5, 5, 5].
    pub fn from_scalars(a: Float, b: Float) -> Self {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        Self {
            min: Vector3::splat(lo),
            max: Vector3::splat(hi),
        }
    }

    /// Box spanned by two arbitrary corner points. Unlike from_scalars( ),
    /// ordering is decided on each axis independently.
    pub fn from_corners(a: Vector3, b: Vector3) -> Self {
        let mut aabb = Self::EMPTY;
        for i in 0..AXES {
            if a[i] < b[i] {
                aabb.min[i] = a[i];
                aabb.max[i] = b[i];
            } else {
                aabb.min[i] = b[i];
                aabb.max[i] = a[i];
            }
        }
        aabb
    }

    pub fn clear(&mut self) {
        *self = Self::EMPTY;
    }

    /// True while nothing has been expanded into the box.
    pub fn is_empty(&self) -> bool {
        (0..AXES).any(|i| !self.axis(i).validate())
    }

    /// Extent of the box on every axis.
    /// NOTE: meaningless on an empty box, gives (-inf, -inf, -inf).
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    /// NOTE: meaningless on an empty box, same as size( ).
    pub fn centroid(&self) -> Vector3 {
        (self.min + self.max) * 0.5
    }

    /// Slab of the box on the given axis as an Interval.
    pub fn axis(&self, i: usize) -> Interval {
        Interval::new(self.min[i], self.max[i])
    }

    pub fn expand(&mut self, p: Vector3) {
        for i in 0..AXES {
            if p[i] < self.min[i] { self.min[i] = p[i]; }
            if p[i] > self.max[i] { self.max[i] = p[i]; }
        }
    }

    pub fn expand_aabb(&mut self, other: &AABB) {
        for i in 0..AXES {
            if other.min[i] < self.min[i] { self.min[i] = other.min[i]; }
            if other.max[i] > self.max[i] { self.max[i] = other.max[i]; }
        }
    }

    /// Strict containment, points on a face are NOT inside so that
    /// neighbouring boxes sharing a face never both claim a point.
    pub fn is_inside(&self, p: Vector3) -> bool {
        (0..AXES).all(|i| p[i] > self.min[i] && p[i] < self.max[i])
    }

    pub fn is_intersect(&self, ray: &Ray, tnear: Float, tfar: Float) -> bool {
        self.intersection(ray, tnear, tfar) > 0.0
    }

    /// Parametric distance of the ray to the box within [tnear, tfar],
    /// or AABB::MISS (-1.0) if the ray does not pass through it there.
    ///
    /// The entry distance is returned when it lies ahead of the origin,
    /// otherwise the exit distance is returned. That covers a ray starting
    /// inside the box, but ALSO a box lying entirely behind the origin when
    /// tnear allows negative t; callers can't tell these two apart.
    ///
    /// Zero direction components are not special-cased: 1/0 is a signed
    /// infinity and the comparisons below treat it correctly, a ray parallel
    /// to a slab either sees (-inf, inf) or misses it entirely.
    pub fn intersection(&self, ray: &Ray, tnear: Float, tfar: Float) -> Float {
        // See slides 03, p.5-6
        let mut largest_min = tnear;
        let mut smallest_max = tfar;

        for i in 0..AXES {
            let inv_d = 1.0 / ray.direction[i];
            let mut t0 = (self.min[i] - ray.origin[i]) * inv_d;
            let mut t1 = (self.max[i] - ray.origin[i]) * inv_d;
            if inv_d < 0.0 {
                // Travelling towards -axis, max plane is hit first
                std::mem::swap(&mut t0, &mut t1);
            }

            largest_min = largest_min.max(t0);
            smallest_max = smallest_max.min(t1);

            if smallest_max < largest_min {
                return Self::MISS;
            }
        }

        if largest_min > 0.0 { largest_min } else { smallest_max }
    }

    /// Same as intersection( ) with the range given as an Interval.
    pub fn intersection_in(&self, ray: &Ray, t_interval: &Interval) -> Float {
        self.intersection(ray, t_interval.min, t_interval.max)
    }
}

impl FromIterator<Vector3> for AABB {
    fn from_iter<I: IntoIterator<Item = Vector3>>(iter: I) -> Self {
        let mut aabb = AABB::new();
        for p in iter {
            aabb.expand(p);
        }
        aabb
    }
}

// Boxes in JSON files are given by two corners in any order,
// so they go through from_corners( ) when deserialized.
#[derive(Deserialize)]
struct CornerPair {
    min: Vector3,
    max: Vector3,
}

impl From<CornerPair> for AABB {
    fn from(pair: CornerPair) -> Self {
        AABB::from_corners(pair.min, pair.max)
    }
}
