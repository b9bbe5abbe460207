
use crate::prelude::*;


/// Ray r(t) = o + dt.
///
/// Direction is NOT required to be normalized, the parameter t
/// is measured in units of the direction's length. Rays coming
/// from object-space transforms keep their scale on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
    /// Carried for the renderer's motion blur, boxes ignore it.
    #[serde(default)]
    pub time: Float,
}

impl Ray {

    pub fn new(origin: Vector3, direction: Vector3, time: Float) -> Self {
        Self {
            origin,
            direction,
            time,
        }
    }

    pub fn new_from(origin: Vector3, direction: Vector3) -> Self {
        Self {
            origin,
            direction,
            time: 0.,
        }
    }

    #[inline]
    pub fn at(&self, t: Float) -> Vector3 {
        self.origin + self.direction * t // r(t) = o + dt
    }
}
