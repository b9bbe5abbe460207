/*

    Box probe: shoot a batch of rays at a set of boxes and
    report, for each ray, the closest box it hits.

    Probe files are JSON:

    {
        "boxes": [ { "min": [-1, -1, -1], "max": [1, 1, 1] } ],
        "rays":  [ { "origin": [-5, 0, 0], "direction": [1, 0, 0] } ],
        "tNear": 0.0001,
        "tFar": 100
    }

    tNear defaults to 0 and tFar to infinity.
    Box corners may be given in any order.

    Boxes are only read once loaded, so rays are traced in
    parallel with rayon, each worker sharing the same boxes.

    @date: 14 Nov, 2025
    @author: bartu
*/

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;

use crate::prelude::*;
use crate::aabb::AABB;
use crate::interval::{FloatConst, Interval};
use crate::json_parser::{deser_float, parse_json_file};
use crate::ray::Ray;

fn default_t_far() -> Float {
    FloatConst::INF
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProbeScene {
    #[serde(default)]
    pub boxes: Vec<AABB>,
    #[serde(default)]
    pub rays: Vec<Ray>,
    #[serde(rename = "tNear", default, deserialize_with = "deser_float")]
    pub t_near: Float,
    #[serde(rename = "tFar", default = "default_t_far", deserialize_with = "deser_float")]
    pub t_far: Float,
}

/// Closest box hit by a single ray. `aabb` is None and `t` is AABB::MISS
/// when the ray hits nothing.
///
/// A ray that starts inside a box and never leaves it within the range
/// (zero direction, tFar = inf) hits with t = inf. JSON has no infinity,
/// so `t` is left out of the report for such hits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProbeHit {
    pub ray: usize,
    pub aabb: Option<usize>,
    #[serde(skip_serializing_if = "is_unbounded")]
    pub t: Float,
}

fn is_unbounded(t: &Float) -> bool {
    !t.is_finite()
}

impl ProbeHit {
    pub fn miss(ray: usize) -> Self {
        Self { ray, aabb: None, t: AABB::MISS }
    }

    pub fn is_hit(&self) -> bool {
        self.aabb.is_some()
    }
}

/// `bounds` is None (null) when there are no boxes, the EMPTY sentinel
/// can't be written as JSON.
#[derive(Debug, Serialize)]
pub struct ProbeReport<'a> {
    pub bounds: Option<AABB>,
    pub hit_count: usize,
    pub hits: &'a [ProbeHit],
}

impl ProbeScene {

    pub fn new(boxes: Vec<AABB>, rays: Vec<Ray>, t_interval: Interval) -> Self {
        Self {
            boxes,
            rays,
            t_near: t_interval.min,
            t_far: t_interval.max,
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let span = tracing::span!(tracing::Level::INFO, "load_probe");
        let _enter = span.enter();

        let scene: ProbeScene = parse_json_file(&path)?;
        info!("Loaded {} boxes and {} rays from {}", scene.boxes.len(), scene.rays.len(), path.as_ref().display());
        if scene.boxes.is_empty() {
            warn!("Probe has no boxes, every ray will miss.");
        }
        Ok(scene)
    }

    pub fn from_json_str(s: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let scene: ProbeScene = serde_json::from_str(s)?;
        Ok(scene)
    }

    pub fn t_interval(&self) -> Interval {
        Interval::new(self.t_near, self.t_far)
    }

    /// Union of every box, EMPTY if there are none.
    pub fn bounds(&self) -> AABB {
        self.boxes.iter().fold(AABB::new(), |mut acc, aabb| {
            acc.expand_aabb(aabb);
            acc
        })
    }

    /// Closest hit for every ray, in ray order.
    pub fn run(&self) -> Vec<ProbeHit> {
        let start = Instant::now();
        let t_interval = self.t_interval();
        let hits: Vec<ProbeHit> = self.rays
            .par_iter()
            .enumerate()
            .map(|(i, ray)| self.closest_hit(i, ray, &t_interval))
            .collect();

        debug!("Probed {} rays against {} boxes in {:.2?}", self.rays.len(), self.boxes.len(), start.elapsed());
        hits
    }

    fn closest_hit(&self, index: usize, ray: &Ray, t_interval: &Interval) -> ProbeHit {
        // Same scheme as a naive scene hit, keep the smallest positive t
        let mut rec = ProbeHit::miss(index);
        for (b, aabb) in self.boxes.iter().enumerate() {
            let t = aabb.intersection_in(ray, t_interval);
            if t > 0.0 && (!rec.is_hit() || t < rec.t) {
                debug_assert!(t_interval.contains(t));
                rec.aabb = Some(b);
                rec.t = t;
            }
        }
        rec
    }
}

/// Write the report as pretty JSON, creating parent folders if needed.
pub fn write_report<P: AsRef<Path>>(path: P, bounds: AABB, hits: &[ProbeHit]) -> Result<(), Box<dyn std::error::Error>> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let report = ProbeReport {
        bounds: if bounds.is_empty() { None } else { Some(bounds) },
        hit_count: hits.iter().filter(|h| h.is_hit()).count(),
        hits,
    };
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &report)?;
    info!("Saved {}", path.display());
    Ok(())
}
