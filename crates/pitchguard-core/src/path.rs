//! The enemy route: an immutable, arc-length parameterized polyline.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{FIELD_HEIGHT, FIELD_WIDTH, PATH_SAMPLE_COUNT};

/// An ordered polyline with parametric position lookup.
///
/// `point_at(t)` is defined and continuous for all `t in [0, 1]` and
/// clamps values outside that range to the nearest endpoint. The
/// parameterization is by arc length, so equal increments of `t` cover
/// equal distances regardless of segment subdivision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Path {
    waypoints: Vec<DVec2>,
    /// Cumulative length up to each waypoint; same length as `waypoints`.
    cumulative: Vec<f64>,
    total_length: f64,
}

impl Path {
    /// Build a path from ordered waypoints.
    ///
    /// # Panics
    /// Panics if fewer than two waypoints are supplied; a route needs a
    /// start and an end.
    pub fn new(waypoints: Vec<DVec2>) -> Self {
        assert!(waypoints.len() >= 2, "a path needs at least two waypoints");

        let mut cumulative = Vec::with_capacity(waypoints.len());
        let mut total = 0.0;
        cumulative.push(0.0);
        for pair in waypoints.windows(2) {
            total += pair[0].distance(pair[1]);
            cumulative.push(total);
        }

        Self {
            waypoints,
            cumulative,
            total_length: total,
        }
    }

    /// The authored route of the default pitch, goal line to goal line.
    pub fn default_pitch() -> Self {
        Self::new(vec![
            DVec2::new(5.0, FIELD_HEIGHT / 2.0),
            DVec2::new(150.0, FIELD_HEIGHT / 2.0),
            DVec2::new(250.0, 100.0),
            DVec2::new(550.0, 100.0),
            DVec2::new(650.0, FIELD_HEIGHT / 2.0),
            DVec2::new(FIELD_WIDTH - 5.0, FIELD_HEIGHT / 2.0),
        ])
    }

    /// Position at normalized progress `t`, clamped to `[0, 1]`.
    pub fn point_at(&self, t: f64) -> DVec2 {
        let t = t.clamp(0.0, 1.0);
        let target = t * self.total_length;

        // Find the segment containing the target arc length.
        let idx = match self
            .cumulative
            .iter()
            .position(|&len| len >= target)
        {
            Some(0) | None => return self.waypoints[0],
            Some(i) => i,
        };

        let a = self.waypoints[idx - 1];
        let b = self.waypoints[idx];
        let seg_start = self.cumulative[idx - 1];
        let seg_len = self.cumulative[idx] - seg_start;
        if seg_len <= f64::EPSILON {
            return b;
        }
        a.lerp(b, (target - seg_start) / seg_len)
    }

    /// Path start (t = 0).
    pub fn start(&self) -> DVec2 {
        self.waypoints[0]
    }

    /// Breach point (t = 1).
    pub fn end(&self) -> DVec2 {
        self.waypoints[self.waypoints.len() - 1]
    }

    /// Total arc length.
    pub fn length(&self) -> f64 {
        self.total_length
    }

    /// Minimum distance from `point` to the path, measured against
    /// `PATH_SAMPLE_COUNT` uniformly spaced sample points.
    pub fn min_distance_to(&self, point: DVec2) -> f64 {
        (0..PATH_SAMPLE_COUNT)
            .map(|i| {
                let t = i as f64 / (PATH_SAMPLE_COUNT - 1) as f64;
                self.point_at(t).distance(point)
            })
            .fold(f64::INFINITY, f64::min)
    }
}
