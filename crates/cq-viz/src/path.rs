//! Spline path generation
//!
//! Fits a Catmull-Rom spline through sample points and emits it as cubic
//! Bezier segments, so the analyzer trace renders without visible polyline
//! breaks. The output is a backend-agnostic path description; painting it
//! is the renderer's job.

use serde::{Deserialize, Serialize};

use crate::spectrum::SPECTRUM_FLOOR_DB;

/// One path command for the external renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    MoveTo {
        x: f32,
        y: f32,
    },
    CubicTo {
        c1x: f32,
        c1y: f32,
        c2x: f32,
        c2y: f32,
        x: f32,
        y: f32,
    },
}

/// Catmull-Rom spline through `points`, as cubic Beziers
///
/// Interior tangents come from the neighboring samples; the first and last
/// points are duplicated at the boundaries, so the emitted curve passes
/// through every input point and its endpoints equal the first and last
/// samples exactly. Fewer than two points yield an empty path.
pub fn spline_path(points: &[(f32, f32)]) -> Vec<PathSegment> {
    if points.len() < 2 {
        return Vec::new();
    }

    let n = points.len();
    let at = |i: isize| points[i.clamp(0, n as isize - 1) as usize];

    let mut path = Vec::with_capacity(n);
    path.push(PathSegment::MoveTo {
        x: points[0].0,
        y: points[0].1,
    });

    for i in 0..n - 1 {
        let p0 = at(i as isize - 1);
        let p1 = at(i as isize);
        let p2 = at(i as isize + 1);
        let p3 = at(i as isize + 2);

        // Standard Catmull-Rom to Bezier control points (tension 0.5)
        path.push(PathSegment::CubicTo {
            c1x: p1.0 + (p2.0 - p0.0) / 6.0,
            c1y: p1.1 + (p2.1 - p0.1) / 6.0,
            c2x: p2.0 - (p3.0 - p1.0) / 6.0,
            c2y: p2.1 - (p3.1 - p1.1) / 6.0,
            x: p2.0,
            y: p2.1,
        });
    }

    path
}

/// Spline path for a smoothed spectrum frame
///
/// Bins spread evenly across `width`; dB maps linearly from the silence
/// floor at the bottom edge to 0 dB at the top.
pub fn spectrum_path(frame: &[f32], width: f32, height: f32) -> Vec<PathSegment> {
    if frame.len() < 2 {
        return Vec::new();
    }

    let points: Vec<(f32, f32)> = frame
        .iter()
        .enumerate()
        .map(|(i, &db)| {
            let x = i as f32 / (frame.len() - 1) as f32 * width;
            let norm = (db - SPECTRUM_FLOOR_DB) / -SPECTRUM_FLOOR_DB;
            let y = (1.0 - norm.clamp(0.0, 1.0)) * height;
            (x, y)
        })
        .collect();

    spline_path(&points)
}
