//! Curved-path generator for the hotspot map.
//!
//! Consecutive hotspots are joined by cubic segments whose control
//! points sit perpendicular to the chord, giving the decorative bowed
//! look of the map without any randomness.

use serde::Serialize;

/// Maximum perpendicular control-point offset, in percent units.
pub const MAX_CURVATURE: f64 = 18.0;

/// 2-D point in percent coordinates (y grows downward, as on screen).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Cubic Bézier segment between two hotspots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurveSegment {
    pub from: Point,
    pub c1: Point,
    pub c2: Point,
    pub to: Point,
}

impl CurveSegment {
    /// Evaluates the cubic Bézier at `t` in [0, 1].
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point {
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        Point {
            x: b0 * self.from.x + b1 * self.c1.x + b2 * self.c2.x + b3 * self.to.x,
            y: b0 * self.from.y + b1 * self.c1.y + b2 * self.c2.y + b3 * self.to.y,
        }
    }

    /// Samples the segment into `steps` chords for polyline rendering.
    #[must_use]
    pub fn sample(&self, steps: usize) -> Vec<Point> {
        let steps = steps.max(1);
        (0..=steps)
            .map(|i| self.point_at(i as f64 / steps as f64))
            .collect()
    }
}

/// Builds one curve per consecutive point pair. The control points are
/// offset from the chord midpoint by `min(0.25 × length, MAX_CURVATURE)`
/// along the perpendicular, mirrored about the chord.
#[must_use]
pub fn curved_paths(points: &[Point]) -> Vec<CurveSegment> {
    points
        .windows(2)
        .map(|pair| {
            let (from, to) = (pair[0], pair[1]);
            let dx = to.x - from.x;
            let dy = to.y - from.y;
            let mx = (from.x + to.x) / 2.0;
            let my = (from.y + to.y) / 2.0;
            let curvature = (dx.hypot(dy) * 0.25).min(MAX_CURVATURE);

            let (nx, ny) = (-dy, dx);
            let nlen = nx.hypot(ny);
            let nlen = if nlen == 0.0 { 1.0 } else { nlen };
            let ux = nx / nlen * curvature;
            let uy = ny / nlen * curvature;

            CurveSegment {
                from,
                c1: Point::new(mx + ux, my + uy),
                c2: Point::new(mx - ux, my - uy),
                to,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offset(seg: &CurveSegment) -> f64 {
        let mx = (seg.from.x + seg.to.x) / 2.0;
        let my = (seg.from.y + seg.to.y) / 2.0;
        (seg.c1.x - mx).hypot(seg.c1.y - my)
    }

    #[test]
    fn test_one_segment_per_consecutive_pair() {
        let points = vec![
            Point::new(15.0, 75.0),
            Point::new(35.0, 85.0),
            Point::new(60.0, 45.0),
        ];
        assert_eq!(curved_paths(&points).len(), 2);
        assert!(curved_paths(&points[..1]).is_empty());
        assert!(curved_paths(&[]).is_empty());
    }

    #[test]
    fn test_curvature_is_quarter_length_capped_at_18() {
        // Short chord: 0.25 × 20 = 5.
        let short = curved_paths(&[Point::new(0.0, 0.0), Point::new(20.0, 0.0)]);
        assert!((offset(&short[0]) - 5.0).abs() < 1e-9);

        // Long chord: 0.25 × 100 = 25, capped at 18.
        let long = curved_paths(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
        assert!((offset(&long[0]) - MAX_CURVATURE).abs() < 1e-9);
    }

    #[test]
    fn test_control_points_mirror_about_midpoint() {
        let segs = curved_paths(&[Point::new(10.0, 20.0), Point::new(50.0, 60.0)]);
        let seg = &segs[0];
        let mx = (seg.from.x + seg.to.x) / 2.0;
        let my = (seg.from.y + seg.to.y) / 2.0;
        assert!((seg.c1.x - mx + (seg.c2.x - mx)).abs() < 1e-9);
        assert!((seg.c1.y - my + (seg.c2.y - my)).abs() < 1e-9);
    }

    #[test]
    fn test_bezier_endpoints() {
        let segs = curved_paths(&[Point::new(15.0, 75.0), Point::new(35.0, 85.0)]);
        let seg = &segs[0];
        let start = seg.point_at(0.0);
        let end = seg.point_at(1.0);
        assert!((start.x - 15.0).abs() < 1e-9 && (start.y - 75.0).abs() < 1e-9);
        assert!((end.x - 35.0).abs() < 1e-9 && (end.y - 85.0).abs() < 1e-9);
    }

    #[test]
    fn test_coincident_points_do_not_divide_by_zero() {
        let segs = curved_paths(&[Point::new(5.0, 5.0), Point::new(5.0, 5.0)]);
        let seg = &segs[0];
        assert!(seg.c1.x.is_finite() && seg.c1.y.is_finite());
        assert_eq!(seg.c1, Point::new(5.0, 5.0));
    }

    #[test]
    fn test_sampling_is_deterministic() {
        let segs = curved_paths(&[Point::new(0.0, 0.0), Point::new(40.0, 30.0)]);
        assert_eq!(segs[0].sample(16), segs[0].sample(16));
        assert_eq!(segs[0].sample(16).len(), 17);
    }
}
