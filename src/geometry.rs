use nalgebra::{Point2, Vector2};

use self::line_segment::LineSegment;

pub mod line_segment;
pub mod triangle;

pub fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let n = ((stop - start) / step).ceil() as usize;
    (0..n).map(|i| start + i as f64 * step).collect()
}

// Segments of a fixed length fanning out from a common origin, one per angle (in degrees).
pub fn direction_rays(origin: Point2<f64>, angles_deg: &[f64], length: f64) -> Vec<LineSegment> {
    angles_deg
        .iter()
        .map(|angle| LineSegment::from_polar(origin, angle.to_radians(), length))
        .collect()
}

/// Axis-aligned window of plot coordinates.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl Bounds {
    pub const fn new(x: (f64, f64), y: (f64, f64)) -> Self {
        Bounds { x, y }
    }

    pub fn width(&self) -> f64 {
        self.x.1 - self.x.0
    }

    pub fn height(&self) -> f64 {
        self.y.1 - self.y.0
    }

    pub fn centre(&self) -> Point2<f64> {
        Point2::new(0.5 * (self.x.0 + self.x.1), 0.5 * (self.y.0 + self.y.1))
    }

    pub fn l(&self) -> Vector2<f64> {
        Vector2::new(self.width(), self.height())
    }

    pub fn contains(&self, p: &Point2<f64>) -> bool {
        p.x >= self.x.0 && p.x <= self.x.1 && p.y >= self.y.0 && p.y <= self.y.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn arange_excludes_stop() {
        let angles = arange(0.0, 180.0, 15.0);
        assert_eq!(angles.len(), 12);
        assert_eq!(angles[0], 0.0);
        assert_eq!(angles[11], 165.0);
    }

    #[test]
    fn rays_share_origin_and_length() {
        let origin = Point2::new(2.0, 1.0);
        let rays = direction_rays(origin, &[0.0, 90.0], 0.8);
        assert_eq!(rays.len(), 2);
        assert_eq!(rays[0].start, origin);
        assert_relative_eq!(rays[0].end, Point2::new(2.8, 1.0), epsilon = 1e-12);
        assert_relative_eq!(rays[1].end, Point2::new(2.0, 1.8), epsilon = 1e-12);
    }

    #[test]
    fn bounds_centre_and_extent() {
        let b = Bounds::new((0.0, 4.0), (-0.5, 2.5));
        assert_eq!(b.centre(), Point2::new(2.0, 1.0));
        assert_eq!(b.l(), Vector2::new(4.0, 3.0));
        assert!(b.contains(&Point2::new(0.0, 2.5)));
        assert!(!b.contains(&Point2::new(4.1, 0.0)));
    }
}
