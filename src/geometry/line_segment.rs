use nalgebra::{Point2, Vector2};

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub start: Point2<f64>,
    pub end: Point2<f64>,
}

impl LineSegment {
    pub fn new(start: Point2<f64>, end: Point2<f64>) -> Self {
        LineSegment { start, end }
    }

    // Segment starting at `origin`, pointing at `angle` radians from the x-axis.
    pub fn from_polar(origin: Point2<f64>, angle: f64, length: f64) -> Self {
        let d = Vector2::new(angle.cos(), angle.sin()).scale(length);
        LineSegment {
            start: origin,
            end: origin + d,
        }
    }

    pub fn translate(&mut self, dr: Vector2<f64>) {
        self.start += dr;
        self.end += dr;
    }

    pub fn centroid(&self) -> Point2<f64> {
        nalgebra::center(&self.start, &self.end)
    }

    pub fn start_end(&self) -> Vector2<f64> {
        self.end - self.start
    }

    pub fn length(&self) -> f64 {
        self.start_end().norm()
    }

    pub fn is_zero(&self) -> bool {
        self.length() == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.start.iter().chain(self.end.iter()).all(|c| c.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn centroid_is_midpoint() {
        let seg = LineSegment::new(Point2::new(0.0, 0.0), Point2::new(1.0, 2.0));
        assert_eq!(seg.centroid(), Point2::new(0.5, 1.0));
        assert_relative_eq!(seg.length(), 5.0_f64.sqrt());
    }

    #[test]
    fn translate_keeps_direction() {
        let mut seg = LineSegment::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
        let before = seg.start_end();
        seg.translate(Vector2::new(0.2, 0.1));
        assert_eq!(seg.start, Point2::new(0.2, 0.1));
        assert_eq!(seg.start_end(), before);
    }

    #[test]
    fn degenerate_segment_is_zero() {
        let p = Point2::new(0.3, 0.4);
        let seg = LineSegment::new(p, p);
        assert!(seg.is_zero());
        assert!(seg.is_finite());
    }
}
