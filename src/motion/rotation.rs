use std::f64::consts::PI;

use nalgebra::Point2;

use crate::geometry::line_segment::LineSegment;

use super::{indicator::DirectionIndicator, NeedleFrame};

pub const FRAMES_PER_TURN: usize = 360;

/// A needle turning about one endpoint by one degree per frame.
#[derive(Clone, Debug, PartialEq)]
pub struct RotationMotion {
    pub pivot: Point2<f64>,
    pub needle_length: f64,
    pub indicator_length: f64,
}

impl RotationMotion {
    pub fn new(needle_length: f64, indicator_length: f64) -> Self {
        RotationMotion {
            pivot: Point2::origin(),
            needle_length,
            indicator_length,
        }
    }

    pub fn angle(frame: usize) -> f64 {
        ((frame % FRAMES_PER_TURN) as f64).to_radians()
    }

    pub fn needle(&self, frame: usize) -> LineSegment {
        LineSegment::from_polar(self.pivot, Self::angle(frame), self.needle_length)
    }

    pub fn update(&self, frame: usize) -> NeedleFrame {
        let needle = self.needle(frame);
        NeedleFrame {
            needle,
            indicator: DirectionIndicator::left_of(&needle, self.indicator_length),
        }
    }

    // A full turn sweeps the disk of radius `needle_length`.
    pub fn swept_area(&self) -> f64 {
        PI * self.needle_length.powi(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use nalgebra::Vector2;

    fn unit() -> RotationMotion {
        RotationMotion::new(1.0, 0.3)
    }

    #[test]
    fn endpoint_stays_on_unit_circle() {
        let motion = unit();
        for frame in (0..1000).step_by(7) {
            let end = motion.needle(frame).end;
            assert_relative_eq!(end.coords.norm_squared(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn period_is_one_turn() {
        let motion = unit();
        for frame in [0, 1, 89, 180, 359, 1234] {
            assert_eq!(motion.needle(frame), motion.needle(frame + FRAMES_PER_TURN));
        }
    }

    #[test]
    fn quarter_turn_points_up() {
        let needle = unit().needle(90);
        assert_eq!(needle.start, Point2::origin());
        assert_abs_diff_eq!(needle.end, Point2::new(0.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn indicator_leads_by_quarter_turn() {
        let motion = unit();
        let frame = 30;
        let theta = RotationMotion::angle(frame);
        let NeedleFrame { needle, indicator } = motion.update(frame);
        assert_relative_eq!(indicator.origin, needle.centroid(), epsilon = 1e-12);
        let expected = Vector2::new((theta + PI / 2.0).cos(), (theta + PI / 2.0).sin()) * 0.3;
        assert_relative_eq!(indicator.offset, expected, epsilon = 1e-12);
    }

    #[test]
    fn disk_area() {
        assert_eq!(format!("{:.3}", unit().swept_area()), "3.142");
        assert_relative_eq!(unit().swept_area(), 3.14159, epsilon = 1e-5);
    }
}
