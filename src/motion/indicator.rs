use nalgebra::{Point2, Vector2};

use crate::geometry::line_segment::LineSegment;

/// Short arrow drawn from a needle's midpoint, perpendicular to it, showing
/// which way the needle is moving.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionIndicator {
    pub origin: Point2<f64>,
    pub offset: Vector2<f64>,
}

impl DirectionIndicator {
    /// Zero-extent indicator, not drawn.
    pub fn hidden() -> Self {
        DirectionIndicator {
            origin: Point2::origin(),
            offset: Vector2::zeros(),
        }
    }

    /// Indicator of the given length pointing to the left of the segment
    /// (counter-clockwise from start-to-end).
    pub fn left_of(seg: &LineSegment, length: f64) -> Self {
        let seg_length = seg.length();
        if seg_length == 0.0 {
            return Self::hidden();
        }
        let d = seg.start_end();
        DirectionIndicator {
            origin: seg.centroid(),
            offset: Vector2::new(-d.y, d.x).scale(length / seg_length),
        }
    }

    pub fn tip(&self) -> Point2<f64> {
        self.origin + self.offset
    }

    pub fn extent(&self) -> f64 {
        self.offset.norm()
    }

    pub fn is_visible(&self) -> bool {
        self.extent() > 0.0
    }
}
