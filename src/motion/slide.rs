use nalgebra::Point2;

use crate::geometry::{line_segment::LineSegment, triangle::Triangle};

use super::{indicator::DirectionIndicator, NeedleFrame};

pub const PHASE_COUNT: usize = 4;

/// Stage of the slide around the triangle with vertices A (base-left),
/// B (base-right) and C (apex).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlidePhase {
    // Ends ride up AC and BC, shrinking the needle to the apex.
    Rise,
    // Ends ride down CB and CA.
    Descend,
    // Ends swap along the base, B to A and A to B.
    Base,
    // Needle parked on AB.
    Rest,
}

impl SlidePhase {
    pub const ALL: [SlidePhase; PHASE_COUNT] = [
        SlidePhase::Rise,
        SlidePhase::Descend,
        SlidePhase::Base,
        SlidePhase::Rest,
    ];

    pub fn index(self) -> usize {
        match self {
            SlidePhase::Rise => 0,
            SlidePhase::Descend => 1,
            SlidePhase::Base => 2,
            SlidePhase::Rest => 3,
        }
    }

    pub fn start(self) -> f64 {
        self.index() as f64
    }

    /// Phase containing `progress`, and the fraction `alpha` in [0, 1) of the
    /// way through it.
    pub fn at_progress(progress: f64) -> (Self, f64) {
        let phase = if progress < 1.0 {
            SlidePhase::Rise
        } else if progress < 2.0 {
            SlidePhase::Descend
        } else if progress < 3.0 {
            SlidePhase::Base
        } else {
            SlidePhase::Rest
        };
        (phase, progress - phase.start())
    }
}

/// A needle sliding its two ends along the sides of an equilateral triangle,
/// `frames_per_phase` frames per phase.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideMotion {
    pub triangle: Triangle,
    pub frames_per_phase: usize,
    pub indicator_length: f64,
}

impl SlideMotion {
    pub fn new(triangle_height: f64, frames_per_phase: usize, indicator_length: f64) -> Self {
        SlideMotion {
            triangle: Triangle::equilateral_with_height(triangle_height),
            frames_per_phase,
            indicator_length,
        }
    }

    pub fn cycle_len(&self) -> usize {
        self.frames_per_phase * PHASE_COUNT
    }

    pub fn progress(&self, frame: usize) -> f64 {
        (frame % self.cycle_len()) as f64 / self.frames_per_phase as f64
    }

    pub fn phase(&self, frame: usize) -> SlidePhase {
        SlidePhase::at_progress(self.progress(frame)).0
    }

    pub fn needle_at_progress(&self, progress: f64) -> LineSegment {
        let [a, b, c] = self.triangle.vertices;
        let (phase, alpha) = SlidePhase::at_progress(progress);
        let lerp = |p: Point2<f64>, q: Point2<f64>| p.lerp(&q, alpha);
        match phase {
            SlidePhase::Rise => LineSegment::new(lerp(a, c), lerp(b, c)),
            SlidePhase::Descend => LineSegment::new(lerp(c, b), lerp(c, a)),
            SlidePhase::Base => LineSegment::new(lerp(b, a), lerp(a, b)),
            SlidePhase::Rest => LineSegment::new(a, b),
        }
    }

    pub fn needle(&self, frame: usize) -> LineSegment {
        self.needle_at_progress(self.progress(frame))
    }

    pub fn update(&self, frame: usize) -> NeedleFrame {
        let needle = self.needle(frame);
        NeedleFrame {
            needle,
            indicator: DirectionIndicator::left_of(&needle, self.indicator_length),
        }
    }

    // The needle never leaves the triangle.
    pub fn swept_area(&self) -> f64 {
        self.triangle.area()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit() -> SlideMotion {
        SlideMotion::new(1.0, 60, 0.2)
    }

    #[test]
    fn progress_spans_four_phases() {
        let motion = unit();
        assert_eq!(motion.cycle_len(), 240);
        assert_eq!(motion.progress(0), 0.0);
        assert_eq!(motion.progress(90), 1.5);
        assert_eq!(motion.progress(240), 0.0);
        assert_eq!(motion.phase(59), SlidePhase::Rise);
        assert_eq!(motion.phase(60), SlidePhase::Descend);
        assert_eq!(motion.phase(120), SlidePhase::Base);
        assert_eq!(motion.phase(180), SlidePhase::Rest);
        assert_eq!(motion.phase(239), SlidePhase::Rest);
    }

    #[test]
    fn phase_boundaries_land_on_vertices() {
        let motion = unit();
        let [a, b, c] = motion.triangle.vertices;
        let expected = [(a, b), (c, c), (b, a), (a, b)];
        for (phase, (start, end)) in SlidePhase::ALL.iter().zip(expected) {
            let needle = motion.needle_at_progress(phase.start());
            assert_relative_eq!(needle.start, start, epsilon = f64::EPSILON);
            assert_relative_eq!(needle.end, end, epsilon = f64::EPSILON);
        }
    }

    #[test]
    fn rise_halfway_is_mid_height() {
        let motion = unit();
        let [a, b, c] = motion.triangle.vertices;
        let needle = motion.needle(30);
        assert_relative_eq!(needle.start, nalgebra::center(&a, &c), epsilon = 1e-12);
        assert_relative_eq!(needle.end, nalgebra::center(&b, &c), epsilon = 1e-12);
        assert_relative_eq!(needle.start.y, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn base_phase_stays_on_base() {
        let motion = unit();
        for frame in 120..180 {
            let needle = motion.needle(frame);
            assert_eq!(needle.start.y, 0.0);
            assert_eq!(needle.end.y, 0.0);
        }
    }

    #[test]
    fn period_is_one_cycle() {
        let motion = unit();
        for frame in [0, 17, 60, 133, 200, 239, 1001] {
            assert_eq!(motion.needle(frame), motion.needle(frame + 240));
        }
    }

    #[test]
    fn apex_frame_hides_indicator() {
        let frame = unit().update(60);
        assert!(frame.needle.is_zero());
        assert!(!frame.indicator.is_visible());
    }

    #[test]
    fn needle_stays_inside_triangle() {
        let motion = unit();
        let area = motion.swept_area();
        for frame in 0..240 {
            let needle = motion.needle(frame);
            assert!(needle.is_finite());
            for p in [needle.start, needle.end] {
                // Sub-triangles formed with p sum to the full area iff p is inside.
                let [a, b, c] = motion.triangle.vertices;
                let parts = Triangle::new(p, b, c).area()
                    + Triangle::new(a, p, c).area()
                    + Triangle::new(a, b, p).area();
                assert_relative_eq!(parts, area, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn triangle_area() {
        let motion = unit();
        let side = Triangle::side_from_height(1.0);
        assert_relative_eq!(motion.swept_area(), side * 1.0 / 2.0, epsilon = 1e-12);
        assert_eq!(format!("{:.3}", motion.swept_area()), "0.577");
        // Unit-side equilateral triangle, the smaller figure quoted alongside.
        let unit_side = SlideMotion::new(3.0_f64.sqrt() / 2.0, 60, 0.2);
        assert_eq!(format!("{:.4}", unit_side.swept_area()), "0.4330");
    }
}
