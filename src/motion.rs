pub mod indicator;
pub mod rotation;
pub mod schedule;
pub mod slide;

use log::debug;

use crate::{config::sweep::SweepSetup, geometry::line_segment::LineSegment};

use self::{
    indicator::DirectionIndicator,
    rotation::RotationMotion,
    slide::{SlideMotion, SlidePhase},
};

/// What one panel draws for a single frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeedleFrame {
    pub needle: LineSegment,
    pub indicator: DirectionIndicator,
}

/// Everything drawn for one animation frame. Built fresh by `Sweep::update`
/// and owned by whoever drives the timer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepFrame {
    pub frame: usize,
    pub rotation: NeedleFrame,
    pub slide: NeedleFrame,
    pub slide_phase: SlidePhase,
}

/// The two needle motions shown side by side.
#[derive(Clone, Debug, PartialEq)]
pub struct Sweep {
    pub rotation: RotationMotion,
    pub slide: SlideMotion,
}

impl Sweep {
    pub fn new(setup: &SweepSetup) -> Self {
        Sweep {
            rotation: RotationMotion::new(setup.needle_length, setup.rotation_indicator_length),
            slide: SlideMotion::new(
                setup.triangle_height,
                setup.frames_per_phase,
                setup.slide_indicator_length,
            ),
        }
    }

    pub fn update(&self, frame: usize) -> SweepFrame {
        let rotation = self.rotation.update(frame);
        let slide = self.slide.update(frame);
        let slide_phase = self.slide.phase(frame);
        debug!(
            "frame={}, rotation end={}, slide=({}, {}), phase={:?}",
            frame, rotation.needle.end, slide.needle.start, slide.needle.end, slide_phase
        );
        SweepFrame {
            frame,
            rotation,
            slide,
            slide_phase,
        }
    }

    // Ratio of the triangle's swept area to the disk's.
    pub fn area_ratio(&self) -> f64 {
        self.slide.swept_area() / self.rotation.swept_area()
    }
}
