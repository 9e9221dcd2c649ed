use std::{error::Error, f64::consts::PI, path::Path};

use crate::{geometry::triangle::Triangle, motion::schedule::FrameSchedule};

use super::{read_yaml, require_nonzero, require_positive, ConfigError};

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SweepSetup {
    // Needle turned about its endpoint.
    pub needle_length: f64,
    pub rotation_indicator_length: f64,
    // Needle slid around the triangle.
    pub triangle_height: f64,
    pub frames_per_phase: usize,
    pub slide_indicator_length: f64,
    pub schedule: FrameSchedule,
}

impl Default for SweepSetup {
    fn default() -> Self {
        SweepSetup {
            needle_length: 1.0,
            rotation_indicator_length: 0.3,
            triangle_height: 1.0,
            frames_per_phase: 60,
            slide_indicator_length: 0.2,
            schedule: FrameSchedule::default(),
        }
    }
}

impl SweepSetup {
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let setup: SweepSetup = read_yaml(path)?;
        setup.validate()?;
        Ok(setup)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("needle_length", self.needle_length)?;
        require_positive("rotation_indicator_length", self.rotation_indicator_length)?;
        require_positive("triangle_height", self.triangle_height)?;
        require_nonzero("frames_per_phase", self.frames_per_phase)?;
        require_positive("slide_indicator_length", self.slide_indicator_length)?;
        self.schedule.validate()
    }

    pub fn print(&self) {
        let triangle = Triangle::equilateral_with_height(self.triangle_height);
        let schedule = &self.schedule;
        println!(
            "\
Rotation about an endpoint:
  Needle length: {l}
  Swept area: {disk_area:.3}

Sliding inside an equilateral triangle:
  Triangle height: {h}
  Triangle side: {side:.3}
  Frames per phase: {fpp}
  Swept area: {triangle_area:.3}

Frame schedule:
  Frames: {start}..{stop} step {step} ({n_frames} frames)
  Interval: {interval} ms
  Repeat: {repeat}",
            l = self.needle_length,
            disk_area = PI * self.needle_length.powi(2),
            h = self.triangle_height,
            side = Triangle::side_from_height(self.triangle_height),
            fpp = self.frames_per_phase,
            triangle_area = triangle.area(),
            start = schedule.start,
            stop = schedule.stop,
            step = schedule.step,
            n_frames = schedule.len(),
            interval = schedule.interval_ms,
            repeat = schedule.repeat,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let setup: SweepSetup = serde_yaml::from_str(
            "\
needle_length: 2.0
schedule:
  interval_ms: 20
",
        )
        .unwrap();
        assert_eq!(setup.needle_length, 2.0);
        assert_eq!(setup.schedule.interval_ms, 20);
        assert_eq!(setup.schedule.step, 2);
        assert_eq!(setup.frames_per_phase, 60);
        assert!(setup.validate().is_ok());
    }

    #[test]
    fn yaml_round_trip() {
        let setup = SweepSetup::default();
        let yaml = serde_yaml::to_string(&setup).unwrap();
        let parsed: SweepSetup = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, setup);
    }

    #[test]
    fn rejects_degenerate_values() {
        let setup = SweepSetup {
            needle_length: 0.0,
            ..Default::default()
        };
        assert!(setup.validate().is_err());

        let setup = SweepSetup {
            frames_per_phase: 0,
            ..Default::default()
        };
        let err = setup.validate().unwrap_err();
        assert!(err.to_string().contains("frames_per_phase"));
    }

    #[test]
    fn parse_reports_missing_file() {
        assert!(SweepSetup::parse("/nonexistent/sweep.yaml").is_err());
    }
}
