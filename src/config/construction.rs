use std::{error::Error, path::Path};

use nalgebra::Point2;

use super::{read_yaml, require_nonzero, require_positive, ConfigError};

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LimitCloudConfig {
    pub seed: u64,
    pub n_points: usize,
    pub n_iterations: usize,
    pub start: Point2<f64>,
    // Chance of applying the first contraction at each iteration.
    pub first_map_probability: f64,
}

impl Default for LimitCloudConfig {
    fn default() -> Self {
        LimitCloudConfig {
            seed: 42,
            n_points: 500,
            n_iterations: 10,
            start: Point2::new(2.0, 1.0),
            first_map_probability: 0.5,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ConstructionSetup {
    pub ray_length: f64,
    pub limit_ray_length: f64,
    pub limit_cloud: LimitCloudConfig,
}

impl Default for ConstructionSetup {
    fn default() -> Self {
        ConstructionSetup {
            ray_length: 0.8,
            limit_ray_length: 1.0,
            limit_cloud: LimitCloudConfig::default(),
        }
    }
}

impl ConstructionSetup {
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let setup: ConstructionSetup = read_yaml(path)?;
        setup.validate()?;
        Ok(setup)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("ray_length", self.ray_length)?;
        require_positive("limit_ray_length", self.limit_ray_length)?;
        let cloud = &self.limit_cloud;
        require_nonzero("limit_cloud.n_points", cloud.n_points)?;
        let p = cloud.first_map_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError(format!(
                "limit_cloud.first_map_probability must lie in [0, 1], got {p}"
            )));
        }
        if !(cloud.start.x.is_finite() && cloud.start.y.is_finite()) {
            return Err(ConfigError("limit_cloud.start must be finite".to_string()));
        }
        Ok(())
    }

    pub fn print(&self) {
        let cloud = &self.limit_cloud;
        println!(
            "\
Direction rays:
  Length: {ray_length}
  Limit-set length: {limit_ray_length}

Limit cloud:
  Seed: {seed}
  Points: {n_points}
  Iterations per point: {n_iterations}
  Start: ({x}, {y})
  First-map probability: {p}",
            ray_length = self.ray_length,
            limit_ray_length = self.limit_ray_length,
            seed = cloud.seed,
            n_points = cloud.n_points,
            n_iterations = cloud.n_iterations,
            x = cloud.start.x,
            y = cloud.start.y,
            p = cloud.first_map_probability,
        );
    }
}
