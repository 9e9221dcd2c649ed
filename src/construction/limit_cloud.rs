use nalgebra::{Point2, Vector2};
use rand::{Rng, SeedableRng};
use rand_distr::{Bernoulli, Distribution};
use rand_pcg::Pcg64Mcg;

use crate::config::{construction::LimitCloudConfig, ConfigError};

/// The map `p -> ratio * p + offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineContraction {
    pub ratio: f64,
    pub offset: Vector2<f64>,
}

impl AffineContraction {
    pub fn new(ratio: f64, offset: Vector2<f64>) -> Self {
        AffineContraction { ratio, offset }
    }

    pub fn apply(&self, p: Point2<f64>) -> Point2<f64> {
        Point2::from(p.coords * self.ratio + self.offset)
    }

    pub fn fixed_point(&self) -> Point2<f64> {
        Point2::from(self.offset / (1.0 - self.ratio))
    }
}

// Two half-scale maps whose attractor is the segment from (2, 1) to (4, 2).
pub fn limit_maps() -> [AffineContraction; 2] {
    [
        AffineContraction::new(0.5, Vector2::new(1.0, 0.5)),
        AffineContraction::new(0.5, Vector2::new(2.0, 1.0)),
    ]
}

/// Random iteration of two contractions, the first chosen with a fixed
/// probability at every step.
pub struct ContractionSystem {
    pub maps: [AffineContraction; 2],
    choice: Bernoulli,
}

impl ContractionSystem {
    pub fn new(maps: [AffineContraction; 2], first_map_probability: f64) -> Result<Self, ConfigError> {
        let choice = Bernoulli::new(first_map_probability)
            .map_err(|e| ConfigError(format!("first-map probability: {e}")))?;
        Ok(ContractionSystem { maps, choice })
    }

    pub fn iterate<R: Rng>(&self, rng: &mut R, start: Point2<f64>, n_iterations: usize) -> Point2<f64> {
        (0..n_iterations).fold(start, |p, _| {
            let map = if self.choice.sample(rng) {
                &self.maps[0]
            } else {
                &self.maps[1]
            };
            map.apply(p)
        })
    }

    pub fn sample<R: Rng>(
        &self,
        rng: &mut R,
        start: Point2<f64>,
        n_iterations: usize,
        n_points: usize,
    ) -> Vec<Point2<f64>> {
        (0..n_points)
            .map(|_| self.iterate(rng, start, n_iterations))
            .collect()
    }
}

/// The seeded point cloud standing in for the limit set. Identical configs
/// give identical clouds.
pub fn limit_cloud(config: &LimitCloudConfig) -> Result<Vec<Point2<f64>>, ConfigError> {
    let system = ContractionSystem::new(limit_maps(), config.first_map_probability)?;
    let mut rng = Pcg64Mcg::seed_from_u64(config.seed);
    Ok(system.sample(&mut rng, config.start, config.n_iterations, config.n_points))
}
