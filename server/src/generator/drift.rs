use driftcore::prediction::{ModelError, TrajectoryModel};
use driftcore::prelude::LATITUDE_RANGE;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Parameters for the built-in constant-drift model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftConfig {
    /// Longitude change per step, in degrees.
    pub east_per_step: f64,
    /// Latitude change per step, in degrees.
    pub north_per_step: f64,
    /// Half-width of the uniform jitter added to each step.
    pub noise: f64,
    pub seed: u64,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            east_per_step: 0.05,
            north_per_step: 0.02,
            noise: 0.005,
            seed: 0,
        }
    }
}

/// Stand-in forecasting model: constant surface drift plus seeded jitter.
///
/// The same start point and configuration always yield the same track.
pub struct DriftModel {
    config: DriftConfig,
}

impl DriftModel {
    pub fn new(config: DriftConfig) -> Self {
        Self { config }
    }
}

impl TrajectoryModel for DriftModel {
    fn forecast(
        &self,
        longitude: f64,
        latitude: f64,
        steps: usize,
    ) -> Result<Vec<(f64, f64)>, ModelError> {
        if steps == 0 {
            return Err(ModelError("step count must be positive".into()));
        }

        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let mut jitter = || {
            if self.config.noise > 0.0 {
                rng.gen_range(-self.config.noise..self.config.noise)
            } else {
                0.0
            }
        };

        let mut track = Vec::with_capacity(steps);
        let (mut lon, mut lat) = (longitude, latitude);
        for step in 1..=steps {
            lon = wrap_longitude(lon + self.config.east_per_step + jitter());
            lat += self.config.north_per_step + jitter();
            if !LATITUDE_RANGE.contains(&lat) {
                return Err(ModelError(format!(
                    "drift left the valid latitude range at step {}",
                    step
                )));
            }
            track.push((lon, lat));
        }
        Ok(track)
    }
}

fn wrap_longitude(lon: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon) {
        lon
    } else {
        (lon + 180.0).rem_euclid(360.0) - 180.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steady() -> DriftModel {
        DriftModel::new(DriftConfig {
            east_per_step: 0.1,
            north_per_step: 0.0,
            noise: 0.0,
            seed: 0,
        })
    }

    #[test]
    fn produces_one_position_per_step() {
        let track = steady().forecast(120.5, 30.2, 4).unwrap();
        assert_eq!(track.len(), 4);
        assert!((track[3].0 - 120.9).abs() < 1e-9);
        assert_eq!(track[3].1, 30.2);
    }

    #[test]
    fn seeded_jitter_is_repeatable() {
        let model = DriftModel::new(DriftConfig::default());
        assert_eq!(
            model.forecast(120.5, 30.2, 6).unwrap(),
            model.forecast(120.5, 30.2, 6).unwrap()
        );
    }

    #[test]
    fn longitude_wraps_across_antimeridian() {
        let track = steady().forecast(179.95, 0.0, 1).unwrap();
        assert!((track[0].0 - (-179.95)).abs() < 1e-9);
    }

    #[test]
    fn oversized_drift_still_wraps_into_range() {
        let model = DriftModel::new(DriftConfig {
            east_per_step: 725.0,
            north_per_step: 0.0,
            noise: 0.0,
            seed: 0,
        });
        let track = model.forecast(170.0, 0.0, 3).unwrap();
        for (lon, _) in &track {
            assert!((-180.0..=180.0).contains(lon));
        }
        assert!((track[0].0 - 175.0).abs() < 1e-9);
        assert_eq!(wrap_longitude(-900.0), -180.0);
    }

    #[test]
    fn leaving_latitude_range_fails() {
        let model = DriftModel::new(DriftConfig {
            east_per_step: 0.0,
            north_per_step: 1.0,
            noise: 0.0,
            seed: 0,
        });
        assert!(model.forecast(0.0, 89.5, 2).is_err());
        assert!(model.forecast(0.0, 0.0, 0).is_err());
    }
}
