//! Helical point-field generation.
//!
//! Point `i` sits at angle `i * 2π / points_per_turn` around the y axis and
//! height `i * height_step`, at a random distance in `[0, radius)` from the
//! axis. Each axis then gets an independent jitter of at most `randomness`,
//! and the color is blended from inside to outside by the radial draw alone.

use std::f32::consts::TAU;

use crate::color;
use crate::config::HelixConfig;
use crate::error::HelixError;
use crate::point_field::PointField;
use crate::sampler::{self, Sampler};
use crate::Vec3;

/// Generate a field using a fresh entropy-seeded RNG.
pub fn generate(config: &HelixConfig) -> Result<PointField, HelixError> {
    generate_with(config, &mut sampler::entropy_rng())
}

/// Generate a reproducible field from a fixed seed.
pub fn generate_seeded(config: &HelixConfig, seed: u64) -> Result<PointField, HelixError> {
    generate_with(config, &mut sampler::seeded_rng(seed))
}

/// Generate a field drawing all randomness from `sampler`.
///
/// Per point the draws happen in a fixed order: the radius, then magnitude
/// and sign for x, y and z. Identical configs fed identical sequences give
/// bit-identical fields.
pub fn generate_with<S: Sampler + ?Sized>(
    config: &HelixConfig,
    sampler: &mut S,
) -> Result<PointField, HelixError> {
    let count = config.validated_point_count()?;

    let angle_step = TAU / config.points_per_turn as f32;
    let mut field = PointField::with_capacity(count as usize);

    for i in 0..count {
        let r = sampler.unit() * config.radius;
        let offset = Vec3::new(
            jitter(sampler, config),
            jitter(sampler, config),
            jitter(sampler, config),
        );

        let angle = angle_step * i as f32;
        let position = Vec3::new(
            angle.cos() * r,
            config.height_step * i as f32,
            (-angle).sin() * r,
        ) + offset;

        // unit() < 1, so t stays in [0, 1]
        let t = r / config.radius;
        let color = color::lerp(config.inside_color, config.outside_color, t);

        field.push(position, color);
    }

    Ok(field)
}

#[inline]
fn jitter<S: Sampler + ?Sized>(sampler: &mut S, config: &HelixConfig) -> f32 {
    let magnitude = sampler.unit().powf(config.randomness_power) * config.randomness;
    magnitude * sampler.sign()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of unit draws, cycling when exhausted.
    struct Cycle {
        values: Vec<f32>,
        next: usize,
    }

    impl Cycle {
        fn new(values: &[f32]) -> Self {
            Self { values: values.to_vec(), next: 0 }
        }
    }

    impl Sampler for Cycle {
        fn unit(&mut self) -> f32 {
            let v = self.values[self.next % self.values.len()];
            self.next += 1;
            v
        }
    }

    #[test]
    fn test_lengths_match_point_count() {
        let config = HelixConfig::new().with_turns(3).with_points_per_turn(250);
        let field = generate_seeded(&config, 1).unwrap();
        assert_eq!(field.len(), 750);
        assert_eq!(field.positions().len(), field.colors().len());
    }

    #[test]
    fn test_draw_order() {
        // radius draw 0.5, then (magnitude, sign) pairs for x, y, z.
        // A sign draw below 0.5 is positive.
        let config = HelixConfig::new()
            .with_turns(1)
            .with_points_per_turn(1)
            .with_radius(100.0)
            .with_randomness(4.0)
            .with_randomness_power(1.0);
        let mut sampler = Cycle::new(&[0.5, 0.25, 0.0, 0.5, 0.9, 0.75, 0.1]);
        let field = generate_with(&config, &mut sampler).unwrap();
        let p = field.positions()[0];
        assert!((p.x - (50.0 + 1.0)).abs() < 1e-5);
        assert!((p.y - (-2.0)).abs() < 1e-5);
        assert!((p.z - 3.0).abs() < 1e-5);
        assert_eq!(sampler.next, 7);
    }

    #[test]
    fn test_jitter_does_not_change_color() {
        let base = HelixConfig::new().with_turns(1).with_points_per_turn(8);
        let calm = generate_with(&base.with_randomness(0.0), &mut Cycle::new(&[0.3])).unwrap();
        let noisy = generate_with(&base.with_randomness(15.0), &mut Cycle::new(&[0.3])).unwrap();
        assert_eq!(calm.colors(), noisy.colors());
        assert_ne!(calm.positions(), noisy.positions());
    }

    #[test]
    fn test_invalid_config_is_rejected_before_sampling() {
        let mut sampler = Cycle::new(&[0.5]);
        let result = generate_with(&HelixConfig::new().with_radius(0.0), &mut sampler);
        assert!(result.is_err());
        assert_eq!(sampler.next, 0);
    }

    #[test]
    fn test_oversized_field_is_rejected_before_allocating() {
        let mut sampler = Cycle::new(&[0.5]);
        let config = HelixConfig::new()
            .with_turns(u32::MAX / 2)
            .with_points_per_turn(2);
        let result = generate_with(&config, &mut sampler);
        assert!(matches!(result, Err(HelixError::InvalidConfiguration { .. })));
        assert_eq!(sampler.next, 0);
    }
}
