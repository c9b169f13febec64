//! Integration tests for helix generation.
//!
//! These exercise the public API end to end: configuration, sampling,
//! generation and the regeneration store.

use helix_field::prelude::*;
use std::f32::consts::FRAC_PI_2;

// ============================================================================
// Helpers
// ============================================================================

/// Replays fixed unit draws (cycling) and an optional forced sign.
struct Scripted {
    units: Vec<f32>,
    next: usize,
    sign: Option<f32>,
}

impl Scripted {
    fn new(units: &[f32]) -> Self {
        Self {
            units: units.to_vec(),
            next: 0,
            sign: None,
        }
    }

    fn with_sign(mut self, sign: f32) -> Self {
        self.sign = Some(sign);
        self
    }
}

impl Sampler for Scripted {
    fn unit(&mut self) -> f32 {
        let v = self.units[self.next % self.units.len()];
        self.next += 1;
        v
    }

    fn sign(&mut self) -> f32 {
        match self.sign {
            Some(s) => s,
            None => {
                if self.unit() < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
        }
    }
}

fn approx(a: Vec3, b: Vec3, eps: f32) -> bool {
    (a - b).abs().max_element() <= eps
}

// ============================================================================
// Shape of the output
// ============================================================================

#[test]
fn test_length_is_turns_times_points_per_turn() {
    for (turns, per_turn) in [(1, 200), (4, 325), (10, 1_500), (3, 15_000)] {
        let config = HelixConfig::new()
            .with_turns(turns)
            .with_points_per_turn(per_turn);
        let field = generate_seeded(&config, 9).unwrap();
        let expected = (turns * per_turn) as usize;
        assert_eq!(field.len(), expected);
        assert_eq!(field.positions().len(), expected);
        assert_eq!(field.colors().len(), expected);
    }
}

#[test]
fn test_colors_are_convex_combinations() {
    let inside = Vec3::new(0.9, 0.1, 0.4);
    let outside = Vec3::new(0.2, 0.8, 0.4);
    let config = HelixConfig::new()
        .with_turns(2)
        .with_points_per_turn(2_000)
        .with_colors(inside, outside);
    let field = generate_seeded(&config, 5).unwrap();

    let lo = inside.min(outside) - Vec3::splat(1e-6);
    let hi = inside.max(outside) + Vec3::splat(1e-6);
    for &c in field.colors() {
        assert!(c.cmpge(lo).all() && c.cmple(hi).all(), "color {:?} escapes gradient", c);
        // Same t on every channel: recover it from red and check green.
        let t = (c.x - inside.x) / (outside.x - inside.x);
        assert!((-1e-5..=1.0 + 1e-5).contains(&t));
        let expected_g = inside.y + (outside.y - inside.y) * t;
        assert!((c.y - expected_g).abs() < 1e-4);
    }
}

#[test]
fn test_points_stay_within_radius_plus_jitter() {
    let config = HelixConfig::new().with_radius(500.0).with_randomness(3.0);
    let field = generate_seeded(&config, 77).unwrap();
    // Horizontal distance from the axis is at most radius + sqrt(2) * randomness.
    let limit = 500.0 + 2.0_f32.sqrt() * 3.0 + 1e-3;
    for p in field.positions() {
        assert!((p.x * p.x + p.z * p.z).sqrt() <= limit);
    }
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_same_sequence_gives_bit_identical_output() {
    let config = HelixConfig::default();
    let draws = [0.13, 0.87, 0.42, 0.05, 0.66, 0.91, 0.38, 0.27, 0.59];

    let a = generate_with(&config, &mut Scripted::new(&draws)).unwrap();
    let b = generate_with(&config, &mut Scripted::new(&draws)).unwrap();

    for (pa, pb) in a.positions().iter().zip(b.positions()) {
        assert_eq!(pa.to_array().map(f32::to_bits), pb.to_array().map(f32::to_bits));
    }
    assert_eq!(a.color_bytes(), b.color_bytes());
}

#[test]
fn test_same_seed_gives_same_field() {
    let config = HelixConfig::default();
    assert_eq!(
        generate_seeded(&config, 1234).unwrap(),
        generate_seeded(&config, 1234).unwrap()
    );
    assert_ne!(
        generate_seeded(&config, 1234).unwrap(),
        generate_seeded(&config, 4321).unwrap()
    );
}

#[test]
fn test_generation_does_not_mutate_config() {
    let config = HelixConfig::default();
    let before = config;
    let _ = generate(&config).unwrap();
    assert_eq!(config, before);
}

// ============================================================================
// Boundaries and worked examples
// ============================================================================

#[test]
fn test_single_point_helix() {
    let config = HelixConfig::new()
        .with_turns(1)
        .with_points_per_turn(1)
        .with_radius(200.0)
        .with_randomness(2.0)
        .with_randomness_power(1.0);
    // r = 0.25 * 200 = 50; jitter magnitudes 0.5, 0.25, 1.0 (times 2.0), signs +, -, +
    let mut sampler = Scripted::new(&[0.25, 0.5, 0.1, 0.25, 0.7, 0.999_999, 0.3]);
    let field = generate_with(&config, &mut sampler).unwrap();

    assert_eq!(field.len(), 1);
    let p = field.positions()[0];
    assert!(approx(p, Vec3::new(50.0 + 1.0, -0.5, 2.0), 1e-4), "{:?}", p);
}

#[test]
fn test_quarter_turn_example() {
    let inside = Vec3::new(1.0, 0.0, 0.0);
    let outside = Vec3::new(0.0, 0.0, 1.0);
    let config = HelixConfig::new()
        .with_turns(1)
        .with_points_per_turn(4)
        .with_radius(100.0)
        .with_height_step(0.0)
        .with_randomness(0.0)
        .with_randomness_power(2.0)
        .with_colors(inside, outside);

    let mut sampler = Scripted::new(&[0.5]).with_sign(1.0);
    let field = generate_with(&config, &mut sampler).unwrap();

    let expected = [
        Vec3::new(50.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, -50.0),
        Vec3::new(-50.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 50.0),
    ];
    for (got, want) in field.positions().iter().zip(expected) {
        assert!(approx(*got, want, 1e-4), "got {:?}, want {:?}", got, want);
    }
    for c in field.colors() {
        assert!(approx(*c, Vec3::new(0.5, 0.0, 0.5), 1e-6));
    }
}

#[test]
fn test_first_point_of_each_turn_lies_on_positive_x() {
    let config = HelixConfig::new()
        .with_turns(3)
        .with_points_per_turn(8)
        .with_radius(10.0)
        .with_height_step(1.0)
        .with_randomness(0.0);
    let field = generate_with(&config, &mut Scripted::new(&[0.5]).with_sign(1.0)).unwrap();
    for turn in 0..3 {
        let p = field.positions()[turn * 8];
        assert!(approx(p, Vec3::new(5.0, (turn * 8) as f32, 0.0), 1e-3), "{:?}", p);
    }
    // Two points later is a quarter turn: z = sin(-π/2) * r
    let quarter = field.positions()[2];
    assert!((quarter.z - (-FRAC_PI_2).sin() * 5.0).abs() < 1e-4);
}

// ============================================================================
// Parameter sensitivity
// ============================================================================

#[test]
fn test_height_step_increases_y_range() {
    let base = HelixConfig::new()
        .with_turns(2)
        .with_points_per_turn(400)
        .with_randomness(5.0);
    let mut previous = 0.0;
    for step in [0.01, 0.05, 0.1, 0.25, 0.5] {
        let field = generate_seeded(&base.with_height_step(step), 21).unwrap();
        let range = field.height();
        assert!(range > previous, "step {} gave range {} <= {}", step, range, previous);
        previous = range;
    }
}

#[test]
fn test_randomness_power_shrinks_mean_jitter() {
    let base = HelixConfig::new()
        .with_turns(4)
        .with_points_per_turn(5_000)
        .with_height_step(0.0)
        .with_randomness(10.0);

    // With no vertical rise, y is exactly the y jitter.
    let mean_abs_y = |power: f32| {
        let field = generate_seeded(&base.with_randomness_power(power), 8).unwrap();
        field.positions().iter().map(|p| p.y.abs()).sum::<f32>() / field.len() as f32
    };

    let p1 = mean_abs_y(1.0);
    let p2 = mean_abs_y(2.0);
    let p5 = mean_abs_y(5.0);
    assert!(p1 > p2 && p2 > p5, "{} {} {}", p1, p2, p5);
    // E[u^p] = 1 / (p + 1)
    assert!((p1 - 10.0 / 2.0).abs() < 0.2);
    assert!((p2 - 10.0 / 3.0).abs() < 0.2);
}

#[test]
fn test_jitter_never_exceeds_randomness() {
    let config = HelixConfig::new()
        .with_height_step(0.0)
        .with_randomness(4.0)
        .with_randomness_power(1.0);
    let field = generate_seeded(&config, 3).unwrap();
    assert!(field.positions().iter().all(|p| p.y.abs() <= 4.0));
}

// ============================================================================
// Rejected configurations
// ============================================================================

#[test]
fn test_degenerate_configs_are_rejected() {
    let cases = [
        HelixConfig::new().with_turns(0),
        HelixConfig::new().with_points_per_turn(0),
        HelixConfig::new().with_radius(0.0),
        HelixConfig::new().with_radius(-250.0),
    ];
    for config in cases {
        assert!(matches!(
            generate(&config),
            Err(HelixError::InvalidConfiguration { .. })
        ));
    }
}

// ============================================================================
// Store
// ============================================================================

#[test]
fn test_store_replaces_field_wholesale() {
    let mut store = FieldStore::seeded(HelixConfig::default(), 2).unwrap();
    assert_eq!(store.field().len(), 1300);

    store.update(|c| c.turns = 10).unwrap();
    assert_eq!(store.field().len(), 3250);
    assert_eq!(store.field().positions().len(), store.field().colors().len());
    assert_eq!(store.revision(), 1);

    store.update(|c| c.inside_color = Vec3::ONE).unwrap();
    assert_eq!(store.revision(), 2);
    assert_eq!(store.field().len(), 3250);
}

#[test]
fn test_store_with_scripted_sampler_is_reproducible() {
    let config = HelixConfig::new().with_turns(1).with_points_per_turn(200);
    let a = FieldStore::with_sampler(config, Scripted::new(&[0.2, 0.7, 0.4])).unwrap();
    let b = FieldStore::with_sampler(config, Scripted::new(&[0.2, 0.7, 0.4])).unwrap();
    assert_eq!(a.field(), b.field());
}

// ============================================================================
// Presets
// ============================================================================

#[test]
fn test_preset_save_and_load() {
    let path = std::env::temp_dir().join(format!("helix-preset-{}.json", std::process::id()));
    let config = HelixConfig::new()
        .with_turns(7)
        .with_radius(900.0)
        .with_hex_colors("#112233", "#abcdef")
        .unwrap();

    config.save(&path).unwrap();
    let loaded = HelixConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.turns, 7);
    assert_eq!(loaded.radius, 900.0);
    assert_eq!(helix_field::color::to_hex(loaded.inside_color), "#112233");
    assert_eq!(helix_field::color::to_hex(loaded.outside_color), "#abcdef");
}

#[test]
fn test_missing_preset_is_io_error() {
    let result = HelixConfig::load("/definitely/not/a/real/preset.json");
    assert!(matches!(result, Err(HelixError::Io(_))));
}
