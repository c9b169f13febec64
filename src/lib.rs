//! # helix-field
//!
//! Generates a helical point cloud (positions plus a radial color gradient)
//! from a handful of parameters, and ships a small GPU viewer to look at it.
//!
//! ## Quick Start
//!
//! ```
//! use helix_field::prelude::*;
//!
//! let config = HelixConfig::new()
//!     .with_turns(2)
//!     .with_points_per_turn(500)
//!     .with_radius(300.0);
//!
//! let field = generate_seeded(&config, 42).unwrap();
//! assert_eq!(field.len(), 1000);
//! assert_eq!(field.positions().len(), field.colors().len());
//! ```
//!
//! ## The field
//!
//! Point `i` of `turns * points_per_turn` is placed at
//!
//! ```text
//! angle = i * 2π / points_per_turn
//! x     =  cos(angle) * r + jitter_x
//! y     =  i * height_step + jitter_y
//! z     = -sin(angle) * r + jitter_z
//! ```
//!
//! where `r` is drawn uniformly from `[0, radius)` for every point and each
//! jitter is `±randomness * u^randomness_power` for a uniform `u`. The color
//! blends from `inside_color` to `outside_color` by `r / radius`.
//!
//! ## Regeneration
//!
//! [`FieldStore`] owns a configuration and the field generated from it.
//! Changing any field of the configuration regenerates the whole point field
//! and replaces it in one step:
//!
//! ```
//! use helix_field::prelude::*;
//!
//! let mut store = FieldStore::seeded(HelixConfig::default(), 1).unwrap();
//! store.update(|c| c.randomness = 0.5).unwrap();
//! assert_eq!(store.revision(), 1);
//! ```
//!
//! ## Viewer
//!
//! [`Viewer`] opens a window and draws the store's field with additive
//! blending. Build with `--features egui` for a live settings panel.

pub mod color;
pub mod config;
pub mod error;
mod generate;
mod point_field;
pub mod sampler;
mod store;
pub mod viewer;

pub use bytemuck;
pub use config::HelixConfig;
pub use error::{GpuError, HelixError, ViewerError};
pub use generate::{generate, generate_seeded, generate_with};
pub use glam::Vec3;
pub use point_field::{Bounds, PointField};
pub use sampler::Sampler;
pub use store::FieldStore;
pub use viewer::Viewer;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use helix_field::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::HelixConfig;
    pub use crate::error::HelixError;
    pub use crate::generate::{generate, generate_seeded, generate_with};
    pub use crate::point_field::{Bounds, PointField};
    pub use crate::sampler::Sampler;
    pub use crate::store::FieldStore;
    pub use crate::viewer::Viewer;
    pub use crate::Vec3;
}
