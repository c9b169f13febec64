//! Owner of the current configuration and its point field.
//!
//! Every accepted configuration change regenerates the whole field and swaps
//! it in as one value. There is no partial update path: readers see either
//! the old field or the new one, never a mix.

use rand::rngs::SmallRng;
use tracing::{debug, warn};

use crate::config::HelixConfig;
use crate::error::HelixError;
use crate::generate::generate_with;
use crate::point_field::PointField;
use crate::sampler::{self, Sampler};

/// Holds a [`HelixConfig`] together with the [`PointField`] generated from it.
///
/// ```
/// use helix_field::{FieldStore, HelixConfig};
///
/// let mut store = FieldStore::seeded(HelixConfig::default(), 7).unwrap();
/// assert_eq!(store.field().len(), 1300);
///
/// let changed = store.update(|c| c.turns = 2).unwrap();
/// assert!(changed);
/// assert_eq!(store.field().len(), 650);
/// ```
pub struct FieldStore<S: Sampler = SmallRng> {
    config: HelixConfig,
    field: PointField,
    sampler: S,
    revision: u64,
}

impl FieldStore<SmallRng> {
    /// Create a store with an entropy-seeded RNG.
    pub fn new(config: HelixConfig) -> Result<Self, HelixError> {
        Self::with_sampler(config, sampler::entropy_rng())
    }

    /// Create a store whose fields are reproducible from `seed`.
    pub fn seeded(config: HelixConfig, seed: u64) -> Result<Self, HelixError> {
        Self::with_sampler(config, sampler::seeded_rng(seed))
    }
}

impl<S: Sampler> FieldStore<S> {
    /// Create a store drawing randomness from `sampler`.
    ///
    /// The initial field is generated immediately.
    pub fn with_sampler(config: HelixConfig, mut sampler: S) -> Result<Self, HelixError> {
        let field = generate_with(&config, &mut sampler)?;
        log_generated(&field, 0);
        Ok(Self {
            config,
            field,
            sampler,
            revision: 0,
        })
    }

    /// Configuration the current field was generated from.
    pub fn config(&self) -> &HelixConfig {
        &self.config
    }

    /// Current field.
    pub fn field(&self) -> &PointField {
        &self.field
    }

    /// Number of times the field has been replaced since creation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply a new configuration.
    ///
    /// Returns `Ok(false)` if `config` equals the current one, `Ok(true)`
    /// after a successful regeneration. On error the previous configuration
    /// and field are kept.
    pub fn set_config(&mut self, config: HelixConfig) -> Result<bool, HelixError> {
        if config == self.config {
            return Ok(false);
        }
        match generate_with(&config, &mut self.sampler) {
            Ok(field) => {
                self.config = config;
                self.replace(field);
                Ok(true)
            }
            Err(e) => {
                warn!(error = %e, "rejected helix configuration");
                Err(e)
            }
        }
    }

    /// Edit a copy of the configuration and apply it with [`set_config`](Self::set_config).
    pub fn update<F>(&mut self, edit: F) -> Result<bool, HelixError>
    where
        F: FnOnce(&mut HelixConfig),
    {
        let mut config = self.config;
        edit(&mut config);
        self.set_config(config)
    }

    /// Redraw the field for the current configuration with new samples.
    pub fn regenerate(&mut self) -> Result<(), HelixError> {
        let field = generate_with(&self.config, &mut self.sampler)?;
        self.replace(field);
        Ok(())
    }

    fn replace(&mut self, field: PointField) {
        self.revision += 1;
        log_generated(&field, self.revision);
        self.field = field;
    }
}

fn log_generated(field: &PointField, revision: u64) {
    debug!(
        points = field.len(),
        height = field.height(),
        revision,
        "generated helix"
    );
}
