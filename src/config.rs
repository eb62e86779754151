//! Run configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config:
//!
//! ```json
//! { "max_depth": 5, "group_size": 3, "sample_size": 100, "seed": 42 }
//! ```

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::enumerate::{DEFAULT_MAX_DEPTH, MIN_PATH_LEN};
use crate::layout::LayoutConfig;
use crate::sample::{DEFAULT_GROUP_SIZE, DEFAULT_SAMPLE_SIZE};
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracerConfig {
    /// Longest path emitted. Must be at least `MIN_PATH_LEN`.
    pub max_depth: usize,
    /// Paths per sampled group.
    pub group_size: usize,
    /// Groups to draw; clamped to however many exist.
    pub sample_size: usize,
    /// Fixed seed for reproducible sampling. `None` seeds from the OS.
    pub seed: Option<u64>,
    pub layout: LayoutConfig,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            group_size: DEFAULT_GROUP_SIZE,
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: None,
            layout: LayoutConfig::default(),
        }
    }
}

impl TracerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_depth < MIN_PATH_LEN {
            return Err(Error::DepthBound { max_depth: self.max_depth, min: MIN_PATH_LEN });
        }
        if self.group_size == 0 {
            return Err(Error::Configuration("group size must be at least 1".into()));
        }
        self.layout.validate()
    }

    /// Random source for sampling: seeded if `seed` is set.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
