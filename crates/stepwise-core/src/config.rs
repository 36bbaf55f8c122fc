//! Configuration for trainable agents

use serde::{Deserialize, Serialize};

use crate::{Result, StepwiseError};

/// Default number of steps kept by a trainable agent
pub const DEFAULT_STEPS_BUFFER_SIZE: usize = 128;

/// Configuration for trainable agents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainableConfig {
    /// Maximum number of recorded steps, at least 1
    pub steps_buffer_size: usize,
}

impl Default for TrainableConfig {
    fn default() -> Self {
        Self {
            steps_buffer_size: DEFAULT_STEPS_BUFFER_SIZE,
        }
    }
}

impl TrainableConfig {
    /// Create a configuration with the given buffer size
    #[must_use]
    pub fn with_steps_buffer_size(steps_buffer_size: usize) -> Self {
        Self { steps_buffer_size }
    }

    /// Reject configurations whose buffer could hold no step
    pub fn validate(&self) -> Result<()> {
        if self.steps_buffer_size == 0 {
            return Err(StepwiseError::InvalidConfig(
                "steps_buffer_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse a JSON configuration, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
