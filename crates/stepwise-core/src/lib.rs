//! Core traits and step records for trainable agents
//!
//! This crate defines the agent contract (respond, reward, end of episode),
//! the step record captured for every response, and the bounded history a
//! trainable agent keeps for an external training process.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod agent;
pub mod config;
pub mod error;
pub mod history;
pub mod policy;
pub mod reward;
pub mod step;

// Re-export core traits and types
pub use agent::{Agent, AgentMetrics, Trainable};
pub use config::{TrainableConfig, DEFAULT_STEPS_BUFFER_SIZE};
pub use error::{Result, StepwiseError};
pub use history::StepHistory;
pub use policy::{ConstantPolicy, Policy};
pub use reward::Reward;
pub use step::Step;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Agent, Policy, Result, Reward, Step, StepHistory, StepwiseError, Trainable,
        TrainableConfig,
    };
}
