//! Plain and trainable agent implementations
//!
//! [`PlainAgent`] answers observations with a policy and keeps nothing.
//! [`TrainableAgent`] wraps any [`Agent`](stepwise_core::Agent) and records
//! each step, its reward, and episode boundaries in a bounded history that a
//! training process reads through [`Trainable`](stepwise_core::Trainable) or
//! receives through an [`export`] sink.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod export;
pub mod plain;
pub mod trainable;

// Re-export agents
pub use plain::PlainAgent;
pub use trainable::TrainableAgent;

// Re-export export components
pub use export::{export_taken_steps, load_batch, JsonFileSink, MemorySink, StepBatch, StepSink};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        export_taken_steps, JsonFileSink, MemorySink, PlainAgent, StepBatch, StepSink,
        TrainableAgent,
    };
    pub use stepwise_core::prelude::*;
}
