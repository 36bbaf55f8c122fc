//! Agent traits and types

use serde::{Deserialize, Serialize};

use crate::{Reward, Step};

/// Core agent trait.
///
/// An agent produces a response for each observation and may receive reward
/// and end-of-episode signals afterwards. Signals always refer to the most
/// recent response, so callers must send them before asking for the next one.
pub trait Agent {
    /// Observation type
    type Observation;
    /// Response type
    type Response;

    /// Produce a response for an observation
    fn respond(&mut self, observation: &Self::Observation) -> crate::Result<Self::Response>;

    /// Attribute reward to the most recent response
    fn add_reward(&mut self, _reward: Reward) {}

    /// Mark the most recent response as the end of its episode
    fn end_episode(&mut self) {}

    /// Get agent metrics
    fn metrics(&self) -> AgentMetrics {
        AgentMetrics::default()
    }
}

/// Trait for agents that record their steps for training
pub trait Trainable: Agent {
    /// Every recorded step except the one still open, oldest first
    fn taken_steps(&self) -> Vec<Step<Self::Observation, Self::Response>>;
}

/// Agent metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentMetrics {
    /// Total responses produced
    pub total_steps: usize,
    /// Episodes ended
    pub total_episodes: usize,
    /// Steps dropped from a bounded history
    pub evicted_steps: usize,
    /// Sum of all rewards applied
    pub total_reward: f64,
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    type Observation = A::Observation;
    type Response = A::Response;

    fn respond(&mut self, observation: &Self::Observation) -> crate::Result<Self::Response> {
        (**self).respond(observation)
    }

    fn add_reward(&mut self, reward: Reward) {
        (**self).add_reward(reward);
    }

    fn end_episode(&mut self) {
        (**self).end_episode();
    }

    fn metrics(&self) -> AgentMetrics {
        (**self).metrics()
    }
}

impl<A: Trainable + ?Sized> Trainable for Box<A> {
    fn taken_steps(&self) -> Vec<Step<Self::Observation, Self::Response>> {
        (**self).taken_steps()
    }
}
