//! Plain agent that answers with its policy and records nothing

use std::marker::PhantomData;

use stepwise_core::{Agent, AgentMetrics, Policy, Reward};

/// Agent that delegates every observation to its policy.
///
/// Reward and end-of-episode signals only update its metrics.
pub struct PlainAgent<P, O, R> {
    /// Policy
    policy: P,
    /// Metrics
    metrics: AgentMetrics,
    _phantom: PhantomData<fn(&O) -> R>,
}

impl<P, O, R> PlainAgent<P, O, R>
where
    P: Policy<O, R>,
{
    /// Create a new plain agent
    pub fn new(policy: P) -> Self {
        Self {
            policy,
            metrics: AgentMetrics::default(),
            _phantom: PhantomData,
        }
    }

    /// Get the agent's policy
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Get mutable reference to the agent's policy
    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }
}

impl<P, O, R> Agent for PlainAgent<P, O, R>
where
    P: Policy<O, R>,
{
    type Observation = O;
    type Response = R;

    fn respond(&mut self, observation: &O) -> stepwise_core::Result<R> {
        let response = self.policy.act(observation)?;
        self.metrics.total_steps += 1;
        Ok(response)
    }

    fn add_reward(&mut self, reward: Reward) {
        self.metrics.total_reward += reward.value();
    }

    fn end_episode(&mut self) {
        self.metrics.total_episodes += 1;
    }

    fn metrics(&self) -> AgentMetrics {
        self.metrics.clone()
    }
}
