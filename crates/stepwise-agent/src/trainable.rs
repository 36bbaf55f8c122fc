//! Trainable wrapper that records every response of an inner agent

use tracing::{debug, trace};

use stepwise_core::{Agent, AgentMetrics, Reward, Step, StepHistory, Trainable, TrainableConfig};

/// Decorator that records the steps taken by an inner agent.
///
/// Every successful [`respond`](Agent::respond) appends a new open step to a
/// bounded history. Reward and end-of-episode signals are forwarded to the
/// inner agent and then applied to the most recent step. The most recent step
/// is never exposed through [`taken_steps`](Trainable::taken_steps) because
/// its reward may still change.
pub struct TrainableAgent<A: Agent> {
    /// Inner agent
    inner: A,
    /// Recorded steps
    history: StepHistory<A::Observation, A::Response>,
    /// Metrics
    metrics: AgentMetrics,
}

impl<A: Agent> TrainableAgent<A> {
    /// Wrap `inner`, keeping at most `steps_buffer_size` steps
    pub fn new(inner: A, steps_buffer_size: usize) -> stepwise_core::Result<Self> {
        Self::with_config(inner, &TrainableConfig::with_steps_buffer_size(steps_buffer_size))
    }

    /// Wrap `inner` using a validated configuration
    pub fn with_config(inner: A, config: &TrainableConfig) -> stepwise_core::Result<Self> {
        config.validate()?;
        Ok(Self {
            inner,
            history: StepHistory::new(config.steps_buffer_size)?,
            metrics: AgentMetrics::default(),
        })
    }

    /// Get the inner agent
    pub fn inner(&self) -> &A {
        &self.inner
    }

    /// Get mutable reference to the inner agent
    pub fn inner_mut(&mut self) -> &mut A {
        &mut self.inner
    }

    /// Unwrap the inner agent, discarding the recorded steps
    pub fn into_inner(self) -> A {
        self.inner
    }

    /// Read-only view of every recorded step, including the open one
    pub fn history(&self) -> &StepHistory<A::Observation, A::Response> {
        &self.history
    }
}

impl<A> Agent for TrainableAgent<A>
where
    A: Agent,
    A::Observation: Clone,
    A::Response: Clone,
{
    type Observation = A::Observation;
    type Response = A::Response;

    fn respond(
        &mut self,
        observation: &Self::Observation,
    ) -> stepwise_core::Result<Self::Response> {
        // A failed response leaves the history untouched.
        let response = self.inner.respond(observation)?;

        let step = Step::new(observation.clone(), response.clone());
        if self.history.push(step).is_some() {
            self.metrics.evicted_steps += 1;
            debug!(capacity = self.history.capacity(), "evicted oldest step");
        }
        self.metrics.total_steps += 1;
        debug!(recorded = self.history.len(), "recorded step");

        Ok(response)
    }

    fn add_reward(&mut self, reward: Reward) {
        self.inner.add_reward(reward);

        let Some(step) = self.history.latest_mut() else {
            debug!(reward = reward.value(), "reward received before any step; ignoring");
            return;
        };
        if step.add_reward(reward) {
            self.metrics.total_reward += reward.value();
            trace!(reward = reward.value(), total = step.reward().value(), "applied reward");
        } else {
            trace!(reward = reward.value(), "latest step is terminal; reward ignored");
        }
    }

    fn end_episode(&mut self) {
        self.inner.end_episode();

        match self.history.latest_mut() {
            Some(step) if !step.is_terminal() => {
                step.mark_terminal();
                self.metrics.total_episodes += 1;
                debug!(reward = step.reward().value(), "episode ended");
            }
            Some(_) => {}
            None => debug!("end of episode received before any step; ignoring"),
        }
    }

    fn metrics(&self) -> AgentMetrics {
        self.metrics.clone()
    }
}

impl<A> Trainable for TrainableAgent<A>
where
    A: Agent,
    A::Observation: Clone,
    A::Response: Clone,
{
    fn taken_steps(&self) -> Vec<Step<Self::Observation, Self::Response>> {
        self.history.snapshot_excluding_last()
    }
}
