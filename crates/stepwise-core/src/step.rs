//! Recorded interactions between an agent and its caller

use serde::{Deserialize, Serialize};

use crate::Reward;

/// One observation/response pair plus the reward it earned.
///
/// The observation and response are fixed when the step is created. Reward
/// accumulates until the step is marked terminal, after which it is frozen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step<O, R> {
    observation: O,
    response: R,
    reward: Reward,
    is_terminal: bool,
}

impl<O, R> Step<O, R> {
    /// Create an open step with zero reward
    pub fn new(observation: O, response: R) -> Self {
        Self {
            observation,
            response,
            reward: Reward::ZERO,
            is_terminal: false,
        }
    }

    /// Add `delta` to the accumulated reward.
    ///
    /// Returns `false` without touching the reward if the step is terminal.
    pub fn add_reward(&mut self, delta: Reward) -> bool {
        if self.is_terminal {
            return false;
        }
        self.reward += delta;
        true
    }

    /// Close the step. Calling this more than once has no further effect.
    pub fn mark_terminal(&mut self) {
        self.is_terminal = true;
    }

    /// Observation the agent responded to
    pub fn observation(&self) -> &O {
        &self.observation
    }

    /// Response the agent produced
    pub fn response(&self) -> &R {
        &self.response
    }

    /// Reward accumulated so far
    #[must_use]
    pub fn reward(&self) -> Reward {
        self.reward
    }

    /// Whether this step ended its episode
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Split the step into `(observation, response, reward, is_terminal)`
    pub fn into_parts(self) -> (O, R, Reward, bool) {
        (self.observation, self.response, self.reward, self.is_terminal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_step_is_open() {
        let step = Step::new("obs", 3);
        assert_eq!(*step.observation(), "obs");
        assert_eq!(*step.response(), 3);
        assert_eq!(step.reward(), Reward::ZERO);
        assert!(!step.is_terminal());
    }

    #[test]
    fn test_reward_accumulates_until_terminal() {
        let mut step = Step::new(1, 2);
        assert!(step.add_reward(Reward(0.5)));
        assert!(step.add_reward(Reward(0.25)));
        assert_relative_eq!(step.reward().value(), 0.75);

        step.mark_terminal();
        assert!(!step.add_reward(Reward(10.0)));
        assert_relative_eq!(step.reward().value(), 0.75);
    }

    #[test]
    fn test_mark_terminal_is_idempotent() {
        let mut step = Step::new((), ());
        step.mark_terminal();
        step.mark_terminal();
        assert!(step.is_terminal());
    }

    #[test]
    fn test_into_parts() {
        let mut step = Step::new("o", "r");
        step.add_reward(Reward(1.0));
        step.mark_terminal();
        assert_eq!(step.into_parts(), ("o", "r", Reward(1.0), true));
    }
}
