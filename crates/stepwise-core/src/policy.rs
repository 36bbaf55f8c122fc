//! Policy abstraction for response selection

/// Maps an observation to a response.
///
/// Any closure `Fn(&O) -> Result<R>` is a policy. Errors are propagated
/// unchanged by every agent that wraps the policy.
pub trait Policy<O, R> {
    /// Produce a response for an observation
    fn act(&self, observation: &O) -> crate::Result<R>;
}

impl<O, R, F> Policy<O, R> for F
where
    F: Fn(&O) -> crate::Result<R>,
{
    fn act(&self, observation: &O) -> crate::Result<R> {
        self(observation)
    }
}

/// Policy that always returns the same response
#[derive(Debug, Clone)]
pub struct ConstantPolicy<R> {
    /// Response returned for every observation
    pub response: R,
}

impl<R> ConstantPolicy<R> {
    /// Create a new constant policy
    pub fn new(response: R) -> Self {
        Self { response }
    }
}

impl<O, R: Clone> Policy<O, R> for ConstantPolicy<R> {
    fn act(&self, _observation: &O) -> crate::Result<R> {
        Ok(self.response.clone())
    }
}
