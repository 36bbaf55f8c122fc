//! Hand recorded steps to a training process

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use stepwise_core::{Step, Trainable};

/// Settled steps exported from an agent at one point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepBatch<O, R> {
    /// Batch ID
    pub id: Uuid,
    /// When the snapshot was taken
    pub exported_at: DateTime<Utc>,
    /// Steps, oldest first
    pub steps: Vec<Step<O, R>>,
}

impl<O, R> StepBatch<O, R> {
    /// Wrap a snapshot of steps in a new batch
    pub fn new(steps: Vec<Step<O, R>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            exported_at: Utc::now(),
            steps,
        }
    }

    /// Number of steps in the batch
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the batch is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Sum of step rewards
    #[must_use]
    pub fn total_reward(&self) -> f64 {
        self.steps.iter().map(|s| s.reward().value()).sum()
    }

    /// Number of steps that closed an episode
    #[must_use]
    pub fn episodes(&self) -> usize {
        self.steps.iter().filter(|s| s.is_terminal()).count()
    }
}

/// Destination for exported step batches
#[async_trait]
pub trait StepSink<O, R>: Send {
    /// Take ownership of a batch
    async fn consume(&mut self, batch: StepBatch<O, R>) -> stepwise_core::Result<()>;
}

/// Sink that writes each batch to `<dir>/<batch id>.json`
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl JsonFileSink {
    /// Create a sink writing into `dir`, created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    /// Directory batches are written to
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths of every batch written so far
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn batch_path(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }
}

#[async_trait]
impl<O, R> StepSink<O, R> for JsonFileSink
where
    O: Serialize + Send + 'static,
    R: Serialize + Send + 'static,
{
    async fn consume(&mut self, batch: StepBatch<O, R>) -> stepwise_core::Result<()> {
        let path = self.batch_path(batch.id);
        let json = serde_json::to_string_pretty(&batch)?;

        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(&path, json).await?;

        info!(path = %path.display(), steps = batch.len(), "exported step batch");
        self.written.push(path);
        Ok(())
    }
}

/// Read a batch written by [`JsonFileSink`]
pub async fn load_batch<O, R>(path: impl AsRef<Path>) -> stepwise_core::Result<StepBatch<O, R>>
where
    O: DeserializeOwned,
    R: DeserializeOwned,
{
    let json = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&json)?)
}

/// Sink that keeps batches in memory for an in-process trainer
#[derive(Debug, Clone)]
pub struct MemorySink<O, R> {
    batches: Vec<StepBatch<O, R>>,
}

impl<O, R> MemorySink<O, R> {
    /// Create an empty sink
    #[must_use]
    pub fn new() -> Self {
        Self {
            batches: Vec::new(),
        }
    }

    /// Batches received so far
    pub fn batches(&self) -> &[StepBatch<O, R>] {
        &self.batches
    }

    /// Move out every received batch
    pub fn drain(&mut self) -> Vec<StepBatch<O, R>> {
        std::mem::take(&mut self.batches)
    }
}

impl<O, R> Default for MemorySink<O, R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<O, R> StepSink<O, R> for MemorySink<O, R>
where
    O: Send + 'static,
    R: Send + 'static,
{
    async fn consume(&mut self, batch: StepBatch<O, R>) -> stepwise_core::Result<()> {
        self.batches.push(batch);
        Ok(())
    }
}

/// Snapshot an agent's settled steps and hand them to `sink`.
///
/// The agent keeps its history. Returns the batch ID, or `None` when there
/// was nothing settled to export.
pub async fn export_taken_steps<T, S>(
    agent: &T,
    sink: &mut S,
) -> stepwise_core::Result<Option<Uuid>>
where
    T: Trainable,
    S: StepSink<T::Observation, T::Response> + ?Sized,
{
    let steps = agent.taken_steps();
    if steps.is_empty() {
        debug!("no settled steps to export");
        return Ok(None);
    }

    let batch = StepBatch::new(steps);
    let id = batch.id;
    sink.consume(batch).await?;
    Ok(Some(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PlainAgent, TrainableAgent};
    use stepwise_core::{Agent, ConstantPolicy, Reward};
    use tempfile::tempdir;

    type HoldAgent = TrainableAgent<PlainAgent<ConstantPolicy<String>, u32, String>>;

    fn recorded_agent() -> HoldAgent {
        let inner = PlainAgent::new(ConstantPolicy::new("hold".to_string()));
        let mut agent: HoldAgent = TrainableAgent::new(inner, 8).unwrap();
        for o in 0..3 {
            agent.respond(&o).unwrap();
            agent.add_reward(Reward(1.0));
        }
        agent.end_episode();
        agent
    }

    #[tokio::test]
    async fn test_memory_sink_receives_settled_steps() {
        let agent = recorded_agent();
        let mut sink = MemorySink::new();

        let id = export_taken_steps(&agent, &mut sink).await.unwrap();
        assert!(id.is_some());

        let batches = sink.drain();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].len(), 2);
        assert!((batches[0].total_reward() - 2.0).abs() < f64::EPSILON);
        assert_eq!(batches[0].episodes(), 0);
        assert!(sink.batches().is_empty());
        // Exporting does not consume the agent's history.
        assert_eq!(agent.history().len(), 3);
    }

    #[tokio::test]
    async fn test_nothing_settled_is_skipped() {
        let inner: PlainAgent<_, u8, u8> = PlainAgent::new(ConstantPolicy::new(1u8));
        let mut agent = TrainableAgent::new(inner, 4).unwrap();
        agent.respond(&0u8).unwrap();

        let mut sink = MemorySink::new();
        assert!(export_taken_steps(&agent, &mut sink).await.unwrap().is_none());
        assert!(sink.batches().is_empty());
    }

    #[tokio::test]
    async fn test_json_file_sink_round_trip() {
        let dir = tempdir().unwrap();
        let mut agent = recorded_agent();
        agent.respond(&9).unwrap();

        let mut sink = JsonFileSink::new(dir.path().join("batches"));
        let id = export_taken_steps(&agent, &mut sink).await.unwrap().unwrap();

        assert_eq!(sink.written().len(), 1);
        let batch: StepBatch<u32, String> = load_batch(&sink.written()[0]).await.unwrap();
        assert_eq!(batch.id, id);
        assert_eq!(batch.len(), 3);
        assert_eq!(batch.episodes(), 1);
        assert_eq!(batch.steps[2].response(), "hold");
        assert!(batch.steps[2].is_terminal());
    }

    #[tokio::test]
    async fn test_load_missing_batch_is_io_error() {
        let dir = tempdir().unwrap();
        let err = load_batch::<u32, u32>(dir.path().join("missing.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, stepwise_core::StepwiseError::Io(_)));
    }
}
