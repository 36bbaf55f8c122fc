//! Example: recording a random policy on a three-armed bandit

use rand::Rng;
use stepwise_agent::{export_taken_steps, MemorySink, PlainAgent, TrainableAgent};
use stepwise_core::{Agent, Reward, Trainable, TrainableConfig};
use tracing_subscriber::EnvFilter;

/// Payout probability of each arm
const ARMS: [f64; 3] = [0.2, 0.5, 0.8];
const PULLS_PER_EPISODE: usize = 10;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let policy = |_round: &usize| -> stepwise_core::Result<usize> {
        Ok(rand::thread_rng().gen_range(0..ARMS.len()))
    };
    let config = TrainableConfig::from_json(r#"{"steps_buffer_size": 32}"#)?;
    let inner: PlainAgent<_, usize, usize> = PlainAgent::new(policy);
    let mut agent = TrainableAgent::with_config(inner, &config)?;

    // Run episodes
    let num_episodes = 5;
    let mut rng = rand::thread_rng();
    for episode in 0..num_episodes {
        let mut total_reward = 0.0;
        for round in 0..PULLS_PER_EPISODE {
            let arm = agent.respond(&round)?;
            let payout = if rng.gen_bool(ARMS[arm]) { 1.0 } else { 0.0 };
            agent.add_reward(Reward(payout));
            total_reward += payout;
        }
        agent.end_episode();
        println!("Episode {}: Total Reward = {:.1}", episode + 1, total_reward);
    }

    // One more response so the last episode's final step is settled
    agent.respond(&0)?;

    let mut sink = MemorySink::new();
    export_taken_steps(&agent, &mut sink).await?;
    for batch in sink.batches() {
        println!(
            "\nExported {} steps ({} episode ends, reward {:.1}) of {} taken",
            batch.len(),
            batch.episodes(),
            batch.total_reward(),
            agent.metrics().total_steps,
        );
    }
    println!("Settled steps available for training: {}", agent.taken_steps().len());

    Ok(())
}
