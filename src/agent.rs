use ndarray::{Array1, ArrayView1};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{AxonError, Result};
use crate::loss::LossFunction;
use crate::network::QNetwork;
use crate::replay_buffer::{Experience, ReplayBuffer};

/// Maximum number of Q-learning updates per replay pass.
pub const REPLAY_BATCH_SIZE: usize = 200;

/// Multiplicative epsilon decay applied after every replay pass.
pub const EPSILON_DECAY: f32 = 0.99;

/// Default capacity of the experience store.
pub const DEFAULT_BUFFER_CAPACITY: usize = 10_000;

/// A Q-learning agent with epsilon-greedy exploration and experience replay.
///
/// The agent owns one [`QNetwork`] and a bounded experience store. The
/// environment driver asks it for actions, hands back the observed
/// transitions, and invokes [`DqnAgent::train`] on whatever cadence it
/// chooses. Epsilon decays by a constant factor per replay pass and is never
/// re-increased; the learning rate and discount factor are fixed at
/// construction.
///
/// # Example
///
/// ```
/// use axon::agent::DqnAgent;
/// use axon::replay_buffer::Experience;
/// use ndarray::array;
///
/// // 4 state features, one hidden layer, 2 actions.
/// let mut agent = DqnAgent::new(0.1, 0.5, 0.9, &[4, 16, 2]).unwrap();
///
/// let state = array![0.1, -0.2, 0.3, -0.1];
/// let action = agent.select_action(state.view()).unwrap();
///
/// // After stepping the environment...
/// agent.store(Experience {
///     state,
///     action,
///     reward: 1.0,
///     next_state: array![0.15, -0.25, 0.35, -0.05],
///     done: false,
/// });
///
/// agent.train().unwrap();
/// ```
pub struct DqnAgent {
    epsilon: f32,
    learning_rate: f32,
    gamma: f32,
    structure: Vec<usize>,
    q_network: QNetwork,
    replay_buffer: ReplayBuffer,
    rng: StdRng,
}

impl DqnAgent {
    /// Create an agent with an entropy-seeded generator and the default
    /// replay capacity and loss. `structure[0]` is the state feature
    /// dimensionality and `structure[last]` the number of discrete actions.
    pub fn new(
        epsilon: f32,
        learning_rate: f32,
        gamma: f32,
        structure: &[usize],
    ) -> Result<Self> {
        DqnAgentBuilder::new()
            .epsilon(epsilon)
            .learning_rate(learning_rate)
            .gamma(gamma)
            .structure(structure)
            .build()
    }

    /// Current exploration probability.
    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// Number of experiences currently stored.
    pub fn experience_count(&self) -> usize {
        self.replay_buffer.len()
    }

    /// The layer sizes the agent's network was built from.
    pub fn structure(&self) -> &[usize] {
        &self.structure
    }

    /// The Q-network backing this agent.
    pub fn q_network(&self) -> &QNetwork {
        &self.q_network
    }

    /// Select an action for the given state with the epsilon-greedy policy:
    /// a uniformly random action with probability epsilon, otherwise the
    /// action with the highest predicted Q-value, first index on ties.
    pub fn select_action(&mut self, state: ArrayView1<f32>) -> Result<usize> {
        let num_actions = self.q_network.num_actions();
        if self.rng.gen::<f32>() < self.epsilon {
            return Ok(self.rng.gen_range(0..num_actions));
        }
        let q_values = self.q_network.predict(state)?;
        Ok(argmax(&q_values))
    }

    /// Store one observed transition in the replay buffer. When the buffer
    /// is at capacity the oldest experience is evicted.
    pub fn store(&mut self, experience: Experience) {
        self.replay_buffer.add(experience);
    }

    /// One replay pass: draw `min(stored, REPLAY_BATCH_SIZE)` experiences
    /// uniformly with replacement from the full history and perform one
    /// Q-learning update for each, then decay epsilon.
    ///
    /// Fails with `EmptyExperienceStore` when nothing has been stored yet.
    pub fn train(&mut self) -> Result<()> {
        if self.replay_buffer.is_empty() {
            return Err(AxonError::EmptyExperienceStore);
        }

        let batch_size = self.replay_buffer.len().min(REPLAY_BATCH_SIZE);
        let batch = self
            .replay_buffer
            .sample_with_replacement(batch_size, &mut self.rng);
        for experience in batch {
            self.q_network
                .q_train(experience, self.learning_rate, self.gamma)?;
        }

        self.epsilon *= EPSILON_DECAY;
        Ok(())
    }
}

/// Index of the largest value, keeping the first index on ties.
pub(crate) fn argmax(values: &Array1<f32>) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate() {
        if v > values[best] {
            best = i;
        }
    }
    best
}

/// Builder for [`DqnAgent`], exposing the replay capacity, loss function,
/// and a deterministic seed for tests.
pub struct DqnAgentBuilder {
    epsilon: f32,
    learning_rate: f32,
    gamma: f32,
    structure: Vec<usize>,
    buffer_capacity: usize,
    loss: LossFunction,
    seed: Option<u64>,
}

impl DqnAgentBuilder {
    pub fn new() -> Self {
        DqnAgentBuilder {
            epsilon: 1.0,
            learning_rate: 0.1,
            gamma: 0.99,
            structure: vec![],
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            loss: LossFunction::default(),
            seed: None,
        }
    }

    pub fn epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn learning_rate(mut self, learning_rate: f32) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn gamma(mut self, gamma: f32) -> Self {
        self.gamma = gamma;
        self
    }

    pub fn structure(mut self, structure: &[usize]) -> Self {
        self.structure = structure.to_vec();
        self
    }

    pub fn buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }

    pub fn loss(mut self, loss: LossFunction) -> Self {
        self.loss = loss;
        self
    }

    /// Seed the agent's generator for reproducible exploration, sampling,
    /// and parameter initialization.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<DqnAgent> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let q_network = QNetwork::with_loss(&self.structure, self.loss, &mut rng)?;

        Ok(DqnAgent {
            epsilon: self.epsilon,
            learning_rate: self.learning_rate,
            gamma: self.gamma,
            structure: self.structure,
            q_network,
            replay_buffer: ReplayBuffer::new(self.buffer_capacity),
            rng,
        })
    }
}

impl Default for DqnAgentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
