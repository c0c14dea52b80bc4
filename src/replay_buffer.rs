use std::collections::VecDeque;

use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One observed environment transition.
///
/// Produced by the environment driver and never mutated once stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub state: Array1<f32>,
    pub action: usize,
    pub reward: f32,
    pub next_state: Array1<f32>,
    pub done: bool,
}

/// A fixed-capacity experience store with oldest-first eviction.
#[derive(Clone, Debug)]
pub struct ReplayBuffer {
    buffer: VecDeque<Experience>,
    capacity: usize,
}

impl ReplayBuffer {
    pub fn new(capacity: usize) -> Self {
        ReplayBuffer {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an experience, evicting the oldest one when full.
    pub fn add(&mut self, experience: Experience) {
        if self.buffer.len() == self.capacity {
            self.buffer.pop_front();
        }
        self.buffer.push_back(experience);
    }

    /// Draw `batch_size` experiences independently and uniformly at random,
    /// with replacement, from the full store. Returns an empty batch when
    /// nothing is stored.
    pub fn sample_with_replacement<R: Rng + ?Sized>(
        &self,
        batch_size: usize,
        rng: &mut R,
    ) -> Vec<&Experience> {
        if self.buffer.is_empty() {
            return Vec::new();
        }
        (0..batch_size)
            .map(|_| &self.buffer[rng.gen_range(0..self.buffer.len())])
            .collect()
    }

    pub fn get(&self, index: usize) -> Option<&Experience> {
        self.buffer.get(index)
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
