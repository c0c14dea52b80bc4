//! # Axon - Minimal Q-Learning on a Hand-Rolled Network
//!
//! Axon is a small reinforcement-learning library built around two pieces:
//! a dense feed-forward neural network with explicit forward and backward
//! passes over a shape-checked matrix type, and an agent that wraps the
//! network with epsilon-greedy action selection, an experience replay
//! buffer, and a one-step bootstrapped Q-learning update.
//!
//! There is no environment here: the library is consumed programmatically by
//! a driver that steps its own environment, asks the agent for actions,
//! stores the observed transitions, and invokes replay training on whatever
//! cadence it chooses.
//!
//! ## Quick Start
//!
//! ```
//! use axon::agent::DqnAgentBuilder;
//! use axon::replay_buffer::Experience;
//! use ndarray::array;
//!
//! let mut agent = DqnAgentBuilder::new()
//!     .epsilon(1.0)
//!     .learning_rate(0.1)
//!     .gamma(0.9)
//!     .structure(&[2, 8, 2])
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let state = array![0.0, 1.0];
//! let action = agent.select_action(state.view()).unwrap();
//!
//! agent.store(Experience {
//!     state,
//!     action,
//!     reward: 1.0,
//!     next_state: array![1.0, 1.0],
//!     done: false,
//! });
//!
//! agent.train().unwrap();
//! assert!(agent.epsilon() < 1.0);
//! ```
//!
//! ## Module Organization
//!
//! - [`agent`] - Epsilon-greedy Q-learning agent and its builder
//! - [`error`] - Error types and result handling
//! - [`loss`] - Loss functions for training
//! - [`matrix`] - Shape-checked matrix algebra
//! - [`network`] - The Q-function network
//! - [`replay_buffer`] - Experience record and bounded replay store

pub mod agent;
pub mod error;
pub mod loss;
pub mod matrix;
pub mod network;
pub mod replay_buffer;

#[cfg(test)]
mod tests;
