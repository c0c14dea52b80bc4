use ndarray::array;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::replay_buffer::{Experience, ReplayBuffer};

fn experience(tag: f32) -> Experience {
    Experience {
        state: array![tag],
        action: 0,
        reward: tag,
        next_state: array![tag + 1.0],
        done: false,
    }
}

#[test]
fn test_add_and_len() {
    let mut buffer = ReplayBuffer::new(10);
    assert!(buffer.is_empty());

    buffer.add(experience(0.0));
    assert_eq!(buffer.len(), 1);
    assert!(!buffer.is_empty());
    assert_eq!(buffer.capacity(), 10);
}

#[test]
fn test_capacity_evicts_oldest_first() {
    let mut buffer = ReplayBuffer::new(3);
    for i in 0..5 {
        buffer.add(experience(i as f32));
    }

    assert_eq!(buffer.len(), 3);
    // Experiences 0 and 1 were evicted; 2, 3, 4 remain in order.
    assert_eq!(buffer.get(0).unwrap().state[0], 2.0);
    assert_eq!(buffer.get(1).unwrap().state[0], 3.0);
    assert_eq!(buffer.get(2).unwrap().state[0], 4.0);
    assert!(buffer.get(3).is_none());
}

#[test]
fn test_sample_with_replacement() {
    let mut buffer = ReplayBuffer::new(10);
    for i in 0..3 {
        buffer.add(experience(i as f32));
    }

    let mut rng = StdRng::seed_from_u64(11);
    // Sampling with replacement can draw more than the store holds.
    let batch = buffer.sample_with_replacement(20, &mut rng);
    assert_eq!(batch.len(), 20);
    for sampled in batch {
        assert!(sampled.state[0] >= 0.0 && sampled.state[0] <= 2.0);
    }
}

#[test]
fn test_sample_from_empty_buffer_is_empty() {
    let buffer = ReplayBuffer::new(10);
    let mut rng = StdRng::seed_from_u64(12);
    assert!(buffer.sample_with_replacement(5, &mut rng).is_empty());
}

#[test]
fn test_stored_experience_round_trip() {
    let mut buffer = ReplayBuffer::new(2);
    let original = Experience {
        state: array![0.5, -0.5],
        action: 1,
        reward: 2.0,
        next_state: array![0.6, -0.4],
        done: true,
    };
    buffer.add(original.clone());
    assert_eq!(buffer.get(0), Some(&original));
}
