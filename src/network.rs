use ndarray::{Array1, ArrayView1};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{AxonError, Result};
use crate::loss::LossFunction;
use crate::matrix::Matrix;
use crate::replay_buffer::Experience;

/// Sigmoid activation, applied to every layer including the output layer.
///
/// Because the output layer is squashed into (0, 1), the network can only
/// represent Q-values in that range; reward scales should be chosen
/// accordingly.
fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Sigmoid derivative expressed in terms of the activation: `y * (1 - y)`.
fn dsigmoid(y: f32) -> f32 {
    y * (1.0 - y)
}

/// A multi-layer perceptron used as a Q-function approximator.
///
/// The network is described by a `structure` of layer sizes: `structure[0]`
/// is the input dimensionality and each later entry the size of one layer.
/// For layer `i`, `weights[i]` has shape `structure[i+1] × structure[i]` and
/// `biases[i]` has shape `structure[i+1] × 1`. Parameters are initialized
/// uniformly from [-1, 1) and updated in place by every training call.
///
/// # Example
///
/// ```
/// use axon::network::QNetwork;
/// use ndarray::array;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let network = QNetwork::new(&[2, 4, 2], &mut rng).unwrap();
/// let q_values = network.predict(array![0.5, -0.5].view()).unwrap();
/// assert_eq!(q_values.len(), 2);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QNetwork {
    structure: Vec<usize>,
    weights: Vec<Matrix>,
    biases: Vec<Matrix>,
    loss: LossFunction,
}

impl QNetwork {
    /// Create a network with the default mean-squared-error loss.
    pub fn new<R: Rng + ?Sized>(structure: &[usize], rng: &mut R) -> Result<Self> {
        Self::with_loss(structure, LossFunction::default(), rng)
    }

    /// Create a network with an explicit loss function.
    ///
    /// The structure must have at least an input and an output layer, and
    /// every layer must be non-empty.
    pub fn with_loss<R: Rng + ?Sized>(
        structure: &[usize],
        loss: LossFunction,
        rng: &mut R,
    ) -> Result<Self> {
        if structure.len() < 2 {
            return Err(AxonError::invalid_structure(format!(
                "need at least input and output layers, got {} entries",
                structure.len()
            )));
        }
        if let Some(pos) = structure.iter().position(|&size| size == 0) {
            return Err(AxonError::invalid_structure(format!(
                "layer {} has size 0",
                pos
            )));
        }

        let mut weights = Vec::with_capacity(structure.len() - 1);
        let mut biases = Vec::with_capacity(structure.len() - 1);
        for window in structure.windows(2) {
            weights.push(Matrix::random(window[1], window[0], rng));
            biases.push(Matrix::random(window[1], 1, rng));
        }

        Ok(QNetwork {
            structure: structure.to_vec(),
            weights,
            biases,
            loss,
        })
    }

    /// The layer sizes this network was built from.
    pub fn structure(&self) -> &[usize] {
        &self.structure
    }

    /// Number of discrete actions, i.e. the output layer size.
    pub fn num_actions(&self) -> usize {
        self.structure[self.structure.len() - 1]
    }

    /// Weight matrix of layer `i`, shape `structure[i+1] × structure[i]`.
    pub fn weights(&self, layer: usize) -> &Matrix {
        &self.weights[layer]
    }

    /// Bias column of layer `i`, shape `structure[i+1] × 1`.
    pub fn biases(&self, layer: usize) -> &Matrix {
        &self.biases[layer]
    }

    /// Run a forward pass and return the output layer's activations.
    ///
    /// Deterministic for fixed parameters; does not mutate the network.
    pub fn predict(&self, input: ArrayView1<f32>) -> Result<Array1<f32>> {
        self.check_vector_len("input", input.len(), self.structure[0])?;

        let mut activation = Matrix::from_column(input);
        for (weights, biases) in self.weights.iter().zip(&self.biases) {
            let z = weights.multiply(&activation)?.add(biases)?;
            activation = z.map(sigmoid);
        }
        Ok(activation.column_to_array())
    }

    /// One supervised gradient step: a full forward pass, a backward pass,
    /// and an in-place parameter update.
    ///
    /// Input and target lengths are validated before any parameter is
    /// touched, so a shape error never leaves the network partially updated.
    ///
    /// The loss derivative is `target - output` for the default loss, and the
    /// deltas are *added* to the weights and biases; the two sign choices
    /// cancel, so the update descends the underlying loss. Error propagation
    /// to the previous layer reads the freshly updated weight matrix, not its
    /// pre-update value.
    pub fn train(
        &mut self,
        input: ArrayView1<f32>,
        target: ArrayView1<f32>,
        learning_rate: f32,
    ) -> Result<()> {
        self.check_vector_len("input", input.len(), self.structure[0])?;
        self.check_vector_len("target", target.len(), self.num_actions())?;

        // Forward pass, caching every activation with the input as a_0.
        let mut activations = vec![Matrix::from_column(input)];
        for i in 0..self.weights.len() {
            let z = self.weights[i].multiply(&activations[i])?.add(&self.biases[i])?;
            activations.push(z.map(sigmoid));
        }

        let target = Matrix::from_column(target);
        let mut error = self.loss.derivative(&target, &activations[activations.len() - 1])?;

        // Backward pass.
        for i in (0..self.weights.len()).rev() {
            let output = &activations[i + 1];
            let gradient = output.map(dsigmoid).multiply_elementwise(&error)?;
            let gradient_lr = gradient.scale(learning_rate);
            let weight_deltas = gradient_lr.multiply(&activations[i].transpose())?;

            self.weights[i] = self.weights[i].add(&weight_deltas)?;
            self.biases[i] = self.biases[i].add(&gradient_lr)?;

            error = self.weights[i].transpose().multiply(&gradient)?;
        }

        Ok(())
    }

    /// Convert one stored transition into a supervised target and take one
    /// gradient step on it.
    ///
    /// The target equals the current prediction everywhere except at the
    /// taken action, which is set to the one-step bootstrapped Q-target:
    /// the reward alone for terminal transitions, otherwise
    /// `reward + gamma * max(predict(next_state))`. Components for untaken
    /// actions are trained toward their own prediction and contribute no
    /// output-layer gradient.
    pub fn q_train(
        &mut self,
        experience: &Experience,
        learning_rate: f32,
        gamma: f32,
    ) -> Result<()> {
        if experience.action >= self.num_actions() {
            return Err(AxonError::InvalidAction {
                action: experience.action,
                num_actions: self.num_actions(),
            });
        }

        let current_q = self.predict(experience.state.view())?;
        let next_q = self.predict(experience.next_state.view())?;

        let mut target_q = current_q;
        target_q[experience.action] = if experience.done {
            experience.reward
        } else {
            let max_next = next_q.iter().fold(f32::NEG_INFINITY, |max, &v| max.max(v));
            experience.reward + gamma * max_next
        };

        self.train(experience.state.view(), target_q.view(), learning_rate)
    }

    fn check_vector_len(&self, what: &str, actual: usize, expected: usize) -> Result<()> {
        if actual != expected {
            return Err(AxonError::shape_mismatch(
                format!("{} of length {}", what, expected),
                format!("length {}", actual),
            ));
        }
        Ok(())
    }
}
