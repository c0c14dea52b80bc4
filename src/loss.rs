use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::matrix::Matrix;

/// Guard against log and division singularities at 0 and 1.
const EPSILON: f32 = 1e-8;

/// An enumeration of the loss functions a network can train with.
///
/// Both methods operate on column matrices of equal shape and return a column
/// matrix of per-component values rather than a reduced scalar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum LossFunction {
    /// `loss[i] = (t[i] - o[i])^2`, `derivative = t - o`.
    ///
    /// The derivative is `target - output`, the negative of the usual
    /// gradient of the squared error with respect to the output. The
    /// backward pass relies on this sign and applies its parameter deltas
    /// additively, so the net effect is still gradient descent.
    #[default]
    MeanSquaredError,

    /// Binary cross-entropy:
    /// `loss[i] = -t·ln(o+ε) - (1-t)·ln(1-o+ε)`,
    /// `derivative[i] = -(t-o) / ((o+ε)(1-o+ε))`.
    CrossEntropy,
}

impl LossFunction {
    /// Per-component loss for a target/output pair of column matrices.
    pub fn loss(&self, target: &Matrix, output: &Matrix) -> Result<Matrix> {
        match self {
            LossFunction::MeanSquaredError => {
                Ok(target.subtract(output)?.map(|d| d * d))
            }
            LossFunction::CrossEntropy => {
                // The subtraction doubles as the shape check.
                let mut result = target.subtract(output)?;
                for i in 0..result.rows() {
                    for j in 0..result.cols() {
                        let t = target[(i, j)];
                        let o = output[(i, j)];
                        result[(i, j)] =
                            -t * (o + EPSILON).ln() - (1.0 - t) * (1.0 - o + EPSILON).ln();
                    }
                }
                Ok(result)
            }
        }
    }

    /// Per-component derivative of the loss with respect to the output,
    /// in the sign convention the backward pass expects.
    pub fn derivative(&self, target: &Matrix, output: &Matrix) -> Result<Matrix> {
        match self {
            LossFunction::MeanSquaredError => target.subtract(output),
            LossFunction::CrossEntropy => {
                let mut result = target.subtract(output)?;
                for i in 0..result.rows() {
                    for j in 0..result.cols() {
                        let t = target[(i, j)];
                        let o = output[(i, j)];
                        result[(i, j)] =
                            -(t - o) / ((o + EPSILON) * (1.0 - o + EPSILON));
                    }
                }
                Ok(result)
            }
        }
    }
}
