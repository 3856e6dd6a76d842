// Binary logistic regression over sparse TF-IDF vectors.
//
// Fit with full-batch gradient descent on the mean log-loss plus an L2
// penalty. Class 1 is "fake".

use serde::{Deserialize, Serialize};

use super::vectorizer::SparseVector;

/// Optimization settings.
#[derive(Debug, Clone)]
pub struct FitParams {
    pub max_iter: usize,
    pub learning_rate: f64,
    /// Inverse regularization strength (larger = weaker penalty)
    pub c: f64,
    /// Stop once the gradient norm falls below this
    pub tolerance: f64,
}

impl Default for FitParams {
    fn default() -> Self {
        Self {
            max_iter: 1000,
            learning_rate: 1.0,
            c: 1.0,
            tolerance: 1e-5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl LogisticRegression {
    /// Fit on sparse vectors of dimension `dim` with labels 0/1.
    ///
    /// `on_iteration` is called after every gradient step (for progress
    /// reporting). Returns the model and the number of iterations run.
    pub fn fit(
        xs: &[SparseVector],
        ys: &[f64],
        dim: usize,
        params: &FitParams,
        mut on_iteration: impl FnMut(usize),
    ) -> (Self, usize) {
        let mut model = Self {
            weights: vec![0.0; dim],
            bias: 0.0,
        };
        if xs.is_empty() {
            return (model, 0);
        }

        let n = xs.len() as f64;
        let l2 = 1.0 / (params.c * n);
        let mut iterations = 0;

        for iter in 0..params.max_iter {
            let mut grad_w = vec![0.0; dim];
            let mut grad_b = 0.0;

            for (x, &y) in xs.iter().zip(ys) {
                let err = model.predict_proba(x) - y;
                for &(idx, value) in x {
                    grad_w[idx] += err * value;
                }
                grad_b += err;
            }

            let mut norm_sq = 0.0;
            for (g, w) in grad_w.iter_mut().zip(&model.weights) {
                *g = *g / n + l2 * w;
                norm_sq += *g * *g;
            }
            grad_b /= n;
            norm_sq += grad_b * grad_b;

            for (w, g) in model.weights.iter_mut().zip(&grad_w) {
                *w -= params.learning_rate * g;
            }
            model.bias -= params.learning_rate * grad_b;

            iterations = iter + 1;
            on_iteration(iterations);

            if norm_sq.sqrt() < params.tolerance {
                break;
            }
        }

        (model, iterations)
    }

    /// Probability of class 1 (fake).
    pub fn predict_proba(&self, x: &SparseVector) -> f64 {
        let z: f64 = x
            .iter()
            .filter_map(|&(idx, value)| self.weights.get(idx).map(|w| w * value))
            .sum::<f64>()
            + self.bias;
        sigmoid(z)
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
