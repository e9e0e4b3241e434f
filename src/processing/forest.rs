//! Bagged ensemble of CART decision trees with seeded randomness

use crate::error::{RecommenderError, Result};
use log::debug;
use ndarray::{ArrayView1, ArrayView2};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

const MIN_SAMPLES_SPLIT: usize = 2;

/// Ensemble hyperparameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestOptions {
    pub n_estimators: usize,
    pub max_depth: Option<usize>,
}

impl Default for ForestOptions {
    fn default() -> Self {
        Self {
            n_estimators: 100,
            max_depth: None,
        }
    }
}

impl ForestOptions {
    pub fn validate(&self) -> Result<()> {
        if self.n_estimators == 0 {
            return Err(RecommenderError::Configuration(
                "n_estimators must be at least 1".to_string(),
            ));
        }
        if self.max_depth == Some(0) {
            return Err(RecommenderError::Configuration(
                "max_depth must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        distribution: Vec<f64>,
    },
}

/// A single classification tree stored as a flat node arena (root at 0)
#[derive(Debug, Clone)]
pub struct DecisionTree {
    nodes: Vec<Node>,
}

struct Candidate {
    feature: usize,
    threshold: f64,
    impurity: f64,
}

struct TreeBuilder<'a> {
    features: ArrayView2<'a, f64>,
    labels: &'a [usize],
    weights: Vec<f64>,
    n_classes: usize,
    max_features: usize,
    max_depth: Option<usize>,
    rng: StdRng,
    nodes: Vec<Node>,
}

impl<'a> TreeBuilder<'a> {
    fn build(&mut self, samples: Vec<usize>, depth: usize) -> usize {
        let distribution = self.class_weights(&samples);
        let total: f64 = distribution.iter().sum();

        let pure = distribution.iter().filter(|&&w| w > 0.0).count() <= 1;
        let depth_reached = self.max_depth.map_or(false, |max| depth >= max);
        if pure || samples.len() < MIN_SAMPLES_SPLIT || depth_reached {
            return self.push_leaf(distribution, total);
        }

        let Some(candidate) = self.best_split(&samples, &distribution, total) else {
            return self.push_leaf(distribution, total);
        };

        let features = self.features;
        let (left, right): (Vec<usize>, Vec<usize>) = samples
            .into_iter()
            .partition(|&s| features[[s, candidate.feature]] <= candidate.threshold);

        // Reserve the slot so the parent precedes its children.
        let index = self.nodes.len();
        self.nodes.push(Node::Leaf {
            distribution: Vec::new(),
        });
        let left = self.build(left, depth + 1);
        let right = self.build(right, depth + 1);
        self.nodes[index] = Node::Split {
            feature: candidate.feature,
            threshold: candidate.threshold,
            left,
            right,
        };
        index
    }

    fn class_weights(&self, samples: &[usize]) -> Vec<f64> {
        let mut distribution = vec![0.0; self.n_classes];
        for &sample in samples {
            distribution[self.labels[sample]] += self.weights[sample];
        }
        distribution
    }

    fn push_leaf(&mut self, mut distribution: Vec<f64>, total: f64) -> usize {
        if total > 0.0 {
            for weight in distribution.iter_mut() {
                *weight /= total;
            }
        }
        self.nodes.push(Node::Leaf { distribution });
        self.nodes.len() - 1
    }

    /// Lowest weighted Gini impurity over a random subset of features.
    ///
    /// Keeps drawing past `max_features` until at least one feature separates
    /// the node.
    fn best_split(&mut self, samples: &[usize], parent: &[f64], total: f64) -> Option<Candidate> {
        let mut order: Vec<usize> = (0..self.features.ncols()).collect();
        order.shuffle(&mut self.rng);

        let mut best: Option<Candidate> = None;
        let mut visited = 0;

        for feature in order {
            if visited >= self.max_features && best.is_some() {
                break;
            }
            visited += 1;

            let mut values: Vec<(f64, usize)> = samples
                .iter()
                .map(|&s| (self.features[[s, feature]], s))
                .collect();
            values.sort_by(|a, b| a.0.total_cmp(&b.0));

            let constant = match (values.first(), values.last()) {
                (Some(first), Some(last)) => first.0 == last.0,
                _ => true,
            };
            if constant {
                continue;
            }

            let mut left = vec![0.0; self.n_classes];
            let mut left_total = 0.0;

            for pair in values.windows(2) {
                let (value, sample) = pair[0];
                let next = pair[1].0;

                let weight = self.weights[sample];
                left[self.labels[sample]] += weight;
                left_total += weight;

                if next <= value {
                    continue;
                }

                let right_total = total - left_total;
                let left_gini = gini(left.iter().copied(), left_total);
                let right_gini = gini(
                    parent.iter().zip(left.iter()).map(|(p, l)| p - l),
                    right_total,
                );
                let impurity = (left_total * left_gini + right_total * right_gini) / total;

                if best.as_ref().map_or(true, |b| impurity < b.impurity) {
                    best = Some(Candidate {
                        feature,
                        threshold: (value + next) / 2.0,
                        impurity,
                    });
                }
            }
        }

        best
    }
}

fn gini(weights: impl Iterator<Item = f64>, total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    1.0 - weights.map(|w| (w / total).powi(2)).sum::<f64>()
}

impl DecisionTree {
    fn leaf_distribution(&self, sample: ArrayView1<f64>) -> &[f64] {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if sample[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                Node::Leaf { distribution } => return distribution,
            }
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn depth(&self) -> usize {
        fn walk(nodes: &[Node], index: usize) -> usize {
            match &nodes[index] {
                Node::Split { left, right, .. } => 1 + walk(nodes, *left).max(walk(nodes, *right)),
                Node::Leaf { .. } => 0,
            }
        }
        walk(&self.nodes, 0)
    }
}

/// Random forest classifier producing class probability distributions
#[derive(Debug, Clone)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
    n_classes: usize,
    n_features: usize,
}

impl RandomForest {
    /// Fit `options.n_estimators` trees, each on a bootstrap resample of the rows.
    ///
    /// `labels[i]` is the class of row `i` and must be below `n_classes`.
    pub fn fit<'a>(
        features: ArrayView2<'a, f64>,
        labels: &'a [usize],
        n_classes: usize,
        options: &ForestOptions,
        seed: u64,
    ) -> Result<Self> {
        options.validate()?;

        let (n_samples, n_features) = features.dim();
        if n_samples == 0 {
            return Err(RecommenderError::InvalidCatalog(
                "cannot fit a classifier without samples".to_string(),
            ));
        }
        if labels.len() != n_samples {
            return Err(RecommenderError::InvalidInput(format!(
                "label count {} does not match sample count {}",
                labels.len(),
                n_samples
            )));
        }
        if let Some(&bad) = labels.iter().find(|&&l| l >= n_classes) {
            return Err(RecommenderError::InvalidInput(format!(
                "label {} out of range for {} classes",
                bad, n_classes
            )));
        }

        let max_features = ((n_features as f64).sqrt() as usize).max(1);
        let mut master = StdRng::seed_from_u64(seed);
        let mut trees = Vec::with_capacity(options.n_estimators);

        for _ in 0..options.n_estimators {
            let mut rng = StdRng::seed_from_u64(master.gen());

            let mut weights = vec![0.0; n_samples];
            for _ in 0..n_samples {
                weights[rng.gen_range(0..n_samples)] += 1.0;
            }
            let samples: Vec<usize> = (0..n_samples).filter(|&i| weights[i] > 0.0).collect();

            let mut builder = TreeBuilder {
                features,
                labels,
                weights,
                n_classes,
                max_features,
                max_depth: options.max_depth,
                rng,
                nodes: Vec::new(),
            };
            builder.build(samples, 0);
            trees.push(DecisionTree {
                nodes: builder.nodes,
            });
        }

        debug!(
            "Fitted {} trees over {} samples x {} features (max_features={}, {} nodes, depth {})",
            trees.len(),
            n_samples,
            n_features,
            max_features,
            trees.iter().map(DecisionTree::node_count).sum::<usize>(),
            trees.iter().map(DecisionTree::depth).max().unwrap_or(0)
        );

        Ok(Self {
            trees,
            n_classes,
            n_features,
        })
    }

    /// Mean of the per-tree leaf distributions; sums to 1 across classes
    pub fn predict_proba(&self, sample: ArrayView1<f64>) -> Vec<f64> {
        let mut probabilities = vec![0.0; self.n_classes];
        for tree in &self.trees {
            for (p, leaf) in probabilities.iter_mut().zip(tree.leaf_distribution(sample)) {
                *p += leaf;
            }
        }

        let n_trees = self.trees.len() as f64;
        for p in probabilities.iter_mut() {
            *p /= n_trees;
        }
        probabilities
    }

    pub fn trees(&self) -> &[DecisionTree] {
        &self.trees
    }

    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }
}
