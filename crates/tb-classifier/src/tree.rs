//! Learners — decision procedures over binary feature vectors.
//!
//! [`Learner`] fits a [`Predictor`] from encoded class indices; any
//! algorithm satisfying the pair can back a model. The shipped learner is a
//! CART-style decision tree with fully deterministic induction:
//!
//! - impurity is Gini, compared in exact integer arithmetic;
//! - features are scanned in ascending index order and the largest
//!   impurity decrease wins, ties going to the lowest index;
//! - a split that separates the node is accepted even at zero gain, so any
//!   label-consistent training set is fit exactly;
//! - a leaf predicts its majority class, ties going to the lowest index;
//! - an unset feature goes to the `absent` branch.

use crate::vectorizer::FeatureVector;
use crate::ClassifierError;

pub trait Predictor {
    /// Encoded class index for `features`.
    fn predict(&self, features: &FeatureVector) -> usize;
}

pub trait Learner {
    type Model: Predictor;

    fn fit(
        &self,
        samples: &[FeatureVector],
        targets: &[usize],
        n_classes: usize,
    ) -> Result<Self::Model, ClassifierError>;
}

// ---------------------------------------------------------------------------
// Decision tree
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Leaf {
        class: usize,
    },
    Split {
        feature: usize,
        absent: Box<Node>,
        present: Box<Node>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionTree {
    root: Node,
    n_features: usize,
}

impl DecisionTree {
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Number of splits on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        fn walk(node: &Node) -> usize {
            match node {
                Node::Leaf { .. } => 0,
                Node::Split { absent, present, .. } => 1 + walk(absent).max(walk(present)),
            }
        }
        walk(&self.root)
    }

    pub fn leaf_count(&self) -> usize {
        fn walk(node: &Node) -> usize {
            match node {
                Node::Leaf { .. } => 1,
                Node::Split { absent, present, .. } => walk(absent) + walk(present),
            }
        }
        walk(&self.root)
    }
}

impl Predictor for DecisionTree {
    fn predict(&self, features: &FeatureVector) -> usize {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { class } => return *class,
                Node::Split {
                    feature,
                    absent,
                    present,
                } => {
                    node = if features.is_set(*feature) {
                        present
                    } else {
                        absent
                    };
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Learner
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionTreeLearner {
    /// Maximum number of splits on any path; `None` grows until pure.
    pub max_depth: Option<usize>,
    /// Nodes with fewer samples become leaves.
    pub min_samples_split: usize,
}

impl Default for DecisionTreeLearner {
    fn default() -> Self {
        Self {
            max_depth: None,
            min_samples_split: 2,
        }
    }
}

impl Learner for DecisionTreeLearner {
    type Model = DecisionTree;

    fn fit(
        &self,
        samples: &[FeatureVector],
        targets: &[usize],
        n_classes: usize,
    ) -> Result<DecisionTree, ClassifierError> {
        if samples.is_empty() {
            return Err(ClassifierError::EmptyCorpus);
        }
        if samples.len() != targets.len() {
            return Err(ClassifierError::Training(format!(
                "{} samples but {} targets",
                samples.len(),
                targets.len()
            )));
        }
        let n_features = samples[0].len();
        if samples.iter().any(|s| s.len() != n_features) {
            return Err(ClassifierError::Training(
                "feature vectors differ in length".into(),
            ));
        }
        if let Some(&bad) = targets.iter().find(|&&t| t >= n_classes) {
            return Err(ClassifierError::Training(format!(
                "target {bad} out of range for {n_classes} classes"
            )));
        }

        let builder = TreeBuilder {
            samples,
            targets,
            n_classes,
            n_features,
            params: self,
        };
        let indices: Vec<usize> = (0..samples.len()).collect();
        Ok(DecisionTree {
            root: builder.build(&indices, 0),
            n_features,
        })
    }
}

struct TreeBuilder<'a> {
    samples: &'a [FeatureVector],
    targets: &'a [usize],
    n_classes: usize,
    n_features: usize,
    params: &'a DecisionTreeLearner,
}

impl TreeBuilder<'_> {
    fn build(&self, indices: &[usize], depth: usize) -> Node {
        let counts = self.class_counts(indices.iter().copied());
        let leaf = Node::Leaf {
            class: majority(&counts),
        };

        let pure = counts.iter().filter(|&&c| c > 0).count() <= 1;
        let depth_reached = self.params.max_depth.is_some_and(|max| depth >= max);
        if pure || depth_reached || indices.len() < self.params.min_samples_split {
            return leaf;
        }

        let Some(feature) = self.best_split(indices) else {
            return leaf;
        };

        let (present, absent): (Vec<usize>, Vec<usize>) = indices
            .iter()
            .copied()
            .partition(|&i| self.samples[i].is_set(feature));

        Node::Split {
            feature,
            absent: Box::new(self.build(&absent, depth + 1)),
            present: Box::new(self.build(&present, depth + 1)),
        }
    }

    /// Feature whose split leaves the lowest weighted Gini impurity.
    ///
    /// Weighted child impurity is `n - (Σa²/nₐ + Σp²/nₚ)`, so minimizing it
    /// maximizes `(Σa²·nₚ + Σp²·nₐ) / (nₐ·nₚ)`, compared by cross
    /// multiplication.
    fn best_split(&self, indices: &[usize]) -> Option<usize> {
        let mut best: Option<(usize, u128, u128)> = None;

        for feature in 0..self.n_features {
            let mut absent = vec![0u64; self.n_classes];
            let mut present = vec![0u64; self.n_classes];
            for &i in indices {
                let side = if self.samples[i].is_set(feature) {
                    &mut present
                } else {
                    &mut absent
                };
                side[self.targets[i]] += 1;
            }

            let n_absent: u64 = absent.iter().sum();
            let n_present: u64 = present.iter().sum();
            if n_absent == 0 || n_present == 0 {
                continue;
            }

            let num = sum_sq(&absent) * n_present as u128 + sum_sq(&present) * n_absent as u128;
            let den = n_absent as u128 * n_present as u128;

            let better = match best {
                None => true,
                Some((_, best_num, best_den)) => num * best_den > best_num * den,
            };
            if better {
                best = Some((feature, num, den));
            }
        }

        best.map(|(feature, _, _)| feature)
    }

    fn class_counts(&self, indices: impl Iterator<Item = usize>) -> Vec<u64> {
        let mut counts = vec![0u64; self.n_classes];
        for i in indices {
            counts[self.targets[i]] += 1;
        }
        counts
    }
}

fn sum_sq(counts: &[u64]) -> u128 {
    counts.iter().map(|&c| c as u128 * c as u128).sum()
}

/// Index of the largest count; the lowest index wins ties.
fn majority(counts: &[u64]) -> usize {
    let mut best = 0;
    for (i, &c) in counts.iter().enumerate() {
        if c > counts[best] {
            best = i;
        }
    }
    best
}
