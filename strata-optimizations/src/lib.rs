use std::collections::BTreeSet;

use strata_traversal::Traversal;
use tracing::{debug, instrument};

use range_by_is_count::RangeByIsCount;

mod range_by_is_count;

#[cfg(test)]
mod test_utils;

pub trait Optimization: Send + Sync {
    /// Name used to refer to the optimization in configuration and logs.
    fn name(&self) -> &'static str;

    /// Rewrites a single traversal in place, without descending into inner traversals.
    /// Returns whether anything changed.
    fn apply(&self, traversal: &mut Traversal) -> bool;
}

pub struct Optimizer {
    optimizations: Vec<Box<dyn Optimization>>,
}

impl Optimizer {
    pub fn empty() -> Self {
        Self {
            optimizations: vec![],
        }
    }

    pub fn new(optimizations: Vec<Box<dyn Optimization>>) -> Self {
        Self { optimizations }
    }

    /// Drops the optimizations whose name is in `names`.
    pub fn without(mut self, names: &BTreeSet<String>) -> Self {
        self.optimizations.retain(|x| !names.contains(x.name()));
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.optimizations.iter().map(|x| x.name())
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new(vec![Box::new(RangeByIsCount)])
    }
}

impl Optimizer {
    #[instrument(skip_all)]
    pub fn optimize(&self, mut traversal: Traversal) -> Traversal {
        if self.optimizations.is_empty() {
            return traversal;
        }

        self.optimize_traversal(&mut traversal);
        traversal
    }

    /// Optimizes the traversal itself first, then the inner traversals of its steps
    /// (including ones created by the optimizations).
    fn optimize_traversal(&self, traversal: &mut Traversal) {
        for optimization in &self.optimizations {
            if optimization.apply(traversal) {
                debug!(
                    optimization = optimization.name(),
                    parent = ?traversal.parent(),
                    "Optimized traversal"
                );
            }
        }

        for inner in traversal.children_mut() {
            self.optimize_traversal(inner);
        }
    }
}
