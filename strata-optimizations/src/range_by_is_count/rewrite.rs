use strata_traversal::{Step, StepOp, Traversal};

use super::bound::Bound;

/// Replacement for a `count().is(..)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rewrite {
    /// Drop count and is, wrap the preceding step in `not(..)`.
    Negate,

    /// Insert `range(0, high)` right before count.
    Limit(u64),
}

impl Rewrite {
    pub fn decide(bound: &Bound) -> Self {
        if bound.negatable {
            Rewrite::Negate
        } else {
            // A non-positive bound means no element can change the outcome.
            Rewrite::Limit(bound.high_range.max(0) as u64)
        }
    }

    /// Applies the rewrite to the pair with the count step at `count` and the is step right
    /// after it. Returns the position scanning should resume from.
    pub fn apply(self, traversal: &mut Traversal, count: usize) -> usize {
        match self {
            Rewrite::Limit(high) => {
                traversal.insert_before(count, Step::new(StepOp::Range(0, high)));
                // Range, count and is.
                count + 3
            }
            Rewrite::Negate => {
                traversal.remove(count + 1);
                traversal.remove(count);

                match count.checked_sub(1) {
                    Some(prev) => {
                        let subject = traversal.steps()[prev].clone();
                        let not = StepOp::Not(Traversal::start().with_step(subject));
                        traversal.replace(prev, Step::new(not));
                    }
                    None => traversal.add_step(Step::new(StepOp::Not(Traversal::identity()))),
                }

                traversal.len()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use strata_traversal::{Step, StepOp, StepOpKind, Traversal};
    use strata_traversal_types::predicate::Predicate;
    use test_case::test_case;

    use super::Rewrite;
    use crate::range_by_is_count::bound::Bound;

    fn steps(ops: Vec<StepOp>) -> Traversal {
        Traversal::new(ops.into_iter().map(Step::new).collect())
    }

    #[test_case(Bound { high_range: 0, negatable: true } => Rewrite::Negate)]
    #[test_case(Bound { high_range: 3, negatable: false } => Rewrite::Limit(3))]
    #[test_case(Bound { high_range: 0, negatable: false } => Rewrite::Limit(0))]
    #[test_case(Bound { high_range: -4, negatable: false } => Rewrite::Limit(0))]
    fn decide(bound: Bound) -> Rewrite {
        Rewrite::decide(&bound)
    }

    #[test]
    fn limit_inserts_range_before_count() {
        let mut traversal = steps(vec![
            StepOp::V(vec![]),
            StepOp::Count,
            StepOp::Is(Predicate::lt(3)),
            StepOp::Identity,
        ]);

        let resume = Rewrite::Limit(3).apply(&mut traversal, 1);

        assert_eq!(
            traversal,
            steps(vec![
                StepOp::V(vec![]),
                StepOp::Range(0, 3),
                StepOp::Count,
                StepOp::Is(Predicate::lt(3)),
                StepOp::Identity,
            ])
        );
        assert_eq!(traversal.get(resume).map(Step::kind), Some(StepOpKind::Identity));
    }

    #[test]
    fn negate_wraps_preceding_step() {
        let mut traversal = steps(vec![
            StepOp::V(vec![]),
            StepOp::OutE(vec![]),
            StepOp::Count,
            StepOp::Is(Predicate::eq(0)),
        ]);

        let resume = Rewrite::Negate.apply(&mut traversal, 2);

        let inner = Traversal::start().with_step(StepOp::OutE(vec![]));
        assert_eq!(
            traversal,
            steps(vec![StepOp::V(vec![]), StepOp::Not(inner)])
        );
        assert_eq!(
            traversal.get(1).and_then(Step::traversal).and_then(Traversal::parent),
            Some(StepOpKind::Not)
        );
        assert_eq!(resume, traversal.len());
    }

    #[test]
    fn negate_keeps_labels_of_the_wrapped_step() {
        let mut traversal = Traversal::new(vec![
            Step::new(StepOp::Out(vec![])).with_label("friends"),
            Step::new(StepOp::Count),
            Step::new(StepOp::Is(Predicate::eq(0))),
        ]);

        Rewrite::Negate.apply(&mut traversal, 1);

        let inner = traversal.get(0).and_then(Step::traversal).unwrap();
        assert!(inner.get(0).unwrap().labels().contains("friends"));
        assert!(!traversal.get(0).unwrap().is_labeled());
    }

    #[test]
    fn negate_without_preceding_step_appends_not_identity() {
        let mut traversal = steps(vec![StepOp::Count, StepOp::Is(Predicate::lt(1))]);

        let resume = Rewrite::Negate.apply(&mut traversal, 0);

        assert_eq!(
            traversal,
            steps(vec![StepOp::Not(Traversal::identity())])
        );
        assert_eq!(resume, 1);
    }
}
