use strata_traversal::{Step, StepOp, StepOpKind, Traversal};
use tracing::debug;

use bound::{BoundContext, analyze};
use rewrite::Rewrite;

use super::Optimization;

mod bound;
mod rewrite;

/// Limits the elements flowing into `count()` to as many as the following `is(..)` needs.
///
/// ```text
/// outE().count().is(0)      =>  not(outE())
/// outE().count().is(lt(3))  =>  outE().range(0, 3).count().is(lt(3))
/// outE().count().is(gt(3))  =>  outE().range(0, 4).count().is(gt(3))
/// ```
///
/// A `range` right before `count()` was put there by the user, and is left alone.
pub struct RangeByIsCount;

/// Position of a `count()` directly followed by `is(..)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CountIs {
    count: usize,
}

impl CountIs {
    fn is(&self) -> usize {
        self.count + 1
    }
}

fn is_kind(step: Option<&Step>, kind: StepOpKind) -> bool {
    step.is_some_and(|s| s.kind() == kind)
}

/// Finds the first `count().is(..)` pair at or after `from` not preceded by a `range`.
fn find_count_is(traversal: &Traversal, from: usize) -> Option<CountIs> {
    (from..traversal.len())
        .find(|&i| {
            is_kind(traversal.get(i), StepOpKind::Count)
                && is_kind(traversal.step_after(i), StepOpKind::Is)
                && !is_kind(traversal.step_before(i), StepOpKind::Range)
        })
        .map(|count| CountIs { count })
}

fn analyze_match(traversal: &Traversal, found: CountIs) -> Option<bound::Bound> {
    let count = traversal.get(found.count)?;
    let is = traversal.get(found.is())?;
    let StepOp::Is(predicate) = is.op() else {
        return None;
    };

    let context = BoundContext {
        labeled: count.is_labeled() || is.is_labeled(),
        is_last: traversal.is_last(found.is()),
        parent: traversal.parent(),
    };
    analyze(predicate, &context)
}

impl Optimization for RangeByIsCount {
    fn name(&self) -> &'static str {
        "range_by_is_count"
    }

    fn apply(&self, traversal: &mut Traversal) -> bool {
        let mut changed = false;
        let mut from = 0;

        while let Some(found) = find_count_is(traversal, from) {
            let Some(bound) = analyze_match(traversal, found) else {
                from = found.is() + 1;
                continue;
            };

            let rewrite = Rewrite::decide(&bound);
            debug!(
                position = found.count,
                high_range = bound.high_range,
                ?rewrite,
                "Rewriting count followed by is"
            );
            from = rewrite.apply(traversal, found.count);
            changed = true;
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use strata_traversal::{Step, StepOp, Traversal};
    use strata_traversal_types::predicate::Predicate;
    use test_case::test_case;

    use super::{CountIs, find_count_is};

    fn step(op: StepOp) -> Step {
        Step::new(op)
    }

    fn is() -> Step {
        step(StepOp::Is(Predicate::eq(0)))
    }

    #[test]
    fn finds_adjacent_pair() {
        let traversal = Traversal::new(vec![step(StepOp::V(vec![])), step(StepOp::Count), is()]);
        assert_eq!(find_count_is(&traversal, 0), Some(CountIs { count: 1 }));
    }

    #[test]
    fn skips_pair_after_range() {
        let traversal = Traversal::new(vec![
            step(StepOp::Range(0, 10)),
            step(StepOp::Count),
            is(),
            step(StepOp::Count),
            is(),
        ]);
        assert_eq!(find_count_is(&traversal, 0), Some(CountIs { count: 3 }));
    }

    #[test]
    fn respects_start_position() {
        let traversal = Traversal::new(vec![step(StepOp::Count), is(), step(StepOp::Count), is()]);
        assert_eq!(find_count_is(&traversal, 1), Some(CountIs { count: 2 }));
        assert_eq!(find_count_is(&traversal, 3), None);
    }

    #[test_case(vec![]; "empty")]
    #[test_case(vec![step(StepOp::Count)]; "count is last")]
    #[test_case(vec![is(), step(StepOp::Count)]; "wrong order")]
    #[test_case(vec![step(StepOp::Count), step(StepOp::Identity), is()]; "not adjacent")]
    fn no_match(steps: Vec<Step>) {
        assert_eq!(find_count_is(&Traversal::new(steps), 0), None);
    }
}
