use strata_traversal::StepOpKind;
use strata_traversal_types::{
    predicate::{Comparison, Predicate},
    value::Value,
};

/// The number of counted elements after which the outcome of a count predicate is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bound {
    pub high_range: i64,

    /// Whether `count().is(p)` can be replaced by a `not(..)` existence check.
    pub negatable: bool,
}

/// Where the analyzed `count().is(..)` pair sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundContext {
    /// Either the count or the is step carries a label.
    pub labeled: bool,

    /// The is step is the last step of its traversal.
    pub is_last: bool,

    /// Kind of the step owning the traversal, `None` for the root traversal.
    pub parent: Option<StepOpKind>,
}

impl BoundContext {
    fn allows_negation(&self) -> bool {
        !self.labeled
            && self.is_last
            && matches!(self.parent, None | Some(StepOpKind::SideEffect))
    }
}

/// Comparing the count against `n` with these needs to see element `n + 1` to decide.
fn scalar_offset(op: Comparison) -> Option<i64> {
    match op {
        Comparison::Eq | Comparison::Neq | Comparison::Lte | Comparison::Gt => Some(1),
        Comparison::Lt | Comparison::Gte => Some(0),
        Comparison::Within | Comparison::Without => None,
    }
}

/// `within([.., n])` needs to see element `n + 1`, `without` stops at the largest item.
fn collection_offset(op: Comparison) -> Option<i64> {
    match op {
        Comparison::Within => Some(1),
        Comparison::Without => Some(0),
        _ => None,
    }
}

fn candidate(op: Comparison, operand: &Value) -> Option<i64> {
    match operand {
        Value::Array(items) => {
            let offset = collection_offset(op)?;
            let high = items.iter().max()?.ceil_i64()?;
            Some(high.saturating_add(offset))
        }
        _ => {
            let offset = scalar_offset(op)?;
            Some(operand.ceil_i64()?.saturating_add(offset))
        }
    }
}

/// Computes the high range of `predicate`, the largest over all of its leaves.
///
/// `negatable` is decided by the leaf that last raised the high range. Returns `None` when no
/// leaf compares the count against a number.
pub fn analyze(predicate: &Predicate, context: &BoundContext) -> Option<Bound> {
    let mut bound: Option<Bound> = None;

    for (op, operand) in predicate.leaves() {
        let Some(high_range) = candidate(op, operand) else {
            continue;
        };
        if bound.is_some_and(|b| high_range <= b.high_range) {
            continue;
        }

        let negatable = context.allows_negation()
            && match op {
                Comparison::Lt => high_range <= 1,
                Comparison::Eq | Comparison::Lte => high_range == 1,
                _ => false,
            };
        bound = Some(Bound {
            high_range,
            negatable,
        });
    }

    bound
}
