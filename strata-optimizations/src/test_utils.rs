use strata_traversal::{Step as S, StepOp, Traversal};
use strata_traversal_types::predicate::Predicate;

pub fn traversal(steps: Vec<S>) -> Traversal {
    Traversal::new(steps)
}

pub fn v() -> S {
    S::new(StepOp::V(vec![]))
}

pub fn out(label: &str) -> S {
    S::new(StepOp::Out(vec![label.to_string()]))
}

pub fn out_e() -> S {
    S::new(StepOp::OutE(vec![]))
}

pub fn identity() -> S {
    S::new(StepOp::Identity)
}

pub fn count() -> S {
    S::new(StepOp::Count)
}

pub fn is(predicate: Predicate) -> S {
    S::new(StepOp::Is(predicate))
}

pub fn range(low: u64, high: u64) -> S {
    S::new(StepOp::Range(low, high))
}

pub fn not(steps: Vec<S>) -> S {
    S::new(StepOp::Not(Traversal::new(steps)))
}

pub fn where_(steps: Vec<S>) -> S {
    S::new(StepOp::Where(Traversal::new(steps)))
}

pub fn side_effect(steps: Vec<S>) -> S {
    S::new(StepOp::SideEffect(Traversal::new(steps)))
}
