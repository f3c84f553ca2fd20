use std::collections::BTreeSet;

use kinded::Kinded;
use serde::{Deserialize, Serialize};
use strata_traversal_types::{predicate::Predicate, value::Value};

mod display;


#[derive(Kinded, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOp {
    /// Start from vertices, all of them when no ids are given.
    V(Vec<Value>),

    /// Start from edges, all of them when no ids are given.
    E(Vec<Value>),

    /// Walk to adjacent vertices, optionally only over edges with the given labels.
    Out(Vec<String>),
    In(Vec<String>),
    Both(Vec<String>),

    /// Walk to incident edges.
    OutE(Vec<String>),
    InE(Vec<String>),
    BothE(Vec<String>),

    /// Keep elements whose property passes the predicate.
    Has(String, Predicate),

    /// Map elements to the values of the given properties.
    Values(Vec<String>),

    Identity,

    /// Consumes the whole stream and emits the number of elements.
    Count,

    /// Keep incoming values that pass the predicate.
    Is(Predicate),

    /// Pass through elements in `[low, high)` of the stream, then stop pulling.
    Range(u64, u64),

    /// Keep incoming elements for which the inner traversal yields nothing.
    Not(Traversal),

    /// Keep incoming elements for which the inner traversal yields something.
    Where(Traversal),

    /// Run the inner traversal for its side effects only, passing elements through.
    SideEffect(Traversal),
}

impl StepOp {
    pub fn traversal(&self) -> Option<&Traversal> {
        match self {
            StepOp::Not(t) | StepOp::Where(t) | StepOp::SideEffect(t) => Some(t),
            _ => None,
        }
    }

    pub fn traversal_mut(&mut self) -> Option<&mut Traversal> {
        match self {
            StepOp::Not(t) | StepOp::Where(t) | StepOp::SideEffect(t) => Some(t),
            _ => None,
        }
    }
}

/// A single operator of a traversal and the labels its output is bound to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "StepDef")]
pub struct Step {
    op: StepOp,

    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    labels: BTreeSet<String>,
}

#[derive(Deserialize)]
struct StepDef {
    op: StepOp,
    #[serde(default)]
    labels: BTreeSet<String>,
}

impl From<StepDef> for Step {
    fn from(def: StepDef) -> Self {
        Step::new(def.op).with_labels(def.labels)
    }
}

impl From<StepOp> for Step {
    fn from(op: StepOp) -> Self {
        Step::new(op)
    }
}

impl Step {
    /// Creates a step, linking any inner traversal to it as its parent.
    pub fn new(mut op: StepOp) -> Self {
        let kind = op.kind();
        if let Some(inner) = op.traversal_mut() {
            inner.parent = Some(kind);
        }
        Self {
            op,
            labels: BTreeSet::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.insert(label.into());
        self
    }

    pub fn with_labels(mut self, labels: impl IntoIterator<Item = String>) -> Self {
        self.labels.extend(labels);
        self
    }

    pub fn op(&self) -> &StepOp {
        &self.op
    }

    pub fn kind(&self) -> StepOpKind {
        self.op.kind()
    }

    pub fn labels(&self) -> &BTreeSet<String> {
        &self.labels
    }

    pub fn is_labeled(&self) -> bool {
        !self.labels.is_empty()
    }

    pub fn traversal(&self) -> Option<&Traversal> {
        self.op.traversal()
    }

    pub fn traversal_mut(&mut self) -> Option<&mut Traversal> {
        self.op.traversal_mut()
    }
}

/// An ordered pipeline of steps.
///
/// A traversal owned by a step (e.g. the inner traversal of `not`) remembers the kind of
/// that step as its parent. Root traversals have no parent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Step>", into = "Vec<Step>")]
pub struct Traversal {
    steps: Vec<Step>,
    parent: Option<StepOpKind>,
}

impl From<Vec<Step>> for Traversal {
    fn from(steps: Vec<Step>) -> Self {
        Self::new(steps)
    }
}

impl From<Traversal> for Vec<Step> {
    fn from(traversal: Traversal) -> Self {
        traversal.steps
    }
}

impl Traversal {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps,
            parent: None,
        }
    }

    /// An empty traversal, to be filled and then owned by a step.
    pub fn start() -> Self {
        Self::default()
    }

    /// A traversal that passes every element through unchanged.
    pub fn identity() -> Self {
        Self::new(vec![Step::new(StepOp::Identity)])
    }

    pub fn with_step(mut self, step: impl Into<Step>) -> Self {
        self.steps.push(step.into());
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn step_before(&self, index: usize) -> Option<&Step> {
        index.checked_sub(1).and_then(|i| self.steps.get(i))
    }

    pub fn step_after(&self, index: usize) -> Option<&Step> {
        self.steps.get(index + 1)
    }

    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.steps.len()
    }

    pub fn parent(&self) -> Option<StepOpKind> {
        self.parent
    }

    /// Panics if `index > len`, like [`Vec::insert`].
    pub fn insert_before(&mut self, index: usize, step: Step) {
        self.steps.insert(index, step);
    }

    /// Panics if `index` is out of bounds, like [`Vec::remove`].
    pub fn remove(&mut self, index: usize) -> Step {
        self.steps.remove(index)
    }

    /// Panics if `index` is out of bounds.
    pub fn replace(&mut self, index: usize, step: Step) -> Step {
        std::mem::replace(&mut self.steps[index], step)
    }

    pub fn add_step(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Mutable access to the traversals owned by this traversal's steps (not recursive).
    pub fn children_mut(&mut self) -> impl Iterator<Item = &mut Traversal> {
        self.steps.iter_mut().filter_map(Step::traversal_mut)
    }
}
