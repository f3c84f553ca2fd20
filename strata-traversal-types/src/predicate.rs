use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Serialize};

use crate::value::Value;

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,

    /// Operand is a collection, tested value must be one of its items.
    Within,
    /// Operand is a collection, tested value must be none of its items.
    Without,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparison::Eq => write!(f, "eq"),
            Comparison::Neq => write!(f, "neq"),
            Comparison::Lt => write!(f, "lt"),
            Comparison::Lte => write!(f, "lte"),
            Comparison::Gt => write!(f, "gt"),
            Comparison::Gte => write!(f, "gte"),
            Comparison::Within => write!(f, "within"),
            Comparison::Without => write!(f, "without"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    Compare(Comparison, Value),

    And(Vec<Predicate>),
    Or(Vec<Predicate>),
}

impl Predicate {
    pub fn eq(value: impl Into<Value>) -> Self {
        Self::Compare(Comparison::Eq, value.into())
    }

    pub fn neq(value: impl Into<Value>) -> Self {
        Self::Compare(Comparison::Neq, value.into())
    }

    pub fn lt(value: impl Into<Value>) -> Self {
        Self::Compare(Comparison::Lt, value.into())
    }

    pub fn lte(value: impl Into<Value>) -> Self {
        Self::Compare(Comparison::Lte, value.into())
    }

    pub fn gt(value: impl Into<Value>) -> Self {
        Self::Compare(Comparison::Gt, value.into())
    }

    pub fn gte(value: impl Into<Value>) -> Self {
        Self::Compare(Comparison::Gte, value.into())
    }

    pub fn within<T: Into<Value>>(values: Vec<T>) -> Self {
        Self::Compare(Comparison::Within, Value::from(values))
    }

    pub fn without<T: Into<Value>>(values: Vec<T>) -> Self {
        Self::Compare(Comparison::Without, Value::from(values))
    }

    /// All leaf comparisons, left to right. Nested connectives are flattened recursively.
    pub fn leaves(&self) -> Vec<(Comparison, &Value)> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<(Comparison, &'a Value)>) {
        match self {
            Predicate::Compare(op, value) => leaves.push((*op, value)),
            Predicate::And(predicates) | Predicate::Or(predicates) => {
                for predicate in predicates {
                    predicate.collect_leaves(leaves);
                }
            }
        }
    }

    /// Evaluates the predicate against `value`.
    ///
    /// Ordering comparisons between values of different kinds (e.g. a string and a number)
    /// are false.
    pub fn test(&self, value: &Value) -> bool {
        match self {
            Predicate::Compare(op, operand) => compare(*op, value, operand),
            Predicate::And(predicates) => predicates.iter().all(|p| p.test(value)),
            Predicate::Or(predicates) => predicates.iter().any(|p| p.test(value)),
        }
    }
}

fn comparable(a: &Value, b: &Value) -> bool {
    (a.is_number() && b.is_number()) || a.kind() == b.kind()
}

fn compare(op: Comparison, value: &Value, operand: &Value) -> bool {
    let ordering = || comparable(value, operand).then(|| value.cmp(operand));

    match op {
        Comparison::Eq => value == operand,
        Comparison::Neq => value != operand,
        Comparison::Lt => ordering() == Some(Ordering::Less),
        Comparison::Lte => matches!(ordering(), Some(Ordering::Less | Ordering::Equal)),
        Comparison::Gt => ordering() == Some(Ordering::Greater),
        Comparison::Gte => matches!(ordering(), Some(Ordering::Greater | Ordering::Equal)),
        Comparison::Within => operand
            .as_array()
            .is_some_and(|items| items.contains(value)),
        Comparison::Without => !operand
            .as_array()
            .is_some_and(|items| items.contains(value)),
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, predicates) = match self {
            Predicate::Compare(op, value) => return write!(f, "{op}({value})"),
            Predicate::And(predicates) => ("and", predicates),
            Predicate::Or(predicates) => ("or", predicates),
        };

        write!(f, "{name}(")?;
        for (i, predicate) in predicates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{predicate}")?;
        }
        write!(f, ")")
    }
}
