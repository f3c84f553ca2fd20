use std::fmt;

use super::{Step, StepOp, Traversal};

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_step = DisplayableStep {
            step: self,
            indent: 0,
            section: None,
        };
        write!(f, "{display_step}")
    }
}

#[derive(Clone, Copy)]
enum DisplayableSection {
    Start,
    Middle,
    End,

    Single,
}

struct DisplayableStep<'a> {
    step: &'a Step,
    indent: usize,
    section: Option<DisplayableSection>,
}

impl fmt::Display for DisplayableStep<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pre = String::new();

        if let Some(section) = self.section {
            let c = match (section, self.indent == 0) {
                (_, false) => '│',
                (DisplayableSection::Single, _) => '─',
                (DisplayableSection::Start, true) => '┌',
                (DisplayableSection::Middle, true) => '├',
                (DisplayableSection::End, true) => '└',
            };
            pre.push(c);

            for i in 1..=self.indent {
                pre.push(' ');
                if i == self.indent {
                    let c = match section {
                        DisplayableSection::Start | DisplayableSection::Middle => '├',
                        DisplayableSection::Single | DisplayableSection::End => '└',
                    };
                    pre.push(c);
                    pre.push('─');
                } else {
                    let c = match section {
                        DisplayableSection::Start | DisplayableSection::Middle => '│',
                        DisplayableSection::Single | DisplayableSection::End => ' ',
                    };
                    pre.push(c);
                    pre.push(' ');
                }
            }

            pre.push('─');
            match self.step.traversal() {
                Some(_) => pre.push('┬'),
                None => pre.push('─'),
            }
            pre.push('─');
        }

        write!(f, "{pre}")?;
        match self.step.op() {
            StepOp::V(ids) => {
                write!(f, "V")?;
                fmt_list(f, ids)?;
            }
            StepOp::E(ids) => {
                write!(f, "E")?;
                fmt_list(f, ids)?;
            }
            StepOp::Out(labels) => {
                write!(f, "Out")?;
                fmt_list(f, labels)?;
            }
            StepOp::In(labels) => {
                write!(f, "In")?;
                fmt_list(f, labels)?;
            }
            StepOp::Both(labels) => {
                write!(f, "Both")?;
                fmt_list(f, labels)?;
            }
            StepOp::OutE(labels) => {
                write!(f, "OutE")?;
                fmt_list(f, labels)?;
            }
            StepOp::InE(labels) => {
                write!(f, "InE")?;
                fmt_list(f, labels)?;
            }
            StepOp::BothE(labels) => {
                write!(f, "BothE")?;
                fmt_list(f, labels)?;
            }
            StepOp::Has(key, predicate) => write!(f, "Has({key}, {predicate})")?,
            StepOp::Values(keys) => {
                write!(f, "Values")?;
                fmt_list(f, keys)?;
            }
            StepOp::Identity => write!(f, "Identity")?,
            StepOp::Count => write!(f, "Count")?,
            StepOp::Is(predicate) => write!(f, "Is({predicate})")?,
            StepOp::Range(low, high) => write!(f, "Range({low}, {high})")?,
            StepOp::Not(_) => write!(f, "Not")?,
            StepOp::Where(_) => write!(f, "Where")?,
            StepOp::SideEffect(_) => write!(f, "SideEffect")?,
        }

        fmt_labels(f, self.step)?;

        if let Some(traversal) = self.step.traversal().filter(|t| !t.is_empty()) {
            let display_steps = DisplayableSteps {
                steps: traversal.steps(),
                indent: self.indent + 1,
            };
            write!(f, "\n{display_steps}")?;
        }

        Ok(())
    }
}

fn fmt_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    write!(f, "(")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, ")")
}

fn fmt_labels(f: &mut fmt::Formatter<'_>, step: &Step) -> fmt::Result {
    for label in step.labels() {
        write!(f, " @{label}")?;
    }
    Ok(())
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", DisplayableSteps::new(self.steps()))
    }
}

pub struct DisplayableSteps<'a> {
    steps: &'a [Step],
    indent: usize,
}

impl<'a> DisplayableSteps<'a> {
    pub fn new(steps: &'a [Step]) -> Self {
        Self { steps, indent: 0 }
    }
}

impl fmt::Display for DisplayableSteps<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            let section = if self.steps.len() == 1 {
                DisplayableSection::Single
            } else if i == 0 {
                DisplayableSection::Start
            } else if i == self.steps.len() - 1 {
                DisplayableSection::End
            } else {
                DisplayableSection::Middle
            };

            if i > 0 {
                writeln!(f)?;
            }

            let display_step = DisplayableStep {
                step,
                indent: self.indent,
                section: Some(section),
            };
            write!(f, "{display_step}")?;
        }
        Ok(())
    }
}
