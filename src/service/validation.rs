//! Required-field validation for inbound payloads.

use crate::model::{NewGizmo, NewWidget};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Required,
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Required => f.write_str("required"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub constraint: Constraint,
}

/// Every constraint a payload violated, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render(.violations))]
pub struct ValidationErrors {
    pub violations: Vec<Violation>,
}

fn render(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("field '{}' failed on the '{}' constraint", v.field, v.constraint))
        .collect::<Vec<_>>()
        .join("; ")
}

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

#[derive(Default)]
struct Checker {
    violations: Vec<Violation>,
}

impl Checker {
    fn required(mut self, field: &'static str, value: &str) -> Self {
        if value.is_empty() {
            self.violations.push(Violation {
                field,
                constraint: Constraint::Required,
            });
        }
        self
    }

    fn finish(self) -> Result<(), ValidationErrors> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors {
                violations: self.violations,
            })
        }
    }
}

impl Validate for NewGizmo {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::default()
            .required("name", &self.name)
            .required("description", &self.description)
            .finish()
    }
}

impl Validate for NewWidget {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::default().required("name", &self.name).finish()
    }
}
