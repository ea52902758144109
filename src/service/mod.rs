//! Payload validation applied before any write.

mod validation;
pub use validation::{Constraint, Validate, ValidationErrors, Violation};
