//! Form validation.
//!
//! Failure types live in [`rules`]; the per-kind predicates and the
//! [`evaluate`](evaluator::evaluate) entry point live in [`evaluator`].
//! Both are pure and never touch the presentation layer.

pub mod evaluator;
pub mod rules;

pub use evaluator::{check_value, evaluate};
pub use rules::{FieldFailure, ValidationFailures};
