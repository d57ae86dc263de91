//! Form validation and submission primitives, free of I/O.
//!
//! - [`field`]: validator kinds and field descriptors.
//! - [`payload`]: the ordered field-name → value map.
//! - [`validation`]: per-kind predicates and the evaluator.
//! - [`render`]: inline error node updates.
//! - [`feedback`]: submit outcomes and the UI update they produce.

pub mod error;
pub mod feedback;
pub mod field;
pub mod payload;
pub mod render;
pub mod validation;

pub use error::CoreError;
pub use feedback::{Notice, SubmitOutcome, UiUpdate};
pub use field::{FieldDescriptor, ValidatorKind};
pub use payload::Payload;
pub use validation::{evaluate, FieldFailure, ValidationFailures};
