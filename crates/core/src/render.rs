//! Inline error rendering.
//!
//! The presentation layer owns the actual nodes; this module only decides
//! which node to update, create, or remove. Node ids follow the page
//! contract `{form_id}-{field}-error`.

use crate::field::FieldDescriptor;
use crate::validation::ValidationFailures;

/// Colour applied to newly created error nodes.
pub const ERROR_COLOR: &str = "red";

/// Visual treatment for an error node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorStyle {
    pub color: &'static str,
}

impl Default for ErrorStyle {
    fn default() -> Self {
        Self {
            color: ERROR_COLOR,
        }
    }
}

/// Presentation-side storage for inline error nodes.
pub trait ErrorNodes {
    /// Whether a node with this id exists.
    fn has_error(&self, id: &str) -> bool;

    /// Replace the text of an existing node.
    fn set_error_text(&mut self, id: &str, text: &str);

    /// Create a node next to the control named `field`.
    fn create_error(&mut self, field: &str, id: &str, text: &str, style: ErrorStyle);

    /// Remove a node if present.
    fn remove_error(&mut self, id: &str);
}

pub fn error_node_id(form_id: &str, field: &str) -> String {
    format!("{form_id}-{field}-error")
}

/// Show every failure next to its control and clear errors of fields that
/// now pass.
///
/// Rendering the same failures twice leaves one node per field.
pub fn render_errors<N: ErrorNodes + ?Sized>(
    form_id: &str,
    descriptors: &[FieldDescriptor],
    failures: &ValidationFailures,
    nodes: &mut N,
) {
    for failure in failures {
        let id = error_node_id(form_id, &failure.field);
        if nodes.has_error(&id) {
            nodes.set_error_text(&id, &failure.message);
        } else {
            nodes.create_error(&failure.field, &id, &failure.message, ErrorStyle::default());
        }
    }

    for descriptor in descriptors {
        if failures.get(&descriptor.name).is_none() {
            nodes.remove_error(&error_node_id(form_id, &descriptor.name));
        }
    }
}

/// Remove the error node of every described field.
pub fn clear_errors<N: ErrorNodes + ?Sized>(
    form_id: &str,
    descriptors: &[FieldDescriptor],
    nodes: &mut N,
) {
    for descriptor in descriptors {
        nodes.remove_error(&error_node_id(form_id, &descriptor.name));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::field::ValidatorKind;

    #[derive(Default)]
    struct Nodes {
        // id -> (field, text)
        nodes: BTreeMap<String, (String, String)>,
        created: usize,
    }

    impl ErrorNodes for Nodes {
        fn has_error(&self, id: &str) -> bool {
            self.nodes.contains_key(id)
        }

        fn set_error_text(&mut self, id: &str, text: &str) {
            if let Some(node) = self.nodes.get_mut(id) {
                node.1 = text.to_string();
            }
        }

        fn create_error(&mut self, field: &str, id: &str, text: &str, style: ErrorStyle) {
            assert_eq!(style.color, ERROR_COLOR);
            self.created += 1;
            self.nodes
                .insert(id.to_string(), (field.to_string(), text.to_string()));
        }

        fn remove_error(&mut self, id: &str) {
            self.nodes.remove(id);
        }
    }

    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("name", ValidatorKind::RequiredText),
            FieldDescriptor::new("email", ValidatorKind::Email),
        ]
    }

    #[test]
    fn node_id_pattern() {
        assert_eq!(error_node_id("contact", "email"), "contact-email-error");
    }

    #[test]
    fn creates_node_for_each_failure() {
        let mut failures = ValidationFailures::new();
        failures.push("name", "Required");
        failures.push("email", "Invalid email");

        let mut nodes = Nodes::default();
        render_errors("f", &fields(), &failures, &mut nodes);

        assert_eq!(nodes.nodes.len(), 2);
        assert_eq!(nodes.nodes["f-name-error"].0, "name");
        assert_eq!(nodes.nodes["f-email-error"].1, "Invalid email");
    }

    #[test]
    fn rerender_updates_in_place() {
        let mut failures = ValidationFailures::new();
        failures.push("email", "Required");
        let mut nodes = Nodes::default();
        render_errors("f", &fields(), &failures, &mut nodes);

        let mut failures = ValidationFailures::new();
        failures.push("email", "Invalid email");
        render_errors("f", &fields(), &failures, &mut nodes);

        assert_eq!(nodes.created, 1);
        assert_eq!(nodes.nodes.len(), 1);
        assert_eq!(nodes.nodes["f-email-error"].1, "Invalid email");
    }

    #[test]
    fn fixed_field_loses_stale_error() {
        let mut failures = ValidationFailures::new();
        failures.push("name", "Required");
        failures.push("email", "Invalid email");
        let mut nodes = Nodes::default();
        render_errors("f", &fields(), &failures, &mut nodes);

        let mut failures = ValidationFailures::new();
        failures.push("email", "Invalid email");
        render_errors("f", &fields(), &failures, &mut nodes);

        assert!(!nodes.has_error("f-name-error"));
        assert!(nodes.has_error("f-email-error"));
    }

    #[test]
    fn clear_removes_all_field_errors() {
        let mut failures = ValidationFailures::new();
        failures.push("name", "Required");
        let mut nodes = Nodes::default();
        render_errors("f", &fields(), &failures, &mut nodes);

        clear_errors("f", &fields(), &mut nodes);
        assert!(nodes.nodes.is_empty());
    }
}
