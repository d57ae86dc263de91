//! Presentation seam for a form.
//!
//! [`FormSurface`] is what the submitter needs from a page: the typed field
//! list, the current values, page flags, and a handful of UI mutations.
//! [`MemoryForm`] keeps all of that in memory and backs the command-line
//! host and the tests.

use indexmap::IndexMap;
use serde::Deserialize;

use formrelay_core::render::{clear_errors, ErrorNodes, ErrorStyle};
use formrelay_core::{CoreError, FieldDescriptor, Notice, Payload, UiUpdate};

pub trait FormSurface: ErrorNodes {
    fn form_id(&self) -> &str;

    /// Field descriptors for every validated control, in page order.
    fn descriptors(&self) -> Result<Vec<FieldDescriptor>, CoreError>;

    /// Current control values.
    fn payload(&self) -> Payload;

    fn is_preview(&self) -> bool;

    /// The page's project identifier, if the page declares one.
    fn project_id(&self) -> Option<String>;

    fn set_submit_enabled(&mut self, enabled: bool);

    /// Clear every control value.
    fn reset(&mut self);

    fn notify(&mut self, notice: Notice);
}

/// Apply a UI update computed from a submit outcome.
pub fn apply_update<F: FormSurface + ?Sized>(
    form: &mut F,
    form_id: &str,
    descriptors: &[FieldDescriptor],
    update: &UiUpdate,
) {
    if update.reset_form {
        form.reset();
    }
    if update.clear_errors {
        clear_errors(form_id, descriptors, form);
    }
    if let Some(enabled) = update.submit_enabled {
        form.set_submit_enabled(enabled);
    }
    if let Some(notice) = update.notice {
        form.notify(notice);
    }
}

/// A single form control.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Control {
    pub name: String,
    /// Raw `data-validator` attribute.
    #[serde(default)]
    pub validator: Option<String>,
    #[serde(default)]
    pub value: String,
}

impl Control {
    pub fn new(name: &str, validator: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            validator: Some(validator.to_string()),
            value: value.to_string(),
        }
    }
}

/// An inline error node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNode {
    /// Control the node sits next to.
    pub field: String,
    pub text: String,
    pub style: ErrorStyle,
}

/// In-memory form, deserializable from a JSON snapshot:
///
/// ```json
/// {"id": "contact", "projectId": "p1", "preview": false,
///  "controls": [{"name": "email", "validator": "email", "value": "a@b.co"}]}
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryForm {
    pub id: String,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub preview: bool,
    #[serde(default)]
    pub controls: Vec<Control>,
    #[serde(skip)]
    errors: IndexMap<String, ErrorNode>,
    #[serde(skip)]
    submit_disabled: bool,
    #[serde(skip)]
    notices: Vec<Notice>,
}

impl MemoryForm {
    pub fn new(id: &str, project_id: Option<&str>, controls: Vec<Control>) -> Self {
        Self {
            id: id.to_string(),
            project_id: project_id.map(str::to_string),
            preview: false,
            controls,
            errors: IndexMap::new(),
            submit_disabled: false,
            notices: Vec::new(),
        }
    }

    pub fn with_preview(mut self, preview: bool) -> Self {
        self.preview = preview;
        self
    }

    pub fn set_value(&mut self, name: &str, value: &str) {
        if let Some(control) = self.controls.iter_mut().find(|c| c.name == name) {
            control.value = value.to_string();
        }
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.controls
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.value.as_str())
    }

    pub fn errors(&self) -> impl Iterator<Item = (&str, &ErrorNode)> {
        self.errors.iter().map(|(id, node)| (id.as_str(), node))
    }

    pub fn error_text(&self, id: &str) -> Option<&str> {
        self.errors.get(id).map(|node| node.text.as_str())
    }

    pub fn submit_enabled(&self) -> bool {
        !self.submit_disabled
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
}

impl ErrorNodes for MemoryForm {
    fn has_error(&self, id: &str) -> bool {
        self.errors.contains_key(id)
    }

    fn set_error_text(&mut self, id: &str, text: &str) {
        if let Some(node) = self.errors.get_mut(id) {
            node.text = text.to_string();
        }
    }

    fn create_error(&mut self, field: &str, id: &str, text: &str, style: ErrorStyle) {
        self.errors.insert(
            id.to_string(),
            ErrorNode {
                field: field.to_string(),
                text: text.to_string(),
                style,
            },
        );
    }

    fn remove_error(&mut self, id: &str) {
        self.errors.shift_remove(id);
    }
}

impl FormSurface for MemoryForm {
    fn form_id(&self) -> &str {
        &self.id
    }

    fn descriptors(&self) -> Result<Vec<FieldDescriptor>, CoreError> {
        self.controls
            .iter()
            .map(|c| FieldDescriptor::from_attributes(&c.name, c.validator.as_deref()))
            .collect()
    }

    fn payload(&self) -> Payload {
        self.controls
            .iter()
            .map(|c| (c.name.as_str(), c.value.as_str()))
            .collect()
    }

    fn is_preview(&self) -> bool {
        self.preview
    }

    fn project_id(&self) -> Option<String> {
        self.project_id.clone()
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_disabled = !enabled;
    }

    fn reset(&mut self) {
        for control in &mut self.controls {
            control.value.clear();
        }
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
