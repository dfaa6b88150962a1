use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::owner::model::OwnerSend;

/// Outcome of a workflow operation: render a named view or redirect.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewResult {
    Render(View),
    Redirect(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    #[serde(rename = "view")]
    pub name: &'static str,
    pub model: Model,
    #[serde(rename = "errors", skip_serializing_if = "Option::is_none")]
    pub binding: Option<BindingResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Attribute {
    Owner(OwnerSend),
    Owners(Vec<OwnerSend>),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Model(BTreeMap<&'static str, Attribute>);

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field: &'static str,
    pub code: &'static str,
    pub message: String,
}

/// Validation outcome for one model object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingResult {
    #[serde(rename = "object")]
    pub object_name: &'static str,
    pub field_errors: Vec<FieldError>,
}

impl ViewResult {
    pub fn redirect(url: impl Into<String>) -> Self {
        ViewResult::Redirect(url.into())
    }

    pub fn view(&self) -> Option<&View> {
        match self {
            ViewResult::Render(view) => Some(view),
            ViewResult::Redirect(_) => None,
        }
    }
}

impl View {
    pub fn new(name: &'static str, model: Model) -> Self {
        View { name, model, binding: None }
    }

    /// Attaches a binding result; a result without errors is dropped.
    pub fn with_binding(mut self, binding: BindingResult) -> Self {
        self.binding = binding.has_errors().then_some(binding);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.binding.as_ref().is_some_and(BindingResult::has_errors)
    }

    pub fn has_field_errors(&self, field: &str) -> bool {
        self.binding.as_ref().is_some_and(|b| b.has_field_errors(field))
    }
}

impl Model {
    pub fn new() -> Self {
        Model::default()
    }

    pub fn with(mut self, key: &'static str, attribute: Attribute) -> Self {
        self.0.insert(key, attribute);
        self
    }

    pub fn owner(&self, key: &str) -> Option<&OwnerSend> {
        match self.0.get(key) {
            Some(Attribute::Owner(owner)) => Some(owner),
            _ => None,
        }
    }

    pub fn owners(&self, key: &str) -> Option<&[OwnerSend]> {
        match self.0.get(key) {
            Some(Attribute::Owners(owners)) => Some(owners),
            _ => None,
        }
    }
}

impl BindingResult {
    pub fn new(object_name: &'static str) -> Self {
        BindingResult { object_name, field_errors: Vec::new() }
    }

    pub fn reject_value(&mut self, field: &'static str, code: &'static str, message: impl Into<String>) {
        self.field_errors.push(FieldError { field, code, message: message.into() });
    }

    pub fn has_errors(&self) -> bool {
        !self.field_errors.is_empty()
    }

    pub fn has_field_errors(&self, field: &str) -> bool {
        self.field_errors.iter().any(|e| e.field == field)
    }
}
