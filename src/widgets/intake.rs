//! Intake Form
//!
//! Captures customer details through labeled text fields.
//!
//! The form's state is one map from field name to current value. Every field
//! goes through the same `update_field(name, value)` transition: there are
//! no per-field handlers, and an edit to one key never touches another.
//! Submitting hands a copy of the whole map to the caller's handler; what
//! happens next (saving, navigating away) is the handler's business.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::error::{WidgetError, WidgetResult};
use super::Widget;
use crate::model::CustomerRecord;
use crate::view::{Element, Node};

pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";
pub const PHONE_NUMBER: &str = "phoneNumber";

/// A declared form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name; also the control's `id` and the label's `for` target
    pub name: &'static str,
    /// Human-readable label
    pub label: &'static str,
}

/// The fixed set of fields a form declares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    id: &'static str,
    fields: Vec<FieldSpec>,
}

impl FormSchema {
    /// Create a schema with no fields
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            fields: Vec::new(),
        }
    }

    /// Builder method: declare a field
    pub fn field(mut self, name: &'static str, label: &'static str) -> Self {
        self.fields.push(FieldSpec { name, label });
        self
    }

    /// The customer intake schema: first name, last name, phone number
    pub fn customer() -> Self {
        Self::new("customer")
            .field(FIRST_NAME, "First name")
            .field(LAST_NAME, "Last name")
            .field(PHONE_NUMBER, "Phone number")
    }

    /// Form element id
    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::customer()
    }
}

/// Current value of every declared field, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues(BTreeMap<String, String>);

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a field, if present
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn set(&mut self, name: &str, value: String) {
        self.0.insert(name.to_string(), value);
    }

    /// Interpret the values as a customer record; empty fields become absent
    pub fn to_customer(&self) -> CustomerRecord {
        let field = |name: &str| self.get(name).filter(|v| !v.is_empty()).map(str::to_string);
        CustomerRecord {
            first_name: field(FIRST_NAME),
            last_name: field(LAST_NAME),
            phone_number: field(PHONE_NUMBER),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Receives the form's values on submit
pub trait SubmitHandler {
    fn on_submit(&mut self, values: FieldValues);
}

impl<F: FnMut(FieldValues)> SubmitHandler for F {
    fn on_submit(&mut self, values: FieldValues) {
        self(values)
    }
}

/// Messages understood by the intake form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMsg {
    /// The control for `name` now holds `value`
    FieldChanged { name: String, value: String },
    /// The user submitted the form
    Submit,
}

/// Controlled form over a declared set of text fields
pub struct IntakeForm {
    schema: FormSchema,
    values: FieldValues,
    handler: Box<dyn SubmitHandler>,
    submissions: usize,
}

impl IntakeForm {
    /// Customer intake form seeded from `initial` (name -> value pairs)
    pub fn new<I, K, V>(initial: I, handler: impl SubmitHandler + 'static) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::with_schema(FormSchema::customer(), initial, handler)
    }

    /// Customer intake form prefilled from an existing record
    pub fn from_customer(customer: &CustomerRecord, handler: impl SubmitHandler + 'static) -> Self {
        let initial = [
            (FIRST_NAME, &customer.first_name),
            (LAST_NAME, &customer.last_name),
            (PHONE_NUMBER, &customer.phone_number),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.clone().map(|v| (name, v)));

        Self::new(initial, handler)
    }

    /// Form over an arbitrary schema.
    ///
    /// Every declared field starts as its initial value or `""`. Initial
    /// values for undeclared names are dropped.
    pub fn with_schema<I, K, V>(schema: FormSchema, initial: I, handler: impl SubmitHandler + 'static) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut supplied: BTreeMap<String, String> = initial
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let values = schema
            .fields()
            .iter()
            .map(|f| (f.name, supplied.remove(f.name).unwrap_or_default()))
            .collect();

        for name in supplied.keys() {
            tracing::debug!(form = schema.id(), field = %name, "Ignoring initial value for undeclared field");
        }

        Self {
            schema,
            values,
            handler: Box::new(handler),
            submissions: 0,
        }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Current values of all declared fields
    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    /// Current value of one field
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name)
    }

    /// Number of times the form has been submitted
    pub fn submissions(&self) -> usize {
        self.submissions
    }

    /// Replace the value of one declared field, verbatim.
    ///
    /// Every other field keeps its value. Undeclared names are rejected.
    pub fn update_field(&mut self, name: &str, value: impl Into<String>) -> WidgetResult<()> {
        if !self.schema.contains(name) {
            return Err(WidgetError::UnknownField(name.to_string()));
        }

        tracing::trace!(form = self.schema.id(), field = name, "Field changed");
        self.values.set(name, value.into());
        Ok(())
    }

    /// Hand the current values to the submit handler
    pub fn submit(&mut self) {
        self.submissions += 1;
        tracing::debug!(form = self.schema.id(), submission = self.submissions, "Form submitted");
        self.handler.on_submit(self.values.clone());
    }
}

impl fmt::Debug for IntakeForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntakeForm")
            .field("schema", &self.schema)
            .field("values", &self.values)
            .field("submissions", &self.submissions)
            .finish_non_exhaustive()
    }
}

impl Widget for IntakeForm {
    type Message = FormMsg;

    fn name(&self) -> &'static str {
        "intake"
    }

    fn update(&mut self, msg: FormMsg) -> WidgetResult<()> {
        match msg {
            FormMsg::FieldChanged { name, value } => self.update_field(&name, value),
            FormMsg::Submit => {
                self.submit();
                Ok(())
            }
        }
    }

    fn view(&self) -> Node<FormMsg> {
        let mut form = Element::new("form")
            .id(self.schema.id())
            .on_submit(FormMsg::Submit);

        for field in self.schema.fields() {
            let name = field.name;
            form = form
                .child(Element::new("label").attr("for", name).text(field.label))
                .child(
                    Element::new("input")
                        .attr("type", "text")
                        .attr("name", name)
                        .id(name)
                        .attr("value", self.value(name).unwrap_or_default())
                        .on_input(move |value| FormMsg::FieldChanged {
                            name: name.to_string(),
                            value,
                        }),
                );
        }

        Node::Element(form.child(Element::new("input").attr("type", "submit").attr("value", "Add")))
    }
}
