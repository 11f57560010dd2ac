// File: crates/chart-labels/src/generator.rs
// Summary: Template-driven label generator over an ordered list of (component, formatter) fields.
// Notes:
// - Slot 0 always receives the series name; slot k + 1 receives field k.
// - The x/y and x/y/z tooltip generators are thin wrappers choosing the field list.

use crate::error::{LabelError, Result};
use crate::format::ValueFormat;
use crate::template::MessageTemplate;
use crate::types::Component;

/// One substituted value: which component to read and how to render it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelField {
    pub component: Component,
    pub format: ValueFormat,
}

impl LabelField {
    pub fn new(component: Component, format: impl Into<ValueFormat>) -> Self {
        Self { component, format: format.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplatedLabelGenerator {
    template: MessageTemplate,
    fields: Vec<LabelField>,
}

impl TemplatedLabelGenerator {
    pub fn new(template: &str, fields: Vec<LabelField>) -> Result<Self> {
        Ok(Self::from_template(MessageTemplate::parse(template)?, fields))
    }

    pub fn from_template(template: MessageTemplate, fields: Vec<LabelField>) -> Self {
        if let Some(max) = template.max_index() {
            if max > fields.len() {
                tracing::warn!(template = %template, slot = max, fields = fields.len(), "template slot has no field; it will render literally");
            }
        }
        tracing::debug!(template = %template, fields = fields.len(), "created label generator");
        Self { template, fields }
    }

    pub fn template(&self) -> &MessageTemplate { &self.template }

    pub fn format_string(&self) -> &str { self.template.source() }

    pub fn fields(&self) -> &[LabelField] { &self.fields }

    /// Formatter of the first field reading `component`.
    pub fn format_for(&self, component: Component) -> Option<&ValueFormat> {
        self.fields.iter().find(|f| f.component == component).map(|f| &f.format)
    }

    /// Substitution values in slot order: series name, then one per field.
    pub fn item_values<F>(&self, series_name: &str, series: usize, item: usize, lookup: F) -> Result<Vec<String>>
    where
        F: Fn(Component) -> Option<f64>,
    {
        let mut values = Vec::with_capacity(self.fields.len() + 1);
        values.push(series_name.to_string());
        for field in &self.fields {
            let raw = lookup(field.component).ok_or(LabelError::missing(field.component, series, item))?;
            values.push(field.format.format(raw)?);
        }
        Ok(values)
    }

    pub fn format_item<F>(&self, series_name: &str, series: usize, item: usize, lookup: F) -> Result<String>
    where
        F: Fn(Component) -> Option<f64>,
    {
        let values = self.item_values(series_name, series, item, lookup)?;
        let label = self.template.render(&values);
        tracing::trace!(series, item, label = %label, "generated label");
        Ok(label)
    }
}
