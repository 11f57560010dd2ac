// File: crates/chart-labels/src/tooltip.rs
// Summary: Standard tooltip generators for x/y and x/y/z items, their traits and builder.

use std::marker::PhantomData;

use crate::dataset::{XyDataset, XyzDataset};
use crate::date::DateFormat;
use crate::error::{LabelError, Result};
use crate::format::ValueFormat;
use crate::generator::{LabelField, TemplatedLabelGenerator};
use crate::number::NumberFormat;
use crate::template::MessageTemplate;
use crate::types::Component;

/// Tooltip text for an item of an x/y dataset.
pub trait XyToolTipGenerator {
    fn generate_tool_tip(&self, dataset: &dyn XyDataset, series: usize, item: usize) -> Result<String>;
}

/// Tooltip text for an item of an x/y/z dataset.
pub trait XyzToolTipGenerator {
    fn generate_tool_tip(&self, dataset: &dyn XyzDataset, series: usize, item: usize) -> Result<String>;
}

fn series_name<D: XyDataset + ?Sized>(dataset: &D, series: usize) -> Result<&str> {
    dataset.series_key(series).ok_or(LabelError::MissingSeries(series))
}

fn required<T>(value: Option<T>, name: &str) -> Result<T> {
    value.ok_or_else(|| LabelError::invalid_argument(format!("missing {name}")))
}

// ---- x/y ---------------------------------------------------------------------

/// Renders `{0}` series name, `{1}` x and `{2}` y.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "XyParts", into = "XyParts"))]
pub struct StandardXyToolTipGenerator {
    inner: TemplatedLabelGenerator,
}

impl Default for StandardXyToolTipGenerator {
    fn default() -> Self {
        Self::from_parts(MessageTemplate::tuple(2), NumberFormat::number().into(), NumberFormat::number().into())
    }
}

impl StandardXyToolTipGenerator {
    /// Fails with `InvalidArgument` when any argument is `None`.
    pub fn new(template: Option<&str>, x: Option<ValueFormat>, y: Option<ValueFormat>) -> Result<Self> {
        let template = MessageTemplate::parse(required(template, "template")?)?;
        Ok(Self::from_parts(template, required(x, "x format")?, required(y, "y format")?))
    }

    pub fn with_number_formats(template: &str, x: NumberFormat, y: NumberFormat) -> Result<Self> {
        Ok(Self::from_parts(MessageTemplate::parse(template)?, x.into(), y.into()))
    }

    pub fn with_date_formats(template: &str, x: DateFormat, y: DateFormat) -> Result<Self> {
        Ok(Self::from_parts(MessageTemplate::parse(template)?, x.into(), y.into()))
    }

    pub fn builder() -> ToolTipBuilder<Self> {
        ToolTipBuilder::new()
    }

    fn from_parts(template: MessageTemplate, x: ValueFormat, y: ValueFormat) -> Self {
        let fields = vec![LabelField::new(Component::X, x), LabelField::new(Component::Y, y)];
        Self { inner: TemplatedLabelGenerator::from_template(template, fields) }
    }

    pub fn format_string(&self) -> &str { self.inner.format_string() }
    pub fn x_format(&self) -> &ValueFormat { &self.inner.fields()[0].format }
    pub fn y_format(&self) -> &ValueFormat { &self.inner.fields()[1].format }
    pub fn as_templated(&self) -> &TemplatedLabelGenerator { &self.inner }

    /// Formatted substitution values: series name, x, y.
    pub fn item_values(&self, dataset: &dyn XyDataset, series: usize, item: usize) -> Result<Vec<String>> {
        let name = series_name(dataset, series)?;
        self.inner.item_values(name, series, item, |c| xy_lookup(dataset, c, series, item))
    }

    pub fn generate(&self, dataset: &dyn XyDataset, series: usize, item: usize) -> Result<String> {
        let name = series_name(dataset, series)?;
        self.inner.format_item(name, series, item, |c| xy_lookup(dataset, c, series, item))
    }
}

fn xy_lookup(dataset: &dyn XyDataset, component: Component, series: usize, item: usize) -> Option<f64> {
    match component {
        Component::X => dataset.x_value(series, item),
        Component::Y => dataset.y_value(series, item),
        Component::Z => None,
    }
}

impl XyToolTipGenerator for StandardXyToolTipGenerator {
    fn generate_tool_tip(&self, dataset: &dyn XyDataset, series: usize, item: usize) -> Result<String> {
        self.generate(dataset, series, item)
    }
}

// ---- x/y/z -------------------------------------------------------------------

/// Renders `{0}` series name, `{1}` x, `{2}` y and `{3}` z.
/// Each value uses its own number or date formatter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "XyzParts", into = "XyzParts"))]
pub struct StandardXyzToolTipGenerator {
    inner: TemplatedLabelGenerator,
}

impl Default for StandardXyzToolTipGenerator {
    fn default() -> Self {
        Self::from_parts(
            MessageTemplate::tuple(3),
            NumberFormat::number().into(),
            NumberFormat::number().into(),
            NumberFormat::number().into(),
        )
    }
}

impl StandardXyzToolTipGenerator {
    /// Fails with `InvalidArgument` when any argument is `None`.
    pub fn new(
        template: Option<&str>,
        x: Option<ValueFormat>,
        y: Option<ValueFormat>,
        z: Option<ValueFormat>,
    ) -> Result<Self> {
        let template = MessageTemplate::parse(required(template, "template")?)?;
        Ok(Self::from_parts(template, required(x, "x format")?, required(y, "y format")?, required(z, "z format")?))
    }

    pub fn with_number_formats(template: &str, x: NumberFormat, y: NumberFormat, z: NumberFormat) -> Result<Self> {
        Ok(Self::from_parts(MessageTemplate::parse(template)?, x.into(), y.into(), z.into()))
    }

    pub fn with_date_formats(template: &str, x: DateFormat, y: DateFormat, z: DateFormat) -> Result<Self> {
        Ok(Self::from_parts(MessageTemplate::parse(template)?, x.into(), y.into(), z.into()))
    }

    /// Mix number and date formatters per axis.
    pub fn builder() -> ToolTipBuilder<Self> {
        ToolTipBuilder::new()
    }

    fn from_parts(template: MessageTemplate, x: ValueFormat, y: ValueFormat, z: ValueFormat) -> Self {
        let fields = vec![
            LabelField::new(Component::X, x),
            LabelField::new(Component::Y, y),
            LabelField::new(Component::Z, z),
        ];
        Self { inner: TemplatedLabelGenerator::from_template(template, fields) }
    }

    pub fn format_string(&self) -> &str { self.inner.format_string() }
    pub fn x_format(&self) -> &ValueFormat { &self.inner.fields()[0].format }
    pub fn y_format(&self) -> &ValueFormat { &self.inner.fields()[1].format }
    pub fn z_format(&self) -> &ValueFormat { &self.inner.fields()[2].format }
    pub fn as_templated(&self) -> &TemplatedLabelGenerator { &self.inner }

    /// Formatted substitution values: series name, x, y, z.
    pub fn item_values(&self, dataset: &dyn XyzDataset, series: usize, item: usize) -> Result<Vec<String>> {
        let name = series_name(dataset, series)?;
        self.inner.item_values(name, series, item, |c| xyz_lookup(dataset, c, series, item))
    }

    pub fn generate(&self, dataset: &dyn XyzDataset, series: usize, item: usize) -> Result<String> {
        let name = series_name(dataset, series)?;
        self.inner.format_item(name, series, item, |c| xyz_lookup(dataset, c, series, item))
    }
}

fn xyz_lookup(dataset: &dyn XyzDataset, component: Component, series: usize, item: usize) -> Option<f64> {
    match component {
        Component::X => dataset.x_value(series, item),
        Component::Y => dataset.y_value(series, item),
        Component::Z => dataset.z_value(series, item),
    }
}

impl XyzToolTipGenerator for StandardXyzToolTipGenerator {
    fn generate_tool_tip(&self, dataset: &dyn XyzDataset, series: usize, item: usize) -> Result<String> {
        self.generate(dataset, series, item)
    }
}

// ---- serde -------------------------------------------------------------------

// Serialized form names each axis, so a stored generator always has its full field list.

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct XyParts {
    template: MessageTemplate,
    x: ValueFormat,
    y: ValueFormat,
}

#[cfg(feature = "serde")]
impl From<XyParts> for StandardXyToolTipGenerator {
    fn from(parts: XyParts) -> Self {
        Self::from_parts(parts.template, parts.x, parts.y)
    }
}

#[cfg(feature = "serde")]
impl From<StandardXyToolTipGenerator> for XyParts {
    fn from(generator: StandardXyToolTipGenerator) -> Self {
        Self {
            template: generator.inner.template().clone(),
            x: generator.x_format().clone(),
            y: generator.y_format().clone(),
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct XyzParts {
    template: MessageTemplate,
    x: ValueFormat,
    y: ValueFormat,
    z: ValueFormat,
}

#[cfg(feature = "serde")]
impl From<XyzParts> for StandardXyzToolTipGenerator {
    fn from(parts: XyzParts) -> Self {
        Self::from_parts(parts.template, parts.x, parts.y, parts.z)
    }
}

#[cfg(feature = "serde")]
impl From<StandardXyzToolTipGenerator> for XyzParts {
    fn from(generator: StandardXyzToolTipGenerator) -> Self {
        Self {
            template: generator.inner.template().clone(),
            x: generator.x_format().clone(),
            y: generator.y_format().clone(),
            z: generator.z_format().clone(),
        }
    }
}

// ---- builder -----------------------------------------------------------------

/// Collects a template and per-axis formatters; `build` rejects anything unset.
#[derive(Clone, Debug)]
pub struct ToolTipBuilder<G> {
    template: Option<String>,
    x: Option<ValueFormat>,
    y: Option<ValueFormat>,
    z: Option<ValueFormat>,
    target: PhantomData<fn() -> G>,
}

impl<G> ToolTipBuilder<G> {
    fn new() -> Self {
        Self { template: None, x: None, y: None, z: None, target: PhantomData }
    }

    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn x(mut self, format: impl Into<ValueFormat>) -> Self {
        self.x = Some(format.into());
        self
    }

    pub fn y(mut self, format: impl Into<ValueFormat>) -> Self {
        self.y = Some(format.into());
        self
    }
}

impl ToolTipBuilder<StandardXyToolTipGenerator> {
    pub fn build(self) -> Result<StandardXyToolTipGenerator> {
        StandardXyToolTipGenerator::new(self.template.as_deref(), self.x, self.y)
    }
}

impl ToolTipBuilder<StandardXyzToolTipGenerator> {
    pub fn z(mut self, format: impl Into<ValueFormat>) -> Self {
        self.z = Some(format.into());
        self
    }

    pub fn build(self) -> Result<StandardXyzToolTipGenerator> {
        StandardXyzToolTipGenerator::new(self.template.as_deref(), self.x, self.y, self.z)
    }
}
