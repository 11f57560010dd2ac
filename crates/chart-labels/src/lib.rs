// File: crates/chart-labels/src/lib.rs
// Summary: Library entry point; exports value formatters, templates, datasets and tooltip generators.

pub mod dataset;
pub mod date;
pub mod error;
pub mod format;
pub mod generator;
pub mod number;
pub mod template;
pub mod tooltip;
pub mod types;

pub use dataset::{DefaultXyzDataset, XyDataset, XyzDataset, XyzSeries};
pub use date::DateFormat;
pub use error::{LabelError, Result};
pub use format::ValueFormat;
pub use generator::{LabelField, TemplatedLabelGenerator};
pub use number::{NumberFormat, NumberSymbols};
pub use template::MessageTemplate;
pub use tooltip::{
    StandardXyToolTipGenerator, StandardXyzToolTipGenerator, ToolTipBuilder, XyToolTipGenerator,
    XyzToolTipGenerator,
};
pub use types::{Component, DEFAULT_TOOL_TIP_FORMAT, DEFAULT_XY_TOOL_TIP_FORMAT};
