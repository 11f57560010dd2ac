// File: crates/chart-labels/src/format.rs
// Summary: Per-value formatter selection: number or date, never both.

use crate::date::DateFormat;
use crate::error::Result;
use crate::number::NumberFormat;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValueFormat {
    Number(NumberFormat),
    Date(DateFormat),
}

impl Default for ValueFormat {
    fn default() -> Self {
        ValueFormat::Number(NumberFormat::number())
    }
}

impl ValueFormat {
    pub fn format(&self, value: f64) -> Result<String> {
        match self {
            ValueFormat::Number(f) => Ok(f.format(value)),
            ValueFormat::Date(f) => f.format(value),
        }
    }

    pub fn as_number(&self) -> Option<&NumberFormat> {
        match self {
            ValueFormat::Number(f) => Some(f),
            ValueFormat::Date(_) => None,
        }
    }

    pub fn as_date(&self) -> Option<&DateFormat> {
        match self {
            ValueFormat::Date(f) => Some(f),
            ValueFormat::Number(_) => None,
        }
    }
}

impl From<NumberFormat> for ValueFormat {
    fn from(f: NumberFormat) -> Self { ValueFormat::Number(f) }
}

impl From<DateFormat> for ValueFormat {
    fn from(f: DateFormat) -> Self { ValueFormat::Date(f) }
}
