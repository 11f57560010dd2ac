// File: crates/chart-labels/src/types.rs
// Summary: Shared types and constants (default templates, item components).

use std::fmt;

/// Default tooltip template for x/y/z items: series, x, y, z.
pub const DEFAULT_TOOL_TIP_FORMAT: &str = "{0}: ({1}, {2}, {3})";
/// Default tooltip template for x/y items: series, x, y.
pub const DEFAULT_XY_TOOL_TIP_FORMAT: &str = "{0}: ({1}, {2})";

/// One value of a data item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Component {
    X,
    Y,
    Z,
}

impl Component {
    pub const fn name(&self) -> &'static str {
        match self {
            Component::X => "x",
            Component::Y => "y",
            Component::Z => "z",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
