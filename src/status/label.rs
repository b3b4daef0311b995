#![forbid(unsafe_code)]

//! Status label rendering

use serde::Serialize;
use std::fmt;

/// How counts are labelled: an optional icon and a unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelStyle {
    icon: Option<String>,
    unit: String,
}

impl LabelStyle {
    pub fn new(icon: Option<String>, unit: impl Into<String>) -> Self {
        Self {
            icon,
            unit: unit.into(),
        }
    }

    /// Builds the label for `count`
    pub fn label(&self, count: usize) -> StatusLabel {
        StatusLabel {
            icon: self.icon.clone(),
            count,
            unit: self.unit.clone(),
        }
    }

    /// Renders the label for `count` as text
    pub fn render(&self, count: usize) -> String {
        self.label(count).to_string()
    }
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self::new(Some("$(pencil)".to_string()), "文字")
    }
}

/// A rendered count, e.g. `$(pencil) 1200 文字`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLabel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub count: usize,
    pub unit: String,
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(icon) = &self.icon {
            write!(f, "{} ", icon)?;
        }
        write!(f, "{} {}", self.count, self.unit)
    }
}
