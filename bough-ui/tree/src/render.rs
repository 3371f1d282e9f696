use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::model::Node;
use crate::navigator::{Mode, NavigationView};
use crate::nested::NestedRow;

/// Consumer of navigation snapshots.
///
/// Implementations own every visual concern. Clicks on rows are fed back
/// through the navigator (`select`/`activate`), never through the adapter.
pub trait RenderAdapter<P> {
    type Output;

    fn render(
        &mut self,
        view: &NavigationView<'_, P>,
        config: &RenderConfig,
    ) -> Self::Output;
}

/// Presentation settings passed explicitly to a [`RenderAdapter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Mode the widget starts in.
    pub mode: Mode,
    pub column: ColumnStyle,
    pub nested: NestedStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnStyle {
    /// Icon of the drill-in control and of rows with children.
    pub next_icon: String,
    /// Icon of the breadcrumb (drill-out) control.
    pub previous_icon: String,
    /// Text after the child count, e.g. `3 sub-resources`.
    pub sub_resources_suffix: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NestedStyle {
    pub expanded_icon: String,
    pub collapsed_icon: String,
    /// Indentation per depth level, in columns.
    pub indent: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Column,
            column: ColumnStyle::default(),
            nested: NestedStyle::default(),
        }
    }
}

impl Default for ColumnStyle {
    fn default() -> Self {
        Self {
            next_icon: String::from("›"),
            previous_icon: String::from("‹"),
            sub_resources_suffix: String::from("sub-resources"),
        }
    }
}

impl Default for NestedStyle {
    fn default() -> Self {
        Self {
            expanded_icon: String::from("▾"),
            collapsed_icon: String::from("▸"),
            indent: 2,
        }
    }
}

impl RenderConfig {
    /// Read a JSON config file; a missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            },
            Err(err) => return Err(err.into()),
        };
        let config: RenderConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults on error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("render config invalid, using defaults: {err}");
                Self::default()
            },
        }
    }

    /// Caption for nodes with children, also used as the accessible title
    /// of the drill-in control.
    pub fn sub_resources_label<P>(&self, node: &Node<P>) -> Option<String> {
        if !node.has_children() {
            return None;
        }
        Some(format!(
            "{} {}",
            node.children().len(),
            self.column.sub_resources_suffix
        ))
    }

    /// Expand indicator of a nested row.
    pub fn nested_icon<P>(&self, row: &NestedRow<'_, P>) -> &str {
        if row.expanded {
            &self.nested.expanded_icon
        } else {
            &self.nested.collapsed_icon
        }
    }

    /// Leading whitespace of a nested row.
    pub fn nested_indent<P>(&self, row: &NestedRow<'_, P>) -> String {
        " ".repeat(row.entry.depth * self.nested.indent)
    }
}
