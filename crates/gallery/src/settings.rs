//! Gallery configuration, read from JSON.

use anyhow::{Context as _, Result, bail};
use layout_fit_rows::{CenteredRows, LeftAlignedRows};
use layout_util::{LayoutContext, PackingStrategy};
use serde::{Deserialize, Serialize};
use serde_json::from_str;
use std::fs::read_to_string;
use std::path::Path;

use crate::filter::Filter;

/// Packing mode selected by configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayoutMode {
    /// Rows flush with the container start.
    FitRows,
    /// Every row centered in the container.
    #[default]
    CenteredFitRows,
}

impl LayoutMode {
    /// Strategy implementing this mode.
    pub fn strategy(self) -> Box<dyn PackingStrategy> {
        match self {
            Self::FitRows => Box::new(LeftAlignedRows),
            Self::CenteredFitRows => Box::new(CenteredRows),
        }
    }

    /// Configuration name of this mode.
    pub const fn name(self) -> &'static str {
        match self {
            Self::FitRows => LeftAlignedRows::NAME,
            Self::CenteredFitRows => CenteredRows::NAME,
        }
    }
}

/// Host configuration for one gallery container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Content-box width of the container.
    pub container_inner_width: f32,
    /// Spacing added after each item.
    pub gutter: f32,
    /// Packing mode.
    pub layout_mode: LayoutMode,
    /// Initial filter selector (`*` or `.category` list).
    pub filter: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            container_inner_width: 0.0,
            gutter: 0.0,
            layout_mode: LayoutMode::default(),
            filter: "*".to_owned(),
        }
    }
}

/// Reject dimensions that would only produce garbage geometry.
fn ensure_dimension(field: &str, value: f32) -> Result<()> {
    if !value.is_finite() {
        bail!("`{field}` must be finite, got {value}");
    }
    if value < 0.0 {
        bail!("`{field}` must not be negative, got {value}");
    }
    Ok(())
}

impl GalleryConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed, names an unknown field or mode, carries a
    /// negative or non-finite dimension, or holds an invalid filter selector.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = from_str(text).context("parsing gallery configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or [`Self::from_json`] fails.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = read_to_string(path)
            .with_context(|| format!("reading gallery configuration {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("loading {}", path.display()))
    }

    /// Check dimensions and the filter selector.
    ///
    /// # Errors
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<()> {
        ensure_dimension("containerInnerWidth", self.container_inner_width)?;
        ensure_dimension("gutter", self.gutter)?;
        Filter::parse(&self.filter).context("invalid `filter`")?;
        Ok(())
    }

    /// Layout context for the configured container.
    pub const fn layout_context(&self) -> LayoutContext {
        LayoutContext::new(self.container_inner_width, self.gutter)
    }
}
