//! Category filter applied before packing.
//!
//! Selectors follow the `data-filter` convention of gallery menus: `*` shows everything and
//! `.name` shows items tagged with category `name`. A comma-separated list shows items that
//! carry any of the listed categories.

use anyhow::{Result, bail};

use crate::host::GalleryItem;

/// Which items take part in the next arrangement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    /// Every item is visible.
    #[default]
    All,
    /// Items tagged with at least one of these categories are visible.
    AnyOf(Vec<String>),
}

#[inline]
const fn is_category_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_')
}

impl Filter {
    /// Parse a filter selector.
    ///
    /// # Errors
    /// Returns an error if a token is neither `*` nor a `.category` class selector.
    pub fn parse(selector: &str) -> Result<Self> {
        let trimmed = selector.trim();
        if trimmed.is_empty() {
            return Ok(Self::All);
        }
        let mut categories: Vec<String> = Vec::new();
        let mut wildcard = false;
        for token in trimmed.split(',').map(str::trim) {
            if token == "*" {
                wildcard = true;
                continue;
            }
            let Some(name) = token.strip_prefix('.') else {
                bail!(
                    "unsupported filter token `{token}` in `{selector}`: expected `*` or `.category`"
                );
            };
            if name.is_empty() || !name.chars().all(is_category_char) {
                bail!("invalid category name in filter token `{token}`");
            }
            if !categories.iter().any(|known| known == name) {
                categories.push(name.to_owned());
            }
        }
        if wildcard {
            return Ok(Self::All);
        }
        Ok(Self::AnyOf(categories))
    }

    /// True when `item` is visible under this filter.
    pub fn matches(&self, item: &GalleryItem) -> bool {
        match self {
            Self::All => true,
            Self::AnyOf(categories) => item
                .categories
                .iter()
                .any(|category| categories.contains(category)),
        }
    }
}
