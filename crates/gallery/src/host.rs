//! The gallery host: item records in, positions out.

use anyhow::{Context as _, Result};
use layout_util::{ItemBox, ItemRef, LayoutContext, PackingStrategy, Position, RowMetrics};
use log::{debug, trace, warn};

use crate::filter::Filter;
use crate::settings::{GalleryConfig, LayoutMode};

/// One gallery entry as supplied by the host page.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    /// Caller-side handle used to map positions back to rendered nodes.
    pub handle: ItemRef,
    /// Measured outer box.
    pub size: ItemBox,
    /// Category tags the filter matches against.
    pub categories: Vec<String>,
}

impl GalleryItem {
    /// Untagged item.
    pub const fn new(handle: ItemRef, size: ItemBox) -> Self {
        Self {
            handle,
            size,
            categories: Vec::new(),
        }
    }

    /// Builder-style category tag.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }
}

/// Result of [`Gallery::arrange`].
///
/// Every item of the gallery appears exactly once, either in `placed` or in `hidden`, each
/// list in insertion order. Row ranges index into `placed`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arrangement {
    /// Visible items with their positions.
    pub placed: Vec<(ItemRef, Position)>,
    /// Items filtered out of this arrangement.
    pub hidden: Vec<ItemRef>,
    /// Packed rows of the visible items.
    pub rows: Vec<RowMetrics>,
    /// Height the container needs to show every visible item.
    pub content_height: f32,
}

impl Arrangement {
    /// Position of `handle`, or `None` if it is hidden or unknown.
    pub fn position_of(&self, handle: ItemRef) -> Option<Position> {
        self.placed
            .iter()
            .find(|(placed, _)| *placed == handle)
            .map(|&(_, position)| position)
    }
}

/// Gallery container with a pluggable packing strategy.
pub struct Gallery {
    /// Container width and gutter used for the next arrangement.
    context: LayoutContext,
    /// Active category filter.
    filter: Filter,
    /// Items in insertion order.
    items: Vec<GalleryItem>,
    /// Packing algorithm.
    strategy: Box<dyn PackingStrategy>,
}

impl Gallery {
    /// Build a gallery whose strategy follows `config.layout_mode`.
    ///
    /// # Errors
    /// Returns an error if the configured filter selector is invalid.
    pub fn new(config: &GalleryConfig) -> Result<Self> {
        Self::with_strategy(config, config.layout_mode.strategy())
    }

    /// Build a gallery with an injected strategy; `config.layout_mode` is ignored.
    ///
    /// # Errors
    /// Returns an error if the configured filter selector is invalid.
    pub fn with_strategy(
        config: &GalleryConfig,
        strategy: Box<dyn PackingStrategy>,
    ) -> Result<Self> {
        let filter = Filter::parse(&config.filter).context("invalid gallery filter")?;
        debug!(
            "[GALLERY] created: strategy={} container={:.3} gutter={:.3} filter={filter:?}",
            strategy.name(),
            config.container_inner_width,
            config.gutter
        );
        Ok(Self {
            context: config.layout_context(),
            filter,
            items: Vec::new(),
            strategy,
        })
    }

    /// Swap the packing strategy.
    pub fn set_strategy(&mut self, strategy: Box<dyn PackingStrategy>) {
        self.strategy = strategy;
    }

    /// Swap to the built-in strategy for `mode`.
    pub fn set_layout_mode(&mut self, mode: LayoutMode) {
        self.strategy = mode.strategy();
    }

    /// Name of the active strategy.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Append an item.
    pub fn push_item(&mut self, item: GalleryItem) {
        self.items.push(item);
    }

    /// Number of items, visible or not.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the gallery holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    /// Active filter.
    pub const fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Replace the filter from a selector. The current filter stays on error.
    ///
    /// # Errors
    /// Returns an error if the selector cannot be parsed.
    pub fn set_filter(&mut self, selector: &str) -> Result<()> {
        self.filter = Filter::parse(selector)?;
        trace!("[GALLERY] filter set to {:?}", self.filter);
        Ok(())
    }

    /// Change the container width used by the next arrangement.
    pub fn resize(&mut self, container_inner_width: f32) {
        self.context.container_inner_width = container_inner_width;
    }

    /// Current layout context.
    pub const fn layout_context(&self) -> LayoutContext {
        self.context
    }

    /// Pack the visible items and report where each one goes.
    pub fn arrange(&self) -> Arrangement {
        let mut boxes: Vec<ItemBox> = Vec::with_capacity(self.items.len());
        let mut handles: Vec<ItemRef> = Vec::with_capacity(self.items.len());
        let mut hidden: Vec<ItemRef> = Vec::new();
        for item in &self.items {
            if self.filter.matches(item) {
                boxes.push(item.size);
                handles.push(item.handle);
            } else {
                hidden.push(item.handle);
            }
        }
        if boxes.is_empty() && !self.items.is_empty() {
            warn!(
                "[GALLERY] filter {:?} hides all {} items",
                self.filter,
                self.items.len()
            );
        }
        let packing = self.strategy.pack(&boxes, self.context);
        debug!(
            "[GALLERY] arranged: strategy={} visible={} hidden={} rows={} content_height={:.3}",
            self.strategy.name(),
            handles.len(),
            hidden.len(),
            packing.rows.len(),
            packing.content_height
        );
        Arrangement {
            placed: handles.into_iter().zip(packing.positions).collect(),
            hidden,
            rows: packing.rows,
            content_height: packing.content_height,
        }
    }
}

impl Extend<GalleryItem> for Gallery {
    fn extend<Items: IntoIterator<Item = GalleryItem>>(&mut self, iter: Items) {
        self.items.extend(iter);
    }
}
