use packed_color::Argb;
use std::sync::OnceLock;

use crate::models::{Classification, ColorSlot};

/// Once-only classification storage for one surface.
///
/// The classification is committed exactly once by the dispatcher. The
/// resolved title and content colors are each filled at most once
/// afterwards, either from the scanned color or from a policy fallback.
#[derive(Debug, Default)]
pub struct ClassificationCache {
    committed: OnceLock<Classification>,
    title: OnceLock<Argb>,
    content: OnceLock<Argb>,
}

impl ClassificationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once a classification has been committed, whatever its value.
    pub fn is_computed(&self) -> bool {
        self.committed.get().is_some()
    }

    pub fn classification(&self) -> Option<Classification> {
        self.committed.get().copied()
    }

    /// Background flag; `true` until a classification is committed.
    pub fn is_dark_background(&self) -> bool {
        self.committed.get().map_or(true, |c| c.dark_background)
    }

    /// Current title color: the resolved one if any, else the scanned one.
    pub fn title_color(&self) -> ColorSlot {
        current_slot(&self.title, self.committed.get().map(|c| c.title))
    }

    /// Current content color: the resolved one if any, else the scanned one.
    pub fn content_color(&self) -> ColorSlot {
        current_slot(&self.content, self.committed.get().map(|c| c.content))
    }

    /// Store the classification. Returns `false` if one was already stored,
    /// in which case the stored value is kept.
    pub(crate) fn commit(&self, classification: Classification) -> bool {
        self.committed.set(classification).is_ok()
    }

    /// Resolve the title color once, backfilling with `fallback` when the
    /// scan found none. Undefined until a classification is committed.
    pub(crate) fn resolve_title(&self, fallback: impl FnOnce(bool) -> Option<Argb>) -> ColorSlot {
        self.resolve(&self.title, |c| c.title, fallback)
    }

    pub(crate) fn resolve_content(&self, fallback: impl FnOnce(bool) -> Option<Argb>) -> ColorSlot {
        self.resolve(&self.content, |c| c.content, fallback)
    }

    fn resolve(
        &self,
        cell: &OnceLock<Argb>,
        scanned: impl FnOnce(&Classification) -> ColorSlot,
        fallback: impl FnOnce(bool) -> Option<Argb>,
    ) -> ColorSlot {
        if let Some(color) = cell.get() {
            return ColorSlot::Resolved(*color);
        }
        let Some(committed) = self.committed.get() else {
            return ColorSlot::Undefined;
        };

        match scanned(committed)
            .color()
            .or_else(|| fallback(committed.dark_background))
        {
            Some(color) => ColorSlot::Resolved(*cell.get_or_init(|| color)),
            None => ColorSlot::Undefined,
        }
    }
}

fn current_slot(resolved: &OnceLock<Argb>, scanned: Option<ColorSlot>) -> ColorSlot {
    match resolved.get() {
        Some(color) => ColorSlot::Resolved(*color),
        None => scanned.unwrap_or_default(),
    }
}
