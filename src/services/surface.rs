use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::cache::ClassificationCache;
use super::dispatcher::{Flight, FlightPhase};
use crate::models::RenderedElement;

/// Produces the rendered element tree of a surface.
///
/// Only ever called on the designated context, at most once per surface.
pub trait SurfaceSource: Send + Sync {
    /// Render the surface. `Ok(None)` means the host produced no tree.
    fn render_tree(&self) -> anyhow::Result<Option<RenderedElement>>;
}

/// A source that hands out a tree it already holds
#[derive(Debug, Clone)]
pub struct StaticTree(pub Option<RenderedElement>);

impl SurfaceSource for StaticTree {
    fn render_tree(&self) -> anyhow::Result<Option<RenderedElement>> {
        Ok(self.0.clone())
    }
}

impl<F> SurfaceSource for F
where
    F: Fn() -> anyhow::Result<Option<RenderedElement>> + Send + Sync,
{
    fn render_tree(&self) -> anyhow::Result<Option<RenderedElement>> {
        self()
    }
}

/// Process-unique surface identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(u64);

impl SurfaceId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface-{}", self.0)
    }
}

struct SurfaceInner {
    id: SurfaceId,
    source: Box<dyn SurfaceSource>,
    flight: Flight,
    cache: ClassificationCache,
}

/// Handle to one surface instance.
///
/// Clones share the same instance, and with it the same classification.
/// The classification lives exactly as long as the last handle.
#[derive(Clone)]
pub struct Surface {
    inner: Arc<SurfaceInner>,
}

impl Surface {
    pub fn new(source: impl SurfaceSource + 'static) -> Self {
        Self {
            inner: Arc::new(SurfaceInner {
                id: SurfaceId::next(),
                source: Box::new(source),
                flight: Flight::new(),
                cache: ClassificationCache::new(),
            }),
        }
    }

    /// A surface rendered by a closure
    pub fn from_fn<F>(render: F) -> Self
    where
        F: Fn() -> anyhow::Result<Option<RenderedElement>> + Send + Sync + 'static,
    {
        Self::new(render)
    }

    /// A surface whose tree is already known
    pub fn from_tree(tree: RenderedElement) -> Self {
        Self::new(StaticTree(Some(tree)))
    }

    pub fn id(&self) -> SurfaceId {
        self.inner.id
    }

    pub fn cache(&self) -> &ClassificationCache {
        &self.inner.cache
    }

    /// Where this surface's classification currently stands
    pub fn phase(&self) -> FlightPhase {
        self.inner.flight.phase()
    }

    pub(crate) fn source(&self) -> &dyn SurfaceSource {
        self.inner.source.as_ref()
    }

    pub(crate) fn flight(&self) -> &Flight {
        &self.inner.flight
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("id", &self.inner.id)
            .field("cache", &self.inner.cache)
            .finish_non_exhaustive()
    }
}
