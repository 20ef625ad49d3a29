//! Surface sources whose renders can be counted, delayed, held or broken.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::time::Duration;

use bgtone::models::{Classification, RenderedElement};
use bgtone::services::{Dispatcher, Surface, SurfaceSource};

/// Render counter shared between a source and the test
pub type Renders = Arc<AtomicUsize>;

pub fn count(renders: &Renders) -> usize {
    renders.load(Ordering::SeqCst)
}

/// Returns a fixed tree, optionally sleeping first so callers pile up
pub struct CountingSource {
    tree: Option<RenderedElement>,
    delay: Duration,
    renders: Renders,
}

impl CountingSource {
    pub fn new(tree: Option<RenderedElement>) -> (Self, Renders) {
        Self::slow(tree, Duration::ZERO)
    }

    pub fn slow(tree: Option<RenderedElement>, delay: Duration) -> (Self, Renders) {
        let renders = Renders::default();
        let source = Self {
            tree,
            delay,
            renders: renders.clone(),
        };
        (source, renders)
    }
}

impl SurfaceSource for CountingSource {
    fn render_tree(&self) -> anyhow::Result<Option<RenderedElement>> {
        self.renders.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        Ok(self.tree.clone())
    }
}

/// Opens a [`GatedSource`]. Dropping it opens the gate too.
pub struct Gate(mpsc::Sender<()>);

impl Gate {
    pub fn open(&self) {
        let _ = self.0.send(());
    }
}

/// Holds the render until its gate is opened
pub struct GatedSource {
    tree: Option<RenderedElement>,
    gate: Mutex<mpsc::Receiver<()>>,
    renders: Renders,
}

impl GatedSource {
    pub fn new(tree: Option<RenderedElement>) -> (Self, Gate, Renders) {
        let (tx, rx) = mpsc::channel();
        let renders = Renders::default();
        let source = Self {
            tree,
            gate: Mutex::new(rx),
            renders: renders.clone(),
        };
        (source, Gate(tx), renders)
    }
}

impl SurfaceSource for GatedSource {
    fn render_tree(&self) -> anyhow::Result<Option<RenderedElement>> {
        self.renders.fetch_add(1, Ordering::SeqCst);
        let gate = self.gate.lock().unwrap();
        let _ = gate.recv();
        Ok(self.tree.clone())
    }
}

/// Panics mid-render after a delay
pub struct PanickingSource {
    delay: Duration,
    renders: Renders,
}

impl PanickingSource {
    pub fn new(delay: Duration) -> (Self, Renders) {
        let renders = Renders::default();
        let source = Self {
            delay,
            renders: renders.clone(),
        };
        (source, renders)
    }
}

impl SurfaceSource for PanickingSource {
    fn render_tree(&self) -> anyhow::Result<Option<RenderedElement>> {
        self.renders.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(self.delay);
        panic!("layout pass crashed");
    }
}

/// Asks the dispatcher for its own surface's classification while rendering
pub struct ReentrantSource {
    tree: RenderedElement,
    dispatcher: Dispatcher,
    target: Arc<Mutex<Option<Surface>>>,
    inner: Arc<Mutex<Option<Classification>>>,
}

/// Test-side handles of a [`ReentrantSource`]
pub struct ReentrantProbe {
    /// The surface to query from inside the render. Taken on first use.
    pub target: Arc<Mutex<Option<Surface>>>,
    /// What the nested call returned
    pub inner: Arc<Mutex<Option<Classification>>>,
}

impl ReentrantSource {
    pub fn new(dispatcher: Dispatcher, tree: RenderedElement) -> (Self, ReentrantProbe) {
        let target = Arc::new(Mutex::new(None));
        let inner = Arc::new(Mutex::new(None));
        let source = Self {
            tree,
            dispatcher,
            target: target.clone(),
            inner: inner.clone(),
        };
        (source, ReentrantProbe { target, inner })
    }
}

impl SurfaceSource for ReentrantSource {
    fn render_tree(&self) -> anyhow::Result<Option<RenderedElement>> {
        // taking the handle breaks the surface -> source -> surface cycle
        let surface = self.target.lock().unwrap().take();
        if let Some(surface) = surface {
            let nested = self.dispatcher.ensure_computed(&surface);
            *self.inner.lock().unwrap() = Some(nested);
        }
        Ok(Some(self.tree.clone()))
    }
}
