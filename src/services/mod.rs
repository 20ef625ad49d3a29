pub mod cache;
pub mod context;
pub mod dispatcher;
pub mod resolver;
pub mod scanner;
pub mod surface;

pub use cache::ClassificationCache;
pub use context::DesignatedContext;
pub use dispatcher::{Dispatcher, FlightPhase};
pub use resolver::{ColorResolver, ColorSink, SlotId};
pub use scanner::{ElementTreeScanner, ScanResult};
pub use surface::{StaticTree, Surface, SurfaceId, SurfaceSource};
