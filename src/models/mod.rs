pub mod classification;
pub mod config;
pub mod element;
pub mod policy;

pub use classification::{Classification, ColorSlot};
pub use config::{DispatchConfig, ToneConfig, CONFIG_ENV_VAR};
pub use element::{LabelRole, RenderedElement};
pub use policy::{ClassificationStrategy, ColorPolicy, LabelMarkers, ScanMode};
