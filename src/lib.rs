//! bgtone - light/dark background classification for rendered surfaces
//!
//! Reads the text color of a surface's primary label on the designated
//! context, decides whether the background behind it is light or dark, and
//! hands out title/content text colors to match. Each surface is classified
//! once; concurrent callers share that single computation.
//!
//! ```no_run
//! use bgtone::models::{RenderedElement, ToneConfig};
//! use bgtone::services::{ColorResolver, Surface};
//! use packed_color::Argb;
//! use std::collections::HashMap;
//!
//! let resolver = ColorResolver::spawn(&ToneConfig::load_from_env()).unwrap();
//! let surface = Surface::from_tree(
//!     RenderedElement::container().with_child(RenderedElement::label("Song", Argb::WHITE)),
//! );
//!
//! let mut sink: HashMap<u32, Argb> = HashMap::new();
//! let title = resolver.resolve_title_color(&surface, &mut sink, 1);
//! assert!(!resolver.is_dark_background(&surface));
//! assert_eq!(title, Some(Argb::WHITE));
//! ```

pub mod error;
pub mod models;
pub mod services;

pub use packed_color::Argb;
