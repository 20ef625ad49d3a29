use chrono::{DateTime, Utc};
use packed_color::Argb;
use serde::Serialize;

/// A color that is either known or still undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "color")]
pub enum ColorSlot {
    #[default]
    Undefined,
    Resolved(Argb),
}

impl ColorSlot {
    pub fn is_undefined(&self) -> bool {
        matches!(self, ColorSlot::Undefined)
    }

    pub fn color(&self) -> Option<Argb> {
        match self {
            ColorSlot::Resolved(color) => Some(*color),
            ColorSlot::Undefined => None,
        }
    }
}

impl From<Option<Argb>> for ColorSlot {
    fn from(color: Option<Argb>) -> Self {
        color.map_or(ColorSlot::Undefined, ColorSlot::Resolved)
    }
}

/// Result of classifying one surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    /// Whether the surface background is dark
    pub dark_background: bool,
    /// Title color read from the surface
    pub title: ColorSlot,
    /// Content color read from the surface
    pub content: ColorSlot,
    /// When the classification was produced
    pub classified_at: DateTime<Utc>,
}

impl Classification {
    pub fn new(dark_background: bool, title: ColorSlot, content: ColorSlot) -> Self {
        Self {
            dark_background,
            title,
            content,
            classified_at: Utc::now(),
        }
    }

    /// The degraded outcome used whenever classification cannot complete:
    /// dark background, both colors undefined.
    pub fn undetermined() -> Self {
        Self::new(true, ColorSlot::Undefined, ColorSlot::Undefined)
    }

    pub fn is_undetermined(&self) -> bool {
        self.dark_background && self.title.is_undefined() && self.content.is_undefined()
    }
}
