use packed_color::{Argb, LUMINANCE_THRESHOLD, SIMILARITY_THRESHOLD};
use serde::Deserialize;

use super::LabelRole;

/// How the label color is turned into a light/dark decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationStrategy {
    /// Light when the label luminance exceeds the threshold
    #[default]
    Luminance,
    /// Dark when the label lies within the distance threshold of black
    DistanceFromBlack,
}

/// Which labels the scanner reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanMode {
    /// The first label found supplies both colors
    #[default]
    FirstLabel,
    /// Title and content labels are located by role
    ByRole,
}

/// Marker texts identifying untagged title/content labels
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LabelMarkers {
    #[serde(default = "default_title_marker")]
    pub title: String,

    #[serde(default = "default_content_marker")]
    pub content: String,
}

fn default_title_marker() -> String {
    "notification_music_title".to_string()
}

fn default_content_marker() -> String {
    "notification_music_content".to_string()
}

impl LabelMarkers {
    /// Role implied by a label's text, if it is one of the markers
    pub fn role_of(&self, text: &str) -> Option<LabelRole> {
        if text == self.title {
            Some(LabelRole::Title)
        } else if text == self.content {
            Some(LabelRole::Content)
        } else {
            None
        }
    }
}

impl Default for LabelMarkers {
    fn default() -> Self {
        Self {
            title: default_title_marker(),
            content: default_content_marker(),
        }
    }
}

/// Fallback colors and classification tuning
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColorPolicy {
    /// Title color on a light background
    #[serde(default = "default_title_on_light")]
    pub title_on_light: Argb,

    /// Title color on a dark background
    #[serde(default = "default_title_on_dark")]
    pub title_on_dark: Argb,

    /// Secondary text color on a light background
    #[serde(default = "default_content_on_light")]
    pub content_on_light: Argb,

    /// Secondary text color on a dark background
    #[serde(default = "default_content_on_dark")]
    pub content_on_dark: Argb,

    #[serde(default = "default_luminance_threshold")]
    pub luminance_threshold: f64,

    /// Only used by [`ClassificationStrategy::DistanceFromBlack`]
    #[serde(default = "default_distance_threshold")]
    pub distance_threshold: f64,

    #[serde(default)]
    pub strategy: ClassificationStrategy,

    #[serde(default)]
    pub scan_mode: ScanMode,

    #[serde(default)]
    pub markers: LabelMarkers,

    /// Whether the host supports overriding per-element style colors.
    /// Without it, undefined colors are left to the host's own styles.
    #[serde(default = "default_style_colors_supported")]
    pub style_colors_supported: bool,
}

fn default_title_on_light() -> Argb {
    Argb(0xDE00_0000)
}

fn default_title_on_dark() -> Argb {
    Argb::WHITE
}

fn default_content_on_light() -> Argb {
    Argb(0x8A00_0000)
}

fn default_content_on_dark() -> Argb {
    Argb(0xB3FF_FFFF)
}

fn default_luminance_threshold() -> f64 {
    LUMINANCE_THRESHOLD
}

fn default_distance_threshold() -> f64 {
    SIMILARITY_THRESHOLD
}

fn default_style_colors_supported() -> bool {
    true
}

impl ColorPolicy {
    /// Classify a surface from the color of its deciding label.
    ///
    /// The surface takes the tone of the label: a label reading as light
    /// classifies it light, one reading as dark classifies it dark.
    pub fn is_dark_background(&self, label_color: Argb) -> bool {
        match self.strategy {
            ClassificationStrategy::Luminance => {
                !packed_color::is_light_above(label_color, self.luminance_threshold)
            }
            ClassificationStrategy::DistanceFromBlack => {
                packed_color::is_similar(Argb::BLACK, label_color, self.distance_threshold)
            }
        }
    }

    pub fn title_fallback(&self, dark_background: bool) -> Argb {
        if dark_background {
            self.title_on_dark
        } else {
            self.title_on_light
        }
    }

    pub fn content_fallback(&self, dark_background: bool) -> Argb {
        if dark_background {
            self.content_on_dark
        } else {
            self.content_on_light
        }
    }
}

impl Default for ColorPolicy {
    fn default() -> Self {
        Self {
            title_on_light: default_title_on_light(),
            title_on_dark: default_title_on_dark(),
            content_on_light: default_content_on_light(),
            content_on_dark: default_content_on_dark(),
            luminance_threshold: default_luminance_threshold(),
            distance_threshold: default_distance_threshold(),
            strategy: ClassificationStrategy::default(),
            scan_mode: ScanMode::default(),
            markers: LabelMarkers::default(),
            style_colors_supported: default_style_colors_supported(),
        }
    }
}
