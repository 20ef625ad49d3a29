//! Test fixtures and constants.

use bgtone::models::{LabelRole, RenderedElement};
use bgtone::Argb;

/// Label colors used across tests
pub mod colors {
    use bgtone::Argb;

    pub const WHITE: Argb = Argb(0xFFFF_FFFF);
    pub const BLACK: Argb = Argb(0xFF00_0000);

    /// Near-black title text
    pub const DARK_TITLE: Argb = Argb(0xDE00_0000);

    /// Near-white title text
    pub const LIGHT_TITLE: Argb = Argb(0xFFF5_F5F5);

    pub const ACCENT: Argb = Argb(0xFF21_96F3);

    /// Far from black, but dark by luminance
    pub const MID_GRAY: Argb = Argb(0xFF80_8080);
}

/// Slots on the recording sink
pub mod slots {
    use bgtone::services::SlotId;

    pub const TITLE: SlotId = 1;
    pub const CONTENT: SlotId = 2;
}

/// Container with one label, as in a minimal notification
pub fn single_label(color: Argb) -> RenderedElement {
    RenderedElement::container().with_child(RenderedElement::label("Song", color))
}

/// A media notification with tagged title and content labels buried
/// between untagged decoys.
pub fn music_notification(title: Argb, content: Argb) -> RenderedElement {
    RenderedElement::container()
        .with_child(RenderedElement::label("Now playing", colors::ACCENT))
        .with_child(
            RenderedElement::container()
                .with_child(RenderedElement::container())
                .with_child(
                    RenderedElement::container()
                        .with_child(RenderedElement::label("Song", title).with_role(LabelRole::Title)),
                ),
        )
        .with_child(
            RenderedElement::container()
                .with_child(RenderedElement::label("Artist", content).with_role(LabelRole::Content))
                .with_child(RenderedElement::label("Album", colors::ACCENT)),
        )
}

/// The same notification with untagged labels carrying the marker texts
pub fn marker_notification(title: Argb, content: Argb) -> RenderedElement {
    RenderedElement::container()
        .with_child(RenderedElement::label("Now playing", colors::ACCENT))
        .with_child(
            RenderedElement::container()
                .with_child(RenderedElement::label("notification_music_content", content)),
        )
        .with_child(RenderedElement::label("notification_music_title", title))
}

/// A tree snapshot as a host would serialize it
pub const NOTIFICATION_JSON: &str = r##"{
  "children": [
    { "text": "Now playing", "text_color": "#ff2196f3" },
    {
      "children": [
        { "role": "title", "text": "Song", "text_color": "#fff5f5f5" },
        { "role": "content", "text": "Artist", "text_color": "#b3ffffff" }
      ]
    }
  ]
}"##;
