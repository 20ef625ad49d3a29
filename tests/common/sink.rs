//! A color sink that remembers every write.

use bgtone::services::{ColorSink, SlotId};
use bgtone::Argb;

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub writes: Vec<(SlotId, Argb)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent color written to `slot`
    pub fn last(&self, slot: SlotId) -> Option<Argb> {
        self.writes
            .iter()
            .rev()
            .find(|(s, _)| *s == slot)
            .map(|(_, color)| *color)
    }

    pub fn writes_to(&self, slot: SlotId) -> usize {
        self.writes.iter().filter(|(s, _)| *s == slot).count()
    }
}

impl ColorSink for RecordingSink {
    fn set_text_color(&mut self, slot: SlotId, color: Argb) {
        self.writes.push((slot, color));
    }
}
