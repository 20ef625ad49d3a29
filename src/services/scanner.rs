//! Label search over a rendered element tree.
//!
//! The traversal is depth-first and pre-order, visiting siblings in child
//! order. Matches are collected into a [`ScanResult`] that is threaded
//! through the recursion; the first label to fill a slot keeps it.

use packed_color::Argb;

use crate::error::ClassifyError;
use crate::models::{
    Classification, ColorPolicy, ColorSlot, LabelMarkers, LabelRole, RenderedElement, ScanMode,
};

/// Colors found by a scan. `None` means no matching label was found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub title: Option<Argb>,
    pub content: Option<Argb>,
}

impl ScanResult {
    fn is_complete(&self) -> bool {
        self.title.is_some() && self.content.is_some()
    }

    /// Turn the scanned colors into a classification.
    ///
    /// The title label decides the background. Without one the surface is
    /// undetermined, even if a content label was found.
    pub fn classify(&self, policy: &ColorPolicy) -> Classification {
        match self.title {
            Some(title) => Classification::new(
                policy.is_dark_background(title),
                ColorSlot::Resolved(title),
                ColorSlot::from(self.content),
            ),
            None => Classification::undetermined(),
        }
    }
}

/// Finds the labels whose colors decide a surface's classification.
#[derive(Debug, Clone, Copy)]
pub struct ElementTreeScanner<'a> {
    mode: ScanMode,
    markers: &'a LabelMarkers,
}

impl<'a> ElementTreeScanner<'a> {
    pub fn new(mode: ScanMode, markers: &'a LabelMarkers) -> Self {
        Self { mode, markers }
    }

    pub fn from_policy(policy: &'a ColorPolicy) -> Self {
        Self::new(policy.scan_mode, &policy.markers)
    }

    /// Scan a tree. An absent root yields an empty result without traversal.
    ///
    /// Fails with [`ClassifyError::ScanFault`] when a matching label has no
    /// readable color.
    pub fn scan(&self, root: Option<&RenderedElement>) -> Result<ScanResult, ClassifyError> {
        let mut found = ScanResult::default();
        if let Some(root) = root {
            self.visit(root, &mut found)?;
        }
        Ok(found)
    }

    fn visit(&self, element: &RenderedElement, found: &mut ScanResult) -> Result<(), ClassifyError> {
        if let Some(text) = element.text.as_deref() {
            return self.match_label(element, text, found);
        }

        for child in &element.children {
            if found.is_complete() {
                break;
            }
            self.visit(child, found)?;
        }
        Ok(())
    }

    fn match_label(
        &self,
        label: &RenderedElement,
        text: &str,
        found: &mut ScanResult,
    ) -> Result<(), ClassifyError> {
        match self.mode {
            ScanMode::FirstLabel => {
                let color = read_color(label, text)?;
                found.title.get_or_insert(color);
                found.content.get_or_insert(color);
            }
            ScanMode::ByRole => {
                let slot = match label.role.or_else(|| self.markers.role_of(text)) {
                    Some(LabelRole::Title) => &mut found.title,
                    Some(LabelRole::Content) => &mut found.content,
                    None => return Ok(()),
                };
                if slot.is_none() {
                    let color = read_color(label, text)?;
                    tracing::trace!(text, color = %color, "Matched label");
                    *slot = Some(color);
                }
            }
        }
        Ok(())
    }
}

fn read_color(label: &RenderedElement, text: &str) -> Result<Argb, ClassifyError> {
    label
        .text_color
        .ok_or_else(|| ClassifyError::ScanFault(format!("label {text:?} has no text color")))
}
