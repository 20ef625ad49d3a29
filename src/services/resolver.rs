use packed_color::Argb;
use std::collections::HashMap;
use std::sync::Arc;

use super::context::DesignatedContext;
use super::dispatcher::Dispatcher;
use super::surface::Surface;
use crate::models::{Classification, ColorPolicy, ColorSlot, LabelRole, ToneConfig};

/// Identifies a text element on the render target
pub type SlotId = u32;

/// Render target that accepts per-slot text colors
pub trait ColorSink {
    fn set_text_color(&mut self, slot: SlotId, color: Argb);
}

impl ColorSink for HashMap<SlotId, Argb> {
    fn set_text_color(&mut self, slot: SlotId, color: Argb) {
        self.insert(slot, color);
    }
}

/// Answers "which color should this title/content text use" for a surface.
#[derive(Debug, Clone)]
pub struct ColorResolver {
    dispatcher: Dispatcher,
}

impl ColorResolver {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Build a resolver on an existing designated context
    pub fn with_context(context: Arc<DesignatedContext>, config: &ToneConfig) -> Self {
        Self::new(Dispatcher::new(
            context,
            Arc::new(config.policy.clone()),
            config.dispatch.wait_timeout(),
        ))
    }

    /// Start a designated context named after the config and build a resolver on it
    pub fn spawn(config: &ToneConfig) -> std::io::Result<Self> {
        let context = DesignatedContext::spawn(config.dispatch.context_name.clone())?;
        Ok(Self::with_context(Arc::new(context), config))
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn policy(&self) -> &ColorPolicy {
        self.dispatcher.policy()
    }

    /// Whether the surface background is dark, classifying it if needed
    pub fn is_dark_background(&self, surface: &Surface) -> bool {
        self.dispatcher.ensure_computed(surface).dark_background
    }

    /// Resolve the title color, apply it to `slot` on the sink and return it.
    ///
    /// Returns `None`, leaving the sink untouched, only when no title label
    /// was found and the policy does not allow style color overrides.
    pub fn resolve_title_color<S>(&self, surface: &Surface, sink: &mut S, slot: SlotId) -> Option<Argb>
    where
        S: ColorSink + ?Sized,
    {
        self.resolve(surface, LabelRole::Title, sink, slot)
    }

    /// Content counterpart of [`resolve_title_color`](Self::resolve_title_color)
    pub fn resolve_content_color<S>(
        &self,
        surface: &Surface,
        sink: &mut S,
        slot: SlotId,
    ) -> Option<Argb>
    where
        S: ColorSink + ?Sized,
    {
        self.resolve(surface, LabelRole::Content, sink, slot)
    }

    /// Resolve and apply both colors
    pub fn resolve_colors<S>(
        &self,
        surface: &Surface,
        sink: &mut S,
        title_slot: SlotId,
        content_slot: SlotId,
    ) -> (Option<Argb>, Option<Argb>)
    where
        S: ColorSink + ?Sized,
    {
        let title = self.resolve_title_color(surface, sink, title_slot);
        let content = self.resolve_content_color(surface, sink, content_slot);
        (title, content)
    }

    /// Classify from async code without blocking the runtime
    pub async fn classify_async(&self, surface: &Surface) -> Classification {
        self.dispatcher.ensure_computed_async(surface).await
    }

    fn resolve<S>(&self, surface: &Surface, role: LabelRole, sink: &mut S, slot: SlotId) -> Option<Argb>
    where
        S: ColorSink + ?Sized,
    {
        let classification = self.dispatcher.ensure_computed(surface);
        let policy = self.policy();
        let fallback = |dark: bool| {
            policy.style_colors_supported.then(|| match role {
                LabelRole::Title => policy.title_fallback(dark),
                LabelRole::Content => policy.content_fallback(dark),
            })
        };

        let cache = surface.cache();
        let resolved = match role {
            LabelRole::Title => cache.resolve_title(fallback),
            LabelRole::Content => cache.resolve_content(fallback),
        };

        let color = match resolved {
            ColorSlot::Resolved(color) => Some(color),
            ColorSlot::Undefined if cache.is_computed() => None,
            // Nothing committed (wait timed out): answer for this call only.
            ColorSlot::Undefined => {
                let scanned = match role {
                    LabelRole::Title => classification.title,
                    LabelRole::Content => classification.content,
                };
                scanned
                    .color()
                    .or_else(|| fallback(classification.dark_background))
            }
        };

        match color {
            Some(color) => {
                tracing::debug!(surface = %surface.id(), ?role, slot, color = %color, "Applying text color");
                sink.set_text_color(slot, color);
            }
            None => {
                tracing::debug!(surface = %surface.id(), ?role, slot, "No text color to apply");
            }
        }
        color
    }
}
