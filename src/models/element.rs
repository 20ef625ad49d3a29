use packed_color::Argb;
use serde::{Deserialize, Serialize};

/// Role a label plays on a surface, attached when the tree is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelRole {
    Title,
    Content,
}

/// Read-only snapshot of one node in a rendered surface.
///
/// A node carrying `text` is a label; its children, if any, are not visited.
/// Everything else is a container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderedElement {
    /// Explicit role tag, if the tree builder assigned one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<LabelRole>,

    /// Text payload (labels only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Current effective text color. A label without one cannot be read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Argb>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderedElement>,
}

impl RenderedElement {
    /// An empty container
    pub fn container() -> Self {
        Self::default()
    }

    /// A label with text and its effective color
    pub fn label(text: impl Into<String>, color: Argb) -> Self {
        Self {
            text: Some(text.into()),
            text_color: Some(color),
            ..Self::default()
        }
    }

    /// Tag this element with a role
    pub fn with_role(mut self, role: LabelRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Append a child (builder style)
    pub fn with_child(mut self, child: RenderedElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = RenderedElement>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn is_label(&self) -> bool {
        self.text.is_some()
    }

    /// Parse a tree snapshot serialized by the host.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
