// ABOUTME: The Extension element: any element outside the core RSS vocabulary.
// ABOUTME: Preserves name (prefix included), attribute order, and raw content for round trips.

use serde::Serialize;

use crate::attribute::Attribute;

/// A namespace-qualified element of arbitrary shape, used for any
/// element the codec does not recognize as core RSS vocabulary.
///
/// `element_name` may carry a namespace prefix (`media:thumbnail`); the
/// name is kept verbatim so re-serializing reproduces the original
/// element. An extension with no content serializes as a self-closing
/// element; one with content (even the empty string) serializes as a
/// start tag, character data, and end tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extension {
    element_name: String,
    attributes: Vec<Attribute>,
    content: Option<String>,
}

impl Extension {
    pub fn new(
        element_name: impl Into<String>,
        attributes: Vec<Attribute>,
        content: Option<String>,
    ) -> Self {
        Extension {
            element_name: element_name.into(),
            attributes,
            content,
        }
    }

    pub fn element_name(&self) -> &str {
        &self.element_name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// The namespace prefix, if the element name contains one. The name
    /// is split exactly once, on the first `:`.
    pub fn prefix(&self) -> Option<&str> {
        self.element_name.split_once(':').map(|(prefix, _)| prefix)
    }

    /// The local part of the element name (the whole name when there is
    /// no prefix).
    pub fn local_name(&self) -> &str {
        self.element_name
            .split_once(':')
            .map(|(_, local)| local)
            .unwrap_or(&self.element_name)
    }
}
