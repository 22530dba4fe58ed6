// ABOUTME: The Attribute name/value pair, the atomic building block for element attributes.
// ABOUTME: Also provides case-insensitive lookup over attribute lists.

use serde::Serialize;

/// An XML attribute: a name and a (possibly empty) value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    name: String,
    value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Finds an attribute by name (case-insensitive), returning a reference
/// to the first match.
pub fn find_attribute<'a>(attributes: &'a [Attribute], name: &str) -> Option<&'a Attribute> {
    attributes
        .iter()
        .find(|attr| attr.name.eq_ignore_ascii_case(name))
}
