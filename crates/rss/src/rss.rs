// ABOUTME: The Rss document root: one channel plus optional root attributes and extensions.
// ABOUTME: Attributes are pass-through; the builder does not inject a version attribute.

use serde::Serialize;

use crate::attribute::{find_attribute, Attribute};
use crate::channel::Channel;
use crate::extension::Extension;

/// The `<rss>` document root.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rss {
    channel: Channel,
    attributes: Vec<Attribute>,
    extensions: Vec<Extension>,
}

impl Rss {
    pub fn new(channel: Channel, attributes: Vec<Attribute>, extensions: Vec<Extension>) -> Self {
        Rss {
            channel,
            attributes,
            extensions,
        }
    }

    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    /// The value of the root `version` attribute, if present.
    pub fn version(&self) -> Option<&str> {
        find_attribute(&self.attributes, "version").map(Attribute::value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Description, Link, Title};

    #[test]
    fn test_version_attribute_lookup() {
        let channel = Channel::builder()
            .title(Title::new("t"))
            .link(Link::new("l"))
            .description(Description::new("d"))
            .build()
            .unwrap();
        let rss = Rss::new(channel, vec![Attribute::new("version", "2.0")], vec![]);
        assert_eq!(rss.version(), Some("2.0"));
    }
}
