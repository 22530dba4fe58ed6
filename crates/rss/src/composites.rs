// ABOUTME: Composite RSS elements that group leaf elements or attributes under
// ABOUTME: cross-field validation: enclosure, cloud, image, textInput, guid, source, skip lists.

use serde::Serialize;

use crate::attribute::{find_attribute, Attribute};
use crate::elements::{Day, Description, Height, Hour, Link, Name, Title, Url, Width};
use crate::error::RssError;

/// The `<category>` element: free-text taxonomy with an optional
/// `domain` attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    domain: Option<Attribute>,
    text: String,
}

impl Category {
    pub fn new(domain: Option<Attribute>, text: impl Into<String>) -> Self {
        Category {
            domain,
            text: text.into(),
        }
    }

    pub fn domain(&self) -> Option<&Attribute> {
        self.domain.as_ref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

const CLOUD_ATTRIBUTES: [&str; 5] = ["domain", "port", "path", "registerProcedure", "protocol"];

/// The `<cloud>` element: a publish-subscribe endpoint for the channel.
///
/// All five documented attributes are required.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cloud {
    attributes: Vec<Attribute>,
}

impl Cloud {
    pub fn new(attributes: Vec<Attribute>) -> Result<Self, RssError> {
        for required in CLOUD_ATTRIBUTES {
            if !attributes.iter().any(|attr| attr.name() == required) {
                return Err(RssError::validation(format!(
                    "cloud elements MUST contain the {required} attribute."
                )));
            }
        }
        Ok(Cloud { attributes })
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}

/// The `<enclosure>` element: a media object attached to an item.
///
/// The `url`, `length`, and `type` attributes are all required.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enclosure {
    attributes: Vec<Attribute>,
    text: String,
}

impl Enclosure {
    pub fn new(attributes: Vec<Attribute>) -> Result<Self, RssError> {
        Enclosure::with_text(attributes, "")
    }

    pub fn with_text(
        attributes: Vec<Attribute>,
        text: impl Into<String>,
    ) -> Result<Self, RssError> {
        for required in ["url", "length", "type"] {
            if !attributes.iter().any(|attr| attr.name() == required) {
                return Err(RssError::validation(format!(
                    "enclosure elements MUST contain the {required} attribute."
                )));
            }
        }
        Ok(Enclosure {
            attributes,
            text: text.into(),
        })
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn url(&self) -> Option<&str> {
        find_attribute(&self.attributes, "url").map(Attribute::value)
    }

    pub fn length(&self) -> Option<&str> {
        find_attribute(&self.attributes, "length").map(Attribute::value)
    }

    pub fn mime_type(&self) -> Option<&str> {
        find_attribute(&self.attributes, "type").map(Attribute::value)
    }
}

/// The `<guid>` element: a string that uniquely identifies the item,
/// with an optional `isPermaLink` attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Guid {
    is_permalink: Option<Attribute>,
    text: String,
}

impl Guid {
    pub fn new(is_permalink: Option<Attribute>, text: impl Into<String>) -> Self {
        Guid {
            is_permalink,
            text: text.into(),
        }
    }

    pub fn is_permalink(&self) -> Option<&Attribute> {
        self.is_permalink.as_ref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// The `<source>` element: the channel an item came from, with an
/// optional `url` attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Source {
    url: Option<Attribute>,
    text: String,
}

impl Source {
    pub fn new(url: Option<Attribute>, text: impl Into<String>) -> Self {
        Source {
            url,
            text: text.into(),
        }
    }

    pub fn url(&self) -> Option<&Attribute> {
        self.url.as_ref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// The `<image>` element: a GIF/JPEG/PNG image displayed with the
/// channel. `url`, `title`, and `link` are required children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    url: Url,
    title: Title,
    link: Link,
    width: Option<Width>,
    height: Option<Height>,
    description: Option<Description>,
}

impl Image {
    pub fn new(
        url: Url,
        title: Title,
        link: Link,
        width: Option<Width>,
        height: Option<Height>,
        description: Option<Description>,
    ) -> Self {
        Image {
            url,
            title,
            link,
            width,
            height,
            description,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn link(&self) -> &Link {
        &self.link
    }

    pub fn width(&self) -> Option<&Width> {
        self.width.as_ref()
    }

    pub fn height(&self) -> Option<&Height> {
        self.height.as_ref()
    }

    pub fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }
}

/// The `<textInput>` element: a text box displayed with the channel.
/// All four children are required.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextInput {
    title: Title,
    description: Description,
    name: Name,
    link: Link,
}

impl TextInput {
    pub fn new(title: Title, description: Description, name: Name, link: Link) -> Self {
        TextInput {
            title,
            description,
            name,
            link,
        }
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn link(&self) -> &Link {
        &self.link
    }
}

/// The `<skipHours>` element: up to 24 distinct `<hour>` children
/// telling aggregators which hours to skip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkipHours {
    hours: Vec<Hour>,
}

impl SkipHours {
    pub fn new(hours: Vec<Hour>) -> Result<Self, RssError> {
        if hours.is_empty() {
            return Err(RssError::validation(
                "skipHours elements MUST contain at least one hour element.",
            ));
        }
        if hours.len() > 24 {
            return Err(RssError::validation(
                "skipHours elements can contain up to 24 hour elements.",
            ));
        }
        for (i, hour) in hours.iter().enumerate() {
            if hours[..i].iter().any(|seen| seen.value() == hour.value()) {
                return Err(RssError::validation(
                    "skipHours elements MUST NOT contain duplicate hour elements.",
                ));
            }
        }
        Ok(SkipHours { hours })
    }

    pub fn hours(&self) -> &[Hour] {
        &self.hours
    }
}

/// The `<skipDays>` element: up to 7 distinct `<day>` children telling
/// aggregators which days to skip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkipDays {
    days: Vec<Day>,
}

impl SkipDays {
    pub fn new(days: Vec<Day>) -> Result<Self, RssError> {
        if days.is_empty() {
            return Err(RssError::validation(
                "skipDays elements MUST contain at least one day element.",
            ));
        }
        if days.len() > 7 {
            return Err(RssError::validation(
                "skipDays elements can contain up to 7 day elements.",
            ));
        }
        for (i, day) in days.iter().enumerate() {
            if days[..i].iter().any(|seen| seen.text() == day.text()) {
                return Err(RssError::validation(
                    "skipDays elements MUST NOT contain duplicate day elements.",
                ));
            }
        }
        Ok(SkipDays { days })
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enclosure_attrs() -> Vec<Attribute> {
        vec![
            Attribute::new("url", "http://example.com/episode.mp3"),
            Attribute::new("length", "12216320"),
            Attribute::new("type", "audio/mpeg"),
        ]
    }

    #[test]
    fn test_enclosure_requires_all_three_attributes() {
        assert!(Enclosure::new(enclosure_attrs()).is_ok());

        for missing in ["url", "length", "type"] {
            let attrs: Vec<Attribute> = enclosure_attrs()
                .into_iter()
                .filter(|attr| attr.name() != missing)
                .collect();
            let err = Enclosure::new(attrs).unwrap_err();
            assert!(
                err.to_string().contains(missing),
                "error should name the missing attribute: {err}"
            );
        }
    }

    #[test]
    fn test_enclosure_attribute_accessors() {
        let enclosure = Enclosure::new(enclosure_attrs()).unwrap();
        assert_eq!(enclosure.url(), Some("http://example.com/episode.mp3"));
        assert_eq!(enclosure.length(), Some("12216320"));
        assert_eq!(enclosure.mime_type(), Some("audio/mpeg"));
    }

    #[test]
    fn test_cloud_requires_documented_attributes() {
        let attrs = vec![
            Attribute::new("domain", "rpc.sys.com"),
            Attribute::new("port", "80"),
            Attribute::new("path", "/RPC2"),
            Attribute::new("registerProcedure", "pingMe"),
            Attribute::new("protocol", "soap"),
        ];
        assert!(Cloud::new(attrs.clone()).is_ok());

        let missing_port: Vec<Attribute> = attrs
            .into_iter()
            .filter(|attr| attr.name() != "port")
            .collect();
        assert!(Cloud::new(missing_port).is_err());
    }

    #[test]
    fn test_skip_hours_bounds() {
        assert!(SkipHours::new(vec![]).is_err());

        let hours: Vec<Hour> = (0..24).map(|h| Hour::new(h.to_string()).unwrap()).collect();
        assert!(SkipHours::new(hours).is_ok());

        let duplicate = vec![Hour::new("3").unwrap(), Hour::new("3").unwrap()];
        assert!(SkipHours::new(duplicate).is_err());
    }

    #[test]
    fn test_skip_days_bounds() {
        let days = vec![Day::new("Saturday").unwrap(), Day::new("Sunday").unwrap()];
        assert!(SkipDays::new(days).is_ok());

        let duplicate = vec![Day::new("Monday").unwrap(), Day::new("Monday").unwrap()];
        assert!(SkipDays::new(duplicate).is_err());
        assert!(SkipDays::new(vec![]).is_err());
    }

    #[test]
    fn test_category_with_domain() {
        let category = Category::new(
            Some(Attribute::new("domain", "http://www.fool.com/cusips")),
            "MSFT",
        );
        assert_eq!(category.domain().unwrap().value(), "http://www.fool.com/cusips");
        assert_eq!(category.text(), "MSFT");
    }
}
