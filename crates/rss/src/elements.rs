// ABOUTME: Leaf value elements of the RSS 2.0 vocabulary, one newtype per element.
// ABOUTME: Validation happens at construction; Display renders the element's XML form.

use std::fmt;

use chrono::{DateTime, FixedOffset};

use crate::error::RssError;

/// Declares a plain text element: wraps a string with no content rule.
macro_rules! text_element {
    ($(#[$doc:meta])* $name:ident, $tag:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize)]
        pub struct $name {
            text: String,
        }

        impl $name {
            pub fn new(text: impl Into<String>) -> Self {
                $name { text: text.into() }
            }

            pub fn text(&self) -> &str {
                &self.text
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!("<", $tag, ">{}</", $tag, ">"), self.text)
            }
        }
    };
}

/// Declares a text element that rejects blank content.
macro_rules! nonblank_text_element {
    ($(#[$doc:meta])* $name:ident, $tag:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize)]
        pub struct $name {
            text: String,
        }

        impl $name {
            pub fn new(text: impl Into<String>) -> Result<Self, RssError> {
                let text = text.into();
                if text.is_empty() {
                    return Err(RssError::validation(concat!(
                        $tag,
                        " SHOULD NOT be blank."
                    )));
                }
                Ok($name { text })
            }

            pub fn text(&self) -> &str {
                &self.text
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!("<", $tag, ">{}</", $tag, ">"), self.text)
            }
        }
    };
}

/// Declares an image dimension element: integer text bounded above.
macro_rules! dimension_element {
    ($(#[$doc:meta])* $name:ident, $tag:literal, $max:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize)]
        pub struct $name {
            text: String,
            value: i64,
        }

        impl $name {
            pub fn new(text: impl Into<String>) -> Result<Self, RssError> {
                let text = text.into().trim().to_string();
                let value: i64 = text.parse().map_err(|_| {
                    RssError::validation(concat!($tag, " must be an integer value."))
                })?;
                if value > $max {
                    return Err(RssError::validation(concat!(
                        $tag,
                        " must be an integer value of ",
                        $max,
                        " or less."
                    )));
                }
                Ok($name { text, value })
            }

            pub fn text(&self) -> &str {
                &self.text
            }

            pub fn value(&self) -> i64 {
                self.value
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!("<", $tag, ">{}</", $tag, ">"), self.text)
            }
        }
    };
}

/// Declares an RFC 822 date element backed by a fixed-offset datetime.
macro_rules! date_element {
    ($(#[$doc:meta])* $name:ident, $tag:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize)]
        pub struct $name {
            date: DateTime<FixedOffset>,
        }

        impl $name {
            pub fn new(date: DateTime<FixedOffset>) -> Self {
                $name { date }
            }

            /// Parses an RFC 822 date string, accepting the common lenient
            /// variants found in real-world feeds.
            pub fn parse(text: &str) -> Result<Self, RssError> {
                crate::dates::parse_date(text)
                    .map($name::new)
                    .ok_or_else(|| {
                        RssError::validation(format!(
                            concat!($tag, " is not a recognized RFC 822 date: {}"),
                            text
                        ))
                    })
            }

            pub fn date(&self) -> DateTime<FixedOffset> {
                self.date
            }

            /// The RFC 822 rendering used in serialized output.
            pub fn text(&self) -> String {
                self.date.to_rfc2822()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    concat!("<", $tag, ">{}</", $tag, ">"),
                    self.date.to_rfc2822()
                )
            }
        }
    };
}

text_element!(
    /// The `<title>` element: the name of the channel, item, or image.
    Title,
    "title"
);

text_element!(
    /// The `<link>` element: the URL of the HTML website corresponding
    /// to the channel, item, or image.
    Link,
    "link"
);

text_element!(
    /// The `<description>` element. May contain literal inline markup,
    /// which the codec emits as real elements rather than escaped text.
    Description,
    "description"
);

text_element!(
    /// The `<language>` element: the language the channel is written in.
    Language,
    "language"
);

text_element!(
    /// The `<managingEditor>` element: email address of the person
    /// responsible for editorial content.
    ManagingEditor,
    "managingEditor"
);

text_element!(
    /// The `<webMaster>` element: email address of the person
    /// responsible for technical issues.
    WebMaster,
    "webMaster"
);

text_element!(
    /// The `<generator>` element: the program that generated the channel.
    /// Serialized output always carries the library's own stamp in this
    /// position; see the codec documentation.
    Generator,
    "generator"
);

text_element!(
    /// The `<ttl>` element: minutes a channel can be cached.
    Ttl,
    "ttl"
);

text_element!(
    /// The `<comments>` element: URL of the comments page for an item.
    Comments,
    "comments"
);

text_element!(
    /// The `<author>` element: email address of the item's author.
    Author,
    "author"
);

text_element!(
    /// The `<name>` element: the name of the text object in a text
    /// input area.
    Name,
    "name"
);

text_element!(
    /// The `<url>` element of an image.
    Url,
    "url"
);

nonblank_text_element!(
    /// The `<copyright>` element: copyright notice for channel content.
    Copyright,
    "copyright"
);

nonblank_text_element!(
    /// The `<docs>` element: URL of the documentation for the feed format.
    Docs,
    "docs"
);

nonblank_text_element!(
    /// The `<rating>` element: the PICS rating for the channel.
    Rating,
    "rating"
);

dimension_element!(
    /// The `<width>` element of an image.
    Width,
    "width",
    400
);

dimension_element!(
    /// The `<height>` element of an image.
    Height,
    "height",
    400
);

date_element!(
    /// The `<pubDate>` element: publication date of the channel or item.
    PubDate,
    "pubDate"
);

date_element!(
    /// The `<lastBuildDate>` element: when channel content last changed.
    LastBuildDate,
    "lastBuildDate"
);

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// A `<day>` child of `<skipDays>`; one of the seven weekday names.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Day {
    text: String,
}

impl Day {
    pub fn new(text: impl Into<String>) -> Result<Self, RssError> {
        let text = text.into();
        if !WEEKDAYS.contains(&text.as_str()) {
            return Err(RssError::validation(
                "day elements MUST have a value of Monday, Tuesday, Wednesday, Thursday, Friday, Saturday or Sunday.",
            ));
        }
        Ok(Day { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<day>{}</day>", self.text)
    }
}

/// An `<hour>` child of `<skipHours>`; an integer from 0 to 23.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Hour {
    text: String,
    value: i64,
}

impl Hour {
    pub fn new(text: impl Into<String>) -> Result<Self, RssError> {
        let text = text.into();
        let value: i64 = text.trim().parse().map_err(|_| {
            RssError::validation("hour elements MUST have an integer value between 0 and 23.")
        })?;
        if !(0..=23).contains(&value) {
            return Err(RssError::validation(
                "hour elements MUST have an integer value between 0 and 23.",
            ));
        }
        Ok(Hour { text, value })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<hour>{}</hour>", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_rejection() {
        assert!(Copyright::new("").is_err());
        assert!(Docs::new("").is_err());
        assert!(Rating::new("").is_err());

        let copyright = Copyright::new("© 2026 Example").unwrap();
        assert_eq!(copyright.text(), "© 2026 Example");
    }

    #[test]
    fn test_display_renders_element_form() {
        let copyright = Copyright::new("All rights reserved").unwrap();
        assert_eq!(
            copyright.to_string(),
            "<copyright>All rights reserved</copyright>"
        );
        assert_eq!(Title::new("News").to_string(), "<title>News</title>");
        assert_eq!(
            Docs::new("https://www.rssboard.org/rss-specification")
                .unwrap()
                .to_string(),
            "<docs>https://www.rssboard.org/rss-specification</docs>"
        );
    }

    #[test]
    fn test_blank_allowed_for_plain_elements() {
        assert_eq!(Title::new("").text(), "");
        assert_eq!(Link::new("").text(), "");
    }

    #[test]
    fn test_dimension_bounds() {
        assert!(Width::new("401").is_err());
        assert!(Height::new("401").is_err());
        assert_eq!(Width::new("400").unwrap().value(), 400);
        assert_eq!(Height::new("0").unwrap().value(), 0);
        assert!(Width::new("wide").is_err());
    }

    #[test]
    fn test_day_names() {
        assert!(Day::new("Monday").is_ok());
        assert!(Day::new("Sunday").is_ok());
        assert!(Day::new("monday").is_err());
        assert!(Day::new("Funday").is_err());
    }

    #[test]
    fn test_hour_range() {
        assert_eq!(Hour::new("0").unwrap().value(), 0);
        assert_eq!(Hour::new("23").unwrap().value(), 23);
        assert!(Hour::new("24").is_err());
        assert!(Hour::new("-1").is_err());
        assert!(Hour::new("noon").is_err());
    }

    #[test]
    fn test_pub_date_parse_and_render() {
        let date = PubDate::parse("Mon, 02 Jan 2006 15:04:05 -0700").unwrap();
        assert_eq!(date.text(), "Mon, 2 Jan 2006 15:04:05 -0700");
        assert!(PubDate::parse("not a date").is_err());
    }
}
