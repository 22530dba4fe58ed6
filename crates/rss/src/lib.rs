// ABOUTME: RSS 2.0 document model and XML codec for rsskit.
// ABOUTME: Immutable validated trees, a fixed-order writer, and a round-trippable reader.

//! Models an RSS 2.0 feed as an immutable, validated object tree and
//! converts that tree to and from XML text.
//!
//! Every element is built through a validating constructor or builder;
//! a tree that exists is schema-conformant, and serializing it cannot
//! fail for content reasons. Parsing is the writer's logical inverse:
//! elements outside the core vocabulary are preserved as [`Extension`]
//! values so third-party feeds round-trip faithfully. The one
//! deliberate asymmetry is the channel's `<generator>`, which serialized
//! output always replaces with this library's own stamp.
//!
//! ```
//! use rsskit::{Attribute, Channel, Description, Link, Rss, RssDoc, Title};
//!
//! # fn main() -> Result<(), rsskit::RssError> {
//! let channel = Channel::builder()
//!     .title(Title::new("Example News"))
//!     .link(Link::new("https://example.com"))
//!     .description(Description::new("News about examples"))
//!     .build()?;
//! let rss = Rss::new(channel, vec![Attribute::new("version", "2.0")], vec![]);
//!
//! let doc = RssDoc::default();
//! let xml = doc.write_to_string(&rss)?;
//! let parsed = doc.parse_str(&xml)?;
//! assert_eq!(parsed.channel().title().text(), "Example News");
//! # Ok(())
//! # }
//! ```

pub mod attribute;
pub mod channel;
pub mod composites;
pub mod doc;
pub mod elements;
pub mod error;
pub mod extension;
pub mod item;
pub mod rss;

mod dates;
mod markup;
mod reader;
mod writer;

pub use attribute::{find_attribute, Attribute};
pub use channel::{Channel, ChannelBuilder};
pub use composites::{
    Category, Cloud, Enclosure, Guid, Image, SkipDays, SkipHours, Source, TextInput,
};
pub use doc::{OutputStyle, RssDoc};
pub use elements::{
    Author, Comments, Copyright, Day, Description, Docs, Generator, Height, Hour, Language,
    LastBuildDate, Link, ManagingEditor, Name, PubDate, Rating, Title, Ttl, Url, WebMaster, Width,
};
pub use error::RssError;
pub use extension::Extension;
pub use item::{Item, ItemBuilder};
pub use rss::Rss;
