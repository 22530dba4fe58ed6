// ABOUTME: Reconstructs an Rss tree from XML events, the writer's logical inverse.
// ABOUTME: Unrecognized elements are captured as extensions with their raw content preserved.

use std::borrow::Cow;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::attribute::Attribute;
use crate::channel::Channel;
use crate::composites::{
    Category, Cloud, Enclosure, Guid, Image, SkipDays, SkipHours, Source, TextInput,
};
use crate::elements::{
    Author, Comments, Copyright, Day, Description, Docs, Generator, Height, Hour, Language,
    LastBuildDate, Link, ManagingEditor, Name, PubDate, Rating, Title, Ttl, Url, WebMaster, Width,
};
use crate::error::RssError;
use crate::extension::Extension;
use crate::item::Item;
use crate::rss::Rss;

/// Parses a complete RSS document from an in-memory buffer.
///
/// The whole input is held in memory so that unrecognized elements can
/// be captured byte-for-byte from their source spans. Recognized
/// vocabulary goes through the same validating builders as
/// hand-constructed trees; a document that fails validation is never
/// returned partially populated.
pub(crate) fn parse_document(src: &str) -> Result<Rss, RssError> {
    let mut reader = Reader::from_str(src);
    reader.config_mut().trim_text(true);

    let mut root_attributes: Vec<Attribute> = Vec::new();
    let mut channel: Option<Channel> = None;
    let mut extensions: Vec<Extension> = Vec::new();
    let mut seen_root = false;

    loop {
        match reader.read_event().map_err(RssError::codec)? {
            Event::Start(e) if !seen_root => {
                if e.name().as_ref() != b"rss" {
                    return Err(RssError::codec(format!(
                        "expected rss root element, found {}",
                        String::from_utf8_lossy(e.name().as_ref())
                    )));
                }
                seen_root = true;
                root_attributes = attributes_of(&e, &reader)?;
            }
            Event::Empty(e) if !seen_root => {
                if e.name().as_ref() == b"rss" {
                    return Err(RssError::validation(
                        "rss elements MUST contain a channel element.",
                    ));
                }
                return Err(RssError::codec(format!(
                    "expected rss root element, found {}",
                    String::from_utf8_lossy(e.name().as_ref())
                )));
            }
            Event::Start(e) => match e.name().as_ref() {
                b"channel" => channel = Some(parse_channel(&mut reader, src)?),
                _ => extensions.push(capture_extension(&mut reader, src, &e)?),
            },
            Event::Empty(e) => extensions.push(empty_extension(&e, &reader)?),
            Event::End(e) if e.name().as_ref() == b"rss" => break,
            Event::Eof => {
                return Err(RssError::codec(if seen_root {
                    "unexpected end of document inside rss"
                } else {
                    "document contains no rss element"
                }))
            }
            _ => {}
        }
    }

    let channel = channel
        .ok_or_else(|| RssError::validation("rss elements MUST contain a channel element."))?;
    Ok(Rss::new(channel, root_attributes, extensions))
}

fn parse_channel<'s>(reader: &mut Reader<&'s [u8]>, src: &'s str) -> Result<Channel, RssError> {
    let mut builder = Channel::builder();
    let mut categories: Vec<Category> = Vec::new();
    let mut items: Vec<Item> = Vec::new();
    let mut extensions: Vec<Extension> = Vec::new();

    loop {
        match reader.read_event().map_err(RssError::codec)? {
            Event::Start(e) => match e.name().as_ref() {
                b"title" => builder = builder.title(Title::new(read_text(reader, src, &e)?)),
                b"link" => builder = builder.link(Link::new(read_text(reader, src, &e)?)),
                b"description" => {
                    builder = builder.description(Description::new(read_text(reader, src, &e)?))
                }
                b"language" => {
                    builder = builder.language(Language::new(read_text(reader, src, &e)?))
                }
                b"copyright" => {
                    builder = builder.copyright(Copyright::new(read_text(reader, src, &e)?)?)
                }
                b"managingEditor" => {
                    builder =
                        builder.managing_editor(ManagingEditor::new(read_text(reader, src, &e)?))
                }
                b"webMaster" => {
                    builder = builder.web_master(WebMaster::new(read_text(reader, src, &e)?))
                }
                b"pubDate" => {
                    builder = builder.pub_date(PubDate::parse(&read_text(reader, src, &e)?)?)
                }
                b"lastBuildDate" => {
                    builder = builder
                        .last_build_date(LastBuildDate::parse(&read_text(reader, src, &e)?)?)
                }
                b"category" => categories.push(parse_category(reader, src, &e)?),
                b"generator" => {
                    builder = builder.generator(Generator::new(read_text(reader, src, &e)?))
                }
                b"docs" => builder = builder.docs(Docs::new(read_text(reader, src, &e)?)?),
                b"cloud" => {
                    let attributes = attributes_of(&e, reader)?;
                    skip_element(reader, &e)?;
                    builder = builder.cloud(Cloud::new(attributes)?);
                }
                b"ttl" => builder = builder.ttl(Ttl::new(read_text(reader, src, &e)?)),
                b"image" => builder = builder.image(parse_image(reader, src)?),
                b"rating" => builder = builder.rating(Rating::new(read_text(reader, src, &e)?)?),
                b"textInput" => builder = builder.text_input(parse_text_input(reader, src)?),
                b"skipHours" => builder = builder.skip_hours(parse_skip_hours(reader, src)?),
                b"skipDays" => builder = builder.skip_days(parse_skip_days(reader, src)?),
                b"item" => items.push(parse_item(reader, src)?),
                _ => extensions.push(capture_extension(reader, src, &e)?),
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"cloud" => builder = builder.cloud(Cloud::new(attributes_of(&e, reader)?)?),
                _ => extensions.push(empty_extension(&e, reader)?),
            },
            Event::End(e) if e.name().as_ref() == b"channel" => break,
            Event::Eof => {
                return Err(RssError::codec("unexpected end of document inside channel"))
            }
            _ => {}
        }
    }

    builder
        .categories(categories)
        .items(items)
        .extensions(extensions)
        .build()
}

fn parse_item<'s>(reader: &mut Reader<&'s [u8]>, src: &'s str) -> Result<Item, RssError> {
    let mut builder = Item::builder();
    let mut categories: Vec<Category> = Vec::new();
    let mut extensions: Vec<Extension> = Vec::new();

    loop {
        match reader.read_event().map_err(RssError::codec)? {
            Event::Start(e) => match e.name().as_ref() {
                b"title" => builder = builder.title(Title::new(read_text(reader, src, &e)?)),
                b"description" => {
                    builder = builder.description(Description::new(read_text(reader, src, &e)?))
                }
                b"link" => builder = builder.link(Link::new(read_text(reader, src, &e)?)),
                b"author" => builder = builder.author(Author::new(read_text(reader, src, &e)?)),
                b"category" => categories.push(parse_category(reader, src, &e)?),
                b"comments" => {
                    builder = builder.comments(Comments::new(read_text(reader, src, &e)?))
                }
                b"enclosure" => {
                    let attributes = attributes_of(&e, reader)?;
                    let text = read_text(reader, src, &e)?;
                    builder = builder.enclosure(Enclosure::with_text(attributes, text)?);
                }
                b"guid" => {
                    let attributes = attributes_of(&e, reader)?;
                    let is_permalink = take_attribute(attributes, "isPermaLink");
                    builder = builder.guid(Guid::new(is_permalink, read_text(reader, src, &e)?));
                }
                b"pubDate" => {
                    builder = builder.pub_date(PubDate::parse(&read_text(reader, src, &e)?)?)
                }
                b"source" => {
                    let attributes = attributes_of(&e, reader)?;
                    let url = take_attribute(attributes, "url");
                    builder = builder.source(Source::new(url, read_text(reader, src, &e)?));
                }
                _ => extensions.push(capture_extension(reader, src, &e)?),
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"enclosure" => {
                    builder = builder.enclosure(Enclosure::new(attributes_of(&e, reader)?)?)
                }
                _ => extensions.push(empty_extension(&e, reader)?),
            },
            Event::End(e) if e.name().as_ref() == b"item" => break,
            Event::Eof => return Err(RssError::codec("unexpected end of document inside item")),
            _ => {}
        }
    }

    builder.categories(categories).extensions(extensions).build()
}

fn parse_image<'s>(reader: &mut Reader<&'s [u8]>, src: &'s str) -> Result<Image, RssError> {
    let mut url: Option<Url> = None;
    let mut title: Option<Title> = None;
    let mut link: Option<Link> = None;
    let mut width: Option<Width> = None;
    let mut height: Option<Height> = None;
    let mut description: Option<Description> = None;

    loop {
        match reader.read_event().map_err(RssError::codec)? {
            Event::Start(e) => match e.name().as_ref() {
                b"url" => url = Some(Url::new(read_text(reader, src, &e)?)),
                b"title" => title = Some(Title::new(read_text(reader, src, &e)?)),
                b"link" => link = Some(Link::new(read_text(reader, src, &e)?)),
                b"width" => width = Some(Width::new(read_text(reader, src, &e)?)?),
                b"height" => height = Some(Height::new(read_text(reader, src, &e)?)?),
                b"description" => {
                    description = Some(Description::new(read_text(reader, src, &e)?))
                }
                _ => {
                    tracing::warn!(
                        element = %String::from_utf8_lossy(e.name().as_ref()),
                        "skipping unrecognized element inside image"
                    );
                    skip_element(reader, &e)?;
                }
            },
            Event::End(e) if e.name().as_ref() == b"image" => break,
            Event::Eof => return Err(RssError::codec("unexpected end of document inside image")),
            _ => {}
        }
    }

    Ok(Image::new(
        url.ok_or_else(|| RssError::validation("image elements MUST contain a url element."))?,
        title.ok_or_else(|| RssError::validation("image elements MUST contain a title element."))?,
        link.ok_or_else(|| RssError::validation("image elements MUST contain a link element."))?,
        width,
        height,
        description,
    ))
}

fn parse_text_input<'s>(
    reader: &mut Reader<&'s [u8]>,
    src: &'s str,
) -> Result<TextInput, RssError> {
    let mut title: Option<Title> = None;
    let mut description: Option<Description> = None;
    let mut name: Option<Name> = None;
    let mut link: Option<Link> = None;

    loop {
        match reader.read_event().map_err(RssError::codec)? {
            Event::Start(e) => match e.name().as_ref() {
                b"title" => title = Some(Title::new(read_text(reader, src, &e)?)),
                b"description" => {
                    description = Some(Description::new(read_text(reader, src, &e)?))
                }
                b"name" => name = Some(Name::new(read_text(reader, src, &e)?)),
                b"link" => link = Some(Link::new(read_text(reader, src, &e)?)),
                _ => skip_element(reader, &e)?,
            },
            Event::End(e) if e.name().as_ref() == b"textInput" => break,
            Event::Eof => {
                return Err(RssError::codec("unexpected end of document inside textInput"))
            }
            _ => {}
        }
    }

    Ok(TextInput::new(
        title.ok_or_else(|| {
            RssError::validation("textInput elements MUST contain a title element.")
        })?,
        description.ok_or_else(|| {
            RssError::validation("textInput elements MUST contain a description element.")
        })?,
        name.ok_or_else(|| {
            RssError::validation("textInput elements MUST contain a name element.")
        })?,
        link.ok_or_else(|| {
            RssError::validation("textInput elements MUST contain a link element.")
        })?,
    ))
}

fn parse_skip_hours<'s>(
    reader: &mut Reader<&'s [u8]>,
    src: &'s str,
) -> Result<SkipHours, RssError> {
    let mut hours: Vec<Hour> = Vec::new();
    loop {
        match reader.read_event().map_err(RssError::codec)? {
            Event::Start(e) if e.name().as_ref() == b"hour" => {
                hours.push(Hour::new(read_text(reader, src, &e)?)?);
            }
            Event::Start(e) => skip_element(reader, &e)?,
            Event::End(e) if e.name().as_ref() == b"skipHours" => break,
            Event::Eof => {
                return Err(RssError::codec("unexpected end of document inside skipHours"))
            }
            _ => {}
        }
    }
    SkipHours::new(hours)
}

fn parse_skip_days<'s>(reader: &mut Reader<&'s [u8]>, src: &'s str) -> Result<SkipDays, RssError> {
    let mut days: Vec<Day> = Vec::new();
    loop {
        match reader.read_event().map_err(RssError::codec)? {
            Event::Start(e) if e.name().as_ref() == b"day" => {
                days.push(Day::new(read_text(reader, src, &e)?)?);
            }
            Event::Start(e) => skip_element(reader, &e)?,
            Event::End(e) if e.name().as_ref() == b"skipDays" => break,
            Event::Eof => {
                return Err(RssError::codec("unexpected end of document inside skipDays"))
            }
            _ => {}
        }
    }
    SkipDays::new(days)
}

fn parse_category<'s>(
    reader: &mut Reader<&'s [u8]>,
    src: &'s str,
    e: &BytesStart<'_>,
) -> Result<Category, RssError> {
    let attributes = attributes_of(e, reader)?;
    let domain = take_attribute(attributes, "domain");
    Ok(Category::new(domain, read_text(reader, src, e)?))
}

/// Captures an unrecognized element as an extension, preserving its
/// name, attribute order, and raw inner content.
fn capture_extension<'s>(
    reader: &mut Reader<&'s [u8]>,
    src: &'s str,
    e: &BytesStart<'_>,
) -> Result<Extension, RssError> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let attributes = attributes_of(e, reader)?;
    let content = read_text(reader, src, e)?;
    tracing::debug!(element = %name, "captured unrecognized element as extension");
    Ok(Extension::new(name, attributes, Some(content)))
}

fn empty_extension(
    e: &BytesStart<'_>,
    reader: &Reader<&[u8]>,
) -> Result<Extension, RssError> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let attributes = attributes_of(e, reader)?;
    tracing::debug!(element = %name, "captured unrecognized element as extension");
    Ok(Extension::new(name, attributes, None))
}

/// Reads everything up to the element's matching end tag as raw source
/// text (markup included) and resolves entity references.
fn read_text<'s>(
    reader: &mut Reader<&'s [u8]>,
    src: &'s str,
    e: &BytesStart<'_>,
) -> Result<String, RssError> {
    let span = reader.read_to_end(e.name()).map_err(RssError::codec)?;
    let raw = &src[span.start as usize..span.end as usize];
    quick_xml::escape::unescape(raw)
        .map(Cow::into_owned)
        .map_err(RssError::codec)
}

/// Consumes an element's content without keeping it.
fn skip_element(reader: &mut Reader<&[u8]>, e: &BytesStart<'_>) -> Result<(), RssError> {
    reader.read_to_end(e.name()).map_err(RssError::codec)?;
    Ok(())
}

fn attributes_of(e: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<Vec<Attribute>, RssError> {
    let decoder = reader.decoder();
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(RssError::codec)?;
        let name = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .decode_and_unescape_value(decoder)
            .map_err(RssError::codec)?
            .into_owned();
        attributes.push(Attribute::new(name, value));
    }
    Ok(attributes)
}

/// Pulls the named attribute out of a parsed attribute list.
fn take_attribute(attributes: Vec<Attribute>, name: &str) -> Option<Attribute> {
    attributes.into_iter().find(|attr| attr.name() == name)
}
