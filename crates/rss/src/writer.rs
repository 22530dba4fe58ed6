// ABOUTME: Serializes an Rss tree into XML events in the fixed RSS 2.0 element order.
// ABOUTME: Substitutes the channel generator with the library stamp and expands embedded markup.

use std::io::Write;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::attribute::Attribute;
use crate::channel::Channel;
use crate::composites::{
    Category, Cloud, Enclosure, Guid, Image, SkipDays, SkipHours, Source, TextInput,
};
use crate::elements::{Description, Generator};
use crate::error::RssError;
use crate::extension::Extension;
use crate::item::Item;
use crate::markup::{self, MarkupToken};
use crate::rss::Rss;

/// Writes the whole document below the XML declaration.
///
/// `generator` is the library stamp that replaces whatever generator
/// value the channel carries.
pub(crate) fn write_rss<W: Write>(
    writer: &mut Writer<W>,
    rss: &Rss,
    generator: &Generator,
) -> Result<(), RssError> {
    let mut root = BytesStart::new("rss");
    for attr in rss.attributes() {
        root.push_attribute((attr.name(), attr.value()));
    }
    emit(writer, Event::Start(root))?;

    write_channel(writer, rss.channel(), generator)?;
    write_extensions(writer, rss.extensions())?;

    emit(writer, Event::End(BytesEnd::new("rss")))
}

fn emit<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<(), RssError> {
    writer.write_event(event).map_err(RssError::codec)
}

fn write_channel<W: Write>(
    writer: &mut Writer<W>,
    channel: &Channel,
    generator: &Generator,
) -> Result<(), RssError> {
    emit(writer, Event::Start(BytesStart::new("channel")))?;

    write_simple(writer, "title", channel.title().text())?;
    write_simple(writer, "link", channel.link().text())?;
    write_description(writer, channel.description())?;

    if let Some(language) = channel.language() {
        write_simple(writer, "language", language.text())?;
    }
    if let Some(copyright) = channel.copyright() {
        write_simple(writer, "copyright", copyright.text())?;
    }
    if let Some(editor) = channel.managing_editor() {
        write_simple(writer, "managingEditor", editor.text())?;
    }
    if let Some(web_master) = channel.web_master() {
        write_simple(writer, "webMaster", web_master.text())?;
    }
    if let Some(pub_date) = channel.pub_date() {
        write_simple(writer, "pubDate", &pub_date.text())?;
    }
    if let Some(last_build_date) = channel.last_build_date() {
        write_simple(writer, "lastBuildDate", &last_build_date.text())?;
    }
    for category in channel.categories() {
        write_category(writer, category)?;
    }

    // The generator is always emitted and always carries the library
    // stamp; a caller-supplied value never reaches the output.
    write_simple(writer, "generator", generator.text())?;

    if let Some(docs) = channel.docs() {
        write_simple(writer, "docs", docs.text())?;
    }
    if let Some(cloud) = channel.cloud() {
        write_cloud(writer, cloud)?;
    }
    if let Some(ttl) = channel.ttl() {
        write_simple(writer, "ttl", ttl.text())?;
    }
    if let Some(image) = channel.image() {
        write_image(writer, image)?;
    }
    if let Some(rating) = channel.rating() {
        write_simple(writer, "rating", rating.text())?;
    }
    if let Some(text_input) = channel.text_input() {
        write_text_input(writer, text_input)?;
    }
    if let Some(skip_hours) = channel.skip_hours() {
        write_skip_hours(writer, skip_hours)?;
    }
    if let Some(skip_days) = channel.skip_days() {
        write_skip_days(writer, skip_days)?;
    }
    for item in channel.items() {
        write_item(writer, item)?;
    }
    write_extensions(writer, channel.extensions())?;

    emit(writer, Event::End(BytesEnd::new("channel")))
}

fn write_item<W: Write>(writer: &mut Writer<W>, item: &Item) -> Result<(), RssError> {
    emit(writer, Event::Start(BytesStart::new("item")))?;

    if let Some(title) = item.title() {
        write_simple(writer, "title", title.text())?;
    }
    if let Some(description) = item.description() {
        write_description(writer, description)?;
    }
    if let Some(link) = item.link() {
        write_simple(writer, "link", link.text())?;
    }
    if let Some(author) = item.author() {
        write_simple(writer, "author", author.text())?;
    }
    for category in item.categories() {
        write_category(writer, category)?;
    }
    if let Some(comments) = item.comments() {
        write_simple(writer, "comments", comments.text())?;
    }
    if let Some(enclosure) = item.enclosure() {
        write_enclosure(writer, enclosure)?;
    }
    if let Some(guid) = item.guid() {
        write_guid(writer, guid)?;
    }
    if let Some(pub_date) = item.pub_date() {
        write_simple(writer, "pubDate", &pub_date.text())?;
    }
    if let Some(source) = item.source() {
        write_source(writer, source)?;
    }
    write_extensions(writer, item.extensions())?;

    emit(writer, Event::End(BytesEnd::new("item")))
}

/// Writes a leaf element whose text never holds literal markup.
fn write_simple<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> Result<(), RssError> {
    emit(writer, Event::Start(BytesStart::new(tag)))?;
    emit(writer, Event::Text(BytesText::new(text)))?;
    emit(writer, Event::End(BytesEnd::new(tag)))
}

/// Writes a description, expanding any literal markup in its text into
/// real elements.
fn write_description<W: Write>(
    writer: &mut Writer<W>,
    description: &Description,
) -> Result<(), RssError> {
    emit(writer, Event::Start(BytesStart::new("description")))?;
    write_markup_text(writer, description.text())?;
    emit(writer, Event::End(BytesEnd::new("description")))
}

/// Writes text content that may contain literal markup. Plain text is
/// written as escaped character data; anything containing `<` is run
/// through the embedded markup scanner and emitted as elements.
fn write_markup_text<W: Write>(writer: &mut Writer<W>, text: &str) -> Result<(), RssError> {
    if !text.contains('<') {
        return emit(writer, Event::Text(BytesText::new(text)));
    }
    for token in markup::scan(text)? {
        match token {
            MarkupToken::Text(content) => emit(writer, Event::Text(BytesText::new(content)))?,
            MarkupToken::Start { name, attributes } => {
                emit(writer, Event::Start(element_with(name, &attributes)))?;
            }
            MarkupToken::Empty { name, attributes } => {
                emit(writer, Event::Empty(element_with(name, &attributes)))?;
            }
            MarkupToken::End(name) => emit(writer, Event::End(BytesEnd::new(name)))?,
        }
    }
    Ok(())
}

fn element_with<'a>(name: &'a str, attributes: &[(&'a str, &'a str)]) -> BytesStart<'a> {
    let mut element = BytesStart::new(name);
    for (attr_name, value) in attributes {
        element.push_attribute((*attr_name, *value));
    }
    element
}

fn write_category<W: Write>(writer: &mut Writer<W>, category: &Category) -> Result<(), RssError> {
    let mut element = BytesStart::new("category");
    if let Some(domain) = category.domain() {
        element.push_attribute((domain.name(), domain.value()));
    }
    emit(writer, Event::Start(element))?;
    emit(writer, Event::Text(BytesText::new(category.text())))?;
    emit(writer, Event::End(BytesEnd::new("category")))
}

fn write_cloud<W: Write>(writer: &mut Writer<W>, cloud: &Cloud) -> Result<(), RssError> {
    emit(
        writer,
        Event::Empty(attribute_element("cloud", cloud.attributes())),
    )
}

fn write_enclosure<W: Write>(
    writer: &mut Writer<W>,
    enclosure: &Enclosure,
) -> Result<(), RssError> {
    let element = attribute_element("enclosure", enclosure.attributes());
    if enclosure.text().is_empty() {
        return emit(writer, Event::Empty(element));
    }
    emit(writer, Event::Start(element))?;
    emit(writer, Event::Text(BytesText::new(enclosure.text())))?;
    emit(writer, Event::End(BytesEnd::new("enclosure")))
}

fn attribute_element<'a>(name: &'a str, attributes: &'a [Attribute]) -> BytesStart<'a> {
    let mut element = BytesStart::new(name);
    for attr in attributes {
        element.push_attribute((attr.name(), attr.value()));
    }
    element
}

fn write_guid<W: Write>(writer: &mut Writer<W>, guid: &Guid) -> Result<(), RssError> {
    let mut element = BytesStart::new("guid");
    if let Some(is_permalink) = guid.is_permalink() {
        element.push_attribute((is_permalink.name(), is_permalink.value()));
    }
    emit(writer, Event::Start(element))?;
    emit(writer, Event::Text(BytesText::new(guid.text())))?;
    emit(writer, Event::End(BytesEnd::new("guid")))
}

fn write_source<W: Write>(writer: &mut Writer<W>, source: &Source) -> Result<(), RssError> {
    let mut element = BytesStart::new("source");
    if let Some(url) = source.url() {
        element.push_attribute((url.name(), url.value()));
    }
    emit(writer, Event::Start(element))?;
    emit(writer, Event::Text(BytesText::new(source.text())))?;
    emit(writer, Event::End(BytesEnd::new("source")))
}

fn write_image<W: Write>(writer: &mut Writer<W>, image: &Image) -> Result<(), RssError> {
    emit(writer, Event::Start(BytesStart::new("image")))?;
    write_simple(writer, "url", image.url().text())?;
    write_simple(writer, "title", image.title().text())?;
    write_simple(writer, "link", image.link().text())?;
    if let Some(width) = image.width() {
        write_simple(writer, "width", width.text())?;
    }
    if let Some(height) = image.height() {
        write_simple(writer, "height", height.text())?;
    }
    if let Some(description) = image.description() {
        write_description(writer, description)?;
    }
    emit(writer, Event::End(BytesEnd::new("image")))
}

fn write_text_input<W: Write>(
    writer: &mut Writer<W>,
    text_input: &TextInput,
) -> Result<(), RssError> {
    emit(writer, Event::Start(BytesStart::new("textInput")))?;
    write_simple(writer, "title", text_input.title().text())?;
    write_description(writer, text_input.description())?;
    write_simple(writer, "name", text_input.name().text())?;
    write_simple(writer, "link", text_input.link().text())?;
    emit(writer, Event::End(BytesEnd::new("textInput")))
}

fn write_skip_hours<W: Write>(
    writer: &mut Writer<W>,
    skip_hours: &SkipHours,
) -> Result<(), RssError> {
    emit(writer, Event::Start(BytesStart::new("skipHours")))?;
    for hour in skip_hours.hours() {
        write_simple(writer, "hour", hour.text())?;
    }
    emit(writer, Event::End(BytesEnd::new("skipHours")))
}

fn write_skip_days<W: Write>(
    writer: &mut Writer<W>,
    skip_days: &SkipDays,
) -> Result<(), RssError> {
    emit(writer, Event::Start(BytesStart::new("skipDays")))?;
    for day in skip_days.days() {
        write_simple(writer, "day", day.text())?;
    }
    emit(writer, Event::End(BytesEnd::new("skipDays")))
}

fn write_extensions<W: Write>(
    writer: &mut Writer<W>,
    extensions: &[Extension],
) -> Result<(), RssError> {
    for extension in extensions {
        let element = attribute_element(extension.element_name(), extension.attributes());
        match extension.content() {
            // No content at all: a self-closing element.
            None => emit(writer, Event::Empty(element))?,
            Some(content) => {
                emit(writer, Event::Start(element))?;
                write_markup_text(writer, content)?;
                emit(
                    writer,
                    Event::End(BytesEnd::new(extension.element_name())),
                )?;
            }
        }
    }
    Ok(())
}
