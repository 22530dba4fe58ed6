// ABOUTME: Integration tests for the XML codec: round trips, extension fidelity,
// ABOUTME: generator substitution, and the file/reader entry points.

use pretty_assertions::assert_eq;
use rsskit::{
    Attribute, Category, Channel, Cloud, Comments, Copyright, Description, Docs, Enclosure,
    Extension, Generator, Guid, Hour, Image, Item, Language, Link, Name, PubDate, Rss, RssDoc,
    SkipHours, Source, TextInput, Title, Ttl, Url,
};

fn cloud_attrs() -> Vec<Attribute> {
    vec![
        Attribute::new("domain", "rpc.sys.com"),
        Attribute::new("port", "80"),
        Attribute::new("path", "/RPC2"),
        Attribute::new("registerProcedure", "myCloud.rssPleaseNotify"),
        Attribute::new("protocol", "xml-rpc"),
    ]
}

/// A feed exercising every element the codec knows, parameterized by
/// the generator so expectations can account for the writer's stamp.
fn sample_rss(generator: Generator) -> Rss {
    let image = Image::new(
        Url::new("https://example.com/logo.png"),
        Title::new("Example News"),
        Link::new("https://example.com"),
        Some(rsskit::Width::new("88").unwrap()),
        Some(rsskit::Height::new("31").unwrap()),
        Some(Description::new("The example logo")),
    );

    let text_input = TextInput::new(
        Title::new("Search"),
        Description::new("Search the archive"),
        Name::new("q"),
        Link::new("https://example.com/search"),
    );

    let skip_hours = SkipHours::new(vec![
        Hour::new("0").unwrap(),
        Hour::new("1").unwrap(),
        Hour::new("2").unwrap(),
    ])
    .unwrap();

    let first_item = Item::builder()
        .title(Title::new("Rust 2.0 released"))
        .description(Description::new(
            r#"see <a href="http://x.com/a=1">link</a> now"#,
        ))
        .link(Link::new("https://example.com/rust-2"))
        .author(rsskit::Author::new("editor@example.com"))
        .category(Category::new(
            Some(Attribute::new("domain", "https://example.com/tags")),
            "releases",
        ))
        .comments(Comments::new("https://example.com/rust-2#comments"))
        .enclosure(
            Enclosure::new(vec![
                Attribute::new("url", "https://example.com/ep1.mp3"),
                Attribute::new("length", "8192"),
                Attribute::new("type", "audio/mpeg"),
            ])
            .unwrap(),
        )
        .guid(Guid::new(
            Some(Attribute::new("isPermaLink", "false")),
            "urn:example:rust-2",
        ))
        .pub_date(PubDate::parse("Tue, 10 Jun 2003 04:00:00 GMT").unwrap())
        .source(Source::new(
            Some(Attribute::new("url", "https://upstream.example.com/rss")),
            "Upstream News",
        ))
        .extension(Extension::new(
            "media:thumbnail",
            vec![Attribute::new("url", "https://example.com/thumb.jpg")],
            None,
        ))
        .build()
        .unwrap();

    let second_item = Item::builder()
        .description(Description::new("An item with no title at all"))
        .build()
        .unwrap();

    let channel = Channel::builder()
        .title(Title::new("Example News"))
        .link(Link::new("https://example.com"))
        .description(Description::new("News about examples"))
        .language(Language::new("en-us"))
        .copyright(Copyright::new("Copyright 2026, Example Corp.").unwrap())
        .pub_date(PubDate::parse("Mon, 2 Jan 2006 15:04:05 -0700").unwrap())
        .category(Category::new(None, "news"))
        .generator(generator)
        .docs(Docs::new("https://www.rssboard.org/rss-specification").unwrap())
        .cloud(Cloud::new(cloud_attrs()).unwrap())
        .ttl(Ttl::new("60"))
        .image(image)
        .text_input(text_input)
        .skip_hours(skip_hours)
        .extension(Extension::new(
            "atom:link",
            vec![
                Attribute::new("href", "https://example.com/rss"),
                Attribute::new("rel", "self"),
            ],
            None,
        ))
        .item(first_item)
        .item(second_item)
        .build()
        .unwrap();

    Rss::new(
        channel,
        vec![
            Attribute::new("version", "2.0"),
            Attribute::new("xmlns:media", "http://search.yahoo.com/mrss/"),
            Attribute::new("xmlns:atom", "http://www.w3.org/2005/Atom"),
        ],
        vec![],
    )
}

#[test]
fn round_trip_preserves_everything_but_generator() {
    let doc = RssDoc::default();
    let original = sample_rss(Generator::new("Hand-rolled Generator 1.0"));

    let xml = doc.write_to_string(&original).unwrap();
    let parsed = doc.parse_str(&xml).unwrap();

    // The parsed tree equals the original in every field except the
    // channel generator, which now carries the library stamp.
    let expected = sample_rss(doc.generator_stamp());
    assert_eq!(parsed, expected);
}

#[test]
fn reserializing_a_parsed_document_is_stable() {
    let doc = RssDoc::default();
    let rss = sample_rss(Generator::new("whatever"));

    let first = doc.write_to_string(&rss).unwrap();
    let second = doc
        .write_to_string(&doc.parse_str(&first).unwrap())
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn caller_generator_never_reaches_the_output() {
    let doc = RssDoc::default();
    let rss = sample_rss(Generator::new("Foreign Aggregator 3.1"));

    let xml = doc.write_to_string(&rss).unwrap();
    assert!(!xml.contains("Foreign Aggregator"));
    let stamp = doc.generator_stamp();
    assert!(xml.contains(stamp.text()));

    // The caller's tree is untouched; only the document was stamped.
    assert_eq!(
        rss.channel().generator().unwrap().text(),
        "Foreign Aggregator 3.1"
    );
}

#[test]
fn extension_round_trips_in_self_closing_form() {
    let doc = RssDoc::default();
    let input = r#"<?xml version="1.0" encoding="UTF-8"?><rss version="2.0"><channel><title>t</title><link>l</link><description>d</description><media:thumbnail url="x"/></channel></rss>"#;

    let rss = doc.parse_str(input).unwrap();
    let ext = &rss.channel().extensions()[0];
    assert_eq!(ext.element_name(), "media:thumbnail");
    assert_eq!(ext.prefix(), Some("media"));
    assert_eq!(ext.local_name(), "thumbnail");
    assert_eq!(ext.attributes(), &[Attribute::new("url", "x")]);
    assert_eq!(ext.content(), None);

    let xml = doc.write_to_string(&rss).unwrap();
    assert!(xml.contains(r#"<media:thumbnail url="x"/>"#));
}

#[test]
fn extension_with_nested_markup_round_trips() {
    let doc = RssDoc::default();
    let input = r#"<?xml version="1.0" encoding="UTF-8"?><rss version="2.0"><channel><title>t</title><link>l</link><description>d</description><media:group><media:credit role="author">Jane</media:credit></media:group></channel></rss>"#;

    let rss = doc.parse_str(input).unwrap();
    let ext = &rss.channel().extensions()[0];
    assert_eq!(
        ext.content(),
        Some(r#"<media:credit role="author">Jane</media:credit>"#)
    );

    let xml = doc.write_to_string(&rss).unwrap();
    assert!(
        xml.contains(r#"<media:group><media:credit role="author">Jane</media:credit></media:group>"#)
    );
}

#[test]
fn embedded_markup_in_description_round_trips() {
    let doc = RssDoc::default();
    let text = r#"see <a href="http://x.com/a=1">link</a> now"#;
    let channel = Channel::builder()
        .title(Title::new("t"))
        .link(Link::new("l"))
        .description(Description::new(text))
        .build()
        .unwrap();
    let rss = Rss::new(channel, vec![Attribute::new("version", "2.0")], vec![]);

    let xml = doc.write_to_string(&rss).unwrap();
    assert!(xml.contains(
        r#"<description>see <a href="http://x.com/a=1">link</a> now</description>"#
    ));

    let parsed = doc.parse_str(&xml).unwrap();
    assert_eq!(parsed.channel().description().text(), text);
}

#[test]
fn malformed_embedded_markup_fails_the_write() {
    let doc = RssDoc::default();
    let channel = Channel::builder()
        .title(Title::new("t"))
        .link(Link::new("l"))
        .description(Description::new("<a href=x>unterminated"))
        .build()
        .unwrap();
    let rss = Rss::new(channel, vec![], vec![]);

    let err = doc.write_to_string(&rss).unwrap_err();
    assert!(matches!(err, rsskit::RssError::MalformedMarkup(_)));
}

#[test]
fn attribute_order_follows_builder_insertion_order() {
    let doc = RssDoc::default();
    let rss = sample_rss(Generator::new("g"));
    let xml = doc.write_to_string(&rss).unwrap();

    let url = xml.find(r#"url="https://example.com/ep1.mp3""#).unwrap();
    let length = xml.find(r#"length="8192""#).unwrap();
    let mime = xml.find(r#"type="audio/mpeg""#).unwrap();
    assert!(url < length && length < mime);
}

#[test]
fn file_round_trip() {
    let doc = RssDoc::default();
    let rss = sample_rss(Generator::new("g"));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("feed.xml");
    doc.write_to_file(&path, &rss).unwrap();

    let parsed = doc.parse_file(&path).unwrap();
    assert_eq!(parsed, sample_rss(doc.generator_stamp()));
}

#[test]
fn reader_entry_point_accepts_any_byte_source() {
    let doc = RssDoc::default();
    let xml = doc.write_to_string(&sample_rss(Generator::new("g"))).unwrap();

    let parsed = doc.parse_reader(xml.as_bytes()).unwrap();
    assert_eq!(parsed.channel().title().text(), "Example News");
}

#[test]
fn foreign_feed_parses_and_validates() {
    // Hand-authored document in the wild's typical shape.
    let input = r#"<?xml version="1.0"?>
<rss version="2.0">
  <channel>
    <title>Liftoff News</title>
    <link>http://liftoff.msfc.nasa.gov/</link>
    <description>Liftoff to Space Exploration.</description>
    <language>en-us</language>
    <pubDate>Tue, 10 Jun 2003 04:00:00 GMT</pubDate>
    <item>
      <title>Star City</title>
      <link>http://liftoff.msfc.nasa.gov/news/2003/news-starcity.asp</link>
      <description>How do Americans get ready to work with Russians aboard the
        International Space Station?</description>
      <pubDate>Tue, 03 Jun 2003 09:39:21 GMT</pubDate>
      <guid>http://liftoff.msfc.nasa.gov/2003/06/03.html#item573</guid>
    </item>
  </channel>
</rss>"#;

    let doc = RssDoc::default();
    let rss = doc.parse_str(input).unwrap();
    assert_eq!(rss.channel().items().len(), 1);
    let item = &rss.channel().items()[0];
    assert_eq!(item.title().unwrap().text(), "Star City");
    assert!(item.guid().unwrap().is_permalink().is_none());
}

#[test]
fn invalid_foreign_feed_is_rejected_whole() {
    // The enclosure is missing its type attribute, so the parse fails;
    // no partially populated tree comes back.
    let input = r#"<rss version="2.0"><channel>
        <title>t</title><link>l</link><description>d</description>
        <item>
          <title>bad enclosure</title>
          <enclosure url="http://e/a.mp3" length="1"/>
        </item>
    </channel></rss>"#;

    let err = RssDoc::default().parse_str(input).unwrap_err();
    assert_eq!(
        err.to_string(),
        "enclosure elements MUST contain the type attribute."
    );
}
