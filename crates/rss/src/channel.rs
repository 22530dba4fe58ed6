// ABOUTME: The Channel element: feed metadata plus the ordered item list, with its builder.
// ABOUTME: Enforces the required title/link/description children at build time.

use serde::Serialize;

use crate::composites::{Category, Cloud, Image, SkipDays, SkipHours, TextInput};
use crate::elements::{
    Copyright, Description, Docs, Generator, Language, LastBuildDate, Link, ManagingEditor,
    PubDate, Rating, Title, Ttl, WebMaster,
};
use crate::error::RssError;
use crate::extension::Extension;
use crate::item::Item;

/// The feed's metadata container, holding zero or more items.
///
/// `title`, `link`, and `description` are required; everything else is
/// optional.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Channel {
    title: Title,
    link: Link,
    description: Description,
    language: Option<Language>,
    copyright: Option<Copyright>,
    managing_editor: Option<ManagingEditor>,
    web_master: Option<WebMaster>,
    pub_date: Option<PubDate>,
    last_build_date: Option<LastBuildDate>,
    categories: Vec<Category>,
    generator: Option<Generator>,
    docs: Option<Docs>,
    cloud: Option<Cloud>,
    ttl: Option<Ttl>,
    image: Option<Image>,
    rating: Option<Rating>,
    text_input: Option<TextInput>,
    skip_hours: Option<SkipHours>,
    skip_days: Option<SkipDays>,
    extensions: Vec<Extension>,
    items: Vec<Item>,
}

impl Channel {
    pub fn builder() -> ChannelBuilder {
        ChannelBuilder::default()
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn link(&self) -> &Link {
        &self.link
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn language(&self) -> Option<&Language> {
        self.language.as_ref()
    }

    pub fn copyright(&self) -> Option<&Copyright> {
        self.copyright.as_ref()
    }

    pub fn managing_editor(&self) -> Option<&ManagingEditor> {
        self.managing_editor.as_ref()
    }

    pub fn web_master(&self) -> Option<&WebMaster> {
        self.web_master.as_ref()
    }

    pub fn pub_date(&self) -> Option<&PubDate> {
        self.pub_date.as_ref()
    }

    pub fn last_build_date(&self) -> Option<&LastBuildDate> {
        self.last_build_date.as_ref()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn generator(&self) -> Option<&Generator> {
        self.generator.as_ref()
    }

    pub fn docs(&self) -> Option<&Docs> {
        self.docs.as_ref()
    }

    pub fn cloud(&self) -> Option<&Cloud> {
        self.cloud.as_ref()
    }

    pub fn ttl(&self) -> Option<&Ttl> {
        self.ttl.as_ref()
    }

    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    pub fn rating(&self) -> Option<&Rating> {
        self.rating.as_ref()
    }

    pub fn text_input(&self) -> Option<&TextInput> {
        self.text_input.as_ref()
    }

    pub fn skip_hours(&self) -> Option<&SkipHours> {
        self.skip_hours.as_ref()
    }

    pub fn skip_days(&self) -> Option<&SkipDays> {
        self.skip_days.as_ref()
    }

    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

/// Builds a [`Channel`], validating on [`build`](ChannelBuilder::build).
#[derive(Debug, Default)]
pub struct ChannelBuilder {
    title: Option<Title>,
    link: Option<Link>,
    description: Option<Description>,
    language: Option<Language>,
    copyright: Option<Copyright>,
    managing_editor: Option<ManagingEditor>,
    web_master: Option<WebMaster>,
    pub_date: Option<PubDate>,
    last_build_date: Option<LastBuildDate>,
    categories: Vec<Category>,
    generator: Option<Generator>,
    docs: Option<Docs>,
    cloud: Option<Cloud>,
    ttl: Option<Ttl>,
    image: Option<Image>,
    rating: Option<Rating>,
    text_input: Option<TextInput>,
    skip_hours: Option<SkipHours>,
    skip_days: Option<SkipDays>,
    extensions: Vec<Extension>,
    items: Vec<Item>,
}

impl ChannelBuilder {
    pub fn title(mut self, title: Title) -> Self {
        self.title = Some(title);
        self
    }

    pub fn link(mut self, link: Link) -> Self {
        self.link = Some(link);
        self
    }

    pub fn description(mut self, description: Description) -> Self {
        self.description = Some(description);
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn copyright(mut self, copyright: Copyright) -> Self {
        self.copyright = Some(copyright);
        self
    }

    pub fn managing_editor(mut self, managing_editor: ManagingEditor) -> Self {
        self.managing_editor = Some(managing_editor);
        self
    }

    pub fn web_master(mut self, web_master: WebMaster) -> Self {
        self.web_master = Some(web_master);
        self
    }

    pub fn pub_date(mut self, pub_date: PubDate) -> Self {
        self.pub_date = Some(pub_date);
        self
    }

    pub fn last_build_date(mut self, last_build_date: LastBuildDate) -> Self {
        self.last_build_date = Some(last_build_date);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    pub fn categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn generator(mut self, generator: Generator) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn docs(mut self, docs: Docs) -> Self {
        self.docs = Some(docs);
        self
    }

    pub fn cloud(mut self, cloud: Cloud) -> Self {
        self.cloud = Some(cloud);
        self
    }

    pub fn ttl(mut self, ttl: Ttl) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn image(mut self, image: Image) -> Self {
        self.image = Some(image);
        self
    }

    pub fn rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn text_input(mut self, text_input: TextInput) -> Self {
        self.text_input = Some(text_input);
        self
    }

    pub fn skip_hours(mut self, skip_hours: SkipHours) -> Self {
        self.skip_hours = Some(skip_hours);
        self
    }

    pub fn skip_days(mut self, skip_days: SkipDays) -> Self {
        self.skip_days = Some(skip_days);
        self
    }

    pub fn extension(mut self, extension: Extension) -> Self {
        self.extensions.push(extension);
        self
    }

    pub fn extensions(mut self, extensions: Vec<Extension>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    pub fn build(self) -> Result<Channel, RssError> {
        let title = self
            .title
            .ok_or_else(|| RssError::validation("channel elements MUST contain a title element."))?;
        let link = self
            .link
            .ok_or_else(|| RssError::validation("channel elements MUST contain a link element."))?;
        let description = self.description.ok_or_else(|| {
            RssError::validation("channel elements MUST contain a description element.")
        })?;
        Ok(Channel {
            title,
            link,
            description,
            language: self.language,
            copyright: self.copyright,
            managing_editor: self.managing_editor,
            web_master: self.web_master,
            pub_date: self.pub_date,
            last_build_date: self.last_build_date,
            categories: self.categories,
            generator: self.generator,
            docs: self.docs,
            cloud: self.cloud,
            ttl: self.ttl,
            image: self.image,
            rating: self.rating,
            text_input: self.text_input,
            skip_hours: self.skip_hours,
            skip_days: self.skip_days,
            extensions: self.extensions,
            items: self.items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        let err = Channel::builder()
            .title(Title::new("News"))
            .link(Link::new("https://example.com"))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("description"));

        let channel = Channel::builder()
            .title(Title::new("News"))
            .link(Link::new("https://example.com"))
            .description(Description::new("All the news"))
            .build()
            .unwrap();
        assert_eq!(channel.title().text(), "News");
        assert!(channel.items().is_empty());
    }
}
