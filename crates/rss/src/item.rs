// ABOUTME: The Item element: one entry in a channel, with its builder.
// ABOUTME: Enforces the at-least-one-of-title/description rule at build time.

use serde::Serialize;

use crate::composites::{Category, Enclosure, Guid, Source};
use crate::elements::{Author, Comments, Description, Link, PubDate, Title};
use crate::error::RssError;
use crate::extension::Extension;

/// One entry in a channel. All fields are optional except that at least
/// one of `title` and `description` must be present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    title: Option<Title>,
    description: Option<Description>,
    link: Option<Link>,
    author: Option<Author>,
    categories: Vec<Category>,
    comments: Option<Comments>,
    enclosure: Option<Enclosure>,
    guid: Option<Guid>,
    pub_date: Option<PubDate>,
    source: Option<Source>,
    extensions: Vec<Extension>,
}

impl Item {
    pub fn builder() -> ItemBuilder {
        ItemBuilder::default()
    }

    pub fn title(&self) -> Option<&Title> {
        self.title.as_ref()
    }

    pub fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    pub fn link(&self) -> Option<&Link> {
        self.link.as_ref()
    }

    pub fn author(&self) -> Option<&Author> {
        self.author.as_ref()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn comments(&self) -> Option<&Comments> {
        self.comments.as_ref()
    }

    pub fn enclosure(&self) -> Option<&Enclosure> {
        self.enclosure.as_ref()
    }

    pub fn guid(&self) -> Option<&Guid> {
        self.guid.as_ref()
    }

    pub fn pub_date(&self) -> Option<&PubDate> {
        self.pub_date.as_ref()
    }

    pub fn source(&self) -> Option<&Source> {
        self.source.as_ref()
    }

    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }
}

/// Builds an [`Item`], validating on [`build`](ItemBuilder::build).
#[derive(Debug, Default)]
pub struct ItemBuilder {
    title: Option<Title>,
    description: Option<Description>,
    link: Option<Link>,
    author: Option<Author>,
    categories: Vec<Category>,
    comments: Option<Comments>,
    enclosure: Option<Enclosure>,
    guid: Option<Guid>,
    pub_date: Option<PubDate>,
    source: Option<Source>,
    extensions: Vec<Extension>,
}

impl ItemBuilder {
    pub fn title(mut self, title: Title) -> Self {
        self.title = Some(title);
        self
    }

    pub fn description(mut self, description: Description) -> Self {
        self.description = Some(description);
        self
    }

    pub fn link(mut self, link: Link) -> Self {
        self.link = Some(link);
        self
    }

    pub fn author(mut self, author: Author) -> Self {
        self.author = Some(author);
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

    pub fn comments(mut self, comments: Comments) -> Self {
        self.comments = Some(comments);
        self
    }

    pub fn enclosure(mut self, enclosure: Enclosure) -> Self {
        self.enclosure = Some(enclosure);
        self
    }

    pub fn guid(mut self, guid: Guid) -> Self {
        self.guid = Some(guid);
        self
    }

    pub fn pub_date(mut self, pub_date: PubDate) -> Self {
        self.pub_date = Some(pub_date);
        self
    }

    pub fn source(mut self, source: Source) -> Self {
        self.source = Some(source);
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

    pub fn build(self) -> Result<Item, RssError> {
        if self.title.is_none() && self.description.is_none() {
            return Err(RssError::validation(
                "item elements MUST contain either a title or description element.",
            ));
        }
        Ok(Item {
            title: self.title,
            description: self.description,
            link: self.link,
            author: self.author,
            categories: self.categories,
            comments: self.comments,
            enclosure: self.enclosure,
            guid: self.guid,
            pub_date: self.pub_date,
            source: self.source,
            extensions: self.extensions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_title_or_description() {
        assert!(Item::builder().build().is_err());
        assert!(Item::builder().title(Title::new("A")).build().is_ok());
        assert!(Item::builder()
            .description(Description::new("B"))
            .build()
            .is_ok());
    }

    #[test]
    fn test_optional_fields_default_absent() {
        let item = Item::builder().title(Title::new("A")).build().unwrap();
        assert!(item.link().is_none());
        assert!(item.guid().is_none());
        assert!(item.categories().is_empty());
        assert!(item.extensions().is_empty());
    }
}
