use crate::consts::opf;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::SplitWhitespace;

/// One resource bundled within the book, written as a manifest `<item>`.
#[derive(Clone, Debug, PartialEq)]
pub struct ManifestItem {
    pub(crate) id: String,
    pub(crate) href: String,
    pub(crate) media_type: &'static str,
    pub(crate) properties: Properties,
    pub(crate) origin: ItemOrigin,
}

impl ManifestItem {
    pub(crate) fn new(
        id: impl Into<String>,
        href: impl Into<String>,
        media_type: &'static str,
        origin: ItemOrigin,
    ) -> Self {
        Self {
            id: id.into(),
            href: href.into(),
            media_type,
            properties: Properties::default(),
            origin,
        }
    }

    pub(crate) fn with_property(mut self, property: &str) -> Self {
        self.properties.insert(property);
        self
    }

    /// The unique `id` of the item.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The ***percent-encoded*** location of the item,
    /// relative to the package document (e.g., `Text/chp1.xhtml`).
    pub fn href(&self) -> &str {
        &self.href
    }

    /// The MIME type of the item (e.g., `application/xhtml+xml`).
    pub fn media_type(&self) -> &str {
        self.media_type
    }

    /// The properties of the item (e.g., `nav`).
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Where the content of the item comes from.
    pub fn origin(&self) -> &ItemOrigin {
        &self.origin
    }

    /// Returns `true` if this item is the navigation document.
    pub fn is_nav(&self) -> bool {
        self.properties.has_property(opf::NAV_PROPERTY)
    }
}

/// The source of a [`ManifestItem`]'s bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemOrigin {
    /// The generated navigation document (`nav.xhtml`).
    Navigation,
    /// The generated stylesheet (`sgc-nav.css`).
    Stylesheet,
    /// A chapter document on disk.
    Chapter(PathBuf),
    /// An illustration image on disk.
    Illustration(PathBuf),
}

impl ItemOrigin {
    /// The file on disk the item is copied from, or [`None`] for generated documents.
    pub fn source_path(&self) -> Option<&Path> {
        match self {
            Self::Navigation | Self::Stylesheet => None,
            Self::Chapter(path) | Self::Illustration(path) => Some(path),
        }
    }
}

/// Space-separated manifest item properties, such as `nav`.
///
/// # Examples
/// ```
/// use lnassist::book::Properties;
///
/// let properties = Properties::from("nav scripted");
///
/// assert!(properties.has_property("nav"));
/// assert!(!properties.has_property("cover-image"));
/// assert_eq!(2, properties.len());
/// ```
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct Properties(String);

impl Properties {
    /// The number of property entries contained within.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if there are no properties.
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Returns an iterator over **all** properties.
    pub fn iter(&self) -> PropertiesIter<'_> {
        PropertiesIter(self.0.split_whitespace())
    }

    /// Returns `true` if the given property is present.
    pub fn has_property(&self, property: &str) -> bool {
        self.iter().any(|value| value == property)
    }

    /// The underlying raw properties.
    pub fn as_str(&self) -> &str {
        self.0.trim()
    }

    pub(crate) fn as_option_str(&self) -> Option<&str> {
        (!self.is_empty()).then(|| self.as_str())
    }

    pub(crate) fn insert(&mut self, property: &str) {
        if self.has_property(property) {
            return;
        }
        if !self.0.is_empty() {
            self.0.push(' ');
        }
        self.0.push_str(property);
    }
}

impl From<&str> for Properties {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl Display for Properties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'a> IntoIterator for &'a Properties {
    type Item = &'a str;
    type IntoIter = PropertiesIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over each property within [`Properties`].
pub struct PropertiesIter<'a>(SplitWhitespace<'a>);

impl<'a> Iterator for PropertiesIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}
