//! In-memory staging structure for a single assembly run.
//!
//! A [`Book`] is produced by the [`BookBuilder`](crate::builder::BookBuilder),
//! consumed by the [template generator](crate::template::generate) and the
//! [`Packager`](crate::packager::Packager), then dropped.
//! It owns no persistent state of its own.

mod manifest;
mod spine;

use crate::errors::{AssemblyError, AssemblyResult};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use uuid::Uuid;

pub use self::manifest::{ItemOrigin, ManifestItem, Properties, PropertiesIter};
pub use self::spine::SpineEntry;

/// Default `dc:language` of a book.
pub const DEFAULT_LANGUAGE: &str = "en";

/// The aggregate of everything written into the package document.
#[derive(Clone, Debug, PartialEq)]
pub struct Book {
    pub(crate) title: String,
    pub(crate) language: String,
    pub(crate) identifier: String,
    pub(crate) modified: DateTime<Utc>,
    pub(crate) manifest: Vec<ManifestItem>,
    pub(crate) spine: Vec<SpineEntry>,
}

impl Book {
    /// Create an empty book.
    ///
    /// The identifier is derived from the title,
    /// so the same title always yields the same identifier.
    pub(crate) fn new(title: impl Into<String>) -> Self {
        let title = title.into();

        Self {
            identifier: derive_identifier(&title),
            language: DEFAULT_LANGUAGE.to_owned(),
            modified: Utc::now(),
            manifest: Vec::new(),
            spine: Vec::new(),
            title,
        }
    }

    pub(crate) fn push_item(&mut self, item: ManifestItem) {
        self.manifest.push(item);
    }

    pub(crate) fn push_spine_entry(&mut self, entry: SpineEntry) {
        self.spine.push(entry);
    }

    /// The `dc:title` of the book.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The `dc:language` of the book (Default: `en`).
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The unique `dc:identifier` of the book (e.g., `urn:uuid:...`).
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The `dcterms:modified` timestamp of the book.
    pub fn modified(&self) -> DateTime<Utc> {
        self.modified
    }

    /// All manifest items, in manifest order.
    pub fn manifest(&self) -> &[ManifestItem] {
        &self.manifest
    }

    /// All spine entries, in reading order.
    pub fn spine(&self) -> &[SpineEntry] {
        &self.spine
    }

    /// Returns the manifest item with the given `id` if present, otherwise [`None`].
    pub fn item_by_id(&self, id: &str) -> Option<&ManifestItem> {
        self.manifest.iter().find(|item| item.id == id)
    }

    /// Returns the navigation document manifest item, if present.
    pub fn nav_item(&self) -> Option<&ManifestItem> {
        self.manifest.iter().find(|item| item.is_nav())
    }

    /// Returns an iterator over linear spine entries paired with their manifest items,
    /// in reading order.
    pub fn chapters(&self) -> impl Iterator<Item = (&SpineEntry, &ManifestItem)> + '_ {
        self.spine
            .iter()
            .filter(|entry| entry.linear)
            .filter_map(|entry| self.item_by_id(&entry.idref).map(|item| (entry, item)))
    }

    /// Returns an iterator over illustration manifest items.
    pub fn illustrations(&self) -> impl Iterator<Item = &ManifestItem> + '_ {
        self.manifest
            .iter()
            .filter(|item| matches!(item.origin, ItemOrigin::Illustration(_)))
    }

    /// Check the structural invariants required before generation:
    /// - Every manifest `id` and `href` is unique.
    /// - Exactly one manifest item carries the `nav` property.
    /// - Every spine entry references an existing manifest item.
    ///
    /// A violation indicates a programming error, not a runtime condition.
    pub fn validate(&self) -> AssemblyResult<()> {
        let mut ids = HashSet::new();
        let mut hrefs = HashSet::new();

        for item in &self.manifest {
            if !ids.insert(item.id.as_str()) {
                return Err(AssemblyError::DuplicateIdentifier {
                    attribute: "id",
                    value: item.id.clone(),
                });
            }
            if !hrefs.insert(item.href.as_str()) {
                return Err(AssemblyError::DuplicateIdentifier {
                    attribute: "href",
                    value: item.href.clone(),
                });
            }
        }

        let nav_count = self.manifest.iter().filter(|item| item.is_nav()).count();
        if nav_count != 1 {
            return Err(AssemblyError::InvalidNavigation(nav_count));
        }

        match self.spine.iter().find(|entry| !ids.contains(entry.idref.as_str())) {
            Some(entry) => Err(AssemblyError::UnknownIdref(entry.idref.clone())),
            None => Ok(()),
        }
    }
}

fn derive_identifier(title: &str) -> String {
    format!("urn:uuid:{}", Uuid::new_v5(&Uuid::NAMESPACE_URL, title.as_bytes()))
}
