//! Boundary to the external fetch/extraction pipeline.
//!
//! Fetching pages, extracting their readable content and discovering
//! illustration links happens outside this crate. A [`ContentSource`]
//! hands the finished results over, and [`BookDirectory::materialize`]
//! places them into the working directory.
//! No network I/O or retries happen here.

use crate::errors::{AssemblyError, AssemblyResult, BoxError};
use crate::layout::BookDirectory;
use crate::naming::ChapterDescriptor;
use std::path::PathBuf;

/// A ready-to-place unit of content produced by a [`ContentSource`].
#[derive(Clone, Debug, PartialEq)]
pub enum Fetched {
    /// A well-formed XHTML chapter document.
    Chapter {
        /// The identity of the chapter, determining its file name.
        descriptor: ChapterDescriptor,
        /// The complete XHTML document.
        xhtml: String,
    },
    /// An illustration image.
    Illustration {
        /// The image file name or source URL (only the final segment is kept).
        file_name: String,
        /// The raw image bytes.
        bytes: Vec<u8>,
    },
}

/// Produces chapters and illustrations for a URL.
///
/// Any closure `Fn(&str) -> Result<Vec<Fetched>, BoxError>` is a `ContentSource`.
pub trait ContentSource {
    /// Fetch every chapter or illustration reachable from `url`.
    fn fetch(&self, url: &str) -> Result<Vec<Fetched>, BoxError>;
}

impl<F> ContentSource for F
where
    F: Fn(&str) -> Result<Vec<Fetched>, BoxError>,
{
    fn fetch(&self, url: &str) -> Result<Vec<Fetched>, BoxError> {
        self(url)
    }
}

impl BookDirectory {
    /// Fetch `url` from `source` and place every result into this directory.
    ///
    /// Returns the paths of all written files, in the order they were fetched.
    ///
    /// # Errors
    /// - [`AssemblyError::Source`] if the source fails.
    /// - [`AssemblyError::Io`] / [`AssemblyError::InvalidFileName`] if placement fails.
    pub fn materialize(
        &self,
        source: &dyn ContentSource,
        url: &str,
    ) -> AssemblyResult<Vec<PathBuf>> {
        let fetched = source.fetch(url).map_err(|source| AssemblyError::Source {
            source,
            url: url.to_owned(),
        })?;

        fetched
            .into_iter()
            .map(|content| match content {
                Fetched::Chapter { descriptor, xhtml } => {
                    self.place_chapter(&descriptor, xhtml.as_bytes())
                }
                Fetched::Illustration { file_name, bytes } => {
                    self.place_illustration(&file_name, bytes.as_slice())
                }
            })
            .collect()
    }
}
