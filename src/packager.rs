//! Packaging of a [`Book`] into an `.epub` archive.

use crate::book::{Book, ItemOrigin, ManifestItem};
use crate::consts::{mime, ocf};
use crate::errors::{AssemblyError, AssemblyResult};
use crate::template::{self, Documents};
use crate::util::{self, uri};
use crate::writer::zip::ZipWriter;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Seek, Write};
use std::path::Path;

/// Default deflate compression level.
pub const DEFAULT_COMPRESSION: u8 = 6;
const MAX_COMPRESSION: u8 = 9;

/// Writes a [`Book`] as an EPUB 3 archive.
///
/// Archive entries are written in a fixed order:
/// 1. `mimetype` (uncompressed)
/// 2. `META-INF/container.xml`
/// 3. `OEBPS/content.opf`
/// 4. The navigation document and its stylesheet
/// 5. Chapters, in reading order
/// 6. Remaining items (illustrations), in manifest order
///
/// Every entry carries the same fixed timestamp,
/// so packaging the same book twice yields identical archives.
///
/// # Examples
/// ```no_run
/// use lnassist::builder::BookBuilder;
/// use lnassist::layout::BookDirectory;
/// use lnassist::packager::Packager;
///
/// let directory = BookDirectory::new("files/otomege/vol1");
/// let build = BookBuilder::new("Otomege Volume 1").build_from(&directory)?;
///
/// Packager::new()
///     .compression(9)
///     .pack(&build.book, "Otomege Volume 1.epub")?;
/// # Ok::<(), lnassist::errors::AssemblyError>(())
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Packager {
    compression: u8,
}

impl Default for Packager {
    fn default() -> Self {
        Self {
            compression: DEFAULT_COMPRESSION,
        }
    }
}

impl Packager {
    /// Create a packager with the default compression level (`6`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the deflate compression level, from `0` (stored) to `9`.
    ///
    /// Levels above `9` are clamped. The `mimetype` entry is always stored.
    pub fn compression(&mut self, level: u8) -> &mut Self {
        self.compression = level.min(MAX_COMPRESSION);
        self
    }

    /// The configured compression level.
    pub fn compression_level(&self) -> u8 {
        self.compression
    }

    /// Package `book` into an archive at `output`, replacing any existing file.
    ///
    /// Chapter and illustration content is copied byte-for-byte from the
    /// files the book was built from.
    ///
    /// # Errors
    /// - Any error from [`template::generate`].
    /// - [`AssemblyError::Io`] if a source file cannot be read or `output` cannot be written.
    ///   No file is left at `output` (or beside it) on failure.
    pub fn pack(&self, book: &Book, output: impl AsRef<Path>) -> AssemblyResult<()> {
        let output = output.as_ref();
        let documents = template::generate(book)?;

        util::fs::publish(output, |file| {
            EpubWriter::new(book, &documents, output, file, self.compression)
                .write()
                .map(|_| ())
        })?;

        tracing::info!(
            path = %output.display(),
            entries = book.manifest().len() + 3,
            "packed book"
        );
        Ok(())
    }
}

struct EpubWriter<'a, W: Write + Seek> {
    book: &'a Book,
    documents: &'a Documents,
    output: &'a Path,
    zip: ZipWriter<W>,
    written: HashSet<&'a str>,
}

impl<'a, W: Write + Seek> EpubWriter<'a, W> {
    fn new(
        book: &'a Book,
        documents: &'a Documents,
        output: &'a Path,
        writer: W,
        compression: u8,
    ) -> Self {
        Self {
            zip: ZipWriter::new(writer, compression),
            written: HashSet::new(),
            book,
            documents,
            output,
        }
    }

    fn write(mut self) -> AssemblyResult<W> {
        let documents = self.documents;

        self.write_mimetype()?;
        self.write_entry(ocf::CONTAINER_PATH, &documents.container_xml)?;
        self.write_entry(ocf::PACKAGE_PATH, &documents.content_opf)?;
        self.write_generated()?;
        self.write_chapters()?;
        self.write_remaining()?;
        self.zip.finish().map_err(AssemblyError::io(self.output))
    }

    fn write_mimetype(&mut self) -> AssemblyResult<()> {
        // EPUB requires that the mimetype file must be uncompressed
        tracing::debug!(entry = ocf::MIMETYPE_PATH, "writing entry");
        self.zip
            .start_uncompressed_file(ocf::MIMETYPE_PATH)
            .and_then(|_| self.zip.write_all(mime::EPUB.as_bytes()))
            .map_err(AssemblyError::io(self.output))
    }

    fn write_generated(&mut self) -> AssemblyResult<()> {
        let book = self.book;
        let documents = self.documents;

        // Navigation first, then its stylesheet(s)
        for origin in [ItemOrigin::Navigation, ItemOrigin::Stylesheet] {
            let content = match origin {
                ItemOrigin::Navigation => &documents.nav_xhtml,
                _ => &documents.nav_css,
            };
            for item in book.manifest.iter().filter(|item| item.origin == origin) {
                self.write_item(item, content)?;
            }
        }
        Ok(())
    }

    fn write_chapters(&mut self) -> AssemblyResult<()> {
        let book = self.book;

        for (_, item) in book.chapters() {
            self.copy_item(item)?;
        }
        Ok(())
    }

    fn write_remaining(&mut self) -> AssemblyResult<()> {
        let book = self.book;

        for item in &book.manifest {
            if !self.written.contains(item.id.as_str()) {
                self.copy_item(item)?;
            }
        }
        Ok(())
    }

    fn copy_item(&mut self, item: &'a ManifestItem) -> AssemblyResult<()> {
        let Some(source) = item.origin.source_path() else {
            // Generated items are written beforehand
            return Ok(());
        };
        let mut file = File::open(source).map_err(AssemblyError::io(source))?;

        if self.start_item(item)? {
            io::copy(&mut file, &mut self.zip).map_err(AssemblyError::io(source))?;
        }
        Ok(())
    }

    fn write_item(&mut self, item: &'a ManifestItem, content: &[u8]) -> AssemblyResult<()> {
        if self.start_item(item)? {
            self.zip
                .write_all(content)
                .map_err(AssemblyError::io(self.output))?;
        }
        Ok(())
    }

    /// Start the archive entry of `item` unless it was already written.
    fn start_item(&mut self, item: &'a ManifestItem) -> AssemblyResult<bool> {
        if !self.written.insert(item.id.as_str()) {
            return Ok(false);
        }
        let path = uri::resolve(ocf::PACKAGE_DIRECTORY, &uri::decode(&item.href)).into_owned();

        tracing::debug!(entry = path.as_str(), "writing entry");
        self.zip
            .start_file(&path)
            .map_err(AssemblyError::io(self.output))?;
        Ok(true)
    }

    fn write_entry(&mut self, path: &str, content: &[u8]) -> AssemblyResult<()> {
        tracing::debug!(entry = path, bytes = content.len(), "writing entry");
        self.zip
            .start_file(path)
            .and_then(|_| self.zip.write_all(content))
            .map_err(AssemblyError::io(self.output))
    }
}
