//! Scanning of a book's working directory into a [`Book`].
//!
//! # Examples
//! ```no_run
//! use lnassist::builder::BookBuilder;
//! use lnassist::layout::BookDirectory;
//!
//! let directory = BookDirectory::for_volume("files", "Otomege", 1);
//! let build = BookBuilder::new("Otomege Volume 1")
//!     .language("en")
//!     .build_from(&directory)?;
//!
//! for warning in &build.warnings {
//!     println!("skipped: {warning}");
//! }
//! println!("{} spine entries", build.book.spine().len());
//! # Ok::<(), lnassist::errors::AssemblyError>(())
//! ```

use crate::book::{Book, ItemOrigin, ManifestItem, SpineEntry};
use crate::consts::{mime, opf};
use crate::errors::{AssemblyError, AssemblyResult};
use crate::layout::BookDirectory;
use crate::naming::ChapterDescriptor;
use crate::util::uri;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::fmt::{Display, Write};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub(crate) const NAV_ID: &str = "nav.xhtml";
pub(crate) const NAV_HREF: &str = "Text/nav.xhtml";
pub(crate) const STYLESHEET_ID: &str = "sgc-nav.css";
pub(crate) const STYLESHEET_HREF: &str = "Styles/sgc-nav.css";
const TEXT_DIR: &str = "Text";
const IMAGES_DIR: &str = "Images";

/// A file skipped while scanning; assembly continues without it.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanWarning {
    /// A chapter file name matches no naming pattern.
    UnrecognizedName(String),
    /// An illustration is not a `png`, `jpg`, `jpeg`, or `gif` file.
    UnsupportedImage(String),
    /// The entry is a directory or another non-regular file.
    NotAFile(String),
    /// The entry name is not valid UTF-8 (shown lossily).
    NonUtf8Name(String),
}

impl ScanWarning {
    /// The name of the skipped entry.
    pub fn name(&self) -> &str {
        match self {
            Self::UnrecognizedName(name)
            | Self::UnsupportedImage(name)
            | Self::NotAFile(name)
            | Self::NonUtf8Name(name) => name,
        }
    }
}

impl Display for ScanWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedName(name) => write!(f, "unrecognized chapter name `{name}`"),
            Self::UnsupportedImage(name) => write!(f, "unsupported image type `{name}`"),
            Self::NotAFile(name) => write!(f, "not a regular file `{name}`"),
            Self::NonUtf8Name(name) => write!(f, "non UTF-8 file name `{name}`"),
        }
    }
}

/// The outcome of a successful scan.
#[derive(Clone, Debug, PartialEq)]
pub struct Build {
    /// The staged book, ready to be packaged.
    pub book: Book,
    /// Every file skipped while scanning, in scan order.
    pub warnings: Vec<ScanWarning>,
}

/// Builder to scan chapter and illustration directories into a [`Book`].
///
/// Scanning is deterministic: the same directory contents always produce
/// the same book, independent of the order the file system lists them.
#[derive(Clone, Debug)]
pub struct BookBuilder {
    title: String,
    language: String,
    identifier: Option<String>,
    modified: Option<DateTime<Utc>>,
}

impl BookBuilder {
    /// Create a builder for a book with the given `dc:title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            language: crate::book::DEFAULT_LANGUAGE.to_owned(),
            identifier: None,
            modified: None,
        }
    }

    /// Set the `dc:language` (Default: `en`).
    pub fn language(&mut self, language: impl Into<String>) -> &mut Self {
        self.language = language.into();
        self
    }

    /// Override the `dc:identifier`.
    ///
    /// By default, an identifier of the form `urn:uuid:...` is derived from the title.
    pub fn identifier(&mut self, identifier: impl Into<String>) -> &mut Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Pin the `dcterms:modified` timestamp (Default: the time of building).
    pub fn modified(&mut self, modified: DateTime<Utc>) -> &mut Self {
        self.modified = Some(modified);
        self
    }

    /// Scan the `chapters/` and `illustrations/` directories of `directory`.
    ///
    /// See [`Self::build`].
    pub fn build_from(&self, directory: &BookDirectory) -> AssemblyResult<Build> {
        self.build(directory.chapters_dir(), directory.illustrations_dir())
    }

    /// Scan `chapters_dir` and `illustrations_dir` into a [`Book`].
    ///
    /// A missing `illustrations_dir` is treated as empty.
    ///
    /// # Errors
    /// - [`AssemblyError::EmptyBook`] if no recognizable chapter exists,
    ///   including when `chapters_dir` does not exist.
    /// - [`AssemblyError::Io`] if a directory cannot be listed.
    pub fn build(
        &self,
        chapters_dir: impl AsRef<Path>,
        illustrations_dir: impl AsRef<Path>,
    ) -> AssemblyResult<Build> {
        let chapters_dir = chapters_dir.as_ref();
        let illustrations_dir = illustrations_dir.as_ref();
        let mut warnings = Vec::new();

        let chapters = scan_chapters(chapters_dir, &mut warnings)?;
        if chapters.is_empty() {
            return Err(AssemblyError::EmptyBook(chapters_dir.to_path_buf()));
        }
        let illustrations = scan_illustrations(illustrations_dir, &mut warnings)?;

        let mut book = Book::new(&self.title);
        book.language.clone_from(&self.language);
        if let Some(identifier) = &self.identifier {
            book.identifier.clone_from(identifier);
        }
        if let Some(modified) = self.modified {
            book.modified = modified;
        }

        let mut ids = HashSet::new();
        push_item(
            &mut book,
            &mut ids,
            ManifestItem::new(STYLESHEET_ID, STYLESHEET_HREF, mime::CSS, ItemOrigin::Stylesheet),
        );
        push_item(
            &mut book,
            &mut ids,
            ManifestItem::new(NAV_ID, NAV_HREF, mime::XHTML, ItemOrigin::Navigation)
                .with_property(opf::NAV_PROPERTY),
        );
        book.push_spine_entry(SpineEntry::non_linear(NAV_ID));

        for chapter in chapters {
            let href = format!("{TEXT_DIR}/{}", uri::encode_segment(&chapter.name));
            book.push_spine_entry(SpineEntry::chapter(&chapter.name, chapter.descriptor));
            push_item(
                &mut book,
                &mut ids,
                ManifestItem::new(chapter.name, href, mime::XHTML, ItemOrigin::Chapter(chapter.path)),
            );
        }

        for illustration in illustrations {
            let id = generate_unique_id(&ids, to_xml_id(&illustration.name));
            let href = format!("{IMAGES_DIR}/{}", uri::encode_segment(&illustration.name));
            push_item(
                &mut book,
                &mut ids,
                ManifestItem::new(
                    id,
                    href,
                    illustration.media_type,
                    ItemOrigin::Illustration(illustration.path),
                ),
            );
        }

        tracing::debug!(
            title = book.title(),
            items = book.manifest().len(),
            spine = book.spine().len(),
            warnings = warnings.len(),
            "built book"
        );
        Ok(Build { book, warnings })
    }
}

fn push_item(book: &mut Book, ids: &mut HashSet<String>, item: ManifestItem) {
    ids.insert(item.id.clone());
    book.push_item(item);
}

struct ScannedChapter {
    descriptor: ChapterDescriptor,
    name: String,
    path: PathBuf,
}

struct ScannedIllustration {
    name: String,
    media_type: &'static str,
    path: PathBuf,
}

fn scan_chapters(
    dir: &Path,
    warnings: &mut Vec<ScanWarning>,
) -> AssemblyResult<Vec<ScannedChapter>> {
    let mut chapters = list_files(dir, warnings, |name, path| {
        match ChapterDescriptor::from_file_name(&name) {
            Ok(descriptor) => Ok(ScannedChapter {
                descriptor,
                name,
                path,
            }),
            Err(_) => Err(ScanWarning::UnrecognizedName(name)),
        }
    })?;

    // Canonical names make each descriptor unique within one directory
    chapters.sort_by(|a, b| a.descriptor.cmp(&b.descriptor));
    Ok(chapters)
}

fn scan_illustrations(
    dir: &Path,
    warnings: &mut Vec<ScanWarning>,
) -> AssemblyResult<Vec<ScannedIllustration>> {
    list_files(dir, warnings, |name, path| match image_media_type(&name) {
        Some(media_type) => Ok(ScannedIllustration {
            name,
            media_type,
            path,
        }),
        None => Err(ScanWarning::UnsupportedImage(name)),
    })
}

/// Regular files within `dir`, visited in name order and kept when `classify` accepts them.
/// A missing directory yields no files.
fn list_files<T>(
    dir: &Path,
    warnings: &mut Vec<ScanWarning>,
    mut classify: impl FnMut(String, PathBuf) -> Result<T, ScanWarning>,
) -> AssemblyResult<Vec<T>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(dir = %dir.display(), "directory does not exist");
            return Ok(Vec::new());
        }
        Err(error) => return Err(AssemblyError::io(dir)(error)),
    };

    let mut listed = Vec::new();
    for entry in entries {
        let entry = entry.map_err(AssemblyError::io(dir))?;
        listed.push((entry.file_name(), entry.path()));
    }
    listed.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

    let mut files = Vec::new();
    for (name, path) in listed {
        let name = match name.into_string() {
            Ok(name) => name,
            Err(raw) => {
                warn(warnings, ScanWarning::NonUtf8Name(raw.to_string_lossy().into_owned()));
                continue;
            }
        };
        // Follows symlinks
        if !path.is_file() {
            warn(warnings, ScanWarning::NotAFile(name));
            continue;
        }
        match classify(name, path) {
            Ok(file) => files.push(file),
            Err(warning) => warn(warnings, warning),
        }
    }
    Ok(files)
}

fn warn(warnings: &mut Vec<ScanWarning>, warning: ScanWarning) {
    tracing::warn!(name = warning.name(), "skipping {warning}");
    warnings.push(warning);
}

fn image_media_type(name: &str) -> Option<&'static str> {
    let extension = Path::new(name).extension()?.to_str()?;

    match extension.to_ascii_lowercase().as_str() {
        "png" => Some(mime::PNG),
        "jpg" | "jpeg" => Some(mime::JPEG),
        "gif" => Some(mime::GIF),
        _ => None,
    }
}

/// Turn a file name into a valid XML `id` (an `NCName`).
fn to_xml_id(name: &str) -> String {
    let mut id: String = name
        .chars()
        .map(|c| if is_name_char(c) { c } else { '_' })
        .collect();

    if !id.starts_with(is_name_start_char) {
        id.insert(0, 'x');
    }
    id
}

/// `NameStartChar` of XML 1.0 (fifth edition), excluding `:`.
fn is_name_start_char(c: char) -> bool {
    matches!(c,
        'A'..='Z' | '_' | 'a'..='z'
        | '\u{C0}'..='\u{D6}' | '\u{D8}'..='\u{F6}' | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}' | '\u{37F}'..='\u{1FFF}' | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}' | '\u{2C00}'..='\u{2FEF}' | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}' | '\u{FDF0}'..='\u{FFFD}' | '\u{10000}'..='\u{EFFFF}'
    )
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}' | '\u{300}'..='\u{36F}' | '\u{203F}'..='\u{2040}'
        )
}

fn generate_unique_id(taken: &HashSet<String>, mut id: String) -> String {
    let mut count = 1;
    let original_len = id.len();

    // Avoid collisions
    while taken.contains(&id) {
        id.truncate(original_len);
        write!(&mut id, "-{count}").ok();
        count += 1;
    }
    id
}
