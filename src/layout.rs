//! On-disk layout of a book's working directory.
//!
//! ```text
//! <root>/
//! ├── chapters/        prologue.xhtml, chp1.xhtml, extra2.xhtml, ...
//! └── illustrations/   *.png, *.jpg, *.jpeg, *.gif
//! ```
//!
//! Files are placed through a temporary sibling and renamed into place,
//! so a scan never observes a partially written file.

use crate::errors::{AssemblyError, AssemblyResult};
use crate::naming::ChapterDescriptor;
use crate::util;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Name of the directory containing chapter documents.
pub const CHAPTERS_DIR: &str = "chapters";
/// Name of the directory containing illustration images.
pub const ILLUSTRATIONS_DIR: &str = "illustrations";

/// The working directory of one book (typically one volume of a series).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookDirectory {
    root: PathBuf,
}

impl BookDirectory {
    /// Use `root` as the working directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Working directory of one volume of a series:
    /// `<base>/<series in lowercase>/vol<volume>`.
    ///
    /// # Examples
    /// ```
    /// use lnassist::layout::BookDirectory;
    /// use std::path::Path;
    ///
    /// let directory = BookDirectory::for_volume("files", "Otomege", 2);
    /// assert_eq!(Path::new("files/otomege/vol2"), directory.root());
    /// ```
    pub fn for_volume(base: impl AsRef<Path>, series: &str, volume: u32) -> Self {
        Self::new(
            base.as_ref()
                .join(series.to_lowercase())
                .join(format!("vol{volume}")),
        )
    }

    /// The root of the working directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/chapters`
    pub fn chapters_dir(&self) -> PathBuf {
        self.root.join(CHAPTERS_DIR)
    }

    /// `<root>/illustrations`
    pub fn illustrations_dir(&self) -> PathBuf {
        self.root.join(ILLUSTRATIONS_DIR)
    }

    /// Location of a chapter file with the given name.
    pub fn chapter_path(&self, file_name: &str) -> PathBuf {
        self.chapters_dir().join(file_name)
    }

    /// Location of an illustration file with the given name.
    pub fn illustration_path(&self, file_name: &str) -> PathBuf {
        self.illustrations_dir().join(file_name)
    }

    /// Ensure both `chapters/` and `illustrations/` exist.
    pub fn create(&self) -> AssemblyResult<()> {
        for dir in [self.chapters_dir(), self.illustrations_dir()] {
            fs::create_dir_all(&dir).map_err(AssemblyError::io(dir))?;
        }
        Ok(())
    }

    /// Write a chapter document under its canonical name,
    /// replacing any previous version of the same chapter.
    ///
    /// Returns the path of the written file.
    pub fn place_chapter(
        &self,
        descriptor: &ChapterDescriptor,
        content: &[u8],
    ) -> AssemblyResult<PathBuf> {
        let path = self.chapter_path(&descriptor.to_file_name());
        self.place(path, content)
    }

    /// Write an illustration image.
    ///
    /// `file_name` may be a URL or path; only its final segment
    /// (without any query string) is used, e.g.
    /// `https://example.org/img/p001.jpg?w=800` → `p001.jpg`.
    ///
    /// # Errors
    /// [`AssemblyError::InvalidFileName`] if no usable name remains.
    pub fn place_illustration(
        &self,
        file_name: &str,
        content: impl Read,
    ) -> AssemblyResult<PathBuf> {
        let name = illustration_file_name(file_name)?;
        let path = self.illustration_path(name);
        self.place(path, content)
    }

    fn place(&self, path: PathBuf, mut content: impl Read) -> AssemblyResult<PathBuf> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(AssemblyError::io(parent))?;
        }

        util::fs::publish(&path, |file| {
            io::copy(&mut content, file)
                .map(|_| ())
                .map_err(AssemblyError::io(&path))
        })?;

        tracing::debug!(path = %path.display(), "placed file");
        Ok(path)
    }

    /// Remove the entire working directory.
    ///
    /// Returns `false` if there was nothing to remove.
    pub fn clear(&self) -> AssemblyResult<bool> {
        if !self.root.is_dir() {
            return Ok(false);
        }
        fs::remove_dir_all(&self.root).map_err(AssemblyError::io(&self.root))?;
        Ok(true)
    }
}

fn illustration_file_name(raw: &str) -> AssemblyResult<&str> {
    let without_query = raw.split(['?', '#']).next().unwrap_or_default();
    let name = without_query
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    if name.is_empty() || name == "." || name == ".." || name.contains('\0') {
        return Err(AssemblyError::InvalidFileName(raw.to_owned()));
    }
    Ok(name)
}
