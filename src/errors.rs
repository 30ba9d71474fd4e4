//! Error-related types for assembling a [`Book`](crate::book::Book).

use std::error::Error;
use std::io;
use std::path::PathBuf;

/// Alias for `Result<T, AssemblyError>`.
pub type AssemblyResult<T> = Result<T, AssemblyError>;

/// Boxed error produced by an external [`ContentSource`](crate::source::ContentSource).
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Unified error type.
/// Possible errors while scanning, generating, or packaging a book.
///
/// # Variants
/// ## Non-fatal
/// - [`UnrecognizedName`](AssemblyError::UnrecognizedName)
///   (reported as a [`ScanWarning`](crate::builder::ScanWarning) when scanning)
/// ## Fatal
/// - [`EmptyBook`](AssemblyError::EmptyBook)
/// - [`DuplicateIdentifier`](AssemblyError::DuplicateIdentifier)
/// - [`InvalidNavigation`](AssemblyError::InvalidNavigation)
/// - [`UnknownIdref`](AssemblyError::UnknownIdref)
/// - [`InvalidFileName`](AssemblyError::InvalidFileName)
/// - [`Io`](AssemblyError::Io)
/// - [`Source`](AssemblyError::Source)
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AssemblyError {
    /// A chapter file name does not match any known naming pattern.
    #[error("[UnrecognizedName - `{0}`]: File name matches no chapter naming pattern")]
    UnrecognizedName(String),

    /// No recognizable chapter files exist within the chapters directory.
    #[error("[EmptyBook - `{}`]: No recognizable chapter files found", .0.display())]
    EmptyBook(PathBuf),

    /// Two manifest items share the same `id` or `href`.
    ///
    /// This indicates a broken builder invariant rather than bad user input.
    #[error("[DuplicateIdentifier]: Duplicate manifest `{attribute}` value: `{value}`")]
    DuplicateIdentifier {
        /// The duplicated attribute (`id` or `href`).
        attribute: &'static str,
        /// The offending value.
        value: String,
    },

    /// The manifest must contain exactly one item with the `nav` property.
    #[error("[InvalidNavigation]: Expected exactly one `nav` manifest item, found {0}")]
    InvalidNavigation(usize),

    /// A spine entry references an `id` absent from the manifest.
    #[error("[UnknownIdref - `{0}`]: Spine entry references a missing manifest item")]
    UnknownIdref(String),

    /// A file name given for placement is empty or escapes its directory.
    #[error("[InvalidFileName - `{0}`]: File name cannot be placed within the book directory")]
    InvalidFileName(String),

    /// Reading or writing the given path failed.
    ///
    /// When packaging, no partially written output file is left behind.
    #[error("[IOFailure - `{}`]: {source}", path.display())]
    Io {
        /// The root cause of the error.
        source: io::Error,
        /// The path responsible for triggering the error.
        path: PathBuf,
    },

    /// The external content source failed to produce content for a URL.
    #[error("[Source - `{url}`]: {source}")]
    Source {
        /// The root cause of the error.
        source: BoxError,
        /// The requested URL.
        url: String,
    },
}

/// A chapter number is not a non-negative decimal in canonical form.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid chapter number (expected e.g. `3` or `2.5`): `{0}`")]
pub struct InvalidChapterNumber(pub String);

impl AssemblyError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { source, path }
    }

    /// Returns `true` if the run may continue after this error
    /// (the offending file is skipped).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnrecognizedName(_))
    }
}
