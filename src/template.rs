//! Generation of the fixed EPUB documents around a [`Book`]'s content.
//!
//! - `META-INF/container.xml`
//! - `OEBPS/content.opf`
//! - `OEBPS/Text/nav.xhtml`
//! - `OEBPS/Styles/sgc-nav.css`

mod container;
mod nav;
mod package;
mod style;

use crate::book::Book;
use crate::consts::ocf;
use crate::errors::{AssemblyError, AssemblyResult};
use crate::util::uri;
use crate::writer::WriterResult;

/// The serialized package documents of a book.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Documents {
    /// `OEBPS/content.opf`
    pub content_opf: Vec<u8>,
    /// `META-INF/container.xml`
    pub container_xml: Vec<u8>,
    /// `OEBPS/Text/nav.xhtml`
    pub nav_xhtml: Vec<u8>,
    /// `OEBPS/Styles/sgc-nav.css`
    pub nav_css: Vec<u8>,
}

/// Serialize the package documents of `book`.
///
/// The book is [validated](Book::validate) first.
///
/// # Errors
/// - [`AssemblyError::DuplicateIdentifier`], [`AssemblyError::InvalidNavigation`],
///   or [`AssemblyError::UnknownIdref`] if the book violates its invariants.
/// - [`AssemblyError::Io`] if serialization fails.
pub fn generate(book: &Book) -> AssemblyResult<Documents> {
    book.validate()?;

    let nav = book.nav_item().ok_or(AssemblyError::InvalidNavigation(0))?;
    let nav_path = uri::resolve(ocf::PACKAGE_DIRECTORY, &uri::decode(nav.href())).into_owned();

    Ok(Documents {
        content_opf: render(ocf::PACKAGE_PATH, |buffer| {
            package::write_package(book, buffer)
        })?,
        container_xml: render(ocf::CONTAINER_PATH, |buffer| {
            container::write_container(buffer)
        })?,
        nav_xhtml: render(&nav_path, |buffer| nav::write_nav(book, nav, buffer))?,
        nav_css: style::NAV_CSS.as_bytes().to_vec(),
    })
}

fn render<F>(path: &str, write: F) -> AssemblyResult<Vec<u8>>
where
    F: FnOnce(&mut Vec<u8>) -> WriterResult<()>,
{
    let mut buffer = Vec::new();
    write(&mut buffer).map_err(AssemblyError::io(path))?;
    Ok(buffer)
}
