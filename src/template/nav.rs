use crate::book::{Book, ItemOrigin, ManifestItem, SpineEntry};
use crate::consts::{epub, xhtml, xml};
use crate::util::uri;
use crate::writer::WriterResult;
use crate::writer::xml::{XmlWriter, write_element};
use std::io::Write;

const TOC_ID: &str = "toc";
const TOC_FRAGMENT: &str = "#toc";
const LANDMARKS_ID: &str = "landmarks";
const TOC_LABEL: &str = "Table of Contents";
const LANDMARKS_LABEL: &str = "Landmarks";

struct NavWriter<'a, W> {
    book: &'a Book,
    /// Directory of the navigation document, relative to the package document.
    nav_dir: &'a str,
    writer: XmlWriter<'a, W>,
}

impl<'a, W: Write> NavWriter<'a, W> {
    fn new(book: &'a Book, nav: &'a ManifestItem, writer: W) -> Self {
        Self {
            nav_dir: uri::parent(nav.href()),
            writer: XmlWriter::new(writer),
            book,
        }
    }

    fn write_xhtml(mut self) -> WriterResult<()> {
        let language = self.book.language.as_str();

        self.writer.write_utf8_declaration()?.write_html_doctype()?;

        write_element! {
            writer: self.writer,
            tag: xhtml::HTML,
            attributes: {
                xml::XMLNS  => xhtml::XHTML_NS,
                epub::XMLNS => epub::EPUB_NS,
                xhtml::LANG => language,
                xml::LANG   => language,
            }
            inner_content: {
                self.write_head()?;
                self.write_body()?;
            }
        }
    }

    fn write_head(&mut self) -> WriterResult<()> {
        write_element! {
            writer: self.writer,
            tag: xhtml::HEAD,
            inner_content: {
                write_element! {
                    writer: self.writer,
                    tag: xhtml::TITLE,
                    text: &self.book.title,
                }?;
                write_element! {
                    writer: self.writer,
                    tag: xhtml::META,
                    attributes: {
                        xhtml::CHARSET => xhtml::UTF_8,
                    }
                }?;
                self.write_stylesheet_links()?;
            }
        }
    }

    fn write_stylesheet_links(&mut self) -> WriterResult<()> {
        let book = self.book;

        for stylesheet in book
            .manifest
            .iter()
            .filter(|item| item.origin == ItemOrigin::Stylesheet)
        {
            write_element! {
                writer: self.writer,
                tag: xhtml::LINK,
                attributes: {
                    xhtml::HREF => uri::relativize(self.nav_dir, stylesheet.href()).as_str(),
                    xhtml::REL  => xhtml::STYLESHEET,
                    xhtml::TYPE => stylesheet.media_type,
                }
            }?;
        }
        Ok(())
    }

    fn write_body(&mut self) -> WriterResult<()> {
        write_element! {
            writer: self.writer,
            tag: xhtml::BODY,
            attributes: {
                epub::TYPE => epub::FRONTMATTER,
            }
            inner_content: {
                self.write_toc()?;
                self.write_landmarks()?;
            }
        }
    }

    fn write_toc(&mut self) -> WriterResult<()> {
        let book = self.book;

        write_element! {
            writer: self.writer,
            tag: xhtml::NAV,
            attributes: {
                epub::TYPE => epub::TOC,
                xml::ID    => TOC_ID,
            }
            inner_content: {
                write_element! {
                    writer: self.writer,
                    tag: xhtml::H1,
                    text: TOC_LABEL,
                }?;
                write_element! {
                    writer: self.writer,
                    tag: xhtml::ORDERED_LIST,
                    inner_content: {
                        for (entry, item) in book.chapters() {
                            self.write_toc_entry(entry, item)?;
                        }
                    }
                }?;
            }
        }
    }

    fn write_toc_entry(&mut self, entry: &SpineEntry, item: &ManifestItem) -> WriterResult<()> {
        // Entries without a descriptor fall back to their idref
        let label = entry.label().unwrap_or_else(|| entry.idref.clone());
        let href = uri::relativize(self.nav_dir, item.href());

        write_element! {
            writer: self.writer,
            tag: xhtml::LIST_ITEM,
            inner_content: {
                write_element! {
                    writer: self.writer,
                    tag: xhtml::ANCHOR,
                    text: &label,
                    attributes: {
                        xhtml::HREF => href.as_str(),
                    }
                }?;
            }
        }
    }

    fn write_landmarks(&mut self) -> WriterResult<()> {
        write_element! {
            writer: self.writer,
            tag: xhtml::NAV,
            attributes: {
                epub::TYPE    => epub::LANDMARKS,
                xml::ID       => LANDMARKS_ID,
                xhtml::HIDDEN => "",
            }
            inner_content: {
                write_element! {
                    writer: self.writer,
                    tag: xhtml::H2,
                    text: LANDMARKS_LABEL,
                }?;
                write_element! {
                    writer: self.writer,
                    tag: xhtml::ORDERED_LIST,
                    inner_content: {
                        write_element! {
                            writer: self.writer,
                            tag: xhtml::LIST_ITEM,
                            inner_content: {
                                write_element! {
                                    writer: self.writer,
                                    tag: xhtml::ANCHOR,
                                    text: TOC_LABEL,
                                    attributes: {
                                        epub::TYPE  => epub::TOC,
                                        xhtml::HREF => TOC_FRAGMENT,
                                    }
                                }?;
                            }
                        }?;
                    }
                }?;
            }
        }
    }
}

pub(super) fn write_nav<W: Write>(book: &Book, nav: &ManifestItem, writer: W) -> WriterResult<()> {
    NavWriter::new(book, nav, writer).write_xhtml()
}
