use crate::book::{Book, ManifestItem, SpineEntry};
use crate::consts::{dc, opf, xml};
use crate::writer::WriterResult;
use crate::writer::xml::{XmlWriter, write_element};
use std::io::Write;

/// Value of the `generator` meta, e.g. `lnassist 0.1.0`.
const GENERATOR: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));
/// W3CDTF form required for `dcterms:modified`, e.g. `2020-01-15T00:21:15Z`.
const MODIFIED_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

struct PackageWriter<'a, W> {
    book: &'a Book,
    writer: XmlWriter<'a, W>,
}

impl<'a, W: Write> PackageWriter<'a, W> {
    fn new(book: &'a Book, writer: W) -> Self {
        Self {
            writer: XmlWriter::new(writer),
            book,
        }
    }

    fn write_opf(mut self) -> WriterResult<()> {
        self.writer.write_utf8_declaration()?;

        write_element! {
            writer: self.writer,
            tag: opf::PACKAGE,
            attributes: {
                opf::VERSION   => opf::PACKAGE_VERSION,
                opf::UNIQUE_ID => opf::BOOK_ID,
                xml::XMLNS     => opf::OPF_NS,
            }
            inner_content: {
                self.write_metadata()?;
                self.write_manifest()?;
                self.write_spine()?;
            }
        }
    }

    fn write_metadata(&mut self) -> WriterResult<()> {
        let book = self.book;
        let modified = book.modified.format(MODIFIED_FORMAT).to_string();

        write_element! {
            writer: self.writer,
            tag: opf::METADATA,
            attributes: {
                dc::XMLNS_DC => dc::DC_NS,
            }
            inner_content: {
                write_element! {
                    writer: self.writer,
                    tag: dc::IDENTIFIER,
                    text: &book.identifier,
                    attributes: {
                        xml::ID => opf::BOOK_ID,
                    }
                }?;
                write_element! {
                    writer: self.writer,
                    tag: dc::LANGUAGE,
                    text: &book.language,
                }?;
                write_element! {
                    writer: self.writer,
                    tag: dc::TITLE,
                    text: &book.title,
                }?;
                write_element! {
                    writer: self.writer,
                    tag: opf::META,
                    text: &modified,
                    attributes: {
                        opf::PROPERTY => opf::MODIFIED,
                    }
                }?;
                write_element! {
                    writer: self.writer,
                    tag: opf::META,
                    attributes: {
                        opf::NAME    => opf::GENERATOR,
                        opf::CONTENT => GENERATOR,
                    }
                }?;
            }
        }
    }

    fn write_manifest(&mut self) -> WriterResult<()> {
        write_element! {
            writer: self.writer,
            tag: opf::MANIFEST,
            inner_content: {
                for item in &self.book.manifest {
                    self.write_item(item)?;
                }
            }
        }
    }

    fn write_item(&mut self, item: &ManifestItem) -> WriterResult<()> {
        write_element! {
            writer: self.writer,
            tag: opf::ITEM,
            attributes: {
                xml::ID         => item.id.as_str(),
                opf::HREF       => item.href.as_str(),
                opf::MEDIA_TYPE => item.media_type,
                opf::PROPERTIES => item.properties.as_option_str(),
            }
        }
    }

    fn write_spine(&mut self) -> WriterResult<()> {
        write_element! {
            writer: self.writer,
            tag: opf::SPINE,
            inner_content: {
                for entry in &self.book.spine {
                    self.write_itemref(entry)?;
                }
            }
        }
    }

    fn write_itemref(&mut self, entry: &SpineEntry) -> WriterResult<()> {
        write_element! {
            writer: self.writer,
            tag: opf::ITEMREF,
            attributes: {
                opf::IDREF                        => entry.idref.as_str(),
                opf::LINEAR where !entry.linear => opf::NO,
            }
        }
    }
}

pub(super) fn write_package<W: Write>(book: &Book, writer: W) -> WriterResult<()> {
    PackageWriter::new(book, writer).write_opf()
}

#[cfg(test)]
mod tests {
    use crate::template::tests::sample_book;

    fn render() -> String {
        let mut buffer = Vec::new();
        super::write_package(&sample_book(), &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_write_package_metadata() {
        let opf = render();
        let book = sample_book();

        #[rustfmt::skip]
        let expected = [
            r#"<package version="3.0" unique-identifier="BookId" xmlns="http://www.idpf.org/2007/opf">"#,
            r#"<metadata xmlns:dc="http://purl.org/dc/elements/1.1/">"#,
            r#"<dc:language>en</dc:language>"#,
            r#"<dc:title>Otome Games &amp; Mobs</dc:title>"#,
            r#"<meta property="dcterms:modified">2020-01-15T00:21:15Z</meta>"#,
            concat!(r#"<meta name="generator" content="lnassist "#, env!("CARGO_PKG_VERSION"), r#""/>"#),
        ];

        for fragment in expected {
            assert!(opf.contains(fragment), "missing `{fragment}` in:\n{opf}");
        }
        assert!(opf.contains(&format!(
            r#"<dc:identifier id="BookId">{}</dc:identifier>"#,
            book.identifier()
        )));
    }

    #[test]
    fn test_write_package_manifest_and_spine() {
        let opf = render();

        #[rustfmt::skip]
        let expected = [
            r#"<item id="sgc-nav.css" href="Styles/sgc-nav.css" media-type="text/css"/>"#,
            r#"<item id="nav.xhtml" href="Text/nav.xhtml" media-type="application/xhtml+xml" properties="nav"/>"#,
            r#"<item id="prologue.xhtml" href="Text/prologue.xhtml" media-type="application/xhtml+xml"/>"#,
            r#"<item id="chp1.xhtml" href="Text/chp1.xhtml" media-type="application/xhtml+xml"/>"#,
            r#"<item id="a_b.png" href="Images/a%20b.png" media-type="image/png"/>"#,
            r#"<itemref idref="nav.xhtml" linear="no"/>"#,
            r#"<itemref idref="prologue.xhtml"/>"#,
            r#"<itemref idref="chp1.xhtml"/>"#,
        ];

        let mut last = 0;
        for fragment in expected {
            let position = opf[last..]
                .find(fragment)
                .unwrap_or_else(|| panic!("missing or out of order `{fragment}`"));
            last += position + fragment.len();
        }
    }
}
