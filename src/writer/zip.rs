use crate::writer::WriterResult;
use std::io::{Seek, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime as ZipDateTime};

pub(crate) trait ZipFileOptionsExt {
    fn zip_compression_level(self, level: u8) -> Self;

    /// Pin the entry timestamp so repeated runs produce identical archives.
    fn zip_fixed_timestamp(self) -> Self;
}

impl ZipFileOptionsExt for SimpleFileOptions {
    fn zip_compression_level(self, level: u8) -> Self {
        if level == 0 {
            self.compression_method(CompressionMethod::Stored)
        } else {
            self.compression_method(CompressionMethod::Deflated)
                .compression_level(Some(level as i64))
        }
    }

    fn zip_fixed_timestamp(self) -> Self {
        // 1980-01-01 00:00:00, the earliest DOS timestamp
        self.last_modified_time(ZipDateTime::default())
    }
}

/// Sequential OCF archive writer.
///
/// Entries are appended in call order; the underlying writer must be seekable
/// so local headers carry sizes directly (no data descriptors).
pub(crate) struct ZipWriter<W: Write + Seek> {
    inner: zip::ZipWriter<W>,
    options: SimpleFileOptions,
}

impl<W: Write + Seek> ZipWriter<W> {
    pub(crate) fn new(writer: W, compression: u8) -> Self {
        Self {
            inner: zip::ZipWriter::new(writer),
            options: SimpleFileOptions::default()
                .zip_fixed_timestamp()
                .zip_compression_level(compression),
        }
    }

    fn start_zip_file_entry(&mut self, name: &str, options: SimpleFileOptions) -> WriterResult<()> {
        self.inner
            // Strip leading '/' to avoid absolute paths in the archive.
            .start_file(name.trim_start_matches('/'), options)
            .map_err(from_zip_error)
    }

    pub(crate) fn start_uncompressed_file(&mut self, name: &str) -> WriterResult<()> {
        self.start_zip_file_entry(
            name,
            SimpleFileOptions::default()
                .zip_fixed_timestamp()
                .compression_method(CompressionMethod::Stored),
        )
    }

    pub(crate) fn start_file(&mut self, name: &str) -> WriterResult<()> {
        self.start_zip_file_entry(name, self.options)
    }

    pub(crate) fn finish(self) -> WriterResult<W> {
        self.inner.finish().map_err(from_zip_error)
    }
}

impl<W: Write + Seek> Write for ZipWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

fn from_zip_error(error: zip::result::ZipError) -> std::io::Error {
    match error {
        zip::result::ZipError::Io(error) => error,
        error => std::io::Error::other(error),
    }
}

#[cfg(test)]
mod tests {
    use super::ZipWriter;
    use std::io::{Cursor, Read, Write};
    use zip::CompressionMethod;

    #[test]
    fn test_stored_and_deflated_entries() {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()), 6);
        zip.start_uncompressed_file("mimetype").unwrap();
        zip.write_all(b"application/epub+zip").unwrap();
        zip.start_file("/OEBPS/Text/chp1.xhtml").unwrap();
        zip.write_all(b"<html/>").unwrap();
        let cursor = zip.finish().unwrap();

        let mut archive = zip::ZipArchive::new(cursor).unwrap();
        {
            let mut mimetype = archive.by_index(0).unwrap();
            let mut content = String::new();
            mimetype.read_to_string(&mut content).unwrap();

            assert_eq!("mimetype", mimetype.name());
            assert_eq!(CompressionMethod::Stored, mimetype.compression());
            assert_eq!("application/epub+zip", content);
        }
        let chapter = archive.by_index(1).unwrap();
        assert_eq!("OEBPS/Text/chp1.xhtml", chapter.name());
        assert_eq!(CompressionMethod::Deflated, chapter.compression());
    }

    #[test]
    fn test_compression_level_zero_stores() {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()), 0);
        zip.start_file("OEBPS/content.opf").unwrap();
        zip.write_all(b"<package/>").unwrap();
        let cursor = zip.finish().unwrap();

        let mut archive = zip::ZipArchive::new(cursor).unwrap();
        let entry = archive.by_index(0).unwrap();
        assert_eq!(CompressionMethod::Stored, entry.compression());
    }
}
