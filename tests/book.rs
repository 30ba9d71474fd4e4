/// Assembly integration tests
mod book {
    mod assemble;
    mod naming;
    mod source;

    use chrono::{DateTime, Utc};
    use lnassist::{BookBuilder, BookDirectory};
    use std::fs::{self, File};
    use std::io::Read;
    use std::path::Path;
    use tempfile::TempDir;
    use zip::ZipArchive;

    pub(crate) const TITLE: &str = "Otomege Volume 1";

    pub(crate) fn chapter_xhtml(title: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE html>
<html xmlns="http://www.w3.org/1999/xhtml"><head><title>{title}</title></head>
<body><h1>{title}</h1><p>…</p></body></html>"#
        )
    }

    /// A volume holding `chapters` (in the given creation order) and `illustrations`.
    pub(crate) fn volume_with(chapters: &[&str], illustrations: &[&str]) -> (TempDir, BookDirectory) {
        let dir = tempfile::tempdir().unwrap();
        let directory = BookDirectory::for_volume(dir.path(), "Otomege", 1);
        directory.create().unwrap();

        for name in chapters {
            fs::write(directory.chapter_path(name), chapter_xhtml(name)).unwrap();
        }
        for (i, name) in illustrations.iter().enumerate() {
            fs::write(directory.illustration_path(name), [0x89, b'P', b'N', b'G', i as u8]).unwrap();
        }
        (dir, directory)
    }

    /// The volume used throughout: every chapter kind and two illustrations.
    pub(crate) fn example_volume() -> (TempDir, BookDirectory) {
        volume_with(
            &[
                "afterword.xhtml",
                "chp1.xhtml",
                "chp2.xhtml",
                "epilogue.xhtml",
                "extra1.xhtml",
                "prologue.xhtml",
            ],
            &["001.jpg", "map.png"],
        )
    }

    pub(crate) fn fixed_builder() -> BookBuilder {
        let mut builder = BookBuilder::new(TITLE);
        builder.modified(fixed_time());
        builder
    }

    pub(crate) fn fixed_time() -> DateTime<Utc> {
        DateTime::from_timestamp(1_579_047_675, 0).unwrap()
    }

    pub(crate) fn open_archive(path: &Path) -> ZipArchive<File> {
        ZipArchive::new(File::open(path).unwrap()).unwrap()
    }

    pub(crate) fn read_entry(archive: &mut ZipArchive<File>, name: &str) -> Vec<u8> {
        let mut bytes = Vec::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_end(&mut bytes)
            .unwrap();
        bytes
    }

    pub(crate) fn read_entry_string(archive: &mut ZipArchive<File>, name: &str) -> String {
        String::from_utf8(read_entry(archive, name)).unwrap()
    }

    pub(crate) fn entry_names(archive: &mut ZipArchive<File>) -> Vec<String> {
        (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_owned())
            .collect()
    }

    /// Every value of `attribute` within `xml`, in document order.
    pub(crate) fn attribute_values<'a>(xml: &'a str, attribute: &str) -> Vec<&'a str> {
        let needle = format!(" {attribute}=\"");
        xml.match_indices(&needle)
            .filter_map(|(i, _)| {
                let start = i + needle.len();
                xml[start..].find('"').map(|end| &xml[start..start + end])
            })
            .collect()
    }
}
