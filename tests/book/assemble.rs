use crate::book::{
    TITLE, attribute_values, chapter_xhtml, entry_names, example_volume, fixed_builder,
    fixed_time, open_archive, read_entry, read_entry_string, volume_with,
};
use lnassist::errors::AssemblyError;
use lnassist::{BookBuilder, Packager, ScanWarning};
use std::collections::HashSet;
use std::fs;
use zip::CompressionMethod;

#[test]
fn test_assemble_layout() {
    let (dir, directory) = example_volume();
    let output = dir.path().join("vol1.epub");

    let warnings =
        lnassist::assemble(&fixed_builder(), &directory, &Packager::new(), &output).unwrap();
    assert!(warnings.is_empty());

    let mut archive = open_archive(&output);
    #[rustfmt::skip]
    assert_eq!(
        vec![
            "mimetype",
            "META-INF/container.xml",
            "OEBPS/content.opf",
            "OEBPS/Text/nav.xhtml",
            "OEBPS/Styles/sgc-nav.css",
            "OEBPS/Text/prologue.xhtml",
            "OEBPS/Text/chp1.xhtml",
            "OEBPS/Text/extra1.xhtml",
            "OEBPS/Text/chp2.xhtml",
            "OEBPS/Text/epilogue.xhtml",
            "OEBPS/Text/afterword.xhtml",
            "OEBPS/Images/001.jpg",
            "OEBPS/Images/map.png",
        ],
        entry_names(&mut archive)
    );

    let mimetype = archive.by_index(0).unwrap();
    assert_eq!(CompressionMethod::Stored, mimetype.compression());
    drop(mimetype);
    assert_eq!(b"application/epub+zip".as_slice(), read_entry(&mut archive, "mimetype"));
}

#[test]
fn test_assemble_reading_order() {
    let (dir, directory) = example_volume();
    let output = dir.path().join("vol1.epub");
    lnassist::assemble(&fixed_builder(), &directory, &Packager::new(), &output).unwrap();

    let mut archive = open_archive(&output);
    let opf = read_entry_string(&mut archive, "OEBPS/content.opf");
    let nav = read_entry_string(&mut archive, "OEBPS/Text/nav.xhtml");

    #[rustfmt::skip]
    assert_eq!(
        vec![
            "nav.xhtml", "prologue.xhtml", "chp1.xhtml", "extra1.xhtml",
            "chp2.xhtml", "epilogue.xhtml", "afterword.xhtml",
        ],
        attribute_values(&opf, "idref")
    );
    assert_eq!(vec!["no"], attribute_values(&opf, "linear"));

    #[rustfmt::skip]
    assert_eq!(
        vec![
            "../Styles/sgc-nav.css",
            "prologue.xhtml", "chp1.xhtml", "extra1.xhtml",
            "chp2.xhtml", "epilogue.xhtml", "afterword.xhtml",
            "#toc",
        ],
        attribute_values(&nav, "href")
    );
    for label in ["Prologue", "Chapter 1", "Extra 1", "Chapter 2", "Epilogue", "Afterword"] {
        assert!(nav.contains(&format!(">{label}</a>")), "missing `{label}`");
    }
}

#[test]
fn test_assemble_manifest_invariants() {
    let (dir, directory) = example_volume();
    let output = dir.path().join("vol1.epub");
    lnassist::assemble(&fixed_builder(), &directory, &Packager::new(), &output).unwrap();

    let mut archive = open_archive(&output);
    let opf = read_entry_string(&mut archive, "OEBPS/content.opf");

    // `dc:identifier` contributes one `id` as well
    let ids = attribute_values(&opf, "id");
    let hrefs = attribute_values(&opf, "href");
    assert_eq!(ids.len(), ids.iter().collect::<HashSet<_>>().len());
    assert_eq!(hrefs.len(), hrefs.iter().collect::<HashSet<_>>().len());
    assert_eq!(vec!["nav"], attribute_values(&opf, "properties"));
    assert!(ids.contains(&"BookId"));
    assert!(ids.contains(&"x001.jpg"));

    // Every manifest href resolves to an entry within the archive
    for href in hrefs {
        assert!(archive.by_name(&format!("OEBPS/{href}")).is_ok(), "missing `{href}`");
    }
}

#[test]
fn test_assemble_copies_content() {
    let (dir, directory) = example_volume();
    let output = dir.path().join("vol1.epub");
    lnassist::assemble(&fixed_builder(), &directory, &Packager::new(), &output).unwrap();

    let mut archive = open_archive(&output);
    assert_eq!(
        chapter_xhtml("extra1.xhtml").into_bytes(),
        read_entry(&mut archive, "OEBPS/Text/extra1.xhtml")
    );
    assert_eq!(
        fs::read(directory.illustration_path("map.png")).unwrap(),
        read_entry(&mut archive, "OEBPS/Images/map.png")
    );
}

#[test]
fn test_assemble_empty_book() {
    let (dir, directory) = volume_with(&["notes.txt"], &["001.jpg"]);
    let output = dir.path().join("vol1.epub");

    let result = lnassist::assemble(&fixed_builder(), &directory, &Packager::new(), &output);

    assert!(matches!(result, Err(AssemblyError::EmptyBook(_))));
    assert!(!output.exists());
}

#[test]
fn test_assemble_warnings() {
    let (dir, directory) = volume_with(
        &["chp1.xhtml", "chp03.xhtml", "extra0.xhtml", "chapter2.xhtml"],
        &["cover.webp"],
    );
    let output = dir.path().join("vol1.epub");

    let warnings =
        lnassist::assemble(&fixed_builder(), &directory, &Packager::new(), &output).unwrap();

    #[rustfmt::skip]
    assert_eq!(
        vec![
            ScanWarning::UnrecognizedName("chapter2.xhtml".to_owned()),
            ScanWarning::UnrecognizedName("chp03.xhtml".to_owned()),
            ScanWarning::UnrecognizedName("extra0.xhtml".to_owned()),
            ScanWarning::UnsupportedImage("cover.webp".to_owned()),
        ],
        warnings
    );

    let mut archive = open_archive(&output);
    let names = entry_names(&mut archive);
    assert!(names.contains(&"OEBPS/Text/chp1.xhtml".to_owned()));
    assert!(!names.iter().any(|name| name.contains("chp03") || name.contains("webp")));
}

#[cfg(unix)]
#[test]
fn test_assemble_backslash_in_illustration_name() {
    let (dir, directory) = volume_with(&["chp1.xhtml"], &["a\\b.png"]);
    let output = dir.path().join("vol1.epub");

    lnassist::assemble(&fixed_builder(), &directory, &Packager::new(), &output).unwrap();

    let mut archive = open_archive(&output);
    let opf = read_entry_string(&mut archive, "OEBPS/content.opf");
    assert!(attribute_values(&opf, "href").contains(&"Images/a%5Cb.png"));
    assert_eq!(
        fs::read(directory.illustration_path("a\\b.png")).unwrap(),
        read_entry(&mut archive, "OEBPS/Images/a\\b.png")
    );
    assert!(archive.by_name("OEBPS/Images/a/b.png").is_err());
}

#[test]
fn test_assemble_is_idempotent() {
    let (dir, directory) = example_volume();
    let first = dir.path().join("first.epub");
    let second = dir.path().join("second.epub");

    lnassist::assemble(&fixed_builder(), &directory, &Packager::new(), &first).unwrap();
    lnassist::assemble(&fixed_builder(), &directory, &Packager::new(), &second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_assemble_differs_only_in_modified() {
    let (dir, directory) = example_volume();
    let first = dir.path().join("first.epub");
    let second = dir.path().join("second.epub");
    let mut later = BookBuilder::new(TITLE);
    later.modified(fixed_time() + chrono::Duration::days(1));

    lnassist::assemble(&fixed_builder(), &directory, &Packager::new(), &first).unwrap();
    lnassist::assemble(&later, &directory, &Packager::new(), &second).unwrap();

    let mut first = open_archive(&first);
    let mut second = open_archive(&second);
    let names = entry_names(&mut first);
    assert_eq!(names, entry_names(&mut second));

    for name in names {
        let a = read_entry_string_lossy(&mut first, &name);
        let b = read_entry_string_lossy(&mut second, &name);

        if name == "OEBPS/content.opf" {
            assert_ne!(a, b);
            assert!(a.contains("2020-01-15T00:21:15Z"));
            assert!(b.contains("2020-01-16T00:21:15Z"));
            assert_eq!(a.replace("2020-01-15", "2020-01-16"), b);
        } else {
            assert_eq!(a, b, "`{name}` differs");
        }
    }
}

fn read_entry_string_lossy(archive: &mut zip::ZipArchive<fs::File>, name: &str) -> String {
    String::from_utf8_lossy(&read_entry(archive, name)).into_owned()
}

#[test]
fn test_assemble_independent_of_creation_order() {
    let (dir_a, a) = volume_with(&["chp2.xhtml", "prologue.xhtml", "chp1.xhtml"], &["b.png", "a.png"]);
    let (dir_b, b) = volume_with(&["chp1.xhtml", "chp2.xhtml", "prologue.xhtml"], &["a.png", "b.png"]);
    // Same illustration bytes regardless of creation order
    for name in ["a.png", "b.png"] {
        fs::write(a.illustration_path(name), name).unwrap();
        fs::write(b.illustration_path(name), name).unwrap();
    }
    let output_a = dir_a.path().join("vol1.epub");
    let output_b = dir_b.path().join("vol1.epub");

    lnassist::assemble(&fixed_builder(), &a, &Packager::new(), &output_a).unwrap();
    lnassist::assemble(&fixed_builder(), &b, &Packager::new(), &output_b).unwrap();

    assert_eq!(fs::read(&output_a).unwrap(), fs::read(&output_b).unwrap());
}

#[test]
fn test_assemble_replaces_output() {
    let (dir, directory) = example_volume();
    let output = dir.path().join("vol1.epub");
    fs::write(&output, "stale").unwrap();

    lnassist::assemble(&fixed_builder(), &directory, &Packager::new(), &output).unwrap();

    let mut archive = open_archive(&output);
    assert_eq!(b"application/epub+zip".as_slice(), read_entry(&mut archive, "mimetype"));
    // No temporary file remains beside the output
    let siblings: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(2, siblings.len());
}

#[test]
fn test_assemble_failure_keeps_previous_output() {
    let (dir, directory) = volume_with(&[], &[]);
    let output = dir.path().join("vol1.epub");
    fs::write(&output, "previous").unwrap();

    let result = lnassist::assemble(&fixed_builder(), &directory, &Packager::new(), &output);

    assert!(matches!(result, Err(AssemblyError::EmptyBook(_))));
    assert_eq!("previous", fs::read_to_string(&output).unwrap());
}
