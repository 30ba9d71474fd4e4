use crate::book::{chapter_xhtml, fixed_builder, open_archive, read_entry};
use lnassist::errors::BoxError;
use lnassist::source::Fetched;
use lnassist::{BookDirectory, ChapterDescriptor, Packager};

/// Stand-in for the external fetch/extraction pipeline.
fn fetch(url: &str) -> Result<Vec<Fetched>, BoxError> {
    let chapter = |descriptor: ChapterDescriptor| Fetched::Chapter {
        xhtml: chapter_xhtml(&descriptor.label()),
        descriptor,
    };

    Ok(match url {
        "https://example.org/otomege/prologue" => vec![chapter(ChapterDescriptor::Prologue)],
        "https://example.org/otomege/chapter-1" => vec![
            chapter(ChapterDescriptor::chapter(1u32)),
            Fetched::Illustration {
                file_name: "https://cdn.example.org/otomege/p001.jpg?w=1200".to_owned(),
                bytes: vec![0xFF, 0xD8, 0xFF],
            },
        ],
        "https://example.org/otomege/interlude" => vec![chapter(ChapterDescriptor::Interlude(None))],
        _ => return Err(format!("no content at `{url}`").into()),
    })
}

#[test]
fn test_materialize_then_assemble() {
    let dir = tempfile::tempdir().unwrap();
    let directory = BookDirectory::for_volume(dir.path(), "Otomege", 1);
    let output = dir.path().join("vol1.epub");

    // Fetched out of reading order
    for url in [
        "https://example.org/otomege/chapter-1",
        "https://example.org/otomege/interlude",
        "https://example.org/otomege/prologue",
    ] {
        directory.materialize(&fetch, url).unwrap();
    }
    assert!(directory.materialize(&fetch, "https://example.org/missing").is_err());

    let warnings =
        lnassist::assemble(&fixed_builder(), &directory, &Packager::new(), &output).unwrap();
    assert!(warnings.is_empty());

    let mut archive = open_archive(&output);
    assert_eq!(
        vec![0xFF, 0xD8, 0xFF],
        read_entry(&mut archive, "OEBPS/Images/p001.jpg")
    );
    assert_eq!(
        chapter_xhtml("Interlude").into_bytes(),
        read_entry(&mut archive, "OEBPS/Text/interlude.xhtml")
    );

    let nav = String::from_utf8(read_entry(&mut archive, "OEBPS/Text/nav.xhtml")).unwrap();
    let prologue = nav.find(">Prologue<").unwrap();
    let interlude = nav.find(">Interlude<").unwrap();
    let chapter = nav.find(">Chapter 1<").unwrap();
    assert!(prologue < interlude && interlude < chapter);
}
