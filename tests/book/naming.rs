use lnassist::ChapterDescriptor;
use lnassist::errors::AssemblyError;
use lnassist::naming::{ChapterKind, ChapterNumber};

fn parse(name: &str) -> ChapterDescriptor {
    name.parse().unwrap()
}

#[test]
fn test_sorted_reading_order() {
    #[rustfmt::skip]
    let mut names = vec![
        "afterword.xhtml", "chp10.xhtml", "chp2.5.xhtml", "chp2.xhtml", "epilogue.xhtml",
        "extra.xhtml", "extra2.xhtml", "interlude2.xhtml", "prologue.xhtml", "ss1.xhtml",
        "chp1.xhtml",
    ];
    names.sort_by_key(|name| parse(name));

    #[rustfmt::skip]
    assert_eq!(
        vec![
            "prologue.xhtml",
            "extra.xhtml",      // absent number sorts as 0
            "chp1.xhtml",
            "ss1.xhtml",
            "chp2.xhtml",
            "extra2.xhtml",
            "interlude2.xhtml",
            "chp2.5.xhtml",
            "chp10.xhtml",
            "epilogue.xhtml",
            "afterword.xhtml",
        ],
        names
    );
}

#[test]
fn test_file_name_round_trip() {
    #[rustfmt::skip]
    let expected = [
        ("prologue.xhtml", ChapterKind::Prologue, None),
        ("chp12.xhtml", ChapterKind::Chapter, Some("12")),
        ("chp0.xhtml", ChapterKind::Chapter, Some("0")),
        ("ss3.xhtml", ChapterKind::SideStory, Some("3")),
        ("interlude.xhtml", ChapterKind::Interlude, None),
        ("extra1.5.xhtml", ChapterKind::Extra, Some("1.5")),
    ];

    for (name, kind, number) in expected {
        let descriptor = parse(name);

        assert_eq!(kind, descriptor.kind());
        assert_eq!(number, descriptor.number().map(ChapterNumber::to_string).as_deref());
        assert_eq!(name, descriptor.to_file_name());
    }
}

#[test]
fn test_unrecognized_names() {
    for name in [
        "chp03.xhtml",
        "chp.xhtml",
        "extra0.xhtml",
        "chp1.html",
        "Prologue.xhtml",
        "chp-1.xhtml",
        "chp1.50.xhtml",
        ".chp1.xhtml.lnassist.tmp",
    ] {
        match name.parse::<ChapterDescriptor>() {
            Err(error @ AssemblyError::UnrecognizedName(_)) => assert!(error.is_recoverable()),
            other => panic!("`{name}` unexpectedly resolved: {other:?}"),
        }
    }
}
