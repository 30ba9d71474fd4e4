use percent_encoding::{AsciiSet, CONTROLS};
use std::borrow::Cow;

/// Characters escaped within a single href path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'\\');

pub(crate) fn parent(href: &str) -> &str {
    href.rfind('/')
        .map_or("", |index| if index == 0 { "/" } else { &href[..index] })
}

/// Percent-encode a file name so it may be used as one href segment.
pub(crate) fn encode_segment(segment: &str) -> Cow<'_, str> {
    percent_encoding::utf8_percent_encode(segment, SEGMENT).into()
}

pub(crate) fn decode(encoded: &str) -> Cow<'_, str> {
    percent_encoding::percent_decode_str(encoded).decode_utf8_lossy()
}

/// Resolve a child href against its parent directory, normalizing `.` and `..` segments.
///
/// Only `/` separates segments; any other character (including `\\`) is kept verbatim.
pub(crate) fn resolve<'a>(parent_dir: &str, relative: &'a str) -> Cow<'a, str> {
    if relative.starts_with('/') {
        return Cow::Borrowed(relative);
    }

    let mut stack = Vec::new();
    for segment in parent_dir.split('/').chain(relative.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            _ => stack.push(segment),
        }
    }

    let resolved = stack.join("/");
    Cow::Owned(if parent_dir.starts_with('/') {
        format!("/{resolved}")
    } else {
        resolved
    })
}

/// Express `href` relative to the directory `from_dir`.
///
/// Both arguments must be normalized and relative to the same root.
pub(crate) fn relativize(from_dir: &str, href: &str) -> String {
    let from: Vec<&str> = from_dir.split('/').filter(|s| !s.is_empty()).collect();
    let to: Vec<&str> = href.split('/').filter(|s| !s.is_empty()).collect();
    let shared = from
        .iter()
        .zip(&to)
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments = vec![".."; from.len() - shared];
    segments.extend_from_slice(&to[shared..]);
    segments.join("/")
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_parent_href() {
        #[rustfmt::skip]
        let expected = [
            ("OEBPS/Text", "OEBPS/Text/chp1.xhtml"),
            ("OEBPS", "OEBPS/content.opf"),
            ("", "OEBPS"),
            ("/", "/OEBPS"),
            ("", ""),
        ];

        for (expected_parent, href) in expected {
            assert_eq!(expected_parent, super::parent(href));
        }
    }

    #[test]
    fn test_encode_segment() {
        #[rustfmt::skip]
        let expected = [
            ("chp1.xhtml", "chp1.xhtml"),
            ("cover%20art.jpg", "cover art.jpg"),
            ("100%25.png", "100%.png"),
            ("a%23b.gif", "a#b.gif"),
            ("%E6%8C%BF%E7%94%BB.png", "挿画.png"),
        ];

        for (expected_encoded, segment) in expected {
            assert_eq!(expected_encoded, super::encode_segment(segment));
            assert_eq!(segment, super::decode(expected_encoded));
        }
    }

    #[test]
    fn test_resolve() {
        #[rustfmt::skip]
        let expected = [
            ("OEBPS/Text/chp1.xhtml", "OEBPS", "Text/chp1.xhtml"),
            ("OEBPS/Styles/sgc-nav.css", "OEBPS/Text", "../Styles/sgc-nav.css"),
            ("OEBPS/Images/a.png", "OEBPS", "./Images/./a.png"),
            ("/mimetype", "OEBPS", "/mimetype"),
            ("OEBPS/Images/a\\b.png", "OEBPS", "Images/a\\b.png"),
            ("Images/a.png", "OEBPS", "../../Images/a.png"),
            ("/OEBPS/Text/chp1.xhtml", "/OEBPS", "Text/chp1.xhtml"),
        ];

        for (expected_href, parent_dir, relative) in expected {
            assert_eq!(expected_href, super::resolve(parent_dir, relative));
        }
    }

    #[test]
    fn test_relativize() {
        #[rustfmt::skip]
        let expected = [
            ("chp1.xhtml", "Text", "Text/chp1.xhtml"),
            ("../Styles/sgc-nav.css", "Text", "Styles/sgc-nav.css"),
            ("Images/a.png", "", "Images/a.png"),
            ("../../x.png", "a/b", "x.png"),
        ];

        for (expected_href, from_dir, href) in expected {
            assert_eq!(expected_href, super::relativize(from_dir, href));
        }
    }
}
