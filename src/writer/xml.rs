use crate::writer::WriterResult;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::borrow::Cow;
use std::io::Write;

pub(crate) struct XmlWriter<'a, W> {
    writer: quick_xml::Writer<W>,
    start_element: Option<BytesStart<'a>>,
}

impl<'a, W: Write> XmlWriter<'a, W> {
    pub(crate) fn new(writer: W) -> Self {
        Self {
            writer: quick_xml::Writer::new_with_indent(writer, b' ', 2),
            start_element: None,
        }
    }

    pub(crate) fn write_utf8_declaration(&mut self) -> WriterResult<&mut Self> {
        const XML_VERSION: &str = "1.0";
        const XML_ENCODING: &str = "UTF-8";

        self.writer.write_event(Event::Decl(BytesDecl::new(
            XML_VERSION,
            Some(XML_ENCODING),
            None,
        )))?;

        Ok(self)
    }

    /// Write an HTML5 doctype: `<!DOCTYPE html>`
    pub(crate) fn write_html_doctype(&mut self) -> WriterResult<&mut Self> {
        self.writer
            .write_event(Event::DocType(BytesText::from_escaped("html")))?;
        Ok(self)
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    /// Open `<tag`, closing any pending start tag of its parent.
    pub(crate) fn start_element(&mut self, tag: &'a str) -> WriterResult<&mut Self> {
        self.finish_start_element()?;

        self.start_element = Some(BytesStart::new(tag));
        Ok(self)
    }

    /// Add `name="value"` to the pending start tag; `None` values are skipped.
    pub(crate) fn add_attribute<'b>(
        &mut self,
        name: &str,
        value: impl Into<Option<&'b str>>,
    ) -> &mut Self {
        if let (Some(element), Some(value)) = (&mut self.start_element, value.into()) {
            element.push_attribute(new_escaped_attribute(name, value));
        }
        self
    }

    /// Emit the pending start tag as `<tag ...>`.
    pub(crate) fn finish_start_element(&mut self) -> WriterResult<()> {
        if let Some(element) = self.start_element.take() {
            self.writer.write_event(Event::Start(element))?;
        }
        Ok(())
    }

    /// Close `tag` with `</tag>`.
    pub(crate) fn finish_end_element(&mut self, tag: &str) -> WriterResult<()> {
        self.finish_start_element()?;

        self.writer.write_event(Event::End(BytesEnd::new(tag)))?;
        Ok(())
    }

    /// Emit the pending start tag with escaped `text` content and its end tag.
    pub(crate) fn finish_text_element(&mut self, text: &str) -> WriterResult<()> {
        if let Some(element) = self.start_element.take() {
            let text = BytesText::from_escaped(escape(text));
            self.writer.write_event(Event::Start(element.borrow()))?;
            self.writer.write_event(Event::Text(text))?;
            self.writer.write_event(Event::End(element.to_end()))?;
        }
        Ok(())
    }

    /// Emit the pending start tag as `<tag .../>`.
    pub(crate) fn finish_empty_element(&mut self) -> WriterResult<()> {
        if let Some(element) = self.start_element.take() {
            self.writer.write_event(Event::Empty(element))?;
        }
        Ok(())
    }
}

fn new_escaped_attribute<'a>(name: &'a str, value: &'a str) -> Attribute<'a> {
    Attribute {
        key: quick_xml::name::QName(name.as_bytes()),
        value: match escape(value.trim()) {
            Cow::Borrowed(borrowed) => Cow::Borrowed(borrowed.as_bytes()),
            Cow::Owned(owned) => Cow::Owned(owned.into_bytes()),
        },
    }
}

/// Escape markup characters and whitespace that attribute normalization would alter.
fn escape(input: &str) -> Cow<'_, str> {
    let Some(first) = input.find(|c: char| entity(c).is_some()) else {
        return Cow::Borrowed(input);
    };

    let mut escaped = String::with_capacity(input.len() + 16);
    escaped.push_str(&input[..first]);
    for c in input[first..].chars() {
        match entity(c) {
            Some(entity) => escaped.push_str(entity),
            None => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

fn entity(c: char) -> Option<&'static str> {
    Some(match c {
        '<' => "&lt;",
        '>' => "&gt;",
        '"' => "&quot;",
        '&' => "&amp;",
        '\'' => "&apos;",
        '\t' => "&#9;",
        '\n' => "&#10;",
        '\r' => "&#13;",
        '\u{A0}' => "&#160;",
        _ => return None,
    })
}

/// Write one element through an [`XmlWriter`].
///
/// ```text
/// write_element! { writer: w, tag: "item", attributes: { opf::ID => id, opf::PROPERTIES where nav => "nav", } }
/// write_element! { writer: w, tag: "dc:title", text: title, }
/// write_element! { writer: w, tag: "spine", inner_content: { ... } }
/// ```
macro_rules! write_element {
    // <tag/>
    (writer: $w:expr, tag: $t:expr, $(attributes: $attrs:tt)?) => {
        $crate::writer::xml::write_element!(@helper $w, $t, $($attrs)?)
        .finish_empty_element()
    };
    // <tag>text</tag>
    (writer: $w:expr, tag: $t:expr, text: $text:expr, $(attributes: $attrs:tt)?) => {
        $crate::writer::xml::write_element!(@helper $w, $t, $($attrs)?)
        .finish_text_element($text)
    };
    // <tag>...</tag>
    (writer: $w:expr, tag: $t:expr, $(attributes: $attrs:tt)? inner_content: $inner:block) => {{
        let tag = $t;
        $crate::writer::xml::write_element!(@helper $w, tag, $($attrs)?);
        $w.finish_start_element()?;
        $inner
        $w.finish_end_element(tag)
    }};

    (@helper $w:expr, $t:expr, { $($name:path $(where $cond:expr)? => $val:expr,)* }) => {{
        let mut element = $w.start_element($t)?;
        $(
        $(if $cond)? {
            element = element.add_attribute($name, $val);
        }
        )*
        element
    }};
    (@helper $w:expr, $t:expr,) => {
        $w.start_element($t)?
    };
}

pub(crate) use write_element;
