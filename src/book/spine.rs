use crate::naming::ChapterDescriptor;

/// A reference to a [`ManifestItem`](super::ManifestItem), written as a spine `<itemref>`.
#[derive(Clone, Debug, PartialEq)]
pub struct SpineEntry {
    pub(crate) idref: String,
    pub(crate) linear: bool,
    pub(crate) descriptor: Option<ChapterDescriptor>,
}

impl SpineEntry {
    pub(crate) fn chapter(idref: impl Into<String>, descriptor: ChapterDescriptor) -> Self {
        Self {
            idref: idref.into(),
            linear: true,
            descriptor: Some(descriptor),
        }
    }

    pub(crate) fn non_linear(idref: impl Into<String>) -> Self {
        Self {
            idref: idref.into(),
            linear: false,
            descriptor: None,
        }
    }

    /// The `id` of the referenced manifest item.
    pub fn idref(&self) -> &str {
        &self.idref
    }

    /// Whether the entry is part of the default linear reading order.
    pub fn is_linear(&self) -> bool {
        self.linear
    }

    /// The chapter this entry represents, or [`None`] for auxiliary documents.
    pub fn descriptor(&self) -> Option<&ChapterDescriptor> {
        self.descriptor.as_ref()
    }

    /// The table of contents label of this entry, if it is a chapter.
    pub fn label(&self) -> Option<String> {
        self.descriptor.as_ref().map(ChapterDescriptor::label)
    }
}
