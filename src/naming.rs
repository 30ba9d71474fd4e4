//! Naming conventions for chapter files.
//!
//! Every chapter-shaped unit of a book is identified by a [`ChapterDescriptor`],
//! which maps to exactly one canonical file name within the `chapters/` directory:
//!
//! | Descriptor                   | File name          |
//! |------------------------------|--------------------|
//! | `Prologue`                   | `prologue.xhtml`   |
//! | `Epilogue`                   | `epilogue.xhtml`   |
//! | `Afterword`                  | `afterword.xhtml`  |
//! | `Extra(None)`                | `extra.xhtml`      |
//! | `Extra(Some(2))`             | `extra2.xhtml`     |
//! | `SideStory(Some(1))`         | `ss1.xhtml`        |
//! | `Interlude(Some(2.5))`       | `interlude2.5.xhtml` |
//! | `Chapter(3)`                 | `chp3.xhtml`       |
//!
//! # Reading order
//! [`Ord`] on [`ChapterDescriptor`] is the reading order of a book:
//! 1. `Prologue`
//! 2. `Chapter`, `Extra`, `Interlude` and `SideStory` interleaved by ascending number,
//!    where an absent number counts as `0`.
//!    Equal numbers are ordered by kind name (`chapter` < `extra` < `interlude` < `sidestory`).
//! 3. `Epilogue`
//! 4. `Afterword`

mod number;

use crate::errors::{AssemblyError, AssemblyResult};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

pub use self::number::ChapterNumber;

/// File extension shared by every chapter document.
pub const CHAPTER_EXTENSION: &str = ".xhtml";

const PROLOGUE: &str = "prologue";
const EPILOGUE: &str = "epilogue";
const AFTERWORD: &str = "afterword";
const EXTRA: &str = "extra";
const SIDE_STORY: &str = "ss";
const INTERLUDE: &str = "interlude";
const CHAPTER: &str = "chp";

/// The kind of a [`ChapterDescriptor`], without its number.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChapterKind {
    /// See [`ChapterDescriptor::Prologue`].
    Prologue,
    /// See [`ChapterDescriptor::Epilogue`].
    Epilogue,
    /// See [`ChapterDescriptor::Afterword`].
    Afterword,
    /// See [`ChapterDescriptor::Extra`].
    Extra,
    /// See [`ChapterDescriptor::SideStory`].
    SideStory,
    /// See [`ChapterDescriptor::Interlude`].
    Interlude,
    /// See [`ChapterDescriptor::Chapter`].
    Chapter,
}

impl ChapterKind {
    /// The kind name, used to break ordering ties between equally numbered entries.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prologue => "prologue",
            Self::Epilogue => "epilogue",
            Self::Afterword => "afterword",
            Self::Extra => "extra",
            Self::SideStory => "sidestory",
            Self::Interlude => "interlude",
            Self::Chapter => "chapter",
        }
    }
}

/// Semantic identity of one chapter-shaped unit of a book.
///
/// `Prologue`, `Epilogue` and `Afterword` never carry a number,
/// and a plain `Chapter` always does.
/// For `Extra`, `SideStory` and `Interlude`, a number of `0`
/// is equivalent to an absent number.
///
/// # Examples
/// ```
/// use lnassist::naming::{ChapterDescriptor, ChapterNumber};
///
/// let extra = ChapterDescriptor::Extra(Some(ChapterNumber::from(2u32)));
/// assert_eq!("extra2.xhtml", extra.to_file_name());
///
/// let parsed = ChapterDescriptor::from_file_name("extra2.xhtml").unwrap();
/// assert_eq!(extra, parsed);
/// assert!(ChapterDescriptor::Prologue < parsed);
/// ```
#[derive(Clone, Debug)]
pub enum ChapterDescriptor {
    /// `prologue.xhtml`
    Prologue,
    /// `epilogue.xhtml`
    Epilogue,
    /// `afterword.xhtml`
    Afterword,
    /// `extra.xhtml` or `extra{n}.xhtml`
    Extra(Option<ChapterNumber>),
    /// `ss.xhtml` or `ss{n}.xhtml`
    SideStory(Option<ChapterNumber>),
    /// `interlude.xhtml` or `interlude{n}.xhtml`
    Interlude(Option<ChapterNumber>),
    /// `chp{n}.xhtml`
    Chapter(ChapterNumber),
}

impl ChapterDescriptor {
    /// Shorthand for a plain numbered [`ChapterDescriptor::Chapter`].
    pub fn chapter(number: impl Into<ChapterNumber>) -> Self {
        Self::Chapter(number.into())
    }

    /// The kind of this descriptor.
    pub fn kind(&self) -> ChapterKind {
        match self {
            Self::Prologue => ChapterKind::Prologue,
            Self::Epilogue => ChapterKind::Epilogue,
            Self::Afterword => ChapterKind::Afterword,
            Self::Extra(_) => ChapterKind::Extra,
            Self::SideStory(_) => ChapterKind::SideStory,
            Self::Interlude(_) => ChapterKind::Interlude,
            Self::Chapter(_) => ChapterKind::Chapter,
        }
    }

    /// The number of this descriptor, if present and non-zero
    /// (a plain chapter always returns its number, including `0`).
    pub fn number(&self) -> Option<&ChapterNumber> {
        match self {
            Self::Prologue | Self::Epilogue | Self::Afterword => None,
            Self::Extra(number) | Self::SideStory(number) | Self::Interlude(number) => {
                number.as_ref().filter(|number| !number.is_zero())
            }
            Self::Chapter(number) => Some(number),
        }
    }

    /// The canonical file name of this descriptor within the `chapters/` directory.
    pub fn to_file_name(&self) -> String {
        let stem = match self {
            Self::Prologue => PROLOGUE,
            Self::Epilogue => EPILOGUE,
            Self::Afterword => AFTERWORD,
            Self::Extra(_) => EXTRA,
            Self::SideStory(_) => SIDE_STORY,
            Self::Interlude(_) => INTERLUDE,
            Self::Chapter(_) => CHAPTER,
        };

        match self.number() {
            Some(number) => format!("{stem}{number}{CHAPTER_EXTENSION}"),
            None => format!("{stem}{CHAPTER_EXTENSION}"),
        }
    }

    /// Resolve a file name back into its descriptor.
    ///
    /// This is the exact inverse of [`Self::to_file_name`]:
    /// only canonical names are recognized (`chp03.xhtml` and `extra0.xhtml` are not).
    ///
    /// # Errors
    /// [`AssemblyError::UnrecognizedName`] if the name matches no pattern.
    pub fn from_file_name(file_name: &str) -> AssemblyResult<Self> {
        let unrecognized = || AssemblyError::UnrecognizedName(file_name.to_owned());
        let stem = file_name
            .strip_suffix(CHAPTER_EXTENSION)
            .ok_or_else(unrecognized)?;

        match stem {
            PROLOGUE => return Ok(Self::Prologue),
            EPILOGUE => return Ok(Self::Epilogue),
            AFTERWORD => return Ok(Self::Afterword),
            _ => {}
        }

        // Matches a suffix, which must be either empty or a canonical non-zero number.
        let supplement = |suffix: &str| -> AssemblyResult<Option<ChapterNumber>> {
            if suffix.is_empty() {
                return Ok(None);
            }
            match suffix.parse::<ChapterNumber>() {
                Ok(number) if !number.is_zero() => Ok(Some(number)),
                _ => Err(unrecognized()),
            }
        };

        if let Some(suffix) = stem.strip_prefix(CHAPTER) {
            suffix
                .parse()
                .map(Self::Chapter)
                .map_err(|_| unrecognized())
        } else if let Some(suffix) = stem.strip_prefix(EXTRA) {
            supplement(suffix).map(Self::Extra)
        } else if let Some(suffix) = stem.strip_prefix(SIDE_STORY) {
            supplement(suffix).map(Self::SideStory)
        } else if let Some(suffix) = stem.strip_prefix(INTERLUDE) {
            supplement(suffix).map(Self::Interlude)
        } else {
            Err(unrecognized())
        }
    }

    /// Human-readable label used by the table of contents (e.g., `Chapter 3`).
    pub fn label(&self) -> String {
        let name = match self.kind() {
            ChapterKind::Prologue => "Prologue",
            ChapterKind::Epilogue => "Epilogue",
            ChapterKind::Afterword => "Afterword",
            ChapterKind::Extra => "Extra",
            ChapterKind::SideStory => "Side Story",
            ChapterKind::Interlude => "Interlude",
            ChapterKind::Chapter => "Chapter",
        };

        match self.number() {
            Some(number) => format!("{name} {number}"),
            None => name.to_owned(),
        }
    }

    /// Coarse position within the book: front, body, epilogue, afterword.
    fn section(&self) -> u8 {
        match self {
            Self::Prologue => 0,
            Self::Extra(_) | Self::SideStory(_) | Self::Interlude(_) | Self::Chapter(_) => 1,
            Self::Epilogue => 2,
            Self::Afterword => 3,
        }
    }

    fn sort_number(&self) -> &ChapterNumber {
        self.number().unwrap_or(&number::ZERO)
    }
}

impl FromStr for ChapterDescriptor {
    type Err = AssemblyError;

    fn from_str(file_name: &str) -> Result<Self, Self::Err> {
        Self::from_file_name(file_name)
    }
}

impl Display for ChapterDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

impl PartialEq for ChapterDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ChapterDescriptor {}

impl Hash for ChapterDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must agree with `Ord`: an absent number hashes as `0`.
        self.kind().hash(state);
        self.sort_number().hash(state);
    }
}

impl PartialOrd for ChapterDescriptor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ChapterDescriptor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.section()
            .cmp(&other.section())
            .then_with(|| self.sort_number().cmp(other.sort_number()))
            .then_with(|| self.kind().as_str().cmp(other.kind().as_str()))
    }
}
