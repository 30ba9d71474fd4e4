//! # lnassist
//!
//! Assembles light-novel chapters and illustrations into EPUB 3 books.
//!
//! A book's working directory holds its content:
//! ```text
//! files/otomege/vol1/
//! ├── chapters/        prologue.xhtml, chp1.xhtml, extra1.xhtml, chp2.xhtml, ...
//! └── illustrations/   001.jpg, 002.png, ...
//! ```
//! Chapter file names follow a fixed [naming convention](naming),
//! which also determines the reading order.
//!
//! Assembly is a single pass:
//! 1. [`BookBuilder`] scans the directory into a [`Book`](book::Book).
//! 2. [`template::generate`] produces the package documents.
//! 3. [`Packager`] writes the archive, replacing the output atomically.
//!
//! ## Examples
//! Assembling a volume in one call:
//! ```no_run
//! use lnassist::{BookBuilder, BookDirectory, Packager};
//!
//! let directory = BookDirectory::for_volume("files", "Otomege", 1);
//! let warnings = lnassist::assemble(
//!     BookBuilder::new("Otomege Volume 1").language("en"),
//!     &directory,
//!     &Packager::new(),
//!     "Otomege Volume 1.epub",
//! )?;
//!
//! for warning in warnings {
//!     eprintln!("skipped: {warning}");
//! }
//! # Ok::<(), lnassist::errors::AssemblyError>(())
//! ```
//! Placing content before assembly:
//! ```
//! use lnassist::naming::ChapterDescriptor;
//! # let dir = tempfile::tempdir()?;
//! # let directory = lnassist::BookDirectory::new(dir.path());
//!
//! let prologue: ChapterDescriptor = "prologue.xhtml".parse()?;
//! let path = directory.place_chapter(&prologue, b"<html/>")?;
//!
//! assert!(path.ends_with("chapters/prologue.xhtml"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Logging
//! Diagnostics are emitted through [`tracing`]:
//! skipped files at `WARN`, each written file and archive entry at `DEBUG`,
//! and each finished archive at `INFO`.

mod assemble;
mod consts;
mod util;
mod writer;

pub mod book;
pub mod builder;
pub mod errors;
pub mod layout;
pub mod naming;
pub mod packager;
pub mod source;
pub mod template;

pub use self::{
    assemble::assemble,
    builder::{BookBuilder, Build, ScanWarning},
    layout::BookDirectory,
    naming::ChapterDescriptor,
    packager::Packager,
};
