use crate::builder::{BookBuilder, ScanWarning};
use crate::errors::AssemblyResult;
use crate::layout::BookDirectory;
use crate::packager::Packager;
use std::path::Path;

/// Scan `directory` and package the result into an archive at `output`.
///
/// Returns every file skipped while scanning.
/// On error, no file is written to `output`.
///
/// # Examples
/// ```no_run
/// use lnassist::{BookBuilder, BookDirectory, Packager};
///
/// let directory = BookDirectory::for_volume("files", "Otomege", 1);
/// let warnings = lnassist::assemble(
///     &BookBuilder::new("Otomege Volume 1"),
///     &directory,
///     &Packager::new(),
///     "Otomege Volume 1.epub",
/// )?;
///
/// assert!(warnings.is_empty());
/// # Ok::<(), lnassist::errors::AssemblyError>(())
/// ```
pub fn assemble(
    builder: &BookBuilder,
    directory: &BookDirectory,
    packager: &Packager,
    output: impl AsRef<Path>,
) -> AssemblyResult<Vec<ScanWarning>> {
    let output = output.as_ref();
    let build = builder.build_from(directory)?;

    packager.pack(&build.book, output)?;
    Ok(build.warnings)
}
