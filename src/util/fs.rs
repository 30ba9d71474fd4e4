use crate::errors::{AssemblyError, AssemblyResult};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

const TEMP_SUFFIX: &str = "lnassist.tmp";

/// Sibling temporary path of `path` (`dir/.name.lnassist.tmp`).
pub(crate) fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();

    path.with_file_name(format!(".{name}.{TEMP_SUFFIX}"))
}

/// Write a file through a sibling temporary file,
/// renaming it into place only once `write` fully succeeds.
///
/// On failure the temporary file is removed and `path` is left untouched.
pub(crate) fn publish<F>(path: &Path, write: F) -> AssemblyResult<()>
where
    F: FnOnce(&mut File) -> AssemblyResult<()>,
{
    let temp = temp_path(path);

    let write_result = (|| {
        let mut file = File::create(&temp).map_err(AssemblyError::io(path))?;
        write(&mut file)?;
        // Close the handle before renaming
        drop(file);
        fs::rename(&temp, path).map_err(AssemblyError::io(path))
    })();

    if let Err(error) = write_result {
        // Attempt to remove the temp file
        let _ = fs::remove_file(&temp);
        // Original error takes precedence
        return Err(error);
    }
    Ok(())
}
