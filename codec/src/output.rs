use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Write the formatted text to `path`.
///
/// The text goes to a sibling temp file first and is renamed into place, so
/// a failed save never leaves a partial output file behind.
pub fn write_output(path: &Path, text: &str) -> Result<(), Error> {
    let tmp = tmp_path(path);

    if let Err(source) = fs::write(&tmp, text) {
        return Err(Error::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    if let Err(source) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(Error::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
