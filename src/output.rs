//! Output writing.
//!
//! Extracted text is written to a temporary file next to the destination and
//! renamed over it only once fully written, so a failed run never leaves a
//! truncated file behind.
//!
//! The written file keeps the mode of the file it replaces. A new file gets
//! the mode a plain create would give it (0o666 less the umask on Unix).

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::{Builder, NamedTempFile};

use crate::error::{Error, Result};

/// Write `contents` to `path`, replacing any existing file.
pub fn write_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut tmp = create_temp(parent, path).map_err(|e| Error::output_write(path, e))?;
    tmp.write_all(contents.as_bytes())
        .and_then(|()| tmp.flush())
        .map_err(|e| Error::output_write(path, e))?;

    tmp.persist(path)
        .map_err(|e| Error::output_write(path, e.error))?;

    log::debug!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

fn create_temp(parent: &Path, dest: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".docxtext-");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Masked by the umask at creation, like any new file
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let tmp = builder.tempfile_in(parent)?;

    if let Ok(meta) = fs::metadata(dest) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }

    Ok(tmp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        write_atomic(&path, "a | b\nc | d").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a | b\nc | d");
    }

    #[test]
    fn test_write_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "old content that is longer").unwrap();

        write_atomic(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");

        let err = write_atomic(&path, "text").unwrap_err();
        assert!(err.is_output_write());
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_overwrite_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        for mode in [0o644, 0o640, 0o666] {
            let path = dir.path().join(format!("out-{:o}.txt", mode));
            fs::write(&path, "old").unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();

            write_atomic(&path, "new").unwrap();

            let written = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
            assert_eq!(written, mode);
            assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_mode_matches_plain_create() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("plain.txt");
        fs::File::create(&plain).unwrap();
        let path = dir.path().join("out.txt");

        write_atomic(&path, "text").unwrap();

        let expected = fs::metadata(&plain).unwrap().permissions().mode() & 0o777;
        let written = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(written, expected);
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        write_atomic(&path, "text").unwrap();
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
