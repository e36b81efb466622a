use std::fs;
use std::io;
use std::path::Path;

use crate::error::{EbookError, EbookResult};

/// Read the whole input as UTF-8.
pub fn load_document(path: &Path) -> EbookResult<String> {
    if !path.is_file() {
        return Err(EbookError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => EbookError::NotFound(path.to_path_buf()),
        _ => EbookError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Write the page, replacing any existing file.
pub fn write_document(path: &Path, html: &str) -> EbookResult<()> {
    fs::write(path, html).map_err(|source| EbookError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.md");
        assert!(matches!(load_document(&path), Err(EbookError::NotFound(p)) if p == path));
    }

    #[test]
    fn directory_is_not_a_document() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_document(dir.path()),
            Err(EbookError::NotFound(_))
        ));
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.md");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(load_document(&path), Err(EbookError::Read { .. })));
    }

    #[test]
    fn write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");
        fs::write(&path, "old contents that are longer").unwrap();

        write_document(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/out.html");
        assert!(matches!(
            write_document(&path, "x"),
            Err(EbookError::Write { .. })
        ));
    }
}
