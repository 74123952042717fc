use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use filetime::{FileTime, set_file_times};
use tempfile::NamedTempFile;

/// File-system operations the engine and materialiser depend on.
/// `LocalFs` is the real implementation; tests wrap it to inject faults.
pub trait FileSystem {
    fn is_dir(&self, path: &Path) -> bool;

    /// Absolute path with symlinks resolved. Fails if `path` does not exist.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// Regular files directly inside `dir` (non-recursive), in listing order.
    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;

    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Duplicate `src` at `dst`, keeping its access and modification times.
    fn copy_file(&self, src: &Path, dst: &Path) -> io::Result<()>;

    /// Relocate `src` to `dst`; the source no longer exists on success.
    fn move_file(&self, src: &Path, dst: &Path) -> io::Result<()>;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Replace the contents of `path` with `contents`.
    fn write_string(&self, path: &Path, contents: &str) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() {
                files.push(path);
            }
        }
        Ok(files)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn copy_file(&self, src: &Path, dst: &Path) -> io::Result<()> {
        ensure_distinct(src, dst)?;
        copy_with_times(src, dst)
    }

    fn move_file(&self, src: &Path, dst: &Path) -> io::Result<()> {
        ensure_distinct(src, dst)?;
        // rename fails across devices; fall back to copy + delete
        if fs::rename(src, dst).is_err() {
            move_via_copy(src, dst, |p| fs::remove_file(p))?;
        }
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write_string(&self, path: &Path, contents: &str) -> io::Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.flush()?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Copying a file onto itself truncates it, so refuse when both paths
/// resolve to the same file.
fn ensure_distinct(src: &Path, dst: &Path) -> io::Result<()> {
    if let (Ok(a), Ok(b)) = (fs::canonicalize(src), fs::canonicalize(dst)) {
        if a == b {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} and {} are the same file", src.display(), dst.display()),
            ));
        }
    }
    Ok(())
}

fn copy_with_times(src: &Path, dst: &Path) -> io::Result<()> {
    fs::copy(src, dst)?;
    let meta = fs::metadata(src)?;
    set_file_times(
        dst,
        FileTime::from_last_access_time(&meta),
        FileTime::from_last_modification_time(&meta),
    )
}

/// Copy then remove the source. If the source cannot be removed the copy is
/// deleted again, so a failed move leaves only the original behind.
fn move_via_copy<F>(src: &Path, dst: &Path, remove: F) -> io::Result<()>
where
    F: Fn(&Path) -> io::Result<()>,
{
    copy_with_times(src, dst)?;
    if let Err(e) = remove(src) {
        let _ = fs::remove_file(dst);
        return Err(e);
    }
    Ok(())
}
