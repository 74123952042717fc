//! Stem discovery: join text and image files of a flat directory by stem.
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::io::FileSystem;
use crate::types::{ArtifactKind, FilePair, UnmatchedStem};

/// Pairs found in one directory scan, both lists sorted by stem bytes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    pub pairs: Vec<FilePair>,
    pub unmatched: Vec<UnmatchedStem>,
}

#[derive(Default)]
struct Observed {
    text: Option<PathBuf>,
    image: Option<PathBuf>,
}

/// Scan `source_dir` (non-recursive) and pair `{stem}{text_ext}` with
/// `{stem}{image_ext}`. Extensions are expected normalised (leading dot).
pub fn discover(
    fs: &dyn FileSystem,
    source_dir: &Path,
    text_ext: &str,
    image_ext: &str,
) -> Result<Discovery> {
    if !fs.is_dir(source_dir) {
        return Err(Error::DirectoryNotFound {
            path: source_dir.to_path_buf(),
        });
    }
    let files = fs
        .list_files(source_dir)
        .map_err(|_| Error::DirectoryNotFound {
            path: source_dir.to_path_buf(),
        })?;

    // BTreeMap<String, _> iterates in byte order, independent of locale
    let mut stems: BTreeMap<String, Observed> = BTreeMap::new();
    for path in files {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            warn!("Skipping file with non UTF-8 name: {:?}", path);
            continue;
        };
        let Some((stem, kind)) = classify(name, text_ext, image_ext) else {
            debug!("Ignoring unrelated file: {}", name);
            continue;
        };
        let observed = stems.entry(stem.to_string()).or_default();
        match kind {
            ArtifactKind::Text => observed.text = Some(path),
            ArtifactKind::Image => observed.image = Some(path),
        }
    }

    let mut discovery = Discovery::default();
    for (stem, observed) in stems {
        match (observed.text, observed.image) {
            (Some(text_path), Some(image_path)) => discovery.pairs.push(FilePair {
                stem,
                text_path,
                image_path,
            }),
            (Some(_), None) => discovery.unmatched.push(UnmatchedStem {
                stem,
                missing: ArtifactKind::Image,
            }),
            (None, Some(_)) => discovery.unmatched.push(UnmatchedStem {
                stem,
                missing: ArtifactKind::Text,
            }),
            (None, None) => {}
        }
    }
    Ok(discovery)
}

/// Split a file name into stem and kind. The longer extension wins when one
/// is a suffix of the other (`.txt` vs `.ocr.txt`).
fn classify<'a>(name: &'a str, text_ext: &str, image_ext: &str) -> Option<(&'a str, ArtifactKind)> {
    let mut candidates = [(text_ext, ArtifactKind::Text), (image_ext, ArtifactKind::Image)];
    candidates.sort_by_key(|(ext, _)| std::cmp::Reverse(ext.len()));
    candidates.into_iter().find_map(|(ext, kind)| {
        name.strip_suffix(ext)
            .filter(|stem| !stem.is_empty())
            .map(|stem| (stem, kind))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_strips_exact_suffix() {
        assert_eq!(
            classify("page.001.txt", ".txt", ".jpg"),
            Some(("page.001", ArtifactKind::Text))
        );
        assert_eq!(classify("a.jpg", ".txt", ".jpg"), Some(("a", ArtifactKind::Image)));
        assert_eq!(classify("a.JPG", ".txt", ".jpg"), None);
        assert_eq!(classify(".txt", ".txt", ".jpg"), None);
        assert_eq!(classify("notes.md", ".txt", ".jpg"), None);
    }

    #[test]
    fn classify_prefers_longer_extension() {
        assert_eq!(
            classify("a.ocr.txt", ".txt", ".ocr.txt"),
            Some(("a", ArtifactKind::Image))
        );
        assert_eq!(classify("a.txt", ".txt", ".ocr.txt"), Some(("a", ArtifactKind::Text)));
    }
}
