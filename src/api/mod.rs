//! High-level library API: materialise a single batch into its container, or
//! organise a whole source directory in one call. Prefer these entrypoints
//! over the low-level `core` modules when embedding pairbatch.
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::combine::combine_documents;
use crate::core::pairing::discover;
use crate::core::params::{BatchParams, NamingConfig};
use crate::core::partition::partition;
use crate::error::{Error, Result};
use crate::io::FileSystem;
use crate::types::{Batch, Issue, IssueKind, TransferMode, UnmatchedStem};

/// Outcome of materialising one batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    pub number: usize,
    pub container: PathBuf,
    pub pairs_transferred: usize,
    pub pairs_failed: usize,
    /// Documents written into the combined artifact
    pub documents_combined: usize,
    pub combined_path: PathBuf,
    pub combined_written: bool,
    pub issues: Vec<Issue>,
}

impl BatchResult {
    fn new(number: usize, container: PathBuf, combined_path: PathBuf) -> Self {
        Self {
            number,
            container,
            pairs_transferred: 0,
            pairs_failed: 0,
            documents_combined: 0,
            combined_path,
            combined_written: false,
            issues: Vec::new(),
        }
    }
}

/// Summary of a full run, serialisable as the JSON run report
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub source_dir: PathBuf,
    pub dest_root: PathBuf,
    pub params: BatchParams,
    pub total_pairs: usize,
    pub unmatched: Vec<UnmatchedStem>,
    pub batches: Vec<BatchResult>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunReport {
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    pub fn pairs_transferred(&self) -> usize {
        self.batches.iter().map(|b| b.pairs_transferred).sum()
    }

    pub fn pairs_failed(&self) -> usize {
        self.batches.iter().map(|b| b.pairs_failed).sum()
    }

    /// Every non-fatal condition of the run, unmatched stems first.
    pub fn issues(&self) -> Vec<Issue> {
        let unmatched = self.unmatched.iter().map(|u| {
            Issue::new(
                IssueKind::UnmatchedStem,
                format!("no matching {} file", u.missing),
            )
            .with_stem(u.stem.clone())
        });
        unmatched
            .chain(self.batches.iter().flat_map(|b| b.issues.iter().cloned()))
            .collect()
    }
}

/// Create the batch container, transfer every pair into it in batch order,
/// then write the combined text artifact. Per-file failures are recorded in
/// the result; they never abort the remaining pairs.
pub fn materialise(
    fs: &dyn FileSystem,
    batch: &Batch,
    dest_root: &Path,
    naming: &NamingConfig,
    mode: TransferMode,
) -> BatchResult {
    let name = naming.container_name(batch.number);
    let container = dest_root.join(&name);
    let combined_path = container.join(&naming.combined_name);
    let mut result = BatchResult::new(batch.number, container.clone(), combined_path.clone());

    info!("Processing {}...", name);
    if let Err(e) = fs.create_dir_all(&container) {
        warn!("Cannot create container {:?}: {}", container, e);
        result.pairs_failed = batch.pairs.len();
        result
            .issues
            .push(Issue::new(IssueKind::ContainerFailure, e.to_string()).with_path(&container));
        return result;
    }

    info!("  {} {} file pairs...", mode.verb(), batch.pairs.len());
    let mut placed_texts = Vec::with_capacity(batch.pairs.len());
    for pair in &batch.pairs {
        let text_dest = container.join(pair.text_file_name());
        let image_dest = container.join(pair.image_file_name());

        let text_ok = transfer(fs, mode, &pair.text_path, &text_dest, &pair.stem, &mut result.issues);
        let image_ok = transfer(fs, mode, &pair.image_path, &image_dest, &pair.stem, &mut result.issues);

        if text_ok && image_ok {
            result.pairs_transferred += 1;
        } else {
            result.pairs_failed += 1;
        }
        if text_ok {
            placed_texts.push((pair.stem.as_str(), text_dest));
        }
    }

    let mut documents = Vec::with_capacity(placed_texts.len());
    for (stem, path) in &placed_texts {
        match fs.read_to_string(path) {
            Ok(content) => documents.push(content),
            Err(e) => {
                warn!("Cannot read text for {}: {}; using empty placeholder", stem, e);
                result.issues.push(
                    Issue::new(
                        IssueKind::ReadFailure,
                        format!("{}; empty placeholder written", e),
                    )
                    .with_stem(*stem)
                    .with_path(path),
                );
                documents.push(String::new());
            }
        }
    }

    match fs.write_string(&combined_path, &combine_documents(&documents)) {
        Ok(()) => {
            result.combined_written = true;
            result.documents_combined = documents.len();
            info!(
                "  Created {} with {} documents",
                naming.combined_name,
                documents.len()
            );
        }
        Err(e) => {
            warn!("Cannot write {:?}: {}", combined_path, e);
            result.issues.push(
                Issue::new(IssueKind::ArtifactWriteFailure, e.to_string()).with_path(&combined_path),
            );
        }
    }

    result
}

fn transfer(
    fs: &dyn FileSystem,
    mode: TransferMode,
    src: &Path,
    dst: &Path,
    stem: &str,
    issues: &mut Vec<Issue>,
) -> bool {
    let outcome = match mode {
        TransferMode::Copy => fs.copy_file(src, dst),
        TransferMode::Move => fs.move_file(src, dst),
    };
    match outcome {
        Ok(()) => {
            debug!("{} {:?} -> {:?}", mode.verb(), src, dst);
            true
        }
        Err(e) => {
            warn!("Failed to {} {:?} for {}: {}", mode, src, stem, e);
            issues.push(
                Issue::new(IssueKind::TransferFailure, format!("{} failed: {}", mode, e))
                    .with_stem(stem)
                    .with_path(src),
            );
            false
        }
    }
}

/// A container resolving to the source directory would copy every file onto
/// itself.
fn ensure_containers_outside_source(
    fs: &dyn FileSystem,
    source_dir: &Path,
    dest_root: &Path,
    naming: &NamingConfig,
    batches: &[Batch],
) -> Result<()> {
    let Ok(root) = fs.canonicalize(dest_root) else {
        // a root that does not exist yet cannot contain the source
        return Ok(());
    };
    let source = fs
        .canonicalize(source_dir)
        .map_err(|_| Error::DirectoryNotFound {
            path: source_dir.to_path_buf(),
        })?;

    for batch in batches {
        let name = naming.container_name(batch.number);
        let container = root.join(&name);
        let container = fs.canonicalize(&container).unwrap_or(container);
        if container == source {
            return Err(Error::invalid(
                "output_dir",
                dest_root.display().to_string(),
                "a batch folder would be the source directory",
            ));
        }
    }
    Ok(())
}

/// Organise every pair in `source_dir` into batch containers under
/// `dest_root`. Configuration and directory problems fail before any side
/// effect; everything after that is reported in the returned [`RunReport`].
pub fn organise_directory(
    fs: &dyn FileSystem,
    source_dir: &Path,
    dest_root: &Path,
    params: &BatchParams,
) -> Result<RunReport> {
    let started_at = Utc::now();
    let params = params.validate()?;

    info!("Scanning directory: {:?}", source_dir);
    let discovery = discover(fs, source_dir, &params.text_ext, &params.image_ext)?;
    for unmatched in &discovery.unmatched {
        warn!(
            "No matching {} file for stem {:?}",
            unmatched.missing, unmatched.stem
        );
    }

    let combined = OsStr::new(&params.combined_name);
    if let Some(pair) = discovery
        .pairs
        .iter()
        .find(|p| p.text_file_name() == combined || p.image_file_name() == combined)
    {
        return Err(Error::invalid(
            "combined_name",
            format!("{} (stem {})", params.combined_name, pair.stem),
            "collides with a document file name",
        ));
    }

    let total_pairs = discovery.pairs.len();
    info!("Found {} complete file pairs", total_pairs);

    let batches = partition(discovery.pairs, params.batch_size)?;
    let naming = NamingConfig::new(&params, batches.len());
    ensure_containers_outside_source(fs, source_dir, dest_root, &naming, &batches)?;
    if !batches.is_empty() {
        info!(
            "Creating {} batches of up to {} pairs each",
            batches.len(),
            params.batch_size
        );
    }

    let results = batches
        .iter()
        .map(|batch| materialise(fs, batch, dest_root, &naming, params.transfer_mode))
        .collect();

    Ok(RunReport {
        source_dir: source_dir.to_path_buf(),
        dest_root: dest_root.to_path_buf(),
        params,
        total_pairs,
        unmatched: discovery.unmatched,
        batches: results,
        started_at,
        finished_at: Utc::now(),
    })
}
