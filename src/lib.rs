#![doc = r#"
pairbatch — organise paired text/image documents into upload batches.

A source directory holds documents as pairs of files sharing a stem, e.g.
`page_001.txt` (a transcription) and `page_001.jpg` (the scan). pairbatch
splits the complete pairs into fixed-size batches, copies or moves each batch
into its own folder (`Batch_01`, `Batch_02`, ...) and writes a combined text
file per folder in which consecutive documents are separated by a line
containing only `TRP_PAGEBREAK`. This is the layout text-to-image matching
services expect for bulk uploads.

Pairs are ordered by stem using plain byte order, so batch membership and the
document order inside each combined file are reproducible on every platform.

Quick start: organise a directory
---------------------------------
```rust,no_run
use std::path::Path;
use pairbatch::{BatchParams, LocalFs, TransferMode, organise_directory};

fn main() -> pairbatch::Result<()> {
    let params = BatchParams {
        batch_size: 100,
        transfer_mode: TransferMode::Copy,
        ..BatchParams::default()
    };

    let source = Path::new("/data/scans");
    let report = organise_directory(&LocalFs, source, source, &params)?;

    println!(
        "batches={} pairs={} unmatched={}",
        report.batch_count(),
        report.total_pairs,
        report.unmatched.len()
    );
    Ok(())
}
```

Step by step
------------
```rust,no_run
use std::path::Path;
use pairbatch::{LocalFs, NamingConfig, BatchParams, discover, materialise, partition};

fn main() -> pairbatch::Result<()> {
    let params = BatchParams::default().validate()?;
    let source = Path::new("/data/scans");

    let found = discover(&LocalFs, source, &params.text_ext, &params.image_ext)?;
    let batches = partition(found.pairs, params.batch_size)?;
    let naming = NamingConfig::new(&params, batches.len());

    for batch in &batches {
        let result = materialise(&LocalFs, batch, source, &naming, params.transfer_mode);
        for issue in &result.issues {
            eprintln!("{issue}");
        }
    }
    Ok(())
}
```

Error handling
--------------
Only conditions that must stop the run are returned as `Err`:
[`Error::DirectoryNotFound`] and [`Error::InvalidConfiguration`], both raised
before any file is touched. Unmatched stems, failed transfers and unreadable
text files are recorded as [`Issue`]s in the [`BatchResult`] / [`RunReport`]
and the run carries on.

Useful modules
--------------
- [`api`] — high-level entry points (`materialise`, `organise_directory`).
- [`core`] — pairing, partitioning and combined-artifact assembly.
- [`io`] — the `FileSystem` access interface and report writers.
- [`types`] — shared data model.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use core::params::{BatchParams, NamingConfig};
pub use error::{Error, Result};
pub use types::{
    ArtifactKind, Batch, FilePair, Issue, IssueKind, PAGE_BREAK, TransferMode, UnmatchedStem,
};

// File-system access
pub use io::fs::{FileSystem, LocalFs};
pub use io::writers::report::{render_run_report, write_run_report};

// Engine
pub use core::combine::combine_documents;
pub use core::pairing::{Discovery, discover};
pub use core::partition::partition;

// High-level API re-exports
pub use api::{BatchResult, RunReport, materialise, organise_directory};
