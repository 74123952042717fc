//! Shared types used across pairbatch.
//! Includes the data model (`FilePair`, `Batch`), `TransferMode`, and the
//! non-fatal `Issue` records accumulated during a run.
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Literal written on its own line between documents in a combined artifact.
pub const PAGE_BREAK: &str = "TRP_PAGEBREAK";

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferMode {
    #[default]
    Copy,
    Move,
}

impl TransferMode {
    pub fn verb(&self) -> &'static str {
        match self {
            TransferMode::Copy => "Copying",
            TransferMode::Move => "Moving",
        }
    }
}

impl std::fmt::Display for TransferMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransferMode::Copy => write!(f, "copy"),
            TransferMode::Move => write!(f, "move"),
        }
    }
}

/// The two halves of a document.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Text,
    Image,
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactKind::Text => write!(f, "text"),
            ArtifactKind::Image => write!(f, "image"),
        }
    }
}

/// A stem present as both a text file and an image file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    pub stem: String,
    pub text_path: PathBuf,
    pub image_path: PathBuf,
}

impl FilePair {
    pub fn text_file_name(&self) -> &OsStr {
        file_name_of(&self.text_path)
    }

    pub fn image_file_name(&self) -> &OsStr {
        file_name_of(&self.image_path)
    }
}

fn file_name_of(path: &Path) -> &OsStr {
    path.file_name().unwrap_or(path.as_os_str())
}

/// A stem seen with only one of the two extensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmatchedStem {
    pub stem: String,
    pub missing: ArtifactKind,
}

/// Contiguous slice of the globally sorted pairs. `number` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub number: usize,
    pub pairs: Vec<FilePair>,
}

impl Batch {
    pub fn stems(&self) -> Vec<&str> {
        self.pairs.iter().map(|p| p.stem.as_str()).collect()
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    UnmatchedStem,
    TransferFailure,
    ReadFailure,
    ContainerFailure,
    ArtifactWriteFailure,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            IssueKind::UnmatchedStem => "unmatched stem",
            IssueKind::TransferFailure => "transfer failure",
            IssueKind::ReadFailure => "read failure",
            IssueKind::ContainerFailure => "container failure",
            IssueKind::ArtifactWriteFailure => "artifact write failure",
        };
        write!(f, "{}", s)
    }
}

/// Non-fatal condition recorded during a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub stem: Option<String>,
    pub path: Option<PathBuf>,
    pub message: String,
}

impl Issue {
    pub fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            stem: None,
            path: None,
            message: message.into(),
        }
    }

    pub fn with_stem(mut self, stem: impl Into<String>) -> Self {
        self.stem = Some(stem.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(stem) = &self.stem {
            write!(f, " [{}]", stem)?;
        }
        if let Some(path) = &self.path {
            write!(f, " {}", path.display())?;
        }
        write!(f, ": {}", self.message)
    }
}
