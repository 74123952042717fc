//! I/O layer: the `fs` access interface used by discovery and
//! materialisation, and `writers` for the JSON run report.
pub mod fs;
pub use fs::{FileSystem, LocalFs};

pub mod writers;
