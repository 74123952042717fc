//! Core building blocks: run parameters, stem pairing, partitioning into
//! batches, and combined-artifact assembly. These are pure or file-system
//! abstracted primitives consumed by the high-level `api` module.
pub mod combine;
pub mod pairing;
pub mod params;
pub mod partition;
