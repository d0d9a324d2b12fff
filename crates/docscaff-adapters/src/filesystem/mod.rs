//! [`Filesystem`](docscaff_core::application::Filesystem) implementations:
//! real disk for the CLI, in-memory for tests and dry experiments.

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
