//! Application layer for docscaff.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, TreeService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! planning logic itself. The walk lives in `crate::domain::planner`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ScaffoldService,
    TreeService,
    TreeSummary, // DTO for meta file statistics
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, MetaSource};

pub use error::ApplicationError;
