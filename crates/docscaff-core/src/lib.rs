//! docscaff Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for docscaff,
//! which turns a documentation meta tree into placeholder pages, following
//! hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          docscaff-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (ScaffoldService, TreeService)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: Filesystem, MetaSource)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    docscaff-adapters (Infrastructure)   │
//! │  (LocalFilesystem, FileMetaSource, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │   (MetaTree, planner, DocStructure)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use docscaff_core::prelude::*;
//!
//! # fn demo(filesystem: Box<dyn Filesystem>) -> DocscaffResult<()> {
//! let tree = MetaTree::new()
//!     .with_leaf("index", "Overview")
//!     .with_branch("setup", "Setup", MetaTree::new().with_leaf("venv", "Virtualenv"));
//!
//! let service = ScaffoldService::new(filesystem, ScaffoldOptions::default());
//! let report = service.scaffold(&tree, "pages/python")?;
//! println!("{} created", report.created());
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldService, TreeService, TreeSummary,
        ports::{Filesystem, MetaSource},
    };
    pub use crate::domain::{
        Action, DocStructure, EntryKind, MetaEntry, MetaNode, MetaTree, PageTemplate,
        ScaffoldOptions, ScaffoldReport, SkipReason, SkippedEntry, TreeStats,
    };
    pub use crate::error::{DocscaffError, DocscaffResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
