//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold a meta tree" or "summarise a track".

pub mod scaffold_service;
pub mod tree_service;

pub use scaffold_service::ScaffoldService;
pub use tree_service::{TreeService, TreeSummary};
