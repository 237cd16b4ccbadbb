//! # swim-core
//!
//! Shared types for swimmesh - a SWIM-style cluster membership and
//! failure detection stack.
//!
//! This crate provides the vocabulary that is common to every swimmesh
//! component. It includes:
//!
//! - Node status and reachability enumerations used across the stack
//! - Error handling types for the message layer

pub mod error;
pub mod types;

// Re-export commonly used types at the crate root
pub use error::{Result, StructureError};
pub use types::{AccessMode, NodeStatus};
