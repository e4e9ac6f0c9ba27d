//! Immutable per-node state shared between the layout thread and the mount thread.
//!
//! A state value is built once by the layout pass and never mutated. Updating
//! a node means building a new value and swapping the shared reference held at
//! the mount point; holders of the previous value keep reading it unchanged.

use std::sync::Arc;

pub mod mount;
pub mod revision;
pub mod safe_area;

/// Marker for values that may be attached to a renderer tree node.
pub trait ComponentState: std::fmt::Debug + Send + Sync + 'static {}

/// Shared, read-only handle to a state value.
pub type Shared<S> = Arc<S>;
